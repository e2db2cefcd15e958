//! Route table and path matching
//!
//! Matching follows the console's history router: static segments compare
//! case-insensitively, one trailing slash is optional, and the query string
//! and fragment never take part.

use crate::{RouteError, Screen, ScreenKind};

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 8;

/// What a matched path leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Screen(ScreenKind),
    /// App-relative path to resolve instead
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// One row of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
    segments: Vec<Segment>,
}

impl RouteEntry {
    /// Route rendering `kind`; `:name` segments capture a parameter
    pub fn screen(path: &str, kind: ScreenKind) -> Self {
        Self::new(path, RouteTarget::Screen(kind))
    }

    /// Route forwarding to another path
    pub fn redirect(path: &str, to: &str) -> Self {
        Self::new(path, RouteTarget::Redirect(to.to_string()))
    }

    fn new(path: &str, target: RouteTarget) -> Self {
        let segments = split(path)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        Self {
            path: path.to_string(),
            target,
            segments,
        }
    }

    /// Screen identity, if this is not a redirect
    pub fn screen_kind(&self) -> Option<ScreenKind> {
        match self.target {
            RouteTarget::Screen(kind) => Some(kind),
            RouteTarget::Redirect(_) => None,
        }
    }

    /// Redirect target, if any
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::Screen(_) => None,
        }
    }

    fn matches(&self, parts: &[&str]) -> Option<Vec<(String, String)>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s.eq_ignore_ascii_case(part) => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_string())),
            }
        }
        Some(params)
    }
}

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// App-relative path that produced the screen (after redirects)
    pub path: String,
    pub screen: Screen,
    /// Original path when one or more redirects were followed
    pub redirected_from: Option<String>,
}

/// Immutable route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    base: String,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self {
            base: String::new(),
            entries,
        }
    }

    /// The management console's routes
    pub fn console() -> Self {
        Self::new(vec![
            RouteEntry::redirect("/", "/managescreens"),
            RouteEntry::screen("/managescreens", ScreenKind::ManageScreens),
            RouteEntry::screen("/datasources", ScreenKind::DataSources),
            RouteEntry::screen("/downloadcode", ScreenKind::DownloadCode),
            RouteEntry::screen("/editcontents/:id", ScreenKind::EditContents),
        ])
    }

    /// Serve the app under a path prefix (e.g. `/console`)
    pub fn with_base(mut self, base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        self.base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Full URL path for an app-relative path
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Resolve a location (path, optionally with base, query and fragment)
    pub fn resolve(&self, location: &str) -> Result<Resolved, RouteError> {
        let original = self
            .app_path(location)
            .ok_or_else(|| RouteError::NotFound(location.to_string()))?;

        let mut path = original.clone();
        for _ in 0..=MAX_REDIRECTS {
            let parts = split(&path);
            let (entry, params) = self
                .entries
                .iter()
                .find_map(|e| e.matches(&parts).map(|p| (e, p)))
                .ok_or_else(|| RouteError::NotFound(location.to_string()))?;

            match &entry.target {
                RouteTarget::Redirect(to) => {
                    tracing::debug!("redirect {} -> {}", path, to);
                    path = to.clone();
                }
                RouteTarget::Screen(kind) => {
                    let screen = build_screen(*kind, params)
                        .ok_or_else(|| RouteError::NotFound(location.to_string()))?;
                    let redirected_from = (path != original).then_some(original);
                    return Ok(Resolved {
                        path,
                        screen,
                        redirected_from,
                    });
                }
            }
        }

        Err(RouteError::RedirectLoop(original))
    }

    /// Strip query, fragment and base; `None` when outside the base
    fn app_path(&self, location: &str) -> Option<String> {
        let end = location.find(['?', '#']).unwrap_or(location.len());
        let path = &location[..end];

        let rest = if self.base.is_empty() {
            path
        } else {
            let prefix = path.get(..self.base.len())?;
            let rest = &path[self.base.len()..];
            if !prefix.eq_ignore_ascii_case(&self.base) || !(rest.is_empty() || rest.starts_with('/')) {
                return None;
            }
            rest
        };

        if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            Some(format!("/{}", rest))
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

/// Path segments with one leading and one trailing slash dropped.
///
/// Inner empty segments are kept, so `//x` and `/x//` never match `/x`.
fn split(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

fn build_screen(kind: ScreenKind, params: Vec<(String, String)>) -> Option<Screen> {
    Some(match kind {
        ScreenKind::ManageScreens => Screen::ManageScreens,
        ScreenKind::DataSources => Screen::DataSources,
        ScreenKind::DownloadCode => Screen::DownloadCode,
        ScreenKind::EditContents => {
            let id = params.into_iter().find(|(name, _)| name == "id")?.1;
            Screen::EditContents { id }
        }
    })
}
