//! Application root and mounting

use kiosk_dom::Document;
use kiosk_router::{Navigator, Resolved, RouteTable, Screen};

use crate::BootError;

/// Routed application root
#[derive(Debug)]
pub struct AppRoot {
    navigator: Navigator,
}

impl AppRoot {
    /// Build the root and route to `initial_path` (app-relative).
    ///
    /// An unmatched path leaves the root without a screen rather than failing.
    pub fn new(routes: RouteTable, initial_path: &str) -> Self {
        let location = routes.href(initial_path);
        let mut navigator = Navigator::new(routes);
        if let Err(err) = navigator.navigate(&location) {
            tracing::warn!("Initial route: {}", err);
        }
        Self { navigator }
    }

    /// Route currently shown
    pub fn route(&self) -> Option<&Resolved> {
        self.navigator.current()
    }

    /// Screen currently shown
    pub fn screen(&self) -> Option<&Screen> {
        self.route().map(|r| &r.screen)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

/// Something the application root can be mounted into
pub trait MountHost {
    /// Attach `app` under the element with id `target`
    fn mount(&mut self, target: &str, app: &AppRoot) -> Result<(), BootError>;
}

impl MountHost for Document {
    fn mount(&mut self, target: &str, app: &AppRoot) -> Result<(), BootError> {
        let host = self
            .get_element_by_id(target)
            .ok_or_else(|| BootError::MountTargetMissing(target.to_string()))?;

        let mut attrs: Vec<(&str, &str)> = Vec::new();
        if let Some(route) = app.route() {
            attrs.push(("data-screen", route.screen.kind().name()));
            attrs.push(("data-path", route.path.as_str()));
            if let Screen::EditContents { id } = &route.screen {
                attrs.push(("data-id", id.as_str()));
            }
        }

        self.create_element_in(host, "div", &attrs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_root_initial_route() {
        let app = AppRoot::new(RouteTable::console(), "/");
        assert_eq!(app.screen(), Some(&Screen::ManageScreens));
        assert_eq!(app.route().unwrap().path, "/managescreens");
        assert_eq!(app.navigator().history().current(), Some("/managescreens"));
    }

    #[test]
    fn test_app_root_unknown_route() {
        let app = AppRoot::new(RouteTable::console(), "/missing");
        assert!(app.screen().is_none());
    }

    #[test]
    fn test_app_root_with_base() {
        let app = AppRoot::new(RouteTable::console().with_base("/console"), "/datasources");
        assert_eq!(app.screen(), Some(&Screen::DataSources));
    }

    #[test]
    fn test_mount_into_document() {
        let mut doc = Document::with_host("about:blank", "app");
        let app = AppRoot::new(RouteTable::console(), "/editcontents/42");
        doc.mount("app", &app).unwrap();

        let html = doc.to_html();
        assert!(html.contains(
            "<div id=\"app\"><div data-screen=\"EditContents\" data-path=\"/editcontents/42\" data-id=\"42\"></div></div>"
        ));
    }

    #[test]
    fn test_mount_missing_target() {
        let mut doc = Document::default();
        let app = AppRoot::new(RouteTable::console(), "/");
        assert!(matches!(doc.mount("app", &app), Err(BootError::MountTargetMissing(t)) if t == "app"));
    }
}
