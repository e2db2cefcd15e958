//! Navigator: route table + history

use crate::{History, Resolved, RouteError, RouteTable};

/// Swaps the active screen as the location changes.
///
/// A failed navigation leaves the current screen and history untouched.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    history: History,
    current: Option<Resolved>,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            history: History::new(),
            current: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Currently displayed route
    pub fn current(&self) -> Option<&Resolved> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Navigate to `location`, pushing a history entry.
    ///
    /// The entry holds the post-redirect location, so `/` never lands on the
    /// back stack.
    pub fn navigate(&mut self, location: &str) -> Result<&Resolved, RouteError> {
        let resolved = self.table.resolve(location)?;
        tracing::info!("navigate {} -> {}", location, resolved.screen);

        self.history.push(&self.table.href(&resolved.path));
        Ok(self.current.insert(resolved))
    }

    /// Step back in history
    pub fn back(&mut self) -> Result<Option<&Resolved>, RouteError> {
        let Some(path) = self.history.go_back().map(str::to_string) else {
            return Ok(None);
        };
        self.show(&path).map(Some)
    }

    /// Step forward in history
    pub fn forward(&mut self) -> Result<Option<&Resolved>, RouteError> {
        let Some(path) = self.history.go_forward().map(str::to_string) else {
            return Ok(None);
        };
        self.show(&path).map(Some)
    }

    fn show(&mut self, path: &str) -> Result<&Resolved, RouteError> {
        let resolved = self.table.resolve(path)?;
        self.history.replace(&self.table.href(&resolved.path));
        Ok(self.current.insert(resolved))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(RouteTable::console())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Screen;

    #[test]
    fn test_navigate_records_resolved_path() {
        let mut nav = Navigator::default();
        nav.navigate("/").unwrap();
        assert_eq!(nav.history().current(), Some("/managescreens"));
        assert_eq!(nav.current().unwrap().screen, Screen::ManageScreens);
    }

    #[test]
    fn test_failed_navigation_keeps_state() {
        let mut nav = Navigator::default();
        nav.navigate("/datasources").unwrap();
        assert!(nav.navigate("/nope").is_err());
        assert_eq!(nav.current().unwrap().screen, Screen::DataSources);
        assert!(!nav.history().can_go_back());
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = Navigator::default();
        nav.navigate("/managescreens").unwrap();
        nav.navigate("/editcontents/7").unwrap();

        let back = nav.back().unwrap().unwrap();
        assert_eq!(back.screen, Screen::ManageScreens);

        let fwd = nav.forward().unwrap().unwrap();
        assert_eq!(fwd.screen, Screen::EditContents { id: "7".into() });

        assert!(nav.forward().unwrap().is_none());
    }

    #[test]
    fn test_history_under_base() {
        let mut nav = Navigator::new(RouteTable::console().with_base("/console"));
        nav.navigate("/console/").unwrap();
        nav.navigate("/console/datasources").unwrap();
        assert_eq!(nav.history().current(), Some("/console/datasources"));

        let back = nav.back().unwrap().unwrap();
        assert_eq!(back.screen, Screen::ManageScreens);
        assert_eq!(nav.history().current(), Some("/console/managescreens"));
    }
}
