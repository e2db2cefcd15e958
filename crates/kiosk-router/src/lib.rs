//! Kiosk Router
//!
//! Static route table mapping console URLs to screens, plus a
//! history-backed [`Navigator`].

mod history;
mod navigator;
mod route;
mod screen;

pub use history::History;
pub use navigator::Navigator;
pub use route::{Resolved, RouteEntry, RouteTable, RouteTarget};
pub use screen::{Screen, ScreenKind};

/// Routing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("Redirect loop starting at '{0}'")]
    RedirectLoop(String),
}
