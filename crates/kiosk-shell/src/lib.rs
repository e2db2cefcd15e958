//! Kiosk Shell
//!
//! Boots the management console: registers the manifest's font faces,
//! then mounts the routed application root into the host document.
//!
//! # Example
//! ```rust,ignore
//! use kiosk_dom::Document;
//! use kiosk_shell::{Bootstrapper, ShellConfig};
//!
//! let config = ShellConfig::default();
//! let mut doc = Document::with_host("http://127.0.0.1:5000/", &config.mount_target);
//! let report = smol::block_on(Bootstrapper::new(config).boot_http(&mut doc))?;
//! ```

mod app;
mod boot;
mod config;

pub use app::{AppRoot, MountHost};
pub use boot::{BootError, BootReport, Bootstrapper, FontOutcome};
pub use config::ShellConfig;

/// Shell version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
