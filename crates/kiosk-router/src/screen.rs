//! Console screens

use std::fmt;

/// Screen identity as listed in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    ManageScreens,
    DataSources,
    DownloadCode,
    EditContents,
}

impl ScreenKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::ManageScreens => "ManageScreens",
            ScreenKind::DataSources => "DataSources",
            ScreenKind::DownloadCode => "DownloadCode",
            ScreenKind::EditContents => "EditContents",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matched screen together with its path parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    ManageScreens,
    DataSources,
    DownloadCode,
    /// `id` is the raw path segment, passed through untouched
    EditContents { id: String },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::ManageScreens => ScreenKind::ManageScreens,
            Screen::DataSources => ScreenKind::DataSources,
            Screen::DownloadCode => ScreenKind::DownloadCode,
            Screen::EditContents { .. } => ScreenKind::EditContents,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::EditContents { id } => write!(f, "EditContents({})", id),
            other => f.write_str(other.kind().name()),
        }
    }
}
