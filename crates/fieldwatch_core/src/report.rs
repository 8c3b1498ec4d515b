//! Rendered status reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accent colour of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportColour {
    /// Server reachable.
    Online,
    /// Server unreachable.
    Offline,
}

impl ReportColour {
    /// RGB value of the colour.
    pub fn rgb(self) -> u32 {
        match self {
            Self::Online => 0x00FF00,
            Self::Offline => 0xFF0000,
        }
    }
}

/// A titled block of report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportField {
    /// Field heading
    pub name: String,
    /// Field body
    pub value: String,
    /// Whether the platform may lay the field out side by side with others
    pub inline: bool,
}

/// Platform-neutral rich status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Report title
    pub title: String,
    /// Main body text
    pub description: String,
    /// Accent colour
    pub colour: ReportColour,
    /// Additional fields, in display order
    pub fields: Vec<ReportField>,
    /// Footer text, present on automatic updates
    pub footer: Option<String>,
    /// When the report was rendered
    pub timestamp: DateTime<Utc>,
}
