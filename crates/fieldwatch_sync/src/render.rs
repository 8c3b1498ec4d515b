//! Report rendering.

use chrono::Utc;
use fieldwatch_core::{ReportColour, ReportField, ServerStatus, StatusReport};

/// Title of every report.
pub const REPORT_TITLE: &str = "🚜 Farming Simulator Server Status";

/// Mods listed by name before the rest are summarized.
pub const MOD_DISPLAY_LIMIT: usize = 10;

/// Longest field value the chat platform accepts, in characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Longest report description the chat platform accepts, in characters.
const DESCRIPTION_LIMIT: usize = 4096;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Renders a snapshot into a report.
///
/// `footer` is set on automatic updates and left out for on-demand queries.
pub fn render_report(status: &ServerStatus, footer: Option<&str>) -> StatusReport {
    let online = *status.is_online();

    let state = if online { "**Online** 🟢" } else { "**Offline** 🔴" };
    let players = if online {
        format!("**{}**/{} 👥 on the farm", status.players(), status.max_players())
    } else {
        "- 👥".to_string()
    };
    let map = match status.map_name() {
        Some(map) => format!("**{map}** 🗺️"),
        None => "- 🗺️".to_string(),
    };
    let description = format!(
        "**{}**\n\n**Status:** {state}\n**Players:** {players}\n**Map:** {map}",
        status.server_name()
    );

    let mut fields = Vec::new();
    match status.known_mods() {
        Some(mods) if !mods.is_empty() => fields.push(ReportField {
            name: format!("🛠️ Active Mods ({})", mods.len()),
            value: truncate_field(&summarize_mods(mods, MOD_DISPLAY_LIMIT), FIELD_VALUE_LIMIT),
            inline: false,
        }),
        _ if online => fields.push(ReportField {
            name: "🛠️ Mods".to_string(),
            value: "No active mods, or the list is unavailable.".to_string(),
            inline: false,
        }),
        _ => {}
    }

    StatusReport {
        title: REPORT_TITLE.to_string(),
        description: truncate_field(&description, DESCRIPTION_LIMIT),
        colour: if online {
            ReportColour::Online
        } else {
            ReportColour::Offline
        },
        fields,
        footer: footer.map(str::to_string),
        timestamp: Utc::now(),
    }
}

/// Bulleted list of the first `limit` mods, with a count of the rest.
///
/// # Examples
///
/// ```
/// use fieldwatch_sync::summarize_mods;
///
/// let mods: Vec<String> = ["A", "B", "C"].iter().map(|m| m.to_string()).collect();
/// assert_eq!(summarize_mods(&mods, 2), "• A\n• B\n... and 1 more mods.");
/// ```
pub fn summarize_mods(mods: &[String], limit: usize) -> String {
    let listed = mods
        .iter()
        .take(limit)
        .map(|name| format!("• {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    if mods.len() > limit {
        format!("{listed}\n... and {} more mods.", mods.len() - limit)
    } else {
        listed
    }
}

/// Cuts `text` to at most `cap` characters, ending in [`ELLIPSIS`] if cut.
///
/// # Examples
///
/// ```
/// use fieldwatch_sync::truncate_field;
///
/// assert_eq!(truncate_field("short", 10), "short");
/// assert_eq!(truncate_field("abcdefghij", 6), "abc...");
/// ```
pub fn truncate_field(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text.to_string();
    }
    let kept: String = text
        .chars()
        .take(cap.saturating_sub(ELLIPSIS.len()))
        .collect();
    format!("{kept}{ELLIPSIS}")
}
