//! Conversion of platform-neutral reports into Discord embeds.

use fieldwatch_core::StatusReport;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};
use tracing::warn;

/// Builds the embed for `report`.
pub fn report_embed(report: &StatusReport) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&report.title)
        .description(&report.description)
        .colour(report.colour.rgb());

    for field in &report.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(footer) = &report.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    match Timestamp::from_unix_timestamp(report.timestamp.timestamp()) {
        Ok(timestamp) => embed.timestamp(timestamp),
        Err(e) => {
            warn!(error = %e, "Report timestamp out of range, sending without one");
            embed
        }
    }
}
