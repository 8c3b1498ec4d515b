//! Stats document parsing.

use crate::resolve::{Extract, FieldRule, child_element, is_named};
use fieldwatch_core::ServerStatus;
use fieldwatch_error::{FetchError, FetchErrorKind};
use roxmltree::{Document, Node};

/// Server name used when an online document does not name itself.
pub const DEFAULT_SERVER_NAME: &str = "Dedicated Server";

/// Player slots assumed when the document does not report a capacity.
pub const DEFAULT_MAX_PLAYERS: u32 = 0;

const SERVER_NAME: FieldRule = FieldRule {
    field: "server_name",
    strategies: &[Extract::Element("Name"), Extract::Attribute("name")],
};

const MAP_NAME: FieldRule = FieldRule {
    field: "map_name",
    strategies: &[Extract::Element("MapName"), Extract::Attribute("mapName")],
};

const PLAYERS: FieldRule = FieldRule {
    field: "players",
    strategies: &[
        Extract::Element("CurrentPlayers"),
        Extract::Attribute("currentPlayers"),
        Extract::ChildAttribute {
            element: "Slots",
            attribute: "numUsed",
        },
    ],
};

const MAX_PLAYERS: FieldRule = FieldRule {
    field: "max_players",
    strategies: &[
        Extract::Element("MaxPlayers"),
        Extract::Attribute("maxPlayers"),
        Extract::ChildAttribute {
            element: "Slots",
            attribute: "capacity",
        },
    ],
};

/// A mod's text is its display title; the `name` attribute is the internal
/// identifier and only used when there is no title.
const MOD_NAME: FieldRule = FieldRule {
    field: "mod_name",
    strategies: &[
        Extract::Text,
        Extract::Element("Name"),
        Extract::Attribute("name"),
    ],
};

/// Parses a stats document into an online snapshot.
///
/// Missing or malformed fields fall back to their defaults; only a document
/// that is not XML, has no `Server` root, or has an empty one is rejected.
///
/// # Examples
///
/// ```
/// use fieldwatch_status::parse_status;
///
/// let xml = r#"<Server name="Green Acres" mapName="Elmcreek">
///     <Slots capacity="16" numUsed="3"/>
///     <Mods><Mod name="FS22_Seasons">Seasons</Mod></Mods>
/// </Server>"#;
///
/// let status = parse_status(xml).unwrap();
/// assert_eq!(status.server_name(), "Green Acres");
/// assert_eq!(*status.players(), 3);
/// assert_eq!(status.mods(), &["Seasons".to_string()]);
/// ```
pub fn parse_status(xml: &str) -> Result<ServerStatus, FetchError> {
    let doc = Document::parse(xml)
        .map_err(|e| FetchError::new(FetchErrorKind::Xml(e.to_string())))?;

    let server = doc.root_element();
    if !is_named(server, "Server") {
        return Err(FetchError::new(FetchErrorKind::MissingRoot(
            server.tag_name().name().to_string(),
        )));
    }
    if server.attributes().next().is_none() && !server.children().any(|c| c.is_element()) {
        return Err(FetchError::new(FetchErrorKind::EmptyRoot));
    }

    let server_name = SERVER_NAME.resolve(server).unwrap_or(DEFAULT_SERVER_NAME);
    let map_name = MAP_NAME.resolve(server).map(str::to_string);
    let players = PLAYERS.resolve_with(server, parse_count).unwrap_or(0);
    let max_players = MAX_PLAYERS
        .resolve_with(server, parse_count)
        .unwrap_or(DEFAULT_MAX_PLAYERS);
    let mods = resolve_mods(server);

    Ok(ServerStatus::online(
        server_name,
        map_name,
        players,
        max_players,
        mods,
    ))
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

/// Collects mod display names.
///
/// Repeated and single `Mod` nodes resolve the same way. If no `Mod` node
/// yields a name, text-only children of `Mods` are taken as names instead.
fn resolve_mods(server: Node<'_, '_>) -> Vec<String> {
    let Some(mods) = child_element(server, "Mods") else {
        return Vec::new();
    };

    let named: Vec<String> = mods
        .children()
        .filter(|node| is_named(*node, "Mod"))
        .filter_map(|node| MOD_NAME.resolve(node))
        .map(str::to_string)
        .collect();
    if !named.is_empty() {
        return named;
    }

    mods.children()
        .filter(|node| node.is_element() && !node.children().any(|c| c.is_element()))
        .filter_map(|node| Extract::Text.probe(node))
        .map(str::to_string)
        .collect()
}
