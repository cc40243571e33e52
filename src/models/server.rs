use serde::Deserialize;

/// A TruckersMP game server as listed by `/servers`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Server {
    pub id: u64,
    /// Game the server runs, `ETS2` or `ATS`.
    pub game: String,
    pub ip: String,
    pub port: u16,
    pub name: String,
    #[serde(rename = "shortname")]
    pub short_name: String,
    /// Prefix shown in front of in-game player IDs.
    #[serde(rename = "idprefix")]
    pub id_prefix: Option<String>,
    pub online: bool,
    pub players: u32,
    pub queue: u32,
    #[serde(rename = "maxplayers")]
    pub max_players: u32,
    #[serde(rename = "mapid")]
    pub map_id: u32,
    #[serde(rename = "displayorder")]
    pub display_order: u32,
    #[serde(rename = "speedlimiter")]
    pub speed_limiter: u8,
    pub collisions: bool,
    #[serde(rename = "carsforplayers")]
    pub cars_for_players: bool,
    #[serde(rename = "policecarsforplayers")]
    pub police_cars_for_players: bool,
    #[serde(rename = "afkenabled")]
    pub afk_enabled: bool,
    pub event: bool,
    #[serde(rename = "specialEvent")]
    pub special_event: bool,
    pub promods: bool,
    #[serde(rename = "syncdelay")]
    pub sync_delay: u32,
}
