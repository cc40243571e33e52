use serde::Deserialize;

/// A ban on a player's record, as returned by `/bans/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ban {
    /// Expiry time; `None` for permanent bans.
    pub expiration: Option<String>,
    #[serde(rename = "timeAdded")]
    pub time_added: String,
    pub active: bool,
    pub reason: String,
    #[serde(rename = "adminName")]
    pub admin_name: Option<String>,
    #[serde(rename = "adminID")]
    pub admin_id: Option<u64>,
}
