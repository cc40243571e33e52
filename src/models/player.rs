use serde::Deserialize;

/// A TruckersMP player as returned by `/player/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "smallAvatar")]
    pub small_avatar: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    #[serde(rename = "steamID64")]
    pub steam_id_64: u64,
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(rename = "discordSnowflake")]
    pub discord_id: Option<String>,
    /// Whether the player shows their VTC history on their profile.
    #[serde(rename = "displayVTCHistory")]
    pub display_vtc_history: Option<bool>,
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "groupColor")]
    pub group_color: Option<String>,
    #[serde(rename = "groupID")]
    pub group_id: u64,
    pub banned: bool,
    #[serde(rename = "bannedUntil")]
    pub banned_until: Option<String>,
    #[serde(rename = "bansCount")]
    pub ban_count: Option<u32>,
    /// Whether the player chooses to show their bans.
    #[serde(rename = "displayBans")]
    pub display_bans: bool,
    pub patreon: Patreon,
    pub permissions: Permissions,
    pub vtc: PlayerVtc,
}

/// Patreon contribution details of a player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Patreon {
    #[serde(rename = "isPatron")]
    pub is_patron: bool,
    pub active: Option<bool>,
    pub color: Option<String>,
    #[serde(rename = "tierId")]
    pub tier_id: Option<u64>,
    #[serde(rename = "currentPledge")]
    pub current_pledge: Option<u64>,
    #[serde(rename = "lifetimePledge")]
    pub lifetime_pledge: Option<u64>,
    #[serde(rename = "nextPledge")]
    pub next_pledge: Option<u64>,
    pub hidden: Option<bool>,
}

/// Staff permissions of a player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Permissions {
    #[serde(rename = "isStaff")]
    pub is_staff: bool,
    #[serde(rename = "isManagement")]
    pub is_upper_staff: bool,
    #[serde(rename = "isGameAdmin")]
    pub is_game_admin: bool,
    #[serde(rename = "showDetailedOnWebMaps")]
    pub show_detailed_on_web_maps: Option<bool>,
}

/// VTC membership summary embedded in a player profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerVtc {
    /// Zero when the player is not in a VTC.
    pub id: u64,
    pub name: String,
    pub tag: String,
    #[serde(rename = "inVTC")]
    pub in_vtc: bool,
    #[serde(rename = "memberID")]
    pub member_id: u64,
}
