use serde::Deserialize;

/// Mod version information from `/version`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Version {
    pub name: String,
    pub numeric: String,
    pub stage: String,
    pub time: String,
    pub supported_game_version: String,
    #[serde(rename = "supported_ats_game_version")]
    pub supported_ats_version: String,
    pub ets2mp_checksum: Checksum,
    pub atsmp_checksum: Checksum,
}

/// File checksums for one game's mod build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Checksum {
    pub dll: String,
    pub adb: String,
}
