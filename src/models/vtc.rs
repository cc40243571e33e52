use serde::Deserialize;

/// The VTC listings returned by `/vtc`: recently created, featured and
/// featured-cover companies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vtcs {
    #[serde(default)]
    pub recent: Vec<Vtc>,
    #[serde(default)]
    pub featured: Vec<Vtc>,
    #[serde(default)]
    pub featured_cover: Vec<Vtc>,
}

/// A virtual trucking company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vtc {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    pub owner_username: String,
    pub slogan: String,
    pub tag: String,
    /// Only present on single-VTC lookups.
    pub logo: Option<String>,
    pub cover: Option<String>,
    pub information: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub website: Option<String>,
    pub members_count: u32,
    /// Recruitment status, `Open` or `Close`.
    pub recruitment: String,
    pub language: String,
    pub verified: bool,
    pub validated: bool,
    pub created: String,
    pub socials: Socials,
    pub games: Games,
}

/// A VTC's social media links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Socials {
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub twitch: Option<String>,
    pub discord: Option<String>,
    pub youtube: Option<String>,
}

/// Which games a VTC operates in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Games {
    pub ats: bool,
    pub ets: bool,
}

/// A news post on a VTC's page.
///
/// Listing calls only carry `content_summary`; fetch a single post by
/// ID for the full `content`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsPost {
    pub id: u64,
    pub title: String,
    pub content_summary: String,
    pub content: Option<String>,
    pub author_id: u64,
    pub author: String,
    pub pinned: bool,
    pub updated_at: String,
    pub published_at: String,
}

/// A role within a VTC.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub order: u32,
    /// Whether this is the owner role, the highest rank.
    pub owner: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A member of a VTC.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    pub steam_id: u64,
    pub role_id: u64,
    pub role: String,
    #[serde(rename = "joinDate")]
    pub join_date: Option<String>,
}
