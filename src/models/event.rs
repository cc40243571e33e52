use serde::Deserialize;
use serde_json::Value;

/// The event listings returned by `/events`: featured, today's, live
/// and upcoming events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Events {
    #[serde(default)]
    pub featured: Vec<Event>,
    #[serde(default)]
    pub today: Vec<Event>,
    #[serde(default)]
    pub now: Vec<Event>,
    #[serde(default)]
    pub upcoming: Vec<Event>,
}

/// A convoy event.
///
/// Listing endpoints omit the attendee rosters; fetch a single event by
/// ID to get `attendances.confirmed_users` and `unsure_users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub game: String,
    pub language: String,
    pub start_at: String,
    pub banner: Option<String>,
    pub map: String,
    pub description: String,
    pub rule: Option<String>,
    pub voice_link: Option<String>,
    pub external_link: Option<String>,
    pub featured: Option<String>,
    /// Required DLC per game, shape varies between games.
    pub dlcs: Option<Value>,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
    pub event_type: EventType,
    pub server: EventServer,
    pub departure: Waypoint,
    pub arrive: Waypoint,
    pub vtc: Option<EventVtc>,
    pub user: EventUser,
    pub attendances: Attendances,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventType {
    pub key: String,
    pub name: String,
}

/// The server an event takes place on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventServer {
    pub id: u64,
    pub name: String,
}

/// Departure or arrival point of an event route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Waypoint {
    pub location: String,
    pub city: String,
}

/// The VTC hosting an event, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventVtc {
    pub id: u64,
    pub name: Option<String>,
}

/// The user who created an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventUser {
    pub id: u64,
    pub username: String,
}

/// Attendance counts, plus rosters on single-event lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attendances {
    pub confirmed: u32,
    pub unsure: u32,
    #[serde(default)]
    pub confirmed_users: Option<Vec<Attendee>>,
    #[serde(default)]
    pub unsure_users: Option<Vec<Attendee>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attendee {
    pub id: u64,
    pub username: String,
    pub following: bool,
    pub created_at: String,
    pub updated_at: String,
}
