//! Typed representations of the API's response payloads.
//!
//! Endpoint methods on [`TruckersMP`](crate::TruckersMP) decode the
//! dispatcher's JSON payloads into these via `serde`; a payload that
//! does not fit surfaces as [`ErrorKind::Format`](crate::ErrorKind).

mod ban;
mod event;
mod player;
mod rules;
mod server;
mod version;
mod vtc;

pub use ban::Ban;
pub use event::{
    Attendances, Attendee, Event, EventServer, EventType, EventUser, EventVtc, Events, Waypoint,
};
pub use player::{Patreon, Permissions, Player, PlayerVtc};
pub use rules::Rules;
pub use server::Server;
pub use version::{Checksum, Version};
pub use vtc::{Games, Member, NewsPost, Role, Socials, Vtc, Vtcs};
