//! Paths of the TruckersMP API surface, relative to the v2 base URL.

pub(crate) const SERVERS: &str = "/servers";
pub(crate) const GAME_TIME: &str = "/game_time";
pub(crate) const EVENTS: &str = "/events";
pub(crate) const VTCS: &str = "/vtc";
pub(crate) const VERSION: &str = "/version";
pub(crate) const RULES: &str = "/rules";

pub(crate) fn player(player_id: u64) -> String {
    format!("/player/{player_id}")
}

pub(crate) fn bans(player_id: u64) -> String {
    format!("/bans/{player_id}")
}

pub(crate) fn event(event_id: u64) -> String {
    format!("/events/{event_id}")
}

pub(crate) fn vtc(vtc_id: u64) -> String {
    format!("/vtc/{vtc_id}")
}

pub(crate) fn vtc_news(vtc_id: u64) -> String {
    format!("/vtc/{vtc_id}/news")
}

pub(crate) fn vtc_news_post(vtc_id: u64, post_id: u64) -> String {
    format!("/vtc/{vtc_id}/news/{post_id}")
}

pub(crate) fn vtc_roles(vtc_id: u64) -> String {
    format!("/vtc/{vtc_id}/roles")
}

pub(crate) fn vtc_members(vtc_id: u64) -> String {
    format!("/vtc/{vtc_id}/members")
}

pub(crate) fn vtc_events(vtc_id: u64) -> String {
    format!("/vtc/{vtc_id}/events")
}

pub(crate) fn vtc_event(vtc_id: u64, event_id: u64) -> String {
    format!("/vtc/{vtc_id}/events/{event_id}")
}
