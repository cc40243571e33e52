//! Handler of API call operations.
//!
//! This module defines two structs, [`TruckersMP`] and [`ClientBuilder`].
//! `TruckersMP` exposes one method per API endpoint and returns typed
//! models. `ClientBuilder` exposes a finer level of granularity for
//! building a client: rate limit, cache behavior, timeouts and the
//! transport itself.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use typed_builder::TypedBuilder;
use url::Url;

use crate::dispatch::{DispatchConfig, Dispatcher};
use crate::endpoints;
use crate::models::{
    Ban, Event, Events, Member, NewsPost, Player, Role, Rules, Server, Version, Vtc, Vtcs,
};
use crate::transport::{HttpTransport, Transport};
use crate::types::{ApiResponse, ErrorKind, RequestDescriptor, Result};

/// Default number of calls allowed per rate-limit window, 5.
pub const DEFAULT_RATE_LIMIT: u32 = 5;
/// Default length of the rate-limit window, 5 seconds.
pub const DEFAULT_RATE_LIMIT_WINDOW: Duration = Duration::from_secs(5);
/// Default freshness window for cached responses, 60 seconds.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);
/// Default bound on wait-for-slot plus transfer time per call, 10 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Base URL of the public v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.truckersmp.com/v2/";
/// Default user agent, `truckersmp-rs/<PKG_VERSION>`.
pub const DEFAULT_USER_AGENT: &str = concat!("truckersmp-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for [`TruckersMP`].
///
/// See crate-level documentation for usage example.
#[derive(TypedBuilder, Debug, Clone)]
#[builder(field_defaults(default, setter(into)))]
#[builder(builder_method(doc = "
Create a builder for building `ClientBuilder`.

On the builder call, call methods with same name as its fields to set their values.

Finally, call `.build()` to create the instance of `ClientBuilder`.
"))]
pub struct ClientBuilder {
    /// Calls allowed per rate-limit window.
    ///
    /// The public API tolerates 5 requests per 5 seconds; exceeding it
    /// gets the client throttled, so only raise this if you know your
    /// quota is higher. Must be greater than zero.
    #[builder(default = DEFAULT_RATE_LIMIT)]
    rate_limit: u32,
    /// Length of the rate-limit window.
    #[builder(default = DEFAULT_RATE_LIMIT_WINDOW)]
    rate_limit_window: Duration,
    /// How long a cached response stays fresh unless the descriptor
    /// overrides it.
    #[builder(default = DEFAULT_CACHE_TTL)]
    cache_ttl: Duration,
    /// When `false`, every call goes to the network and nothing is
    /// stored. No other behavior changes.
    #[builder(default = true)]
    cache_enabled: bool,
    /// Bounds the sum of wait-for-slot plus transfer time for one call.
    /// `None` disables the bound.
    #[builder(default = Some(DEFAULT_TIMEOUT))]
    request_timeout: Option<Duration>,
    /// User agent sent with every request.
    #[builder(default_code = "String::from(DEFAULT_USER_AGENT)")]
    user_agent: String,
    /// Base URL of the API. Point this at a local server for testing.
    #[builder(default_code = "String::from(DEFAULT_BASE_URL)")]
    base_url: String,
    /// Custom transport replacing the built-in `reqwest` one. The
    /// `base_url` and `user_agent` options have no effect when set.
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientBuilder {
    #[must_use]
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientBuilder {
    /// Instantiates a [`TruckersMP`] client.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`] if:
    /// - `rate_limit` is zero or the window is empty.
    /// - The base URL or user agent is invalid.
    /// - The underlying request client cannot be created.
    pub fn client(self) -> Result<TruckersMP> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                // Joining endpoint paths must never discard the final
                // path segment of the base.
                let mut base_url = self.base_url;
                if !base_url.ends_with('/') {
                    base_url.push('/');
                }
                let base_url = Url::parse(&base_url).map_err(|e| {
                    ErrorKind::InvalidConfig(format!("invalid base URL `{base_url}`: {e}"))
                })?;

                let client = reqwest::ClientBuilder::new()
                    .gzip(true)
                    .user_agent(&self.user_agent)
                    .build()
                    .map_err(|e| {
                        ErrorKind::InvalidConfig(format!("cannot build request client: {e}"))
                    })?;

                Arc::new(HttpTransport::new(client, base_url)) as Arc<dyn Transport>
            }
        };

        let dispatcher = Dispatcher::new(
            transport,
            DispatchConfig {
                rate_limit: self.rate_limit,
                rate_limit_window: self.rate_limit_window,
                default_ttl: self.cache_ttl,
                cache_enabled: self.cache_enabled,
                timeout: self.request_timeout,
            },
        )?;

        Ok(TruckersMP {
            dispatcher: Arc::new(dispatcher),
        })
    }
}

/// Client for the TruckersMP API.
///
/// Every call passes through one dispatcher that owns the rate budget
/// and the response cache, so a clone of the client shares both with
/// the original while independent clients never do.
///
/// See [`ClientBuilder`] which contains sane defaults for all
/// configuration options.
#[derive(Debug, Clone)]
pub struct TruckersMP {
    dispatcher: Arc<Dispatcher>,
}

impl TruckersMP {
    /// Get the list of official game servers.
    pub async fn get_servers(&self) -> Result<Vec<Server>> {
        self.fetch(RequestDescriptor::new(endpoints::SERVERS)).await
    }

    /// Get a player by their TruckersMP ID.
    pub async fn get_player(&self, player_id: u64) -> Result<Player> {
        self.fetch(RequestDescriptor::new(endpoints::player(player_id)))
            .await
    }

    /// Get a player's bans.
    pub async fn get_bans(&self, player_id: u64) -> Result<Vec<Ban>> {
        self.fetch(RequestDescriptor::new(endpoints::bans(player_id)))
            .await
    }

    /// Get the current in-game time, in minutes.
    pub async fn get_ingame_time(&self) -> Result<u64> {
        let response = self
            .dispatcher
            .execute(&RequestDescriptor::new(endpoints::GAME_TIME))
            .await?;
        let payload = field(response.into_payload(), "game_time")?;
        decode(payload)
    }

    /// Get featured, today's, live and upcoming events.
    ///
    /// Attendee rosters are omitted on this listing; use
    /// [`get_event`](Self::get_event) for a full roster.
    pub async fn get_events(&self) -> Result<Events> {
        self.fetch(RequestDescriptor::new(endpoints::EVENTS)).await
    }

    /// Get a single event by ID.
    pub async fn get_event(&self, event_id: u64) -> Result<Event> {
        self.fetch(RequestDescriptor::new(endpoints::event(event_id)))
            .await
    }

    /// Get recent, featured and featured-cover VTCs.
    pub async fn get_vtcs(&self) -> Result<Vtcs> {
        self.fetch(RequestDescriptor::new(endpoints::VTCS)).await
    }

    /// Get a single VTC by ID.
    pub async fn get_vtc(&self, vtc_id: u64) -> Result<Vtc> {
        self.fetch(RequestDescriptor::new(endpoints::vtc(vtc_id)))
            .await
    }

    /// Get a VTC's news posts.
    ///
    /// Posts only carry their summary here; use
    /// [`get_vtc_news_post`](Self::get_vtc_news_post) for full content.
    pub async fn get_vtc_news(&self, vtc_id: u64) -> Result<Vec<NewsPost>> {
        self.fetch_field(RequestDescriptor::new(endpoints::vtc_news(vtc_id)), "news")
            .await
    }

    /// Get a single VTC news post.
    pub async fn get_vtc_news_post(&self, vtc_id: u64, post_id: u64) -> Result<NewsPost> {
        self.fetch(RequestDescriptor::new(endpoints::vtc_news_post(
            vtc_id, post_id,
        )))
        .await
    }

    /// Get all of a VTC's roles.
    pub async fn get_vtc_roles(&self, vtc_id: u64) -> Result<Vec<Role>> {
        self.fetch_field(
            RequestDescriptor::new(endpoints::vtc_roles(vtc_id)),
            "roles",
        )
        .await
    }

    /// Get a specific role of a VTC.
    ///
    /// The API returns the same data for one role as for the whole
    /// list, so this fetches the list (or serves it from cache) and
    /// filters locally instead of spending another call.
    pub async fn get_vtc_role(&self, vtc_id: u64, role_id: u64) -> Result<Role> {
        let roles = self.get_vtc_roles(vtc_id).await?;
        roles
            .into_iter()
            .find(|role| role.id == role_id)
            .ok_or_else(|| ErrorKind::NotFound(format!("/vtc/{vtc_id}/role/{role_id}")))
    }

    /// Get all of a VTC's members.
    pub async fn get_vtc_members(&self, vtc_id: u64) -> Result<Vec<Member>> {
        self.fetch_field(
            RequestDescriptor::new(endpoints::vtc_members(vtc_id)),
            "members",
        )
        .await
    }

    /// Get a specific member of a VTC.
    ///
    /// Fetches the member list (or serves it from cache) and filters
    /// locally, like [`get_vtc_role`](Self::get_vtc_role).
    pub async fn get_vtc_member(&self, vtc_id: u64, member_id: u64) -> Result<Member> {
        let members = self.get_vtc_members(vtc_id).await?;
        members
            .into_iter()
            .find(|member| member.id == member_id)
            .ok_or_else(|| ErrorKind::NotFound(format!("/vtc/{vtc_id}/member/{member_id}")))
    }

    /// Get all of a VTC's events.
    pub async fn get_vtc_events(&self, vtc_id: u64) -> Result<Vec<Event>> {
        self.fetch(RequestDescriptor::new(endpoints::vtc_events(vtc_id)))
            .await
    }

    /// Get a single event hosted by a VTC.
    pub async fn get_vtc_event(&self, vtc_id: u64, event_id: u64) -> Result<Event> {
        self.fetch(RequestDescriptor::new(endpoints::vtc_event(
            vtc_id, event_id,
        )))
        .await
    }

    /// Get mod version information.
    pub async fn get_version(&self) -> Result<Version> {
        // Flat payload, no envelope.
        let response = self
            .dispatcher
            .execute(&RequestDescriptor::new(endpoints::VERSION))
            .await?;
        decode(response.into_payload())
    }

    /// Get the current in-game rules document.
    pub async fn get_rules(&self) -> Result<Rules> {
        let response = self
            .dispatcher
            .execute(&RequestDescriptor::new(endpoints::RULES))
            .await?;
        decode(response.into_payload())
    }

    /// Low-level escape hatch: dispatch an arbitrary descriptor and get
    /// the raw payload back.
    ///
    /// Useful for endpoints this crate has no typed method for yet.
    /// Every failure on this path is wrapped in
    /// [`ErrorKind::Execute`] with the underlying kind as its source,
    /// so callers can tell a failed orchestration apart from an
    /// endpoint method's own semantic errors.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Execute`].
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        self.dispatcher
            .execute(descriptor)
            .await
            .map_err(|e| ErrorKind::Execute(Box::new(e)))
    }

    /// Evict the cached result for a descriptor, guaranteeing the next
    /// call fetches fresh data.
    pub fn invalidate(&self, descriptor: &RequestDescriptor) {
        self.dispatcher.invalidate(descriptor);
    }

    /// Evict every cached result.
    pub fn invalidate_all(&self) {
        self.dispatcher.invalidate_all();
    }

    /// Dispatch a descriptor and decode the envelope's `response` field.
    async fn fetch<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let response = self.dispatcher.execute(&descriptor).await?;
        decode(envelope(response.into_payload())?)
    }

    /// Like [`fetch`](Self::fetch), for payloads that nest the data one
    /// level deeper inside the envelope (e.g. `response.news`).
    async fn fetch_field<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
        name: &str,
    ) -> Result<T> {
        let response = self.dispatcher.execute(&descriptor).await?;
        decode(field(envelope(response.into_payload())?, name)?)
    }
}

/// Unwrap the standard `{ "error": …, "response": … }` envelope.
fn envelope(payload: Value) -> Result<Value> {
    field(payload, "response")
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(ErrorKind::from)
}

fn field(payload: Value, name: &str) -> Result<Value> {
    match payload {
        Value::Object(mut map) => map
            .remove(name)
            .ok_or_else(|| ErrorKind::Format(format!("missing `{name}` field in response"))),
        _ => Err(ErrorKind::Format(format!(
            "expected a JSON object carrying `{name}`"
        ))),
    }
}
