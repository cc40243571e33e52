//! `truckersmp` is an async client library for the TruckersMP REST API.
//!
//! Every call goes through a dispatch layer that pre-emptively rate
//! limits requests (the API tolerates 5 calls per 5 seconds) and caches
//! fresh responses, so fan-outs over many players or servers neither
//! trip the server's throttle nor repeat identical fetches.
//!
//! "Hello world" example:
//! ```no_run
//! use truckersmp::{ClientBuilder, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientBuilder::default().client()?;
//!     for server in client.get_servers().await? {
//!         println!("{}: {}/{}", server.name, server.players, server.max_players);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! For more control, configure the client through the builder:
//! ```no_run
//! use std::time::Duration;
//! use truckersmp::{ClientBuilder, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientBuilder::builder()
//!         .rate_limit(2u32)
//!         .rate_limit_window(Duration::from_secs(10))
//!         .cache_ttl(Duration::from_secs(120))
//!         .build()
//!         .client()?;
//!     let player = client.get_player(28159).await?;
//!     println!("{}", player.name);
//!     Ok(())
//! }
//! ```

mod cache;
mod client;
mod dispatch;
mod endpoints;
mod transport;
mod types;

pub mod models;
pub mod ratelimit;
#[cfg(test)]
#[macro_use]
pub mod test_utils;

pub use client::{
    ClientBuilder, TruckersMP, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_RATE_LIMIT,
    DEFAULT_RATE_LIMIT_WINDOW, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::*;
