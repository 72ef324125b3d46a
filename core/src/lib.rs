//! Synchronous client for the Rocket.Chat REST API (`/api/v1/`).
//!
//! # Overview
//! `RocketChatClient` builds authenticated requests for a fixed catalog of
//! remote operations and returns the server's responses verbatim. The only
//! state it keeps is the `Session` obtained from `login` (or restored by the
//! caller).
//!
//! # Design
//! - Request shaping (`build_get` / `build_post`) is separate from the
//!   network, which sits behind the `Transport` trait. `UreqTransport` is the
//!   default; tests swap in an in-memory one.
//! - The catalog is the closed `Endpoint` enum; wrappers such as
//!   `channels_set_topic` only map arguments onto its field names.
//! - Query strings are built from structured pairs and encoded in one place.
//! - Server-side failures are data (`HttpResponse`), not `ApiError`s.
//!
//! ```no_run
//! use rocketchat_core::{PostMessage, RocketChatClient};
//!
//! # fn main() -> rocketchat_core::Result<()> {
//! let mut client = RocketChatClient::new("https://chat.example.com");
//! let resp = client.login("bot", "secret")?;
//! if client.session().is_none() {
//!     eprintln!("login failed: {} {}", resp.status, resp.body);
//!     return Ok(());
//! }
//! client.chat_post_message(&PostMessage::to_channel("#general", "deployed"))?;
//! # Ok(())
//! # }
//! ```

mod api;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::RocketChatClient;
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{HistoryOptions, ListOptions, Query};
pub use session::{Session, AUTH_TOKEN_HEADER, USER_ID_HEADER};
pub use transport::{Transport, TransportConfig, UreqTransport};
pub use types::{
    Attachment, CleanHistory, IntegrationType, NewIntegration, NewRoom, NewUser, PostMessage,
    RoomType, UserFields, UserUpdate,
};
