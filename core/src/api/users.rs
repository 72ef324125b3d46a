//! `users.*`

use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::query::{ListOptions, Query};
use crate::transport::Transport;

impl<T: Transport> RocketChatClient<T> {
    /// Create a user. `user` is usually a [`NewUser`](crate::types::NewUser).
    pub fn users_create<B: Serialize + ?Sized>(&self, user: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::UsersCreate, user)
    }

    pub fn users_delete(&self, user_id: &str) -> Result<HttpResponse> {
        self.submit(Endpoint::UsersDelete, &json!({ "userId": user_id }))
    }

    /// Presence of `user_id`, or of the caller when `None`.
    pub fn users_get_presence(&self, user_id: Option<&str>) -> Result<HttpResponse> {
        let query = match user_id {
            Some(id) if !id.is_empty() => Query::new().with("userId", id),
            _ => Query::new(),
        };
        self.fetch(Endpoint::UsersGetPresence, &query)
    }

    pub fn users_info(&self, user_id: &str) -> Result<HttpResponse> {
        self.fetch(Endpoint::UsersInfo, &Query::new().with("userId", user_id))
    }

    pub fn users_list(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::UsersList, opts)
    }

    /// Not implemented: always fails locally with `ApiError::Unsupported`
    /// and sends nothing.
    pub fn users_set_avatar(&self, avatar_url: &str) -> Result<HttpResponse> {
        warn!(avatar_url, "users.setAvatar is not supported");
        Err(ApiError::Unsupported("users.setAvatar"))
    }

    /// Update a user. `update` is usually a [`UserUpdate`](crate::types::UserUpdate).
    pub fn users_update<B: Serialize + ?Sized>(&self, update: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::UsersUpdate, update)
    }
}
