//! One wrapper per remote operation, grouped the way the REST docs group
//! them. Each wrapper shapes its arguments into a query or JSON body with the
//! server's field names and delegates to the generic GET/POST.

mod channels;
mod chat;
mod groups;
mod im;
mod integrations;
mod misc;
mod settings;
mod users;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::query::{ListOptions, Query};
use crate::transport::Transport;

// Shapes shared by the channel, group and im families.
impl<T: Transport> RocketChatClient<T> {
    fn room_action(&self, endpoint: Endpoint, room_id: &str) -> Result<HttpResponse> {
        self.room_setting(endpoint, room_id, None::<(&str, ())>)
    }

    fn room_member_action(
        &self,
        endpoint: Endpoint,
        room_id: &str,
        user_id: &str,
    ) -> Result<HttpResponse> {
        self.room_setting(endpoint, room_id, Some(("userId", user_id)))
    }

    /// POST `{"roomId": room_id, <key>: value}`.
    fn room_setting<V: Serialize>(
        &self,
        endpoint: Endpoint,
        room_id: &str,
        field: Option<(&str, V)>,
    ) -> Result<HttpResponse> {
        let mut body = Map::new();
        body.insert("roomId".to_string(), Value::from(room_id));
        if let Some((key, value)) = field {
            let value =
                serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
            body.insert(key.to_string(), value);
        }
        self.submit(endpoint, &body)
    }

    /// GET with `roomId=<room_id>` followed by `extra`.
    fn room_query(&self, endpoint: Endpoint, room_id: &str, extra: Query) -> Result<HttpResponse> {
        let mut query = Query::new().with("roomId", room_id);
        query.append(extra);
        self.fetch(endpoint, &query)
    }

    fn list(&self, endpoint: Endpoint, opts: &ListOptions) -> Result<HttpResponse> {
        self.fetch(endpoint, &Query::from(opts))
    }
}
