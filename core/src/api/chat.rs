//! `chat.*`: message posting and editing.

use serde::Serialize;
use serde_json::json;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::transport::Transport;

impl<T: Transport> RocketChatClient<T> {
    /// Delete `msg_id` from `room_id`. With `as_user` the message is removed
    /// as if its author deleted it.
    pub fn chat_delete(&self, room_id: &str, msg_id: &str, as_user: bool) -> Result<HttpResponse> {
        self.submit(
            Endpoint::ChatDelete,
            &json!({ "roomId": room_id, "msgId": msg_id, "asUser": as_user }),
        )
    }

    /// `message` is usually a [`PostMessage`](crate::types::PostMessage).
    pub fn chat_post_message<B: Serialize + ?Sized>(&self, message: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::ChatPostMessage, message)
    }

    pub fn chat_pin_message(&self, message_id: &str) -> Result<HttpResponse> {
        self.submit(Endpoint::ChatPinMessage, &json!({ "messageId": message_id }))
    }

    pub fn chat_update(&self, room_id: &str, msg_id: &str, text: &str) -> Result<HttpResponse> {
        self.submit(
            Endpoint::ChatUpdate,
            &json!({ "roomId": room_id, "msgId": msg_id, "text": text }),
        )
    }
}
