//! `im.*`: direct messages.

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::query::{HistoryOptions, ListOptions, Query};
use crate::transport::Transport;

impl<T: Transport> RocketChatClient<T> {
    pub fn im_close(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ImClose, room_id)
    }

    pub fn im_history(&self, room_id: &str, opts: &HistoryOptions) -> Result<HttpResponse> {
        self.room_query(Endpoint::ImHistory, room_id, Query::from(opts))
    }

    /// Every direct message on the server. Requires
    /// `view-room-administration`.
    pub fn im_list_everyone(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::ImListEveryone, opts)
    }

    pub fn im_list(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::ImList, opts)
    }

    /// Messages of a direct message the caller is not part of. Needs the
    /// direct message history endpoint enabled on the server and
    /// `view-room-administration`.
    pub fn im_messages_others(&self, room_id: &str, opts: &ListOptions) -> Result<HttpResponse> {
        self.room_query(Endpoint::ImMessagesOthers, room_id, Query::from(opts))
    }

    pub fn im_open(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ImOpen, room_id)
    }

    pub fn im_set_topic(&self, room_id: &str, topic: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::ImSetTopic, room_id, Some(("topic", topic)))
    }
}
