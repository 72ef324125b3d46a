//! `groups.*`: private rooms. Mirrors the channel family; every call
//! requires the caller to be a member of the group.

use serde::Serialize;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::query::{HistoryOptions, ListOptions, Query};
use crate::transport::Transport;
use crate::types::RoomType;

impl<T: Transport> RocketChatClient<T> {
    pub fn groups_add_moderator(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsAddModerator, room_id, user_id)
    }

    pub fn groups_add_owner(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsAddOwner, room_id, user_id)
    }

    pub fn groups_add_leader(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsAddLeader, room_id, user_id)
    }

    pub fn groups_archive(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::GroupsArchive, room_id)
    }

    /// `room` is usually a [`NewRoom`](crate::types::NewRoom).
    pub fn groups_create<B: Serialize + ?Sized>(&self, room: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::GroupsCreate, room)
    }

    pub fn groups_close(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::GroupsClose, room_id)
    }

    pub fn groups_get_integrations(&self, room_id: &str, opts: &ListOptions) -> Result<HttpResponse> {
        self.room_query(Endpoint::GroupsGetIntegrations, room_id, Query::from(opts))
    }

    pub fn groups_history(&self, room_id: &str, opts: &HistoryOptions) -> Result<HttpResponse> {
        self.room_query(Endpoint::GroupsHistory, room_id, Query::from(opts))
    }

    /// Look a group up by id or by name. The id wins when both are given;
    /// with neither, nothing is sent and `ApiError::MissingArgument` is
    /// returned.
    pub fn groups_info(
        &self,
        room_id: Option<&str>,
        room_name: Option<&str>,
    ) -> Result<HttpResponse> {
        let query = match (non_empty(room_id), non_empty(room_name)) {
            (Some(id), _) => Query::new().with("roomId", id),
            (None, Some(name)) => Query::new().with("roomName", name),
            (None, None) => return Err(ApiError::MissingArgument("roomId or roomName")),
        };
        self.fetch(Endpoint::GroupsInfo, &query)
    }

    pub fn groups_invite(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsInvite, room_id, user_id)
    }

    pub fn groups_kick(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsKick, room_id, user_id)
    }

    /// Fails server-side when the caller is the last owner.
    pub fn groups_leave(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::GroupsLeave, room_id)
    }

    pub fn groups_list(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::GroupsList, opts)
    }

    pub fn groups_open(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::GroupsOpen, room_id)
    }

    pub fn groups_remove_moderator(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsRemoveModerator, room_id, user_id)
    }

    pub fn groups_remove_owner(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::GroupsRemoveOwner, room_id, user_id)
    }

    pub fn groups_rename(&self, room_id: &str, name: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::GroupsRename, room_id, Some(("name", name)))
    }

    pub fn groups_set_description(&self, room_id: &str, description: &str) -> Result<HttpResponse> {
        self.room_setting(
            Endpoint::GroupsSetDescription,
            room_id,
            Some(("description", description)),
        )
    }

    pub fn groups_set_purpose(&self, room_id: &str, purpose: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::GroupsSetPurpose, room_id, Some(("purpose", purpose)))
    }

    pub fn groups_set_read_only(&self, room_id: &str, read_only: bool) -> Result<HttpResponse> {
        self.room_setting(Endpoint::GroupsSetReadOnly, room_id, Some(("readOnly", read_only)))
    }

    pub fn groups_set_topic(&self, room_id: &str, topic: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::GroupsSetTopic, room_id, Some(("topic", topic)))
    }

    pub fn groups_set_type(&self, room_id: &str, room_type: RoomType) -> Result<HttpResponse> {
        self.room_setting(Endpoint::GroupsSetType, room_id, Some(("type", room_type)))
    }

    pub fn groups_unarchive(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::GroupsUnarchive, room_id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
