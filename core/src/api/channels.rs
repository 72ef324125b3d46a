//! `channels.*`: public rooms.

use serde::Serialize;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::query::{HistoryOptions, ListOptions, Query};
use crate::transport::Transport;
use crate::types::RoomType;

impl<T: Transport> RocketChatClient<T> {
    /// Add every user on the server to the channel.
    pub fn channels_add_all(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsAddAll, room_id)
    }

    pub fn channels_add_moderator(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsAddModerator, room_id, user_id)
    }

    pub fn channels_add_owner(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsAddOwner, room_id, user_id)
    }

    pub fn channels_archive(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsArchive, room_id)
    }

    /// Remove messages in a time range. `range` is usually a
    /// [`CleanHistory`](crate::types::CleanHistory).
    pub fn channels_clean_history<B: Serialize + ?Sized>(&self, range: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::ChannelsCleanHistory, range)
    }

    /// Hide the channel from the caller's list without leaving it.
    pub fn channels_close(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsClose, room_id)
    }

    /// `room` is usually a [`NewRoom`](crate::types::NewRoom).
    pub fn channels_create<B: Serialize + ?Sized>(&self, room: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::ChannelsCreate, room)
    }

    /// Requires the `manage-integrations` permission.
    pub fn channels_get_integrations(
        &self,
        room_id: &str,
        opts: &ListOptions,
    ) -> Result<HttpResponse> {
        self.room_query(Endpoint::ChannelsGetIntegrations, room_id, Query::from(opts))
    }

    pub fn channels_history(&self, room_id: &str, opts: &HistoryOptions) -> Result<HttpResponse> {
        self.room_query(Endpoint::ChannelsHistory, room_id, Query::from(opts))
    }

    pub fn channels_info(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_query(Endpoint::ChannelsInfo, room_id, Query::new())
    }

    pub fn channels_invite(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsInvite, room_id, user_id)
    }

    pub fn channels_kick(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsKick, room_id, user_id)
    }

    pub fn channels_leave(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsLeave, room_id)
    }

    pub fn channels_list(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::ChannelsList, opts)
    }

    /// Channels the caller has joined.
    pub fn channels_list_joined(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::ChannelsListJoined, opts)
    }

    pub fn channels_open(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsOpen, room_id)
    }

    pub fn channels_remove_moderator(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsRemoveModerator, room_id, user_id)
    }

    pub fn channels_remove_owner(&self, room_id: &str, user_id: &str) -> Result<HttpResponse> {
        self.room_member_action(Endpoint::ChannelsRemoveOwner, room_id, user_id)
    }

    pub fn channels_rename(&self, room_id: &str, name: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::ChannelsRename, room_id, Some(("name", name)))
    }

    pub fn channels_set_description(&self, room_id: &str, description: &str) -> Result<HttpResponse> {
        self.room_setting(
            Endpoint::ChannelsSetDescription,
            room_id,
            Some(("description", description)),
        )
    }

    pub fn channels_set_join_code(&self, room_id: &str, join_code: &str) -> Result<HttpResponse> {
        self.room_setting(
            Endpoint::ChannelsSetJoinCode,
            room_id,
            Some(("joinCode", join_code)),
        )
    }

    pub fn channels_set_purpose(&self, room_id: &str, purpose: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::ChannelsSetPurpose, room_id, Some(("purpose", purpose)))
    }

    pub fn channels_set_read_only(&self, room_id: &str, read_only: bool) -> Result<HttpResponse> {
        self.room_setting(
            Endpoint::ChannelsSetReadOnly,
            room_id,
            Some(("readOnly", read_only)),
        )
    }

    pub fn channels_set_topic(&self, room_id: &str, topic: &str) -> Result<HttpResponse> {
        self.room_setting(Endpoint::ChannelsSetTopic, room_id, Some(("topic", topic)))
    }

    pub fn channels_set_type(&self, room_id: &str, room_type: RoomType) -> Result<HttpResponse> {
        self.room_setting(Endpoint::ChannelsSetType, room_id, Some(("type", room_type)))
    }

    pub fn channels_unarchive(&self, room_id: &str) -> Result<HttpResponse> {
        self.room_action(Endpoint::ChannelsUnarchive, room_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::query::{HistoryOptions, ListOptions};
    use crate::testing::{body_of, check_calls, client, family_paths, Call};
    use crate::types::{CleanHistory, NewRoom, RoomType};

    #[test]
    fn room_actions_post_room_id() {
        let c = client();
        c.channels_archive("R1").unwrap();
        let req = c.transport().last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://chat.test/api/v1/channels.archive");
        assert_eq!(body_of(&req), json!({"roomId": "R1"}));
    }

    #[test]
    fn member_actions_post_room_and_user() {
        let c = client();
        c.channels_kick("R1", "U1").unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/channels.kick");
        assert_eq!(body_of(&req), json!({"roomId": "R1", "userId": "U1"}));
    }

    #[test]
    fn settings_use_remote_field_names() {
        let c = client();
        c.channels_set_join_code("R1", "1234").unwrap();
        assert_eq!(
            body_of(&c.transport().last()),
            json!({"roomId": "R1", "joinCode": "1234"})
        );
        c.channels_set_read_only("R1", true).unwrap();
        assert_eq!(
            body_of(&c.transport().last()),
            json!({"roomId": "R1", "readOnly": true})
        );
        c.channels_rename("R1", "lobby").unwrap();
        assert_eq!(
            body_of(&c.transport().last()),
            json!({"roomId": "R1", "name": "lobby"})
        );
    }

    #[test]
    fn set_type_sends_type_code() {
        let c = client();
        c.channels_set_type("R1", RoomType::Private).unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/channels.setType");
        assert_eq!(body_of(&req), json!({"roomId": "R1", "type": "p"}));
    }

    #[test]
    fn info_queries_room_id() {
        let c = client();
        c.channels_info("GENERAL").unwrap();
        let req = c.transport().last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://chat.test/api/v1/channels.info?roomId=GENERAL");
    }

    #[test]
    fn history_puts_room_id_first() {
        let c = client();
        let opts = HistoryOptions {
            count: Some(10),
            unreads: Some(true),
            ..HistoryOptions::default()
        };
        c.channels_history("R1", &opts).unwrap();
        assert_eq!(
            c.transport().last().url,
            "http://chat.test/api/v1/channels.history?roomId=R1&count=10&unreads=true"
        );
    }

    #[test]
    fn list_joined_uses_dotted_path() {
        let c = client();
        c.channels_list_joined(&ListOptions::default()).unwrap();
        assert_eq!(
            c.transport().last().url,
            "http://chat.test/api/v1/channels.list.joined"
        );
    }

    #[test]
    fn get_integrations_accepts_paging() {
        let c = client();
        c.channels_get_integrations("R1", &ListOptions::page(0, 5)).unwrap();
        assert_eq!(
            c.transport().last().url,
            "http://chat.test/api/v1/channels.getIntegrations?roomId=R1&offset=0&count=5"
        );
    }

    #[test]
    fn create_posts_room() {
        let c = client();
        let room = NewRoom {
            members: vec!["alice".into()],
            ..NewRoom::named("dev")
        };
        c.channels_create(&room).unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/channels.create");
        assert_eq!(body_of(&req), json!({"name": "dev", "members": ["alice"]}));
    }

    #[test]
    fn clean_history_posts_range() {
        let c = client();
        let range = CleanHistory {
            room_id: "R1".into(),
            latest: "2016-12-09T13:42:25.304Z".into(),
            oldest: "2016-08-30T13:42:25.304Z".into(),
            inclusive: None,
        };
        c.channels_clean_history(&range).unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/channels.cleanHistory");
        assert_eq!(body_of(&req)["oldest"], "2016-08-30T13:42:25.304Z");
        assert!(body_of(&req).get("inclusive").is_none());
    }

    #[test]
    fn every_wrapper_hits_its_own_endpoint() {
        let cases: &[(Call, &str, Option<serde_json::Value>)] = &[
            (|c| c.channels_add_all("R1"), "channels.addAll", Some(json!({"roomId": "R1"}))),
            (
                |c| c.channels_add_moderator("R1", "U1"),
                "channels.addModerator",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (
                |c| c.channels_add_owner("R1", "U1"),
                "channels.addOwner",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (|c| c.channels_archive("R1"), "channels.archive", Some(json!({"roomId": "R1"}))),
            (
                |c| {
                    c.channels_clean_history(&json!({
                        "roomId": "R1",
                        "latest": "2016-12-09T13:42:25.304Z",
                        "oldest": "2016-08-30T13:42:25.304Z"
                    }))
                },
                "channels.cleanHistory",
                Some(json!({
                    "roomId": "R1",
                    "latest": "2016-12-09T13:42:25.304Z",
                    "oldest": "2016-08-30T13:42:25.304Z"
                })),
            ),
            (|c| c.channels_close("R1"), "channels.close", Some(json!({"roomId": "R1"}))),
            (
                |c| c.channels_create(&NewRoom::named("dev")),
                "channels.create",
                Some(json!({"name": "dev"})),
            ),
            (
                |c| c.channels_get_integrations("R1", &ListOptions::default()),
                "channels.getIntegrations?roomId=R1",
                None,
            ),
            (
                |c| c.channels_history("R1", &HistoryOptions::default()),
                "channels.history?roomId=R1",
                None,
            ),
            (|c| c.channels_info("R1"), "channels.info?roomId=R1", None),
            (
                |c| c.channels_invite("R1", "U1"),
                "channels.invite",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (
                |c| c.channels_kick("R1", "U1"),
                "channels.kick",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (|c| c.channels_leave("R1"), "channels.leave", Some(json!({"roomId": "R1"}))),
            (|c| c.channels_list(&ListOptions::page(0, 2)), "channels.list?offset=0&count=2", None),
            (|c| c.channels_list_joined(&ListOptions::default()), "channels.list.joined", None),
            (|c| c.channels_open("R1"), "channels.open", Some(json!({"roomId": "R1"}))),
            (
                |c| c.channels_remove_moderator("R1", "U1"),
                "channels.removeModerator",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (
                |c| c.channels_remove_owner("R1", "U1"),
                "channels.removeOwner",
                Some(json!({"roomId": "R1", "userId": "U1"})),
            ),
            (
                |c| c.channels_rename("R1", "lobby"),
                "channels.rename",
                Some(json!({"roomId": "R1", "name": "lobby"})),
            ),
            (
                |c| c.channels_set_description("R1", "about"),
                "channels.setDescription",
                Some(json!({"roomId": "R1", "description": "about"})),
            ),
            (
                |c| c.channels_set_join_code("R1", "1234"),
                "channels.setJoinCode",
                Some(json!({"roomId": "R1", "joinCode": "1234"})),
            ),
            (
                |c| c.channels_set_purpose("R1", "ops"),
                "channels.setPurpose",
                Some(json!({"roomId": "R1", "purpose": "ops"})),
            ),
            (
                |c| c.channels_set_read_only("R1", true),
                "channels.setReadOnly",
                Some(json!({"roomId": "R1", "readOnly": true})),
            ),
            (
                |c| c.channels_set_topic("R1", "builds"),
                "channels.setTopic",
                Some(json!({"roomId": "R1", "topic": "builds"})),
            ),
            (
                |c| c.channels_set_type("R1", RoomType::Channel),
                "channels.setType",
                Some(json!({"roomId": "R1", "type": "c"})),
            ),
            (|c| c.channels_unarchive("R1"), "channels.unarchive", Some(json!({"roomId": "R1"}))),
        ];
        assert_eq!(check_calls(cases), family_paths("channels."));
    }
}
