//! The catalog of remote operations.
//!
//! # Design
//! Every operation the client binds is one `Endpoint` variant. The remote
//! path and HTTP method live in one table so wrappers cannot drift from it,
//! and the test vectors can walk the whole catalog.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::http::HttpMethod;

macro_rules! endpoints {
    ($($variant:ident => $method:ident $path:literal,)*) => {
        /// One remote operation under `/api/v1/`.
        ///
        /// Serializes as its variant name; settings variants carry the
        /// setting id (`{"SettingsGet": "Site_Name"}`).
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Endpoint {
            $($variant,)*
            SettingsGet(String),
            SettingsUpdate(String),
        }

        impl Endpoint {
            /// Every endpoint whose path does not depend on an argument.
            pub fn fixed() -> Vec<Endpoint> {
                vec![$(Endpoint::$variant,)*]
            }

            pub fn method(&self) -> HttpMethod {
                match self {
                    $(Endpoint::$variant => HttpMethod::$method,)*
                    Endpoint::SettingsGet(_) => HttpMethod::Get,
                    Endpoint::SettingsUpdate(_) => HttpMethod::Post,
                }
            }

            /// Path relative to the API root, e.g. `channels.list.joined`.
            pub fn path(&self) -> Cow<'static, str> {
                match self {
                    $(Endpoint::$variant => Cow::Borrowed($path),)*
                    Endpoint::SettingsGet(id) | Endpoint::SettingsUpdate(id) => {
                        Cow::Owned(format!("settings/{}", urlencoding::encode(id)))
                    }
                }
            }
        }
    };
}

endpoints! {
    Info => Get "info",
    Login => Post "login",
    Logout => Get "logout",
    Me => Get "me",

    UsersCreate => Post "users.create",
    UsersDelete => Post "users.delete",
    UsersGetPresence => Get "users.getPresence",
    UsersInfo => Get "users.info",
    UsersList => Get "users.list",
    UsersUpdate => Post "users.update",

    ChannelsAddAll => Post "channels.addAll",
    ChannelsAddModerator => Post "channels.addModerator",
    ChannelsAddOwner => Post "channels.addOwner",
    ChannelsArchive => Post "channels.archive",
    ChannelsCleanHistory => Post "channels.cleanHistory",
    ChannelsClose => Post "channels.close",
    ChannelsCreate => Post "channels.create",
    ChannelsGetIntegrations => Get "channels.getIntegrations",
    ChannelsHistory => Get "channels.history",
    ChannelsInfo => Get "channels.info",
    ChannelsInvite => Post "channels.invite",
    ChannelsKick => Post "channels.kick",
    ChannelsLeave => Post "channels.leave",
    ChannelsList => Get "channels.list",
    ChannelsListJoined => Get "channels.list.joined",
    ChannelsOpen => Post "channels.open",
    ChannelsRemoveModerator => Post "channels.removeModerator",
    ChannelsRemoveOwner => Post "channels.removeOwner",
    ChannelsRename => Post "channels.rename",
    ChannelsSetDescription => Post "channels.setDescription",
    ChannelsSetJoinCode => Post "channels.setJoinCode",
    ChannelsSetPurpose => Post "channels.setPurpose",
    ChannelsSetReadOnly => Post "channels.setReadOnly",
    ChannelsSetTopic => Post "channels.setTopic",
    ChannelsSetType => Post "channels.setType",
    ChannelsUnarchive => Post "channels.unarchive",

    GroupsAddModerator => Post "groups.addModerator",
    GroupsAddOwner => Post "groups.addOwner",
    GroupsAddLeader => Post "groups.addLeader",
    GroupsArchive => Post "groups.archive",
    GroupsCreate => Post "groups.create",
    GroupsClose => Post "groups.close",
    GroupsGetIntegrations => Get "groups.getIntegrations",
    GroupsHistory => Get "groups.history",
    GroupsInfo => Get "groups.info",
    GroupsInvite => Post "groups.invite",
    GroupsKick => Post "groups.kick",
    GroupsLeave => Post "groups.leave",
    GroupsList => Get "groups.list",
    GroupsOpen => Post "groups.open",
    GroupsRemoveModerator => Post "groups.removeModerator",
    GroupsRemoveOwner => Post "groups.removeOwner",
    GroupsRename => Post "groups.rename",
    GroupsSetDescription => Post "groups.setDescription",
    GroupsSetPurpose => Post "groups.setPurpose",
    GroupsSetReadOnly => Post "groups.setReadOnly",
    GroupsSetTopic => Post "groups.setTopic",
    GroupsSetType => Post "groups.setType",
    GroupsUnarchive => Post "groups.unarchive",

    ImClose => Post "im.close",
    ImHistory => Get "im.history",
    ImListEveryone => Get "im.list.everyone",
    ImList => Get "im.list",
    ImMessagesOthers => Get "im.messages.others",
    ImOpen => Post "im.open",
    ImSetTopic => Post "im.setTopic",

    ChatDelete => Post "chat.delete",
    ChatPostMessage => Post "chat.postMessage",
    ChatPinMessage => Post "chat.pinMessage",
    ChatUpdate => Post "chat.update",

    IntegrationsCreate => Post "integrations.create",
    IntegrationsList => Get "integrations.list",
    IntegrationsRemove => Post "integrations.remove",
}

impl Endpoint {
    /// `info` and `login` are the only operations the server answers
    /// without a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Info | Endpoint::Login)
    }
}
