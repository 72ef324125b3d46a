//! `settings/<id>`

use serde::Serialize;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::query::Query;
use crate::transport::Transport;

impl<T: Transport> RocketChatClient<T> {
    pub fn settings_get(&self, id: &str) -> Result<HttpResponse> {
        self.fetch(Endpoint::SettingsGet(id.to_string()), &Query::new())
    }

    /// POST `data` to `settings/<id>`; the server expects `{"value": ..}`.
    pub fn settings_update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::SettingsUpdate(id.to_string()), data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::testing::{body_of, client};

    #[test]
    fn get_puts_id_in_path() {
        let c = client();
        c.settings_get("Livechat_enabled").unwrap();
        let req = c.transport().last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://chat.test/api/v1/settings/Livechat_enabled");
    }

    #[test]
    fn update_posts_value() {
        let c = client();
        c.settings_update("Livechat_enabled", &json!({"value": true}))
            .unwrap();
        let req = c.transport().last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://chat.test/api/v1/settings/Livechat_enabled");
        assert_eq!(body_of(&req), json!({"value": true}));
    }
}
