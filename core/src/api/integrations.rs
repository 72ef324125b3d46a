//! `integrations.*`: webhooks. All calls need `manage-integrations`.

use serde::Serialize;
use serde_json::json;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::query::ListOptions;
use crate::transport::Transport;
use crate::types::IntegrationType;

impl<T: Transport> RocketChatClient<T> {
    /// `integration` is usually a [`NewIntegration`](crate::types::NewIntegration).
    pub fn integrations_create<B: Serialize + ?Sized>(&self, integration: &B) -> Result<HttpResponse> {
        self.submit(Endpoint::IntegrationsCreate, integration)
    }

    pub fn integrations_list(&self, opts: &ListOptions) -> Result<HttpResponse> {
        self.list(Endpoint::IntegrationsList, opts)
    }

    pub fn integrations_remove(
        &self,
        kind: IntegrationType,
        integration_id: &str,
    ) -> Result<HttpResponse> {
        self.submit(
            Endpoint::IntegrationsRemove,
            &json!({ "type": kind, "integrationId": integration_id }),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::ListOptions;
    use crate::testing::{body_of, client};
    use crate::types::{IntegrationType, NewIntegration};

    #[test]
    fn remove_sends_type_and_id() {
        let c = client();
        c.integrations_remove(IntegrationType::WebhookOutgoing, "I1")
            .unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/integrations.remove");
        assert_eq!(
            body_of(&req),
            json!({"type": "webhook-outgoing", "integrationId": "I1"})
        );
    }

    #[test]
    fn list_with_query_document() {
        let c = client();
        let opts = ListOptions {
            query: Some(json!({"enabled": true})),
            ..ListOptions::default()
        };
        c.integrations_list(&opts).unwrap();
        assert_eq!(
            c.transport().last().url,
            "http://chat.test/api/v1/integrations.list?query=%7B%22enabled%22%3Atrue%7D"
        );
    }

    #[test]
    fn create_posts_integration() {
        let c = client();
        let integration = NewIntegration {
            kind: IntegrationType::WebhookOutgoing,
            name: "deploys".into(),
            enabled: true,
            username: "rocket.cat".into(),
            channel: "#ops".into(),
            script_enabled: false,
            event: Some("sendMessage".into()),
            urls: vec!["https://ci.example.com/hook".into()],
            script: None,
        };
        c.integrations_create(&integration).unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "http://chat.test/api/v1/integrations.create");
        let body = body_of(&req);
        assert_eq!(body["type"], "webhook-outgoing");
        assert_eq!(body["event"], "sendMessage");
        assert_eq!(body["urls"], json!(["https://ci.example.com/hook"]));
    }
}
