//! Server info and session endpoints. `login` lives on the client itself
//! because it changes the session.

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::query::Query;
use crate::transport::Transport;

impl<T: Transport> RocketChatClient<T> {
    /// Server information including version. Needs no session.
    pub fn info(&self) -> Result<HttpResponse> {
        self.fetch(Endpoint::Info, &Query::new())
    }

    /// Invalidate the token on the server.
    ///
    /// The local session is kept; call `set_session(None)` to forget it too.
    pub fn logout(&self) -> Result<HttpResponse> {
        self.fetch(Endpoint::Logout, &Query::new())
    }

    /// The authenticated user's own profile.
    pub fn me(&self) -> Result<HttpResponse> {
        self.fetch(Endpoint::Me, &Query::new())
    }
}
