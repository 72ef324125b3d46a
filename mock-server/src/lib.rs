//! In-memory stand-in for a Rocket.Chat server's `/api/v1/` surface.
//!
//! Implements login/logout/me, a handful of channel and chat operations with
//! real state, and echoes every other `/api/v1/*` call back so clients can
//! check exactly what they sent.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// Accounts every fresh server knows about: `(username, password)`.
pub const SEED_USERS: &[(&str, &str)] = &[("admin", "admin-pass"), ("bob", "hunter2")];

const NOT_LOGGED_IN: &str = "You must be logged in to do this.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(skip)]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// `c` for channels.
    pub t: String,
    pub usernames: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub rid: String,
    pub msg: String,
    pub u: Author,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateChannel {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessage {
    pub room_id: Option<String>,
    pub channel: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Default, Debug)]
pub struct Store {
    pub users: HashMap<String, User>,
    /// auth token -> user id
    pub tokens: HashMap<String, String>,
    pub rooms: Vec<Room>,
    pub messages: Vec<Message>,
}

pub type Db = Arc<RwLock<Store>>;

type Failure = (StatusCode, Json<Value>);
type Reply = Result<Json<Value>, Failure>;

pub fn app() -> Router {
    let mut store = Store::default();
    for (username, password) in SEED_USERS {
        let user = User {
            id: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        store.users.insert(user.id.clone(), user);
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/v1/info", get(info))
        .route("/api/v1/login", post(login))
        .route("/api/v1/logout", get(logout))
        .route("/api/v1/me", get(me))
        .route("/api/v1/users.getPresence", get(get_presence))
        .route("/api/v1/channels.create", post(create_channel))
        .route("/api/v1/channels.info", get(channel_info))
        .route("/api/v1/channels.list", get(list_channels))
        .route("/api/v1/channels.history", get(channel_history))
        .route("/api/v1/chat.postMessage", post(post_message))
        .fallback(echo)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, error: &str) -> Failure {
    (status, Json(json!({ "success": false, "error": error })))
}

fn unauthorized() -> Failure {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "status": "error", "message": NOT_LOGGED_IN })),
    )
}

/// Resolve `X-User-Id` / `X-Auth-Token` to a user.
fn authenticate(store: &Store, headers: &HeaderMap) -> Result<User, Failure> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    let (Some(user_id), Some(token)) = (header("x-user-id"), header("x-auth-token")) else {
        return Err(unauthorized());
    };
    match store.tokens.get(token) {
        Some(owner) if owner == user_id => store.users.get(user_id).cloned().ok_or_else(unauthorized),
        _ => Err(unauthorized()),
    }
}

async fn info() -> Json<Value> {
    Json(json!({ "success": true, "info": { "version": "0.0.0-mock" } }))
}

async fn login(State(db): State<Db>, Json(input): Json<Login>) -> Reply {
    let mut store = db.write().await;
    let user = store
        .users
        .values()
        .find(|u| u.username == input.username && u.password == input.password)
        .cloned();
    let Some(user) = user else {
        info!(username = %input.username, "login rejected");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "error", "error": "Unauthorized", "message": "Unauthorized" })),
        ));
    };
    let token = Uuid::new_v4().simple().to_string();
    store.tokens.insert(token.clone(), user.id.clone());
    info!(username = %user.username, "login succeeded");
    Ok(Json(json!({
        "status": "success",
        "data": { "userId": user.id, "authToken": token, "me": user },
    })))
}

async fn logout(State(db): State<Db>, headers: HeaderMap) -> Reply {
    let mut store = db.write().await;
    authenticate(&store, &headers)?;
    if let Some(token) = headers.get("x-auth-token").and_then(|v| v.to_str().ok()) {
        store.tokens.remove(token);
    }
    Ok(Json(json!({
        "status": "success",
        "data": { "message": "You've been logged out!" },
    })))
}

async fn me(State(db): State<Db>, headers: HeaderMap) -> Reply {
    let store = db.read().await;
    let user = authenticate(&store, &headers)?;
    Ok(Json(json!({ "_id": user.id, "username": user.username, "success": true })))
}

async fn get_presence(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let store = db.read().await;
    let caller = authenticate(&store, &headers)?;
    let user_id = params.get("userId").cloned().unwrap_or(caller.id);
    if !store.users.contains_key(&user_id) {
        return Err(failure(StatusCode::BAD_REQUEST, "User not found"));
    }
    Ok(Json(json!({ "success": true, "presence": "online", "userId": user_id })))
}

async fn create_channel(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateChannel>,
) -> Reply {
    let mut store = db.write().await;
    let caller = authenticate(&store, &headers)?;
    if store.rooms.iter().any(|r| r.name == input.name) {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            &format!("A channel with name '{}' exists", input.name),
        ));
    }
    let mut usernames = vec![caller.username];
    usernames.extend(input.members);
    let room = Room {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        t: "c".to_string(),
        usernames,
    };
    store.rooms.push(room.clone());
    Ok(Json(json!({ "success": true, "channel": room })))
}

async fn channel_info(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let store = db.read().await;
    authenticate(&store, &headers)?;
    let room = params
        .get("roomId")
        .and_then(|id| store.rooms.iter().find(|r| &r.id == id))
        .or_else(|| {
            params
                .get("roomName")
                .and_then(|name| store.rooms.iter().find(|r| &r.name == name))
        });
    match room {
        Some(room) => Ok(Json(json!({ "success": true, "channel": room }))),
        None => Err(failure(
            StatusCode::BAD_REQUEST,
            "The required \"roomId\" or \"roomName\" param provided does not match any channel",
        )),
    }
}

async fn list_channels(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let store = db.read().await;
    authenticate(&store, &headers)?;
    let offset = param_usize(&params, "offset", 0);
    let count = param_usize(&params, "count", 50);
    let page: Vec<&Room> = store.rooms.iter().skip(offset).take(count).collect();
    Ok(Json(json!({
        "success": true,
        "channels": page,
        "offset": offset,
        "count": page.len(),
        "total": store.rooms.len(),
    })))
}

async fn channel_history(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let store = db.read().await;
    authenticate(&store, &headers)?;
    let Some(room_id) = params.get("roomId") else {
        return Err(failure(StatusCode::BAD_REQUEST, "The parameter \"roomId\" is required"));
    };
    let count = param_usize(&params, "count", 20);
    let messages: Vec<&Message> = store
        .messages
        .iter()
        .rev()
        .filter(|m| &m.rid == room_id)
        .take(count)
        .collect();
    Ok(Json(json!({ "success": true, "messages": messages })))
}

async fn post_message(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<PostMessage>,
) -> Reply {
    let mut store = db.write().await;
    let caller = authenticate(&store, &headers)?;
    let room = match (&input.room_id, &input.channel) {
        (Some(id), _) => store.rooms.iter().find(|r| &r.id == id),
        (None, Some(channel)) => {
            let name = channel.trim_start_matches('#');
            store.rooms.iter().find(|r| r.name == name)
        }
        (None, None) => None,
    };
    let Some(room) = room.cloned() else {
        return Err(failure(StatusCode::BAD_REQUEST, "error-invalid-channel"));
    };
    let message = Message {
        id: Uuid::new_v4().simple().to_string(),
        rid: room.id.clone(),
        msg: input.text,
        u: Author {
            id: caller.id,
            username: caller.username,
        },
    };
    store.messages.push(message.clone());
    Ok(Json(json!({ "success": true, "channel": room.name, "message": message })))
}

/// Any other `/api/v1/*` call: authenticate, then describe the request back.
async fn echo(
    State(db): State<Db>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let Some(endpoint) = uri.path().strip_prefix("/api/v1/") else {
        return Err(failure(StatusCode::NOT_FOUND, "not found"));
    };
    let store = db.read().await;
    authenticate(&store, &headers)?;
    let body: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| failure(StatusCode::BAD_REQUEST, &e.to_string()))?
    };
    debug!(%method, endpoint, "echo");
    Ok(Json(json!({
        "success": true,
        "endpoint": endpoint,
        "method": method.as_str(),
        "query": uri.query().unwrap_or(""),
        "body": body,
    })))
}

fn param_usize(params: &HashMap<String, String>, key: &str, default: usize) -> usize {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
