//! # Users API Client
//!
//! Maps the four remote operations onto HTTP requests against a base URL:
//!
//! ```text
//! GET    {base}/users            -> [User]
//! POST   {base}/users            -> created user (echo)
//! DELETE {base}/users/{user_id}  -> confirmation
//! GET    {base}/logs             -> [LogEntry]
//! ```
//!
//! Non-2xx responses and transport failures both surface as `RequestError`.

use crate::hub::models::{LogEntry, User};
use crate::hub::services::request_error::RequestError;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Remote operations the hub relies on
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RequestError>;

    /// Create a user. Callers are expected to have checked `user_id`.
    async fn create_user(&self, user: &User) -> Result<Value, RequestError>;

    async fn delete_user(&self, user_id: &str) -> Result<Value, RequestError>;

    async fn list_logs(&self) -> Result<Vec<LogEntry>, RequestError>;
}

/// `UsersApi` over HTTP using reqwest
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: Url,
}

impl HttpUsersApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("Base URL '{base_url}' cannot carry a path");
        }
        tracing::debug!("Users API configured with base URL {base_url}");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::unexpected())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RequestError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} responded with {}", response.url(), status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(RequestError::from_http_response(response).await)
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to decode response body: {e}");
            RequestError::unexpected()
        })
    }

    /// Decode a confirmation body, which may be empty or plain text
    async fn read_echo(response: Response) -> Result<Value, RequestError> {
        let body = response.bytes().await?;
        Ok(decode_echo(&body))
    }
}

fn decode_echo(body: &Bytes) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, RequestError> {
        let url = self.endpoint(&["users"])?;
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn create_user(&self, user: &User) -> Result<Value, RequestError> {
        let url = self.endpoint(&["users"])?;
        tracing::debug!("POST {url} user_id={}", user.user_id);
        let response = self.send(self.client.post(url).json(user)).await?;
        Self::read_echo(response).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<Value, RequestError> {
        let url = self.endpoint(&["users", user_id])?;
        tracing::debug!("DELETE {url}");
        let response = self.send(self.client.delete(url)).await?;
        Self::read_echo(response).await
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, RequestError> {
        let url = self.endpoint(&["logs"])?;
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::services::request_error::UNEXPECTED_ERROR_MESSAGE;
    use axum::{
        extract::{Path, State},
        http::{header, StatusCode},
        response::IntoResponse,
        routing::{delete, get},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tokio::{net::TcpListener, sync::Mutex};

    #[derive(Clone, Default)]
    struct ServerState {
        users: Arc<Mutex<Vec<User>>>,
        content_types: Arc<Mutex<Vec<String>>>,
    }

    async fn list_users(State(state): State<ServerState>) -> Json<Vec<User>> {
        Json(state.users.lock().await.clone())
    }

    async fn create_user(
        State(state): State<ServerState>,
        headers: axum::http::HeaderMap,
        Json(user): Json<User>,
    ) -> impl IntoResponse {
        if let Some(value) = headers.get(header::CONTENT_TYPE) {
            let value = value.to_str().unwrap_or_default().to_string();
            state.content_types.lock().await.push(value);
        }
        let mut users = state.users.lock().await;
        if users.iter().any(|u| u.user_id == user.user_id) {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "message": format!("User {} already exists", user.user_id) })),
            );
        }
        users.push(user.clone());
        (StatusCode::CREATED, Json(json!(user)))
    }

    async fn delete_user(
        State(state): State<ServerState>,
        Path(user_id): Path<String>,
    ) -> impl IntoResponse {
        let mut users = state.users.lock().await;
        let before = users.len();
        users.retain(|u| u.user_id != user_id);
        if users.len() == before {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("User {user_id} not found") })),
            )
        } else {
            (StatusCode::OK, Json(json!({ "deleted": user_id })))
        }
    }

    async fn failing_logs() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain")],
            r#"{"message":"logs table unavailable"}"#,
        )
    }

    async fn spawn_server(router: Router) -> String {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}/prod")
    }

    async fn spawn_users_server(state: ServerState) -> String {
        let router = Router::new()
            .route("/prod/users", get(list_users).post(create_user))
            .route("/prod/users/:user_id", delete(delete_user))
            .route("/prod/logs", get(failing_logs))
            .with_state(state);
        spawn_server(router).await
    }

    #[test]
    fn new_should_reject_invalid_base_urls() {
        assert!(HttpUsersApi::new("not a url").is_err());
        assert!(HttpUsersApi::new("mailto:someone@example.com").is_err());
        assert!(HttpUsersApi::new("https://example.com/prod").is_ok());
    }

    #[test]
    fn endpoint_should_tolerate_trailing_slash_and_encode_ids() {
        let api = HttpUsersApi::new("https://example.com/prod/").unwrap();
        assert_eq!(api.base_url().as_str(), "https://example.com/prod/");
        assert_eq!(
            api.endpoint(&["users"]).unwrap().as_str(),
            "https://example.com/prod/users"
        );
        assert_eq!(
            api.endpoint(&["users", "a b/c"]).unwrap().as_str(),
            "https://example.com/prod/users/a%20b%2Fc"
        );
    }

    #[test]
    fn decode_echo_should_handle_empty_and_text_bodies() {
        assert_eq!(decode_echo(&Bytes::new()), Value::Null);
        assert_eq!(decode_echo(&Bytes::from_static(b"ok")), json!("ok"));
        assert_eq!(
            decode_echo(&Bytes::from_static(br#"{"id":1}"#)),
            json!({ "id": 1 })
        );
    }

    #[tokio::test]
    async fn client_should_create_list_and_delete_users() {
        let state = ServerState::default();
        let base_url = spawn_users_server(state.clone()).await;
        let api = HttpUsersApi::new(&base_url).unwrap();

        assert!(api.list_users().await.unwrap().is_empty());

        let created = api
            .create_user(&User::new("u1").with_name("Ada"))
            .await
            .unwrap();
        assert_eq!(created["user_id"], "u1");
        assert_eq!(
            state.content_types.lock().await.as_slice(),
            ["application/json".to_string()]
        );

        let users = api.list_users().await.unwrap();
        assert_eq!(users, vec![User::new("u1").with_name("Ada")]);

        let confirmation = api.delete_user("u1").await.unwrap();
        assert_eq!(confirmation, json!({ "deleted": "u1" }));
        assert!(api.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn client_should_surface_structured_error_messages() {
        let base_url = spawn_users_server(ServerState::default()).await;
        let api = HttpUsersApi::new(&base_url).unwrap();

        let err = api.delete_user("ghost").await.unwrap_err();
        assert_eq!(err.message(), "User ghost not found");

        api.create_user(&User::new("dup")).await.unwrap();
        let err = api.create_user(&User::new("dup")).await.unwrap_err();
        assert_eq!(err.message(), "User dup already exists");
    }

    #[tokio::test]
    async fn client_should_parse_messages_out_of_text_bodies() {
        let base_url = spawn_users_server(ServerState::default()).await;
        let api = HttpUsersApi::new(&base_url).unwrap();

        let err = api.list_logs().await.unwrap_err();
        assert_eq!(err.message(), "logs table unavailable");
    }

    #[tokio::test]
    async fn client_should_fall_back_to_status_for_empty_error_bodies() {
        let router = Router::new().route(
            "/prod/logs",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let api = HttpUsersApi::new(&spawn_server(router).await).unwrap();

        let err = api.list_logs().await.unwrap_err();
        assert_eq!(err.message(), "Request failed with status 503");
    }

    #[tokio::test]
    async fn client_should_read_logs_in_service_order() {
        let router = Router::new().route(
            "/prod/logs",
            get(|| async {
                Json(json!([
                    { "timestamp": "2025-01-01T00:00:00Z", "message": "first" },
                    { "timestamp": "2025-01-01T00:00:01Z", "message": "second" }
                ]))
            }),
        );
        let api = HttpUsersApi::new(&spawn_server(router).await).unwrap();

        let logs = api.list_logs().await.unwrap();
        assert_eq!(
            logs,
            vec![
                LogEntry::new("2025-01-01T00:00:00Z", "first"),
                LogEntry::new("2025-01-01T00:00:01Z", "second"),
            ]
        );
    }

    #[tokio::test]
    async fn client_should_report_undecodable_success_bodies_as_unexpected() {
        let router = Router::new().route("/prod/users", get(|| async { "definitely not json" }));
        let api = HttpUsersApi::new(&spawn_server(router).await).unwrap();

        let err = api.list_users().await.unwrap_err();
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn client_should_report_network_failures_as_unexpected() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpUsersApi::new(&format!("http://{addr}/prod")).unwrap();
        let err = api.list_users().await.unwrap_err();
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
