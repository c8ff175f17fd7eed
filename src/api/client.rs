//! HTTP plumbing shared by every resource handle

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::ApiError;
use crate::config::ApiConfig;
use crate::session::AuthContext;

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// REST root, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// How a call uses the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Never send a token (login, register, token refresh)
    Anonymous,
    /// Send the token when logged in
    Optional,
    /// Fail locally with [`ApiError::AuthRequired`] when logged out
    Required,
}

/// A request that can be replayed after a token refresh
#[derive(Debug, Clone)]
pub(crate) struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl Request {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub(crate) fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// REST client for the site backend
///
/// Every call goes through [`ApiClient::execute`], which attaches the
/// bearer token from the shared [`AuthContext`], tags the request with an
/// `X-Request-Id`, and on a 401 refreshes the access token once before
/// replaying the request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth: AuthContext,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, auth: AuthContext) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_context(&self) -> &AuthContext {
        &self.auth
    }

    /// Send and decode a JSON response
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: Request,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let text = self.execute(&request, auth).await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(path = %request.path, "Undecodable response: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Send and decode what the body offers; any 2xx counts as success
    pub(crate) async fn call_lenient<T: DeserializeOwned + Default>(
        &self,
        request: Request,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let text = self.execute(&request, auth).await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!(path = %request.path, "Ignoring unexpected success body: {}", e);
            T::default()
        }))
    }

    /// Send and discard the response body
    pub(crate) async fn call_empty(&self, request: Request, auth: Auth) -> Result<(), ApiError> {
        self.execute(&request, auth).await.map(|_| ())
    }

    async fn execute(&self, request: &Request, auth: Auth) -> Result<String, ApiError> {
        let token = match auth {
            Auth::Anonymous => None,
            Auth::Optional => self.auth.access_token(),
            Auth::Required => Some(self.auth.access_token().ok_or(ApiError::AuthRequired)?),
        };

        let (status, text) = self.dispatch(request, token.as_deref()).await?;

        let (status, text) = if status == StatusCode::UNAUTHORIZED && token.is_some() {
            match self.refresh_access_token().await {
                Ok(fresh) => self.dispatch(request, Some(&fresh)).await?,
                Err(e) => {
                    tracing::warn!("Token refresh failed: {}", e);
                    self.auth.invalidate();
                    return Err(ApiError::from_status(401, &text));
                }
            }
        } else {
            (status, text)
        };

        if status.is_success() {
            Ok(text)
        } else {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "Request failed"
            );
            Err(ApiError::from_status(status.as_u16(), &text))
        }
    }

    async fn dispatch(
        &self,
        request: &Request,
        token: Option<&str>,
    ) -> Result<(StatusCode, String), ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let request_id = Uuid::new_v4().to_string();

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            request_id = %request_id,
            "Sending request"
        );

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header("Content-Type", "application/json")
            .header("X-Request-Id", &request_id);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %request.path, request_id = %request_id, "Transport error: {}", e);
            ApiError::from_transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from_transport)?;
        Ok((status, text))
    }

    /// Exchange the refresh token for a new access token
    pub(crate) async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self.auth.refresh_token().ok_or(ApiError::AuthRequired)?;

        let request = Request::post("/auth/token/refresh/")
            .json(&serde_json::json!({ "refresh": refresh }))?;
        let (status, text) = self.dispatch(&request, None).await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        let body: RefreshResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.auth.update_access_token(body.access.clone())?;
        tracing::debug!("Access token refreshed");
        Ok(body.access)
    }
}
