//! `/auth/` handle: login, registration, tokens, profile

use serde::{Deserialize, Serialize};

use super::client::{Auth, Request};
use super::{ApiClient, ApiError};
use crate::domain::User;
use crate::forms::SignupRequest;
use crate::session::Session;

/// Result of [`AuthApi::check_status`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<User>,
}

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

/// Token responses differ between the login views
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenResponse {
    Pair {
        tokens: TokenPair,
        #[serde(default)]
        user: Option<User>,
    },
    Single {
        token: String,
        #[serde(default)]
        user: Option<User>,
    },
    Flat {
        access: String,
        #[serde(default)]
        refresh: Option<String>,
        #[serde(default)]
        user: Option<User>,
    },
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let (access, refresh, user) = match self {
            TokenResponse::Pair { tokens, user } => (tokens.access, tokens.refresh, user),
            TokenResponse::Single { token, user } => (token, None, user),
            TokenResponse::Flat {
                access,
                refresh,
                user,
            } => (access, refresh, user),
        };

        let session = Session::new(access, refresh);
        match user {
            Some(user) => session.with_user(user),
            None => session,
        }
    }
}

/// Registration may or may not log the user in
#[derive(Deserialize)]
#[serde(untagged)]
enum RegisterResponse {
    Tokens(TokenResponse),
    Other(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileResponse {
    Wrapped { user: User },
    Plain(User),
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Store the session carried by a token response
    async fn establish(&self, request: Request) -> Result<Session, ApiError> {
        let response: TokenResponse = self.client.call(request, Auth::Anonymous).await?;
        let session = response.into_session();
        self.client.auth_context().establish(session.clone())?;
        Ok(session)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = Request::post("/auth/login/").json(&Credentials {
            email: email.trim(),
            password,
        })?;
        self.establish(request).await
    }

    /// Returns the new session when the server logs the user in directly
    pub async fn register(&self, signup: &SignupRequest) -> Result<Option<Session>, ApiError> {
        let request = Request::post("/auth/register/").json(signup)?;
        match self.client.call(request, Auth::Anonymous).await? {
            RegisterResponse::Tokens(tokens) => {
                let session = tokens.into_session();
                self.client.auth_context().establish(session.clone())?;
                Ok(Some(session))
            }
            RegisterResponse::Other(_) => Ok(None),
        }
    }

    /// Blacklist the refresh token; the local session is dropped regardless
    pub async fn logout(&self) {
        let auth = self.client.auth_context();
        if let Some(refresh) = auth.refresh_token() {
            let result = match Request::post("/auth/logout/")
                .json(&serde_json::json!({ "token": refresh }))
            {
                Ok(request) => self.client.call_empty(request, Auth::Optional).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                tracing::warn!("Logout request failed: {}", e);
            }
        }
        auth.invalidate();
    }

    /// New access token from the stored refresh token
    pub async fn refresh(&self) -> Result<String, ApiError> {
        self.client.refresh_access_token().await
    }

    /// Current user; a rejected token drops the session
    pub async fn profile(&self) -> Result<User, ApiError> {
        let request = Request::get("/auth/profile/");
        match self.client.call::<ProfileResponse>(request, Auth::Required).await {
            Ok(ProfileResponse::Wrapped { user }) | Ok(ProfileResponse::Plain(user)) => {
                self.client.auth_context().update_user(user.clone())?;
                Ok(user)
            }
            Err(e @ ApiError::Unauthorized { .. }) => {
                self.client.auth_context().invalidate();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Validate the stored session against the server
    ///
    /// Only a 401/403 logs the user out. Transport failures, server errors
    /// and undecodable bodies are returned as errors with the session kept.
    pub async fn check_status(&self) -> Result<AuthStatus, ApiError> {
        if !self.client.auth_context().is_authenticated() {
            return Ok(AuthStatus {
                authenticated: false,
                user: None,
            });
        }

        match self.profile().await {
            Ok(user) => Ok(AuthStatus {
                authenticated: true,
                user: Some(user),
            }),
            Err(e) if e.requires_login() => {
                tracing::info!("Stored session rejected: {}", e);
                self.client.auth_context().invalidate();
                Ok(AuthStatus {
                    authenticated: false,
                    user: None,
                })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn google_callback(&self, id_token: &str) -> Result<Session, ApiError> {
        let request = Request::post("/auth/google/login/")
            .json(&serde_json::json!({ "id_token": id_token }))?;
        self.establish(request).await
    }

    pub async fn kakao_callback(&self, code: &str, redirect_uri: &str) -> Result<Session, ApiError> {
        let request = Request::post("/auth/kakao/callback/")
            .json(&serde_json::json!({ "code": code, "redirect_uri": redirect_uri }))?;
        self.establish(request).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let request = Request::post("/auth/forgot-password/")
            .json(&serde_json::json!({ "email": email.trim() }))?;
        self.client.call_empty(request, Auth::Anonymous).await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        let request = Request::post("/auth/reset-password/")
            .json(&serde_json::json!({ "token": token, "newPassword": new_password }))?;
        self.client.call_empty(request, Auth::Anonymous).await
    }
}
