//! Social login authorize URLs
//!
//! The provider redirects back to the site with a code (Kakao) or an
//! id token (Google), which is then exchanged through
//! [`AuthApi::kakao_callback`](super::AuthApi::kakao_callback) or
//! [`AuthApi::google_callback`](super::AuthApi::google_callback).

use crate::config::OAuthConfig;

const KAKAO_AUTHORIZE: &str = "https://kauth.kakao.com/oauth/authorize";
const GOOGLE_AUTHORIZE: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Social login provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Kakao,
    Google,
}

impl OAuthProvider {
    pub fn name(&self) -> &'static str {
        match self {
            OAuthProvider::Kakao => "kakao",
            OAuthProvider::Google => "google",
        }
    }

    /// Callback route on the site for this provider
    pub fn redirect_uri(&self, redirect_base: &str) -> String {
        format!(
            "{}/auth/{}/callback",
            redirect_base.trim_end_matches('/'),
            self.name()
        )
    }
}

impl std::str::FromStr for OAuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kakao" => Ok(OAuthProvider::Kakao),
            "google" => Ok(OAuthProvider::Google),
            other => Err(format!("unknown provider: {} (kakao, google)", other)),
        }
    }
}

/// Kakao authorization-code URL
pub fn kakao_authorize_url(client_id: &str, redirect_uri: &str) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
        KAKAO_AUTHORIZE,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("profile_nickname,account_email"),
    )
}

/// Google implicit id-token URL
pub fn google_authorize_url(client_id: &str, redirect_uri: &str, nonce: &str) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=id_token&scope={}&nonce={}",
        GOOGLE_AUTHORIZE,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("openid email profile"),
        urlencoding::encode(nonce),
    )
}

/// Authorize URL for `provider`, or `None` when its client id is not configured
pub fn authorize_url(config: &OAuthConfig, provider: OAuthProvider, nonce: &str) -> Option<String> {
    let redirect_uri = provider.redirect_uri(&config.redirect_base);
    match provider {
        OAuthProvider::Kakao => config
            .kakao_client_id
            .as_deref()
            .map(|id| kakao_authorize_url(id, &redirect_uri)),
        OAuthProvider::Google => config
            .google_client_id
            .as_deref()
            .map(|id| google_authorize_url(id, &redirect_uri, nonce)),
    }
}
