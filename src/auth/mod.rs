//! Authentication — credentials, session state, token exchange, OAuth helpers.
//!
//! ## Session Model
//!
//! - The client holds exactly one [`SessionState`], shared by every clone of
//!   the client. It owns the current [`Credentials`].
//! - Every request carries `Authorization: token {api_key}:{access_token}`.
//!   Without a token the header still goes out with an empty token segment;
//!   the backend rejects it, the SDK does not.
//! - Two ways to become authenticated:
//!   1. `client.auth().exchange_token(key, secret)` posts to `/session/token`.
//!   2. The OAuth-style redirect: send the user to [`login_url`], read the
//!      `request_token` off the redirect with [`request_token_from_redirect`],
//!      exchange it on a trusted backend, then hand the resulting access token
//!      to `client.auth().set_credentials(Credentials::with_access_token(..))`.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::network::{DEFAULT_API_VERSION, DEFAULT_LOGIN_URL};

// ============================================================================
// Credentials
// ============================================================================

/// The credential set for one session.
///
/// `Debug` redacts the secret and the token.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub api_key: String,
    /// Empty when the token came from the OAuth redirect flow.
    pub api_secret: String,
    pub access_token: Option<String>,
}

impl Credentials {
    /// Key/secret pair awaiting a token exchange.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token: None,
        }
    }

    /// Key plus an access token obtained elsewhere (OAuth code exchange).
    pub fn with_access_token(api_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: String::new(),
            access_token: Some(access_token.into()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.access_token
            .as_deref()
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &redacted(&self.api_secret))
            .field(
                "access_token",
                &self.access_token.as_deref().map(redacted),
            )
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "***"
    }
}

// ============================================================================
// Session state
// ============================================================================

/// In-memory holder of the active credential set.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    credentials: Option<Credentials>,
}

impl SessionState {
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self { credentials }
    }

    /// Replace the held credentials unconditionally.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Store a freshly exchanged token, keeping key and secret.
    pub(crate) fn set_access_token(&mut self, api_key: &str, api_secret: &str, token: String) {
        self.credentials = Some(Credentials {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            access_token: Some(token),
        });
    }

    pub fn clear(&mut self) {
        self.credentials = None;
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials
            .as_ref()
            .map(Credentials::has_token)
            .unwrap_or(false)
    }

    /// `token {api_key}:{access_token}`, with empty segments for missing parts.
    pub fn auth_header(&self) -> String {
        let (key, token) = match &self.credentials {
            Some(c) => (c.api_key.as_str(), c.access_token.as_deref().unwrap_or("")),
            None => ("", ""),
        };
        format!("token {}:{}", key, token)
    }
}

// ============================================================================
// OAuth redirect helpers
// ============================================================================

/// Build the browser login URL for the OAuth-style redirect flow.
pub fn login_url(api_key: &str, redirect_uri: &str) -> String {
    format!(
        "{}?v={}&api_key={}&redirect_uri={}",
        DEFAULT_LOGIN_URL,
        DEFAULT_API_VERSION,
        urlencoding::encode(api_key),
        urlencoding::encode(redirect_uri)
    )
}

/// Extract the one-time `request_token` from a login redirect URL.
///
/// Returns `None` when the parameter is absent or empty.
pub fn request_token_from_redirect(redirect_url: &str) -> Option<String> {
    let query = redirect_url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "request_token")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

// ============================================================================
// Wire types
// ============================================================================

/// Form body for `POST /session/token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub api_key: &'a str,
    pub api_secret: &'a str,
}

/// Token payload, either bare or wrapped in the usual `data` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenResponse {
    Enveloped { data: SessionToken },
    Bare(SessionToken),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    #[serde(default)]
    pub public_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl TokenResponse {
    pub fn into_token(self) -> SessionToken {
        match self {
            Self::Enveloped { data } => data,
            Self::Bare(token) => token,
        }
    }
}
