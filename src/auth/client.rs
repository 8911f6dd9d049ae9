//! Auth sub-client — token exchange, credential hand-off, logout.

use crate::auth::{Credentials, TokenRequest, TokenResponse};
use crate::client::BrokerClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a BrokerClient,
}

impl<'a> Auth<'a> {
    /// Replace the session's credentials. No network call.
    ///
    /// This is also how a token obtained through the OAuth redirect flow is
    /// installed: `Credentials::with_access_token(api_key, token)`.
    pub async fn set_credentials(&self, credentials: Credentials) {
        tracing::info!(
            api_key = %credentials.api_key,
            has_token = credentials.has_token(),
            "Session credentials set"
        );
        self.client
            .http
            .session()
            .write()
            .await
            .set_credentials(credentials);
    }

    /// Exchange an API key/secret pair for an access token.
    ///
    /// On success the session holds `{api_key, api_secret, token}` and the
    /// token is returned. On failure the session is left without a token.
    pub async fn exchange_token(&self, api_key: &str, api_secret: &str) -> Result<String, SdkError> {
        if api_key.trim().is_empty() || api_secret.trim().is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        // Drop any previous token so a failed exchange cannot leave a stale session.
        self.client
            .http
            .session()
            .write()
            .await
            .set_credentials(Credentials::new(api_key, api_secret));

        let form = TokenRequest {
            api_key,
            api_secret,
        };
        let body = self
            .client
            .http
            .post_form_raw("/session/token", &form)
            .await
            .map_err(AuthError::ExchangeFailed)?;

        let token = serde_json::from_str::<TokenResponse>(&body)
            .map_err(|e| AuthError::ExchangeFailed(HttpError::Decode(e.to_string())))?
            .into_token()
            .access_token;
        if token.is_empty() {
            return Err(AuthError::EmptyToken.into());
        }

        self.client
            .http
            .session()
            .write()
            .await
            .set_access_token(api_key, api_secret, token.clone());
        tracing::info!(api_key = %api_key, "Token exchange succeeded");

        Ok(token)
    }

    /// Forget the current credentials.
    pub async fn logout(&self) {
        self.client.http.session().write().await.clear();
        tracing::info!("Session cleared");
    }

    /// Current credentials, if any.
    pub async fn credentials(&self) -> Option<Credentials> {
        self.client.http.session().read().await.credentials().cloned()
    }

    /// Whether a non-empty access token is held. Not validated server-side.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.session().read().await.is_authenticated()
    }

    /// The `Authorization` header value the next request will carry.
    pub async fn auth_header(&self) -> String {
        self.client.http.session().read().await.auth_header()
    }
}
