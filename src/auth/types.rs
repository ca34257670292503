//! Session and credential types

use crate::config::Config;
use crate::http::RequestConfig;
use crate::types::AUTH_HEADER;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Sign-in credentials, consumed once per run
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Sign-in user
    pub username: String,
    /// Sign-in password
    pub password: SecretString,
    /// Content URL of the site to sign in to
    pub site_content_url: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        site_content_url: impl Into<String>,
    ) -> Self {
        let password: String = password.into();
        Self {
            username: username.into(),
            password: SecretString::from(password),
            site_content_url: site_content_url.into(),
        }
    }

    /// Extract the credentials from a validated config
    pub fn from_config(config: &Config) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            site_content_url: config.site_name.clone(),
        }
    }

    /// Sign-in request body
    pub(crate) fn sign_in_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "credentials": {
                "name": self.username,
                "password": self.password.expose_secret(),
                "site": {
                    "contentUrl": self.site_content_url,
                },
            }
        })
    }
}

/// Authenticated session, read-only for the rest of the run
///
/// There is no expiry tracking: once the token lapses every request fails
/// with an ordinary HTTP error.
#[derive(Debug, Clone)]
pub struct Session {
    token: SecretString,
    /// Identifier of the signed-in site, used in every data path
    pub site_id: String,
    /// Content URL echoed back by the server
    pub site_content_url: String,
    /// Identifier of the signed-in user
    pub user_id: String,
}

impl Session {
    /// Create a session from its parts
    pub fn new(token: impl Into<String>, site_id: impl Into<String>) -> Self {
        let token: String = token.into();
        Self {
            token: SecretString::from(token),
            site_id: site_id.into(),
            site_content_url: String::new(),
            user_id: String::new(),
        }
    }

    /// The auth token
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Stamp the auth header onto a request
    pub fn apply(&self, config: RequestConfig) -> RequestConfig {
        config.header(AUTH_HEADER, self.token())
    }
}

/// Body returned by the sign-in endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct SignInResponse {
    pub credentials: SignInCredentials,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInCredentials {
    pub site: SignInSite,
    #[serde(default)]
    pub user: SignInUser,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInSite {
    pub id: String,
    #[serde(default)]
    pub content_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SignInUser {
    #[serde(default)]
    pub id: String,
}

impl From<SignInResponse> for Session {
    fn from(response: SignInResponse) -> Self {
        let credentials = response.credentials;
        Self {
            token: SecretString::from(credentials.token),
            site_id: credentials.site.id,
            site_content_url: credentials.site.content_url,
            user_id: credentials.user.id,
        }
    }
}
