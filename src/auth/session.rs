//! Session manager
//!
//! Exchanges credentials for an auth token and site identifier.

use super::types::{Credentials, Session, SignInResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use tracing::{debug, info};

/// Path of the sign-in endpoint, relative to the API base
pub const SIGN_IN_PATH: &str = "auth/signin";

/// Signs in against the REST API
pub struct SessionManager;

impl SessionManager {
    /// Sign in and return the session for this run
    ///
    /// Transport failures, rejected credentials, undecodable bodies and
    /// empty tokens are all reported as [`Error::Auth`]. Nothing is retried.
    pub async fn authenticate(client: &HttpClient, credentials: &Credentials) -> Result<Session> {
        debug!(
            "Signing in as '{}' to site '{}'",
            credentials.username, credentials.site_content_url
        );

        let request = RequestConfig::new().json(credentials.sign_in_payload());
        let response: SignInResponse = client
            .post_json(SIGN_IN_PATH, request)
            .await
            .map_err(|e| Error::auth(format!("sign-in request failed: {e}")))?;

        if response.credentials.token.is_empty() {
            return Err(Error::auth("sign-in response carried an empty token"));
        }

        let session = Session::from(response);
        info!("Signed in to site {}", session.site_id);
        Ok(session)
    }
}
