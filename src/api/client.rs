//! Authenticated client for site-scoped endpoints

use crate::auth::{Credentials, Session, SessionManager};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use serde::de::DeserializeOwned;

/// REST client bound to one signed-in site
///
/// The session is fixed after sign-in, so a shared reference can serve the
/// concurrent per-workbook fetches.
#[derive(Debug, Clone)]
pub struct TableauClient {
    http: HttpClient,
    session: Session,
}

impl TableauClient {
    /// Wrap an existing session
    pub fn new(http: HttpClient, session: Session) -> Self {
        Self { http, session }
    }

    /// Sign in and bind the resulting session
    pub async fn sign_in(http: HttpClient, credentials: &Credentials) -> Result<Self> {
        let session = SessionManager::authenticate(&http, credentials).await?;
        Ok(Self::new(http, session))
    }

    /// The active session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Path below `sites/<site id>/`
    pub(crate) fn site_path(&self, suffix: &str) -> String {
        format!("sites/{}/{}", self.session.site_id, suffix)
    }

    /// Authenticated GET
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestConfig,
    ) -> Result<T> {
        self.http.get_json(path, self.session.apply(request)).await
    }
}
