//! HTTP-backed directory service.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::{DirectoryError, DirectoryService};
use crate::model::{User, UserId};

/// Collection path under the base URL.
const USERS: &str = "users";

/// A [`DirectoryService`] reached over HTTP.
///
/// - `GET {base}/users` lists every record
/// - `PUT {base}/users/{id}` sends the full record
/// - `DELETE {base}/users/{id}` removes one
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    http: Client,
    base_url: Url,
}

impl HttpDirectory {
    pub fn new(base_url: &str) -> Result<Self, DirectoryError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a caller-provided `reqwest::Client` (shared pools, custom TLS, ...).
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, DirectoryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| DirectoryError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DirectoryError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.endpoint(&[USERS])?;
        debug!(%url, "Listing users");
        let users = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<User>>()
            .await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self, user), fields(id = %user.id))]
    async fn update_user(&self, user: &User) -> Result<(), DirectoryError> {
        let id = user.id.to_string();
        let url = self.endpoint(&[USERS, &id])?;
        debug!(%url, "Updating user");
        // The echoed body is not needed: the request body is what the store keeps.
        self.http
            .put(url)
            .json(user)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<(), DirectoryError> {
        let id = id.to_string();
        let url = self.endpoint(&[USERS, &id])?;
        debug!(%url, "Deleting user");
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
