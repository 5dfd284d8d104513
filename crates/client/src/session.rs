//! The auth-session lifecycle on top of the API client and token store.
//!
//! Two externally visible states: unauthenticated and authenticated.
//! [`AuthSession::hydrate`] replays the persisted session at startup (the
//! "loading" phase a UI shows a spinner for); `login`/`refresh`/`logout`
//! move between the states and keep the store in sync.

use serde::Deserialize;
use serde_json::json;

use crate::error::ClientError;
use crate::http::{ApiClient, Auth};
use crate::store::{StoredAuth, StoredUser};

/// Wire shape of the server's login/refresh response.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    refresh_token: String,
    user: StoredUser,
}

/// Holds the user/token pair in memory, mirroring the token store.
pub struct AuthSession {
    client: ApiClient,
    current: Option<StoredAuth>,
}

impl AuthSession {
    /// Build a session by replaying whatever the store holds.
    ///
    /// A stored pair means the session starts authenticated; the tokens
    /// are not validated against the server until first use.
    pub fn hydrate(client: ApiClient) -> Result<Self, ClientError> {
        let current = client.store().load()?;
        Ok(Self { client, current })
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The signed-in user, when authenticated.
    pub fn user(&self) -> Option<&StoredUser> {
        self.current.as_ref().map(|auth| &auth.user)
    }

    /// The client this session authenticates.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Authenticate with email + password.
    ///
    /// On success the token/user pair is held in memory and persisted;
    /// on failure the session state is unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&StoredUser, ClientError> {
        let value = self
            .client
            .post(
                "/auth/login",
                Some(&json!({"email": email, "password": password})),
                Auth::Public,
            )
            .await?;
        self.install(serde_json::from_value(value)?)
    }

    /// Exchange the stored refresh token for a fresh pair.
    ///
    /// The server rotates refresh tokens, so the stored session is
    /// replaced wholesale. A rejected refresh clears the session -- the
    /// stored tokens are dead either way.
    pub async fn refresh(&mut self) -> Result<&StoredUser, ClientError> {
        let refresh_token = match &self.current {
            Some(current) => current.refresh_token.clone(),
            None => return Err(ClientError::NotAuthenticated),
        };

        let result = self
            .client
            .post(
                "/auth/refresh",
                Some(&json!({"refresh_token": refresh_token})),
                Auth::Public,
            )
            .await;

        match result {
            Ok(value) => self.install(serde_json::from_value(value)?),
            Err(err @ ClientError::Api { .. }) => {
                self.forget()?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Sign out: best-effort server-side revocation, then clear memory
    /// and persisted storage unconditionally.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        if self.current.is_some() {
            if let Err(err) = self
                .client
                .post::<()>("/auth/logout", None, Auth::Bearer)
                .await
            {
                tracing::warn!(error = %err, "Server-side logout failed; clearing local session anyway");
            }
        }
        self.forget()
    }

    fn install(&mut self, response: AuthResponse) -> Result<&StoredUser, ClientError> {
        let stored = StoredAuth {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
        };
        self.client.store().save(&stored)?;
        self.current = Some(stored);
        Ok(&self.current.as_ref().expect("just installed").user)
    }

    fn forget(&mut self) -> Result<(), ClientError> {
        self.client.store().clear()?;
        self.current = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{MemoryTokenStore, TokenStore};

    fn stored() -> StoredAuth {
        StoredAuth {
            access_token: "access-abc".to_string(),
            refresh_token: "refresh-def".to_string(),
            user: StoredUser {
                id: 1,
                name: "Administrator".to_string(),
                email: "admin@gccheapcarrental.com".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    fn client_with(store: Arc<MemoryTokenStore>) -> ApiClient {
        // Nothing listens on the discard port; only offline paths run.
        ApiClient::new("http://127.0.0.1:9/api", store)
    }

    #[test]
    fn test_hydrate_empty_store_is_unauthenticated() {
        let session = AuthSession::hydrate(client_with(Arc::new(MemoryTokenStore::new()))).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_hydrate_restores_persisted_session() {
        let store = Arc::new(MemoryTokenStore::new());
        store.save(&stored()).unwrap();

        let session = AuthSession::hydrate(client_with(store)).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().role, "admin");
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_store() {
        let store = Arc::new(MemoryTokenStore::new());
        store.save(&stored()).unwrap();

        let mut session = AuthSession::hydrate(client_with(store.clone())).unwrap();
        assert!(session.is_authenticated());

        // The revocation call fails (nothing is listening) but the local
        // session must still be torn down.
        session.logout().await.unwrap();
        assert!(!session.is_authenticated());
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_refresh_without_session_is_rejected() {
        let mut session =
            AuthSession::hydrate(client_with(Arc::new(MemoryTokenStore::new()))).unwrap();
        let err = session.refresh().await.unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_unauthenticated() {
        let mut session =
            AuthSession::hydrate(client_with(Arc::new(MemoryTokenStore::new()))).unwrap();
        let result = session.login("admin@gccheapcarrental.com", "pw").await;
        assert!(result.is_err());
        assert!(!session.is_authenticated());
    }
}
