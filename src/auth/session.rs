use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::UserRecord;
use super::store::KeyValueStore;
use super::token::is_token_valid;
use super::{AuthError, Result};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Where the user lands after logging out
pub const LANDING_PATH: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<UserRecord>,
}

pub struct AuthSession<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored session. Authenticated means both a token and a
    /// parseable user are present; the token's expiry is not looked at here.
    pub fn check_auth(&self) -> Result<AuthStatus> {
        let token = self.store.get(TOKEN_KEY)?;
        let user = match self.store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<UserRecord>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Ignoring unreadable stored user: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(AuthStatus {
            is_authenticated: token.is_some() && user.is_some(),
            token,
            user,
        })
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.check_auth()?.is_authenticated)
    }

    pub fn current_user(&self) -> Result<Option<UserRecord>> {
        Ok(self.check_auth()?.user)
    }

    pub fn login(&mut self, token: &str, user: &UserRecord) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        log::info!("Signed in as {}", user.display_name());
        Ok(())
    }

    /// Clear the session and return the landing path to redirect to
    pub fn logout(&mut self) -> Result<&'static str> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        log::info!("Signed out");
        Ok(LANDING_PATH)
    }

    /// Startup check: a signed-in session whose token has expired is
    /// logged out and reported as [`AuthError::Expired`].
    pub fn init(&mut self, now: DateTime<Utc>) -> Result<AuthStatus> {
        let status = self.check_auth()?;

        if let (true, Some(token)) = (status.is_authenticated, status.token.as_deref()) {
            if !is_token_valid(token, now) {
                log::warn!("Stored token has expired, signing out");
                self.logout()?;
                return Err(AuthError::Expired);
            }
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::{FileStore, MemoryStore};
    use crate::auth::token::make_token;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn user() -> UserRecord {
        let mut user = UserRecord::new(1, "anna@example.com");
        user.full_name = Some("Anna".to_string());
        user
    }

    #[test]
    fn test_empty_session_is_anonymous() {
        let session = AuthSession::new(MemoryStore::new());

        let status = session.check_auth().unwrap();
        assert_eq!(status, AuthStatus::default());
        assert!(!session.is_authenticated().unwrap());
        assert_eq!(session.current_user().unwrap(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = AuthSession::new(MemoryStore::new());
        session.login("tok", &user()).unwrap();

        let status = session.check_auth().unwrap();
        assert!(status.is_authenticated);
        assert_eq!(status.token.as_deref(), Some("tok"));
        assert_eq!(status.user, Some(user()));

        assert_eq!(session.logout().unwrap(), "/");
        assert!(!session.is_authenticated().unwrap());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_token_without_user_is_not_authenticated() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        let session = AuthSession::new(store);

        assert!(!session.is_authenticated().unwrap());
    }

    #[test]
    fn test_unparsable_user_counts_as_absent() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{broken").unwrap();
        let session = AuthSession::new(store);

        let status = session.check_auth().unwrap();
        assert!(!status.is_authenticated);
        assert_eq!(status.user, None);
        assert_eq!(status.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_init_keeps_live_session() {
        let mut session = AuthSession::new(MemoryStore::new());
        let token = make_token(r#"{"user_id": 1, "exp": 2000}"#);
        session.login(&token, &user()).unwrap();

        let status = session.init(at(1999)).unwrap();
        assert!(status.is_authenticated);
        assert!(session.is_authenticated().unwrap());
    }

    #[test]
    fn test_init_logs_out_expired_session() {
        let mut session = AuthSession::new(MemoryStore::new());
        let token = make_token(r#"{"user_id": 1, "exp": 2000}"#);
        session.login(&token, &user()).unwrap();

        let err = session.init(at(2000)).unwrap_err();
        assert!(matches!(err, AuthError::Expired));
        assert!(!session.is_authenticated().unwrap());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_init_treats_opaque_token_as_expired() {
        let mut session = AuthSession::new(MemoryStore::new());
        session.login("not-a-jwt", &user()).unwrap();

        assert!(matches!(session.init(at(0)), Err(AuthError::Expired)));
    }

    #[test]
    fn test_init_on_anonymous_session() {
        let mut session = AuthSession::new(MemoryStore::new());
        let status = session.init(at(0)).unwrap();
        assert!(!status.is_authenticated);
    }

    #[test]
    fn test_session_survives_reopen_with_file_store() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");

        let mut session = AuthSession::new(FileStore::new(path.clone()));
        session.login("tok", &user()).unwrap();

        let reopened = AuthSession::new(FileStore::new(path));
        assert_eq!(reopened.current_user().unwrap(), Some(user()));
    }
}
