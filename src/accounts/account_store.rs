//! Local accounts and the authenticated-identity provider.
//!
//! Registration and login are checked against the users table in the
//! key-value store. The logged-in user is persisted under the session key so
//! a restarted host can pick it up again. The service also acts as the
//! game's result sink, attributing decisive results to the current user.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::accounts::key_value_store::{KeyValueStore, SESSION_KEY, USERS_KEY};
use crate::accounts::password::{hash_password, verify_password};
use crate::accounts::stats_store::{load_stats, record_result, UserStats};
use crate::errors::{AuthError, StoreError};
use crate::game_state::chess_types::Color;
use crate::session::results::{ResultKind, ResultSink};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub username: String,
    pub login_time: DateTime<Utc>,
}

/// Who is playing, as far as result attribution is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub identifier: String,
    pub display_name: String,
}

pub trait IdentityProvider {
    fn current_user(&self) -> Option<UserIdentity>;
}

type UsersTable = BTreeMap<String, UserRecord>;

#[derive(Debug)]
pub struct AccountService<K: KeyValueStore> {
    store: K,
    current: Option<SessionRecord>,
    trophy_award: u32,
}

impl<K: KeyValueStore> AccountService<K> {
    pub fn new(store: K, trophy_award: u32) -> Self {
        Self {
            store,
            current: None,
            trophy_award,
        }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// Pick up a persisted login. The session is accepted only while its
    /// user still exists; a malformed session record is discarded.
    pub fn restore_session(&mut self) -> Result<Option<UserIdentity>, StoreError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };

        let session: SessionRecord = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("discarding malformed session record: {e}");
                self.store.remove(SESSION_KEY)?;
                return Ok(None);
            }
        };

        if !self.load_users()?.contains_key(&session.username) {
            debug!(username = %session.username, "session user no longer exists");
            return Ok(None);
        }

        info!(username = %session.username, "session restored");
        self.current = Some(session);
        Ok(self.current_user())
    }

    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
        now: DateTime<Utc>,
    ) -> Result<UserIdentity, AuthError> {
        let username = username.trim();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(AuthError::UsernameTooShort(MIN_USERNAME_LEN));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let mut users = self.load_users()?;
        if users.contains_key(username) {
            return Err(AuthError::UsernameTaken);
        }

        users.insert(
            username.to_owned(),
            UserRecord {
                username: username.to_owned(),
                password_hash: hash_password(password)?,
                created_at: now,
            },
        );
        self.store
            .set(USERS_KEY, serde_json::to_string(&users).map_err(StoreError::from)?)?;

        info!(username, "account registered");
        self.start_session(username, now)
    }

    /// Unknown user and wrong password fail the same way.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<UserIdentity, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let users = self.load_users()?;
        let Some(user) = users.get(username) else {
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        info!(username, "logged in");
        self.start_session(username, now)
    }

    pub fn logout(&mut self) -> Result<(), StoreError> {
        if let Some(session) = self.current.take() {
            info!(username = %session.username, "logged out");
        }
        self.store.remove(SESSION_KEY)
    }

    /// Stats of the logged-in user, if any.
    pub fn current_stats(&self) -> Result<Option<UserStats>, StoreError> {
        match &self.current {
            Some(session) => load_stats(&self.store, &session.username).map(Some),
            None => Ok(None),
        }
    }

    fn start_session(
        &mut self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<UserIdentity, AuthError> {
        let session = SessionRecord {
            username: username.to_owned(),
            login_time: now,
        };
        self.store.set(
            SESSION_KEY,
            serde_json::to_string(&session).map_err(StoreError::from)?,
        )?;
        self.current = Some(session);
        Ok(identity_for(username))
    }

    fn load_users(&self) -> Result<UsersTable, StoreError> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(UsersTable::new()),
        }
    }
}

fn identity_for(username: &str) -> UserIdentity {
    UserIdentity {
        identifier: username.to_owned(),
        display_name: username.to_owned(),
    }
}

impl<K: KeyValueStore> IdentityProvider for AccountService<K> {
    fn current_user(&self) -> Option<UserIdentity> {
        self.current
            .as_ref()
            .map(|session| identity_for(&session.username))
    }
}

impl<K: KeyValueStore> ResultSink for AccountService<K> {
    /// Nothing is recorded when nobody is logged in.
    fn report_winner(&mut self, winner: Color) -> Result<(), StoreError> {
        let Some(user) = self.current_user() else {
            debug!(winner = winner.name(), "no logged-in user; result not recorded");
            return Ok(());
        };

        let outcome = ResultKind::for_winner(winner);
        let stats = record_result(&mut self.store, &user.identifier, outcome, self.trophy_award)?;
        info!(
            username = %user.identifier,
            outcome = ?outcome,
            trophies = stats.trophies,
            wins = stats.wins,
            losses = stats.losses,
            "result recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::key_value_store::{MemoryStore, STATS_KEY};

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).expect("timestamp should be in range")
    }

    fn service() -> AccountService<MemoryStore> {
        AccountService::new(MemoryStore::new(), 15)
    }

    #[test]
    fn register_validates_input() {
        let mut accounts = service();
        assert!(matches!(
            accounts.register("  ab ", "pass", "pass", at(0)),
            Err(AuthError::UsernameTooShort(3))
        ));
        assert!(matches!(
            accounts.register("alice", "abc", "abc", at(0)),
            Err(AuthError::PasswordTooShort(4))
        ));
        assert!(matches!(
            accounts.register("alice", "abcd", "abce", at(0)),
            Err(AuthError::PasswordMismatch)
        ));
        assert_eq!(accounts.current_user(), None);
    }

    #[test]
    fn register_logs_in_and_rejects_duplicates() {
        let mut accounts = service();
        let identity = accounts
            .register(" alice ", "secret", "secret", at(0))
            .expect("registration should succeed");
        assert_eq!(identity.identifier, "alice");
        assert_eq!(accounts.current_user(), Some(identity));

        assert!(matches!(
            accounts.register("alice", "other", "other", at(1)),
            Err(AuthError::UsernameTaken)
        ));
    }

    #[test]
    fn login_checks_password_and_logout_clears_session() {
        let mut accounts = service();
        accounts
            .register("alice", "secret", "secret", at(0))
            .expect("registration should succeed");
        accounts.logout().expect("logout should succeed");
        assert_eq!(accounts.current_user(), None);

        assert!(matches!(
            accounts.login("alice", "", at(1)),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            accounts.login("alice", "nope", at(1)),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            accounts.login("bob", "secret", at(1)),
            Err(AuthError::InvalidCredentials)
        ));

        accounts.login("alice", "secret", at(2)).expect("login should succeed");
        assert_eq!(
            accounts.current_user().map(|u| u.identifier),
            Some("alice".to_owned())
        );
    }

    #[test]
    fn session_survives_a_new_service_over_the_same_store() {
        let mut accounts = service();
        accounts
            .register("alice", "secret", "secret", at(0))
            .expect("registration should succeed");

        let mut restored = AccountService::new(accounts.store().clone(), 15);
        let identity = restored.restore_session().expect("restore should succeed");
        assert_eq!(identity.map(|u| u.identifier), Some("alice".to_owned()));
    }

    #[test]
    fn malformed_session_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "garbage".to_owned()).expect("set should succeed");
        let mut accounts = AccountService::new(store, 15);

        assert_eq!(accounts.restore_session().expect("restore should succeed"), None);
        assert_eq!(accounts.store().get(SESSION_KEY).expect("get should succeed"), None);
    }

    #[test]
    fn white_win_is_a_win_and_black_win_is_a_loss() {
        let mut accounts = service();
        accounts
            .register("alice", "secret", "secret", at(0))
            .expect("registration should succeed");

        accounts.report_winner(Color::White).expect("report should succeed");
        accounts.report_winner(Color::Black).expect("report should succeed");

        let stats = accounts
            .current_stats()
            .expect("stats should load")
            .expect("user is logged in");
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.trophies, 15);
        assert_eq!(stats.draws, 0);
    }

    #[test]
    fn results_without_login_are_dropped() {
        let mut accounts = service();
        accounts.report_winner(Color::White).expect("report should succeed");
        assert_eq!(accounts.store().get(STATS_KEY).expect("get should succeed"), None);
    }
}
