//! Authentication context - demo login/signup over local storage
//!
//! Holds the single user record for the session and persists it under the
//! `user` storage key. There is no credential database, no token or session
//! model, and no password hashing: `login` accepts exactly one hard-coded
//! demo pair and everything else is field validation. The fixed delays stand
//! in for network round-trips.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{Config, DemoConfig, LatencyConfig};
use crate::storage::{LocalStore, USER_KEY};
use crate::types::Level;

/// Experience points awarded for completing a lesson
pub const XP_PER_LESSON: u32 = 50;

/// The signed-in user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub level: Level,
    pub avatar: Option<String>,
    pub experience_points: u32,
}

/// Partial update applied by `update_user`; `None` fields are left alone
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub level: Option<Level>,
    pub avatar: Option<String>,
    pub experience_points: Option<u32>,
}

/// Authentication failures
///
/// The taxonomy is intentionally thin: validation failures with a message,
/// or a storage problem underneath.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Not logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// The sample account installed by a demo login
pub fn sample_user() -> User {
    User {
        id: "user-001".to_string(),
        name: "Alex Johnson".to_string(),
        email: "demo@example.com".to_string(),
        level: Level::Beginner,
        avatar: None,
        experience_points: 1250,
    }
}

/// Session-scoped authentication state persisted to local storage
pub struct AuthService {
    store: LocalStore,
    user: Option<User>,
    demo: DemoConfig,
    latency: LatencyConfig,
}

impl AuthService {
    /// Create the service, restoring any existing session from storage
    pub fn new(store: LocalStore, config: &Config) -> Result<Self, AuthError> {
        let user = store.get::<User>(USER_KEY)?;
        Ok(Self {
            store,
            user,
            demo: config.demo.clone(),
            latency: config.latency.clone(),
        })
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in with the demo credential pair.
    ///
    /// Any other email/password combination fails; there is nothing to
    /// verify against.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        tokio::time::sleep(self.latency.login()).await;

        if email != self.demo.email || password != self.demo.password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = sample_user();
        self.store.set(USER_KEY, &user)?;
        info!("Logged in as {}", user.email);
        Ok(self.user.insert(user))
    }

    /// Create a fresh account record from the submitted fields.
    ///
    /// Nothing is registered anywhere; the record is fabricated locally with
    /// zero experience points.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        tokio::time::sleep(self.latency.signup()).await;

        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if password.len() < 8 {
            return Err(AuthError::PasswordTooShort);
        }

        let user = User {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            level: Level::Beginner,
            avatar: None,
            experience_points: 0,
        };
        self.store.set(USER_KEY, &user)?;
        info!("Signed up {} at {}", user.email, Utc::now());
        Ok(self.user.insert(user))
    }

    /// End the session and clear the persisted user record
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency.logout()).await;

        self.store.remove(USER_KEY)?;
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
        Ok(())
    }

    /// Merge a partial update into the current user and persist it
    pub async fn update_user(&mut self, patch: UserPatch) -> Result<&User, AuthError> {
        tokio::time::sleep(self.latency.update_user()).await;

        let user = self.user.as_mut().ok_or(AuthError::NotLoggedIn)?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(level) = patch.level {
            user.level = level;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(xp) = patch.experience_points {
            user.experience_points = xp;
        }
        self.store.set(USER_KEY, user)?;
        Ok(user)
    }

    /// Add experience points and recompute the level from the thresholds
    pub fn award_xp(&mut self, points: u32) -> Result<&User, AuthError> {
        let user = self.user.as_mut().ok_or(AuthError::NotLoggedIn)?;
        user.experience_points += points;
        let new_level = Level::for_xp(user.experience_points);
        if new_level != user.level {
            info!("{} reached {}", user.name, new_level);
            user.level = new_level;
        }
        self.store.set(USER_KEY, user)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (tempfile::TempDir, AuthService) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let mut config = Config::default();
        config.latency = LatencyConfig::none();
        let auth = AuthService::new(store, &config).unwrap();
        (dir, auth)
    }

    #[tokio::test]
    async fn demo_credentials_log_in() {
        let (_dir, mut auth) = service();
        let user = auth.login("demo@example.com", "password").await.unwrap();
        assert_eq!(user.id, "user-001");
        assert_eq!(user.name, "Alex Johnson");
        assert_eq!(user.experience_points, 1250);
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn wrong_credentials_fail() {
        let (_dir, mut auth) = service();
        let err = auth.login("demo@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        let err = auth.login("someone@else.com", "password").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn signup_validation() {
        let (_dir, mut auth) = service();

        let err = auth.signup("", "a@b.com", "longenough").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));

        let err = auth.signup("Ann", "a@b.com", "short").await.unwrap_err();
        assert!(matches!(err, AuthError::PasswordTooShort));

        let user = auth.signup("Ann", "a@b.com", "longenough").await.unwrap();
        assert_eq!(user.experience_points, 0);
        assert_eq!(user.level, Level::Beginner);
    }

    #[tokio::test]
    async fn session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.latency = LatencyConfig::none();

        {
            let store = LocalStore::open(dir.path()).unwrap();
            let mut auth = AuthService::new(store, &config).unwrap();
            auth.login("demo@example.com", "password").await.unwrap();
        }

        let store = LocalStore::open(dir.path()).unwrap();
        let auth = AuthService::new(store, &config).unwrap();
        assert_eq!(auth.current_user().unwrap().id, "user-001");
    }

    #[tokio::test]
    async fn logout_clears_the_stored_user() {
        let (dir, mut auth) = service();
        auth.login("demo@example.com", "password").await.unwrap();
        auth.logout().await.unwrap();
        assert!(!auth.is_authenticated());

        let store = LocalStore::open(dir.path()).unwrap();
        assert!(!store.contains(USER_KEY));
    }

    #[tokio::test]
    async fn update_user_merges_fields() {
        let (_dir, mut auth) = service();
        auth.login("demo@example.com", "password").await.unwrap();

        let patch = UserPatch {
            name: Some("Alexandra Johnson".to_string()),
            ..Default::default()
        };
        let user = auth.update_user(patch).await.unwrap();
        assert_eq!(user.name, "Alexandra Johnson");
        // Untouched fields keep their values
        assert_eq!(user.email, "demo@example.com");
    }

    #[tokio::test]
    async fn update_without_session_fails() {
        let (_dir, mut auth) = service();
        let err = auth.update_user(UserPatch::default()).await.unwrap_err();
        assert!(matches!(err, AuthError::NotLoggedIn));
    }

    #[tokio::test]
    async fn xp_awards_cross_level_thresholds() {
        let (_dir, mut auth) = service();
        auth.login("demo@example.com", "password").await.unwrap();

        // 1250 + 800 = 2050 crosses into Intermediate
        let user = auth.award_xp(800).unwrap();
        assert_eq!(user.experience_points, 2050);
        assert_eq!(user.level, Level::Intermediate);

        let user = auth.award_xp(3000).unwrap();
        assert_eq!(user.level, Level::Advanced);
    }
}
