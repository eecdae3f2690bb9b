//! CodeCampus - Terminal Learning Platform Library
//!
//! A mobile-app-style learning experience for the terminal:
//! - Course catalog with lesson viewer and quizzes
//! - Per-user course progress persisted to local storage
//! - Practice challenges with a simulated test runner
//! - Code playground with saved projects
//! - Community forum feed
//! - Demo authentication (no real credential verification)
//!
//! Everything that looks like a backend call is simulated with a fixed
//! delay and a locally fabricated response.
//!
//! # Example
//!
//! ```ignore
//! use codecampus::auth::AuthService;
//! use codecampus::storage::LocalStore;
//! use codecampus::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let store = LocalStore::default_store()?;
//!     let mut auth = AuthService::new(store, &config)?;
//!     let user = auth.login("demo@example.com", "password").await?;
//!     println!("Welcome back, {}", user.name);
//!     Ok(())
//! }
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod types;
pub mod storage;  // Must come before the stores since they persist through it
pub mod config;
pub mod catalog;
pub mod auth;
pub mod progress;
pub mod community;
pub mod playground;
pub mod practice;
pub mod screens;
pub mod cli;

// Re-export commonly used types for convenience
pub use storage::LocalStore;

pub use types::{Level, Difficulty};

pub use auth::{
    AuthService,
    AuthError,
    User,
};

pub use progress::{
    ProgressStore,
    CourseProgress,
    ProgressStats,
};

pub use community::CommunityFeed;

pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Terminal Learning Platform", NAME, VERSION)
}
