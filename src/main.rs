//! CodeCampus - Terminal Learning Platform
//!
//! Courses, practice challenges, a code playground, and a community feed,
//! all driven by local state and mock data.

// Use the library crate for all modules
use codecampus::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .init();

    // Run CLI
    cli::run().await
}
