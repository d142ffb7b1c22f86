//! Library root for `psycare`.
//!
//! PsyCare is a supportive chat companion designed to:
//! - Listen to how a user is feeling, in English or Brazilian Portuguese
//! - Triage each message into a severity bucket by keyword matching
//! - Offer self-care tips, or steer toward a psychologist or therapist
//! - Surface crisis resources and an emergency specialist when needed
//!
//! The classifier is a pure function over static keyword and template tables.
//! Scheduling and telephony are external collaborators reached through the
//! `GenericActionClient` trait, which can be swapped for testing.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod triage;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the PsyCare runtime:
/// - Builds the classifier for the configured locales
/// - Creates the runtime context with the action client
/// - Runs an interactive console session
pub async fn start(config: Config) -> Void {
    info!("Starting psycare ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config);

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
