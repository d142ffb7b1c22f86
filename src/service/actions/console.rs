//! Console stand-in for the scheduling and telephony collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::{
    base::types::{SpecialistRef, Void},
    triage::crisis::dial_uri,
};

use super::{ActionClient, GenericActionClient};

// Extra methods on `ActionClient` applied by the console implementation.

impl ActionClient {
    /// Creates an action client that prints intents to stdout.
    pub fn console() -> Self {
        Self { inner: Arc::new(ConsoleActionClient) }
    }
}

// Specific implementations.

/// Prints each intent instead of performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleActionClient;

#[async_trait]
impl GenericActionClient for ConsoleActionClient {
    #[instrument(skip(self))]
    async fn request_scheduling(&self, specialist: Option<SpecialistRef>) -> Void {
        info!("Scheduling requested.");

        match specialist {
            Some(SpecialistRef { name, title }) => println!("[schedule] Opening scheduling for {name} ({title})."),
            None => println!("[schedule] Opening the specialist directory."),
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn request_emergency_call(&self, phone: &str) -> Void {
        info!("Emergency call requested.");

        println!("[call] Dialing {}", dial_uri(phone));

        Ok(())
    }
}
