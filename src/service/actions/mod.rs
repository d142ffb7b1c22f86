//! Outbound actions: scheduling and emergency calls.
//!
//! This module defines the `GenericActionClient` trait that the UI layer
//! implements to receive intents from a session, with a default console
//! implementation that only reports them.

pub mod console;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{SpecialistRef, Void};

// Traits.

/// Generic "actions" trait that collaborators must implement.
///
/// The session never waits on the outcome of these calls; failures are
/// logged and dropped.
#[async_trait]
pub trait GenericActionClient: Send + Sync + 'static {
    /// Switch to the scheduling view.
    ///
    /// When the request comes from a crisis card, it is pre-filled with the
    /// specialist on display.
    async fn request_scheduling(&self, specialist: Option<SpecialistRef>) -> Void;

    /// Dial the emergency contact number.
    async fn request_emergency_call(&self, phone: &str) -> Void;
}

// Structs.

/// Action client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ActionClient {
    inner: Arc<dyn GenericActionClient>,
}

impl Deref for ActionClient {
    type Target = dyn GenericActionClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ActionClient {
    pub fn new(inner: Arc<dyn GenericActionClient>) -> Self {
        Self { inner }
    }
}
