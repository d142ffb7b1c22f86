//! Service integrations for the collaborators the triage engine hands off to.
//!
//! The engine only emits intents (schedule an appointment, dial an emergency
//! number). Each service module defines a generic trait and a concrete
//! implementation, allowing for extensibility and easy testing.

pub mod actions;
