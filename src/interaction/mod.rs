//! Conversation handling and user interactions for PsyCare.
//!
//! This module provides functionality for running a conversation:
//! - Accumulating the transcript and scheduling replies (`session`)
//! - Rendering entries and the crisis card as text (`render`)
//! - Driving a session from the terminal (`console`)

pub mod console;
pub mod render;
pub mod session;
