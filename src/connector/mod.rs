//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - OpenAI-compatible chat-completions transport
//! - Offline echo mock for credential-free runs and tests

pub mod adapter;

pub use adapter::*;
