//! # Application Layer
//!
//! The response generation use case and the client interface it depends on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
