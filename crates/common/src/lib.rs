//! Shared types for the LINE Notify workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
