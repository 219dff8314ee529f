//! Common types, traits, and error definitions for georouter
//!
//! This module provides the foundational building blocks shared by the
//! planning core, the session layer, and the plotting utilities.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
