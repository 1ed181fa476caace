//! # ExtrudeKit Core
//!
//! Core types shared by the ExtrudeKit crates: tool positions, the numeric
//! field formatter used for every emitted command, and the common error type.

pub mod data;
pub mod error;
pub mod format;

pub use data::Position;
pub use error::{Error, Result};
pub use format::{format_number, NumberFormat};
