//! Domain types shared by every layer.
//!
//! Pure data: no I/O and no networking.

mod format;
mod identifier;

pub use format::{Format, Service};
pub use identifier::Identifier;
