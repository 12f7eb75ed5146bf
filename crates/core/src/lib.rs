//! Core domain types and errors for `sessionjar`.
//!
//! This crate establishes the foundational building blocks shared by the
//! rest of the workspace:
//!
//! - **`errors`**: the primary `Error` enum and `Result` type alias,
//!   centralizing all failure modes so callers see one predictable surface.
//! - **`types`**: domain types that cross the host boundary, currently the
//!   pass-through `JarMetadata` forwarded verbatim to the backing jar.

pub mod errors;
pub mod types;

pub use self::{
    errors::{Error, Result},
    types::JarMetadata,
};
