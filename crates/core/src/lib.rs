//! Core domain types, errors, and constants for `txproof`.
//!
//! Every other crate in the workspace builds on the pieces defined here:
//!
//! - **`errors`**: the `Error` enum and `Result` alias covering every failure
//!   mode of tree construction, proof generation, verification and storage,
//!   together with recovery hints that tell callers whether a retry makes sense.
//! - **`types`**: the digest type, tree identifiers and hex helpers shared by
//!   the wire format and the persisted tree layout.
//! - **`constants`**: storage key prefixes, the padding sentinel and
//!   environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, RecoveryHint, Result},
    types::*,
};
