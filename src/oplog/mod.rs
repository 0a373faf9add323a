//! In-memory operation log.
//!
//! Every mutating calculator call records an [`Operation`] in the [`OpLog`].
//! The log is the replay source for `repeat`: a window of recent entries is
//! read back and re-applied by the engine.
//!
//! # Modules
//!
//! - [`types`]: [`Operator`] tags and the [`Operation`] record
//! - [`store`]: the append-only [`OpLog`]

pub mod store;
pub mod types;

pub use store::OpLog;
pub use types::{Operation, Operator};
