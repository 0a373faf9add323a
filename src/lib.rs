//! recalc library crate: the replay engine and the layers around it.
//!
//! The primary interface is the `recalc` binary. This lib.rs exposes the
//! engine, op log, command decoding, and session loop so that integration
//! tests and embedders can drive a calculator without going through the CLI.

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod oplog;
pub mod session;
pub mod telemetry;

pub use engine::Calculator;
pub use error::{CalcError, ReplayError};
