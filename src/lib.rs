//! Transcript Bridge — typed records exchanged between a batch transcription
//! backend and its desktop UI, plus the JSON-RPC surface that carries them.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod logging;
pub mod platform;
pub mod record;
pub mod rpc_handler;
pub mod services;
pub mod types;
