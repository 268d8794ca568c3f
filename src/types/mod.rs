// Transcript Bridge shared type definitions
// Each submodule defines records exchanged between the backend and the UI.

pub mod errors;
pub mod file_item;
pub mod lang_option;
pub mod settings;
pub mod transcript;
pub mod transcription_config;
