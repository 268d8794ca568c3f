// Transcript Bridge services
// Output rendering and persisted settings.

pub mod formatter;
pub mod settings_engine;
