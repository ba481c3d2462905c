pub mod config;
/// File-backed tracing subscriber setup.
pub mod logging;
pub mod text_generator;
