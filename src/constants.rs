//! Application constants and configuration

pub const APP_NAME: &str = "Dual Portfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variables checked, in order, for the assistant API key
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_AI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_THINKING_BUDGET: u32 = 1000;

/// Concurrent remote image fetches
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;
