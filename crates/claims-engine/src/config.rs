use shared_types::EngineConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Path to the config file, relative to the process working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store the parsed settings in the global
/// `OnceLock`. Safe to call multiple times — only the first call has effect.
///
/// A missing or unparseable file falls back to defaults (public feed URL,
/// no extra non-working days). A *reachable but broken feed* is a different
/// matter and always surfaces as a `Configuration` error at fetch time.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
            EngineConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) — using defaults");
            EngineConfig::default()
        }
    });
}

/// Get the loaded settings. Returns defaults if `load_config()` hasn't
/// been called yet (safe fallback).
pub fn config() -> &'static EngineConfig {
    static DEFAULT: OnceLock<EngineConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(EngineConfig::default))
}
