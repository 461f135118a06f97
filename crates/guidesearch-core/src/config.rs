//! Configuration loading for the corpus path and friends.
//!
//! Figment merges `config.toml`, then an environment-specific overlay
//! picked by `RUST_ENV`, then `APP_*` env vars. Values are pulled lazily
//! with `get`, so a missing file only matters for the keys it would have
//! provided.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::PathBuf;

pub struct Config {
    figment: Figment,
}

fn overlay_file(env_name: &str) -> Option<&'static str> {
    match env_name {
        "dev" | "development" => Some("config.dev.toml"),
        "prod" | "production" => Some("config.prod.toml"),
        "test" | "testing" => Some("config.test.toml"),
        _ => None,
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        if let Some(overlay) = overlay_file(&env_name) {
            figment = figment.merge(Toml::file(overlay));
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }
}

/// Expand a leading `~` and any `${VAR}`/`$VAR` references in a
/// user-provided path. No canonicalization; the path may not exist yet.
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let with_vars = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&with_vars);
    PathBuf::from(expanded.as_ref())
}
