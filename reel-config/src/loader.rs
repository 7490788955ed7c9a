//! File and environment loading of [`CarouselConfig`].

use anyhow::{Context, anyhow};
use reel_model::CarouselConfig;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Path to a TOML or JSON carousel config.
pub const CONFIG_PATH_VAR: &str = "REEL_CONFIG_PATH";
/// Inline JSON carousel config.
pub const CONFIG_JSON_VAR: &str = "REEL_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "reel.toml",
    "reel.json",
    "config/reel.toml",
    "config/reel.json",
];

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; nothing was configured.
    #[default]
    Default,
    /// File named by `$REEL_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `$REEL_CONFIG_JSON`.
    EnvInline,
    /// One of the default file locations.
    File(PathBuf),
}

/// Either a bare config document or one nested under `[carousel]`, so the
/// settings can live inside a larger host config file.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Nested { carousel: CarouselConfig },
    Flat(CarouselConfig),
}

impl Document {
    fn into_config(self) -> CarouselConfig {
        match self {
            Document::Nested { carousel } | Document::Flat(carousel) => {
                carousel
            }
        }
    }
}

/// Resolves a [`CarouselConfig`] from the environment or config files.
///
/// Default files are searched relative to `search_root` (the working
/// directory unless set with [`with_root`](Self::with_root)).
#[derive(Debug, Clone)]
pub struct CarouselConfigLoader {
    search_root: PathBuf,
}

impl Default for CarouselConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselConfigLoader {
    pub fn new() -> Self {
        Self {
            search_root: PathBuf::from("."),
        }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: root.into(),
        }
    }

    /// Load the carousel configuration.
    /// Evaluation order:
    /// 1) `$REEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REEL_CONFIG_JSON` (inline JSON),
    /// 3) `reel.toml`, `reel.json`, `config/reel.toml`, `config/reel.json`,
    /// 4) defaults.
    pub fn load_from_env(
        &self,
    ) -> anyhow::Result<(CarouselConfig, ConfigSource)> {
        self.load_with(|key| env::var(key).ok())
    }

    /// [`load_from_env`](Self::load_from_env) with a custom variable
    /// lookup.
    pub fn load_with<F>(
        &self,
        lookup: F,
    ) -> anyhow::Result<(CarouselConfig, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = self.resolve(lookup)?;
        config
            .validate()
            .with_context(|| format!("carousel config from {source:?}"))?;
        debug!(?source, ?config, "carousel config loaded");
        Ok((config, source))
    }

    fn resolve<F>(
        &self,
        lookup: F,
    ) -> anyhow::Result<(CarouselConfig, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((CarouselConfig::default(), ConfigSource::Default))
    }

    /// Read one config file. `.json` and `.toml` are parsed as such; any
    /// other extension tries TOML, then JSON. The result is not validated.
    pub fn load_from_file(path: &Path) -> anyhow::Result<CarouselConfig> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel config {}", path.display())
            }),
            Some("toml") => Self::parse_toml(&contents).map_err(|err| {
                anyhow!("invalid carousel config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<CarouselConfig> {
        Self::parse_toml(contents).or_else(|toml_err| {
            Self::parse_json(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel config {}: toml error: {}; \
                     json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<CarouselConfig> {
        serde_json::from_str::<Document>(raw)
            .map(Document::into_config)
            .map_err(|err| anyhow!("invalid carousel config json: {err}"))
    }

    fn parse_toml(raw: &str) -> Result<CarouselConfig, toml::de::Error> {
        toml::from_str::<Document>(raw).map(Document::into_config)
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}
