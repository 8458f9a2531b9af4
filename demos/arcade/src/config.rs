//! `ArcadeConfig` — TOML configuration for the arcade demo.
//!
//! Every section and key is optional; missing values fall back to the
//! library defaults.  See `arcade.toml` for a sample.
//!
//! When `[sim] ticks_per_second` is not 60, the analyzer's tick budgets
//! (`max_ticks`, `monotonous_duration_ticks`, `spam_press_ticks`,
//! `spam_release_ticks`) start from [`AnalyzerConfig::for_tick_rate`]
//! instead; keys set in `[analyzer]` are kept as written.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ob_analyzer::AnalyzerConfig;
use ob_core::{DEFAULT_TICKS_PER_SECOND, SimConfig};
use serde::Deserialize;
use tracing::{info, warn};

/// Analyzer keys measured in ticks.
const TICK_KEYS: [&str; 4] =
    ["max_ticks", "monotonous_duration_ticks", "spam_press_ticks", "spam_release_ticks"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub sim:      SimConfig,
    pub analyzer: AnalyzerConfig,
    pub output:   OutputConfig,
    /// Optional CSV of extra monotonous patterns (`name,kind,duration_ticks`).
    pub patterns: Option<PathBuf>,
}

/// Where and what to write besides the console summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; nothing is written when unset.
    pub dir:   Option<PathBuf>,
    pub csv:   bool,
    pub json:  bool,
    /// Write a per-tick trace of one Expert run per game.
    pub trace: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: None, csv: true, json: true, trace: false }
    }
}

impl ArcadeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let table: toml::Table = text.parse()?;
        let explicit: Vec<&str> = table
            .get("analyzer")
            .and_then(toml::Value::as_table)
            .map(|t| TICK_KEYS.into_iter().filter(|k| t.contains_key(*k)).collect())
            .unwrap_or_default();

        let mut config: Self = toml::from_str(text)?;
        config.rescale_tick_budgets(&explicit);
        Ok(config)
    }

    /// Replace the 60-tps analyzer tick budgets not listed in `explicit`
    /// with their equivalents at `sim.ticks_per_second`.
    fn rescale_tick_budgets(&mut self, explicit: &[&str]) {
        let tps = self.sim.ticks_per_second;
        if tps == DEFAULT_TICKS_PER_SECOND {
            return;
        }
        let scaled = AnalyzerConfig::for_tick_rate(tps);
        let keep = |key: &str| explicit.iter().any(|k| *k == key);
        let a = &mut self.analyzer;
        if !keep("max_ticks") {
            a.max_ticks = scaled.max_ticks;
        }
        if !keep("monotonous_duration_ticks") {
            a.monotonous_duration_ticks = scaled.monotonous_duration_ticks;
        }
        if !keep("spam_press_ticks") {
            a.spam_press_ticks = scaled.spam_press_ticks;
        }
        if !keep("spam_release_ticks") {
            a.spam_release_ticks = scaled.spam_release_ticks;
        }
        info!(
            ticks_per_second = tps,
            max_ticks = a.max_ticks,
            monotonous_duration_ticks = a.monotonous_duration_ticks,
            "analyzer tick budgets rescaled"
        );
    }

    /// Load the config at `path`, or the defaults when `path` is `None` or
    /// the file does not exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
