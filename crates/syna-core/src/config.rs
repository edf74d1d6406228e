//! Engine configuration.
//!
//! Configuration is a TOML document where every section and key is optional;
//! anything left out falls back to its default.
//!
//! ```toml
//! [processing]
//! max_insights = 5
//! cooccurrence_window = 3
//!
//! [selection]
//! integration_threshold = 0.7
//!
//! [integration]
//! synergy_threshold = 0.6
//! conflict_tolerance = 0.3
//!
//! [network]
//! size = 8
//! radius = 1
//! ```

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming a config file when no path is given.
pub const CONFIG_ENV_VAR: &str = "SYNA_CONFIG";

// ============================================================================
// Sections
// ============================================================================

/// Settings shared by the text processors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Maximum number of insights a single processor emits
    pub max_insights: usize,

    /// Width of the co-occurrence window used by divergent processing
    pub cooccurrence_window: usize,

    /// Longest accepted input, in characters
    pub max_input_chars: usize,

    /// Time budget per processor, in milliseconds
    pub timeout_ms: u64,

    /// Whether stopwords are filtered from content terms
    pub stopwords: bool,

    /// Words that are never treated as stopwords
    pub allowlist: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_insights: 5,
            cooccurrence_window: 3,
            max_input_chars: 20_000,
            timeout_ms: 5_000,
            stopwords: true,
            allowlist: Vec::new(),
        }
    }
}

/// Mode selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Both creativity and analysis must exceed this to select bilateral mode
    pub integration_threshold: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            integration_threshold: 0.7,
        }
    }
}

/// Corpus callosum settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Synergy ratio at which the merged confidence gets a bonus
    pub synergy_threshold: f64,

    /// Largest confidence gap that is not treated as a conflict
    pub conflict_tolerance: f64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            synergy_threshold: 0.6,
            conflict_tolerance: 0.3,
        }
    }
}

/// Bilateral synapse network settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of synapses
    pub size: usize,

    /// Neighbours on each side a synapse listens to
    pub radius: usize,

    /// Fraction of potential kept between signals
    pub decay: f64,

    /// Both potentials must exceed this for integrated output
    pub integration_threshold: f64,

    /// Weight of the creative × analytical product in integrated output
    pub integration_gain: f64,

    /// Number of activations each synapse remembers
    pub history: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            size: 8,
            radius: 1,
            decay: 0.5,
            integration_threshold: 0.7,
            integration_gain: 0.5,
            history: 64,
        }
    }
}

// ============================================================================
// SynaConfig
// ============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynaConfig {
    /// Text processor settings
    pub processing: ProcessingConfig,

    /// Mode selection settings
    pub selection: SelectionConfig,

    /// Result integration settings
    pub integration: IntegrationConfig,

    /// Synapse network settings
    pub network: NetworkConfig,
}

impl SynaConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SynaConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration.
    ///
    /// Uses `path` when given, otherwise the file named by `SYNA_CONFIG`,
    /// otherwise the defaults. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// `load` with the value of `SYNA_CONFIG` passed in.
    fn load_with_env(path: Option<&Path>, env_path: Option<OsString>) -> Result<Self> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => env_path.map(PathBuf::from),
        };

        let Some(path) = resolved else {
            tracing::debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(Error::config(format!(
                "Config file does not exist at {}",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }

    /// Renders the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<()> {
        let p = &self.processing;
        positive("processing.max_insights", p.max_insights)?;
        positive("processing.cooccurrence_window", p.cooccurrence_window)?;
        positive("processing.max_input_chars", p.max_input_chars)?;
        if p.cooccurrence_window > p.max_input_chars {
            return Err(Error::validation_field(
                "processing.cooccurrence_window",
                "must not exceed processing.max_input_chars",
            ));
        }
        if p.timeout_ms == 0 {
            return Err(Error::validation_field(
                "processing.timeout_ms",
                "must be greater than zero",
            ));
        }

        unit("selection.integration_threshold", self.selection.integration_threshold)?;
        unit("integration.synergy_threshold", self.integration.synergy_threshold)?;
        unit("integration.conflict_tolerance", self.integration.conflict_tolerance)?;

        let n = &self.network;
        positive("network.size", n.size)?;
        positive("network.history", n.history)?;
        unit("network.integration_threshold", n.integration_threshold)?;
        if !(0.0..1.0).contains(&n.decay) {
            return Err(Error::validation_field("network.decay", "must be in [0, 1)"));
        }
        if !n.integration_gain.is_finite() || n.integration_gain < 0.0 {
            return Err(Error::validation_field(
                "network.integration_gain",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

fn positive(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::validation_field(field, "must be greater than zero"));
    }
    Ok(())
}

fn unit(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::validation_field(field, "must be in [0, 1]"));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
