//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodeclass/nodeclass.toml`
//! 3. Local config: an explicit TOML file
//! 4. Environment variables: `NODECLASS_*` prefix, only through `load_with_env`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{NodeError, NodeResult};

/// Naming and rendering defaults of a [`NodeArena`](crate::NodeArena).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name of nodes created by `new_default_node`
    pub default_name: String,
    /// Label printed by `repr`, as in `<Node:'name'>`
    pub node_label: String,
    /// Separator used by `repr_path_default`
    pub path_separator: String,
    /// Indent per depth level in `repr_tree`
    pub indent: String,
    /// Suffix of nodes with children in `repr_tree`
    pub branch_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_name: "Node".into(),
            node_label: "Node".into(),
            path_separator: " => ".into(),
            indent: "\t".into(),
            branch_marker: "/".into(),
        }
    }
}

/// Raw settings for intermediate parsing, `None` means "inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_name: Option<String>,
    pub node_label: Option<String>,
    pub path_separator: Option<String>,
    pub indent: Option<String>,
    pub branch_marker: Option<String>,
}

/// Get the XDG config directory for nodeclass.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodeclass").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodeclass.toml"))
}

fn config_err(e: ConfigError) -> NodeError {
    NodeError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> NodeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| NodeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| NodeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Parse a TOML document on top of the compiled defaults.
    pub fn from_toml_str(content: &str) -> NodeResult<Self> {
        let raw: RawSettings = toml::from_str(content).map_err(|e| NodeError::Config {
            message: format!("parse: {}", e),
        })?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Overlay wins for every field it specifies.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_name: overlay
                .default_name
                .clone()
                .unwrap_or_else(|| self.default_name.clone()),
            node_label: overlay
                .node_label
                .clone()
                .unwrap_or_else(|| self.node_label.clone()),
            path_separator: overlay
                .path_separator
                .clone()
                .unwrap_or_else(|| self.path_separator.clone()),
            indent: overlay.indent.clone().unwrap_or_else(|| self.indent.clone()),
            branch_marker: overlay
                .branch_marker
                .clone()
                .unwrap_or_else(|| self.branch_marker.clone()),
        }
    }

    /// Load settings from the compiled defaults and config files.
    ///
    /// # Arguments
    /// * `local` - Optional TOML file applied on top of the global config
    ///
    /// Environment variables are not consulted, see [`load_with_env`](Self::load_with_env).
    pub fn load(local: Option<&Path>) -> NodeResult<Self> {
        Self::load_layers(global_config_path().as_deref(), local)
    }

    /// Like [`load`](Self::load), then applies `NODECLASS_*` overrides.
    pub fn load_with_env(local: Option<&Path>) -> NodeResult<Self> {
        Self::load(local)?.with_env_overrides()
    }

    /// Layer `global` then `local` over the compiled defaults.
    ///
    /// A missing local file is an error, a missing global file is not.
    pub fn load_layers(global: Option<&Path>, local: Option<&Path>) -> NodeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = local {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Ok(current)
    }

    /// Apply NODECLASS_* environment variables as explicit overrides.
    pub fn with_env_overrides(mut self) -> NodeResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("NODECLASS"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_name") {
            self.default_name = val;
        }
        if let Ok(val) = config.get_string("node_label") {
            self.node_label = val;
        }
        if let Ok(val) = config.get_string("path_separator") {
            self.path_separator = val;
        }
        if let Ok(val) = config.get_string("indent") {
            self.indent = val;
        }
        if let Ok(val) = config.get_string("branch_marker") {
            self.branch_marker = val;
        }

        Ok(self)
    }
}
