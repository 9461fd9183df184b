//! Configuration: TOML file, environment overrides, built-in defaults.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_TOP_K;
use crate::types::{FreqError, FreqResult};

/// Environment variable overriding [`TallyConfig::top_k`].
pub const TOP_K_ENV: &str = "WORDTALLY_TOP_K";

const CONFIG_DIR: &str = "wordtally";
const CONFIG_FILE: &str = "config.toml";

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_file_prefix() -> String {
    "text_".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_stopwords() -> Vec<String> {
    ["и", "в", "у"].iter().map(|s| s.to_string()).collect()
}

fn default_samples() -> Vec<String> {
    [
        "В начале было Слово и Слово было у Бога.",
        "Текст для частотного анализа текста.",
        "Солнце светит ярко, птицы поют весело.",
        "Зима холодная, снег белый и пушистый.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// How many ranked words each report shows.
    pub top_k: usize,
    /// Document files are named `{file_prefix}{index}.json`.
    pub file_prefix: String,
    /// Directory holding document files.
    pub data_dir: PathBuf,
    /// Stop-words written into generated documents.
    pub default_stopwords: Vec<String>,
    /// Texts that generated documents pick from.
    pub samples: Vec<String>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            file_prefix: default_file_prefix(),
            data_dir: default_data_dir(),
            default_stopwords: default_stopwords(),
            samples: default_samples(),
        }
    }
}

impl TallyConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the user config file is used
    /// if present, otherwise defaults. Environment overrides apply last.
    pub fn load(config_path: Option<&Path>) -> FreqResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::user_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> FreqResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FreqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading config from {}", path.display());
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> FreqResult<Self> {
        toml::from_str(content).map_err(|e| FreqError::Config(format!("invalid TOML: {}", e)))
    }

    /// `<config dir>/wordtally/config.toml`, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn apply_env(&mut self) -> FreqResult<()> {
        if let Ok(value) = std::env::var(TOP_K_ENV) {
            self.top_k = value.trim().parse().map_err(|e| {
                FreqError::Config(format!("{} must be a positive integer: {}", TOP_K_ENV, e))
            })?;
        }
        Ok(())
    }

    /// Reject settings that would make every run meaningless.
    pub fn validate(&self) -> FreqResult<()> {
        if self.top_k == 0 {
            return Err(FreqError::Config("top_k must be at least 1".to_string()));
        }
        if self.file_prefix.is_empty() {
            return Err(FreqError::Config("file_prefix must not be empty".to_string()));
        }
        Ok(())
    }
}
