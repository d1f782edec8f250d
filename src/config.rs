use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Language used when the caller does not name one.
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub pretty_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Check every refinement result against the refined token's text.
    #[serde(default = "default_validate_refinements")]
    pub validate_refinements: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            validate_refinements: default_validate_refinements(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            default_language: default_language(),
            pretty_json: false,
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::config(format!("Failed to open config file {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_language() -> String {
    "generic".to_string()
}

fn default_validate_refinements() -> bool {
    cfg!(debug_assertions)
}
