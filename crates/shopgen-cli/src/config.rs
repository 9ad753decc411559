use std::path::{Path, PathBuf};

use shopgen_generate::GenerateOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub customer_count: Option<usize>,
    pub product_count: Option<usize>,
    pub order_count: Option<usize>,
    pub out_dir: Option<PathBuf>,
}

/// Parse a TOML config; missing keys fall back to the built-in defaults.
pub fn parse_options(content: &str) -> Result<GenerateOptions, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Merge defaults, the optional config file and command-line overrides.
pub fn resolve_options(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<GenerateOptions, ConfigError> {
    let mut options = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_options(&content)?
        }
        None => GenerateOptions::default(),
    };

    if let Some(count) = overrides.customer_count {
        options.customer_count = count;
    }
    if let Some(count) = overrides.product_count {
        options.product_count = count;
    }
    if let Some(count) = overrides.order_count {
        options.order_count = count;
    }
    if let Some(out_dir) = overrides.out_dir {
        options.out_dir = out_dir;
    }

    Ok(options)
}
