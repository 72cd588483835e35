// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration loading with environment variable interpolation.

use super::env_interpolation;
use super::types::ServerConfig;
use super::validation::{self, ValidationError};
use std::fs;
use std::path::Path;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable interpolation failed in '{path}': {source}")]
    InterpolationError {
        path: String,
        #[source]
        source: env_interpolation::InterpolationError,
    },

    #[error("Invalid configuration fields: {0}")]
    FieldError(#[from] ValidationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Load and validate a [`ServerConfig`] from a YAML or JSON file.
///
/// 1. Reads the file and interpolates environment variables
/// 2. Rejects unknown fields
/// 3. Parses as YAML, falling back to JSON
/// 4. Validates value ranges
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content).map_err(|source| {
        ConfigError::InterpolationError {
            path: path_ref.display().to_string(),
            source,
        }
    })?;

    let config = match serde_yaml::from_str::<serde_yaml::Value>(&interpolated) {
        Ok(value) => {
            // An empty file parses as null; treat it as "all defaults"
            if value.is_null() {
                ServerConfig::default()
            } else {
                validation::validate_config(&value)?;
                serde_yaml::from_value::<ServerConfig>(value)?
            }
        }
        Err(yaml_err) => match serde_json::from_str::<ServerConfig>(&interpolated) {
            Ok(config) => config,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    config.validate()?;

    Ok(config)
}

/// Save a [`ServerConfig`] as YAML.
///
/// Environment variable references are not preserved; resolved values are written.
pub fn save_config_file<P: AsRef<Path>>(config: &ServerConfig, path: P) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path, content)?)
}
