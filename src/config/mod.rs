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

//! Configuration management for the company service.
//!
//! - Type-safe configuration structures
//! - Environment variable interpolation (`${VAR}`, `${VAR:-default}`)
//! - YAML and JSON file loading
//! - Unknown-field and value validation
//!
//! ## Configuration File Example
//!
//! ```yaml
//! host: "${SERVER_HOST:-0.0.0.0}"
//! port: 8080
//! logLevel: info
//! baseUrl: "${LOCALURL:-http://localhost:8080}"
//!
//! store:
//!   kind: file
//!   path: ./data
//!   database: "${COMPANY_DB:-companies}"
//!
//! seed:
//!   defaultAmount: 10
//!   maxAmount: 1000
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_config_file, save_config_file, ConfigError};
pub use types::{SeedSettings, ServerConfig, StoreConfig};
