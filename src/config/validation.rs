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

//! Configuration field validation.
//!
//! Catches typos and snake_case keys before deserialization so the error
//! names every offending field instead of only the first one serde trips on.

use std::collections::HashSet;

/// Validation error for unknown configuration fields.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    UnknownField(String),

    #[error("Multiple validation errors:\n{}", .0.join("\n"))]
    Multiple(Vec<String>),
}

/// Known fields for server-level configuration.
const SERVER_FIELDS: &[&str] = &["host", "port", "logLevel", "baseUrl", "store", "seed"];

/// Known fields per store kind.
const MEMORY_STORE_FIELDS: &[&str] = &["kind"];
const FILE_STORE_FIELDS: &[&str] = &["kind", "path", "database"];

const SEED_FIELDS: &[&str] = &["defaultAmount", "maxAmount"];

/// Validate a parsed configuration document and report all unknown fields.
pub fn validate_config(value: &serde_yaml::Value) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if let Some(map) = value.as_mapping() {
        validate_fields(map, SERVER_FIELDS, "server configuration", &mut errors);

        if let Some(store) = map.get("store") {
            validate_store(store, &mut errors);
        }

        if let Some(seed) = map.get("seed").and_then(|v| v.as_mapping()) {
            validate_fields(seed, SEED_FIELDS, "seed", &mut errors);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(ValidationError::UnknownField(errors.remove(0))),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn validate_fields(
    map: &serde_yaml::Mapping,
    valid_fields: &[&str],
    context: &str,
    errors: &mut Vec<String>,
) {
    let valid_set: HashSet<&str> = valid_fields.iter().copied().collect();

    for key in map.keys() {
        if let Some(key_str) = key.as_str() {
            if !valid_set.contains(key_str) {
                errors.push(format!(
                    "Unknown field '{key_str}' in {context}. Valid fields: {valid_fields:?}"
                ));
            }
        }
    }
}

fn validate_store(store: &serde_yaml::Value, errors: &mut Vec<String>) {
    let Some(map) = store.as_mapping() else {
        return;
    };
    let kind = map.get("kind").and_then(|v| v.as_str()).unwrap_or("unknown");
    let context = format!("store (kind={kind})");
    match kind {
        "memory" => validate_fields(map, MEMORY_STORE_FIELDS, &context, errors),
        "file" => validate_fields(map, FILE_STORE_FIELDS, &context, errors),
        // Unknown kinds are reported by deserialization with the list of variants
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(yaml: &str) -> Result<(), ValidationError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        validate_config(&value)
    }

    #[test]
    fn test_valid_config_passes() {
        let yaml = r#"
            host: 0.0.0.0
            port: 8080
            logLevel: info
            baseUrl: http://localhost:8080
            store:
              kind: file
              path: ./data
              database: companies
            seed:
              defaultAmount: 10
              maxAmount: 100
        "#;
        let result = validate(yaml);
        assert!(result.is_ok(), "Valid config should pass: {result:?}");
    }

    #[test]
    fn test_snake_case_server_field_rejected() {
        let err = validate("port: 8080\nbase_url: http://x\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("base_url"), "{err}");
    }

    #[test]
    fn test_file_field_on_memory_store_rejected() {
        let yaml = r#"
            store:
              kind: memory
              database: companies
        "#;
        let err = validate(yaml).unwrap_err().to_string();
        assert!(err.contains("database"), "{err}");
        assert!(err.contains("kind=memory"), "{err}");
    }

    #[test]
    fn test_multiple_errors_collected() {
        let yaml = r#"
            log_level: info
            seed:
              default_amount: 3
        "#;
        match validate(yaml) {
            Err(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("default_amount")));
            }
            other => panic!("Expected multiple errors, got {other:?}"),
        }
    }
}
