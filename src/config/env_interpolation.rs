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

//! Environment variable interpolation for configuration files.
//!
//! Supports POSIX-style references:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a fallback when unset or empty
//!
//! ```
//! use company_api::config::env_interpolation::interpolate;
//!
//! std::env::set_var("DOC_COMPANY_DB", "companies");
//! let result = interpolate("database: ${DOC_COMPANY_DB}\nport: ${DOC_PORT:-8080}").unwrap();
//! assert_eq!(result, "database: companies\nport: 8080");
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Maximum length for interpolated strings
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000;

lazy_static! {
    /// Group 1: variable name, group 3: default value (if `:-` is present)
    static ref ENV_VAR_PATTERN: Regex = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}\n]*))?\}"
    ).expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error(
        "line {line}{}: environment variable '{name}' is not set and has no default value",
        describe_key(.key)
    )]
    MissingVariable {
        name: String,
        /// 1-based line of the reference
        line: usize,
        /// Config key the reference is the value of, when the line has one
        key: Option<String>,
    },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

fn describe_key(key: &Option<String>) -> String {
    key.as_ref()
        .map(|key| format!(" ('{key}')"))
        .unwrap_or_default()
}

/// Key on a `key: value` line, for YAML and JSON alike.
fn line_key(line: &str) -> Option<String> {
    let (key, _) = line.trim_start().trim_start_matches("- ").split_once(':')?;
    let key = key.trim().trim_matches('"');
    (!key.is_empty() && !key.contains("${")).then(|| key.to_string())
}

/// Resolve one reference; `None` when it is unset and has no default.
fn resolve(name: &str, default: Option<&str>) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => default.map(str::to_string),
    }
}

/// Replace every `${...}` reference in `input`.
///
/// No recursive expansion is performed: substituted values are copied
/// verbatim even if they contain `${...}` themselves. References never span
/// lines, which lets a failure name the line and key it came from.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut variables_used = Vec::new();

    for (index, line) in input.split_inclusive('\n').enumerate() {
        let mut copied_to = 0;
        for caps in ENV_VAR_PATTERN.captures_iter(line) {
            let (Some(reference), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = resolve(name.as_str(), caps.get(3).map(|m| m.as_str())).ok_or_else(
                || InterpolationError::MissingVariable {
                    name: name.as_str().to_string(),
                    line: index + 1,
                    key: line_key(line),
                },
            )?;

            result.push_str(&line[copied_to..reference.start()]);
            result.push_str(&value);
            copied_to = reference.end();
            variables_used.push(name.as_str());
        }
        result.push_str(&line[copied_to..]);

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }

    // Names only, values may be secrets
    if !variables_used.is_empty() {
        debug!(
            "Interpolated environment variables: {}",
            variables_used.join(", ")
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_and_port_substituted() {
        env::set_var("INTERP_TEST_BASE_URL", "https://companies.example.com");
        env::set_var("INTERP_TEST_PORT", "3000");

        let input = "baseUrl: ${INTERP_TEST_BASE_URL}\nport: ${INTERP_TEST_PORT}";
        let result = interpolate(input).unwrap();

        assert_eq!(
            result,
            "baseUrl: https://companies.example.com\nport: 3000"
        );
    }

    #[test]
    fn test_default_used_when_unset_or_empty() {
        env::remove_var("INTERP_TEST_UNSET_DB");
        env::set_var("INTERP_TEST_EMPTY_DB", "");

        assert_eq!(
            interpolate("database: ${INTERP_TEST_UNSET_DB:-companies}").unwrap(),
            "database: companies"
        );
        assert_eq!(
            interpolate("database: ${INTERP_TEST_EMPTY_DB:-fallback}").unwrap(),
            "database: fallback"
        );
        assert_eq!(interpolate("x: ${INTERP_TEST_UNSET_DB:-}").unwrap(), "x: ");
    }

    #[test]
    fn test_value_overrides_default() {
        env::set_var("INTERP_TEST_LEVEL", "debug");
        assert_eq!(
            interpolate("logLevel: ${INTERP_TEST_LEVEL:-info}").unwrap(),
            "logLevel: debug"
        );
    }

    #[test]
    fn test_missing_variable_without_default() {
        env::remove_var("INTERP_TEST_MISSING");
        let result = interpolate("port: 8080\nbaseUrl: ${INTERP_TEST_MISSING}");
        assert!(matches!(
            result,
            Err(InterpolationError::MissingVariable { ref name, line: 2, ref key })
                if name == "INTERP_TEST_MISSING" && key.as_deref() == Some("baseUrl")
        ));
    }

    #[test]
    fn test_missing_variable_message_names_line_and_key() {
        env::remove_var("INTERP_TEST_NO_DB");
        let input = "store:\n  kind: file\n  database: ${INTERP_TEST_NO_DB}\n";
        let err = interpolate(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3 ('database'): environment variable 'INTERP_TEST_NO_DB' is not set and has no default value"
        );

        let json = "{\n  \"baseUrl\": \"${INTERP_TEST_NO_DB}\"\n}";
        assert!(matches!(
            interpolate(json),
            Err(InterpolationError::MissingVariable { line: 2, ref key, .. })
                if key.as_deref() == Some("baseUrl")
        ));
    }

    #[test]
    fn test_missing_variable_without_key() {
        env::remove_var("INTERP_TEST_BARE");
        let err = interpolate("${INTERP_TEST_BARE}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: environment variable 'INTERP_TEST_BARE' is not set and has no default value"
        );
    }

    #[test]
    fn test_line_endings_preserved() {
        env::set_var("INTERP_TEST_CRLF", "v");
        assert_eq!(
            interpolate("a: ${INTERP_TEST_CRLF}\r\nb: 1\n").unwrap(),
            "a: v\r\nb: 1\n"
        );
    }

    #[test]
    fn test_malformed_references_left_untouched() {
        let input = "a: ${INVALID-NAME}\nb: $PLAIN\nc: plain";
        assert_eq!(interpolate(input).unwrap(), input);
    }

    #[test]
    fn test_substituted_values_not_expanded_again() {
        env::set_var("INTERP_TEST_NESTED", "${INTERP_TEST_OTHER}");
        assert_eq!(
            interpolate("v: ${INTERP_TEST_NESTED}").unwrap(),
            "v: ${INTERP_TEST_OTHER}"
        );
    }

    #[test]
    fn test_result_size_limited() {
        env::set_var("INTERP_TEST_HUGE", "x".repeat(MAX_INTERPOLATED_LENGTH + 1));
        assert!(matches!(
            interpolate("${INTERP_TEST_HUGE}"),
            Err(InterpolationError::ResultTooLarge)
        ));
    }
}
