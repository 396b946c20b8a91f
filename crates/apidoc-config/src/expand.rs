//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Bare `$VAR` syntax is left as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Variable that was referenced but not set.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("APIDOC_TEST_EXPAND_SIMPLE", "api");
        }
        let result = expand_env("${APIDOC_TEST_EXPAND_SIMPLE}", "input.dir").unwrap();
        assert_eq!(result, "api");
        unsafe {
            std::env::remove_var("APIDOC_TEST_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("APIDOC_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${APIDOC_TEST_EXPAND_UNSET:-build/api}", "input.dir").unwrap();
        assert_eq!(result, "build/api");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("APIDOC_TEST_EXPAND_ROOT", "/srv");
        }
        let result = expand_env("${APIDOC_TEST_EXPAND_ROOT}/docs/api", "output.dir").unwrap();
        assert_eq!(result, "/srv/docs/api");
        unsafe {
            std::env::remove_var("APIDOC_TEST_EXPAND_ROOT");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("APIDOC_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${APIDOC_TEST_EXPAND_MISSING}", "output.dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("APIDOC_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("output.dir"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("out/$VAR", "output.dir").unwrap();
        assert_eq!(result, "out/$VAR");
    }
}
