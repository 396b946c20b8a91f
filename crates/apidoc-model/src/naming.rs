//! Display-name helpers.

use crate::item::ApiParameter;
use crate::ordered::OrderedMap;

/// Strip the `@scope/` prefix from a package name.
///
/// ```
/// use apidoc_model::unscoped_package_name;
///
/// assert_eq!(unscoped_package_name("@acme/widgets"), "widgets");
/// assert_eq!(unscoped_package_name("widgets"), "widgets");
/// ```
#[must_use]
pub fn unscoped_package_name(package_name: &str) -> &str {
    if package_name.starts_with('@') {
        if let Some((_, name)) = package_name.split_once('/') {
            return name;
        }
    }
    package_name
}

/// Short signature for listing tables: the name and parameter names, no types.
#[must_use]
pub fn concise_signature(name: &str, parameters: &OrderedMap<ApiParameter>) -> String {
    let params: Vec<&str> = parameters.keys().collect();
    format!("{name}({})", params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_package_name_without_slash() {
        assert_eq!(unscoped_package_name("@weird"), "@weird");
    }

    #[test]
    fn test_unscoped_package_name_nested_path() {
        assert_eq!(unscoped_package_name("@acme/core/extra"), "core/extra");
    }

    #[test]
    fn test_concise_signature_no_params() {
        assert_eq!(concise_signature("render", &OrderedMap::new()), "render()");
    }

    #[test]
    fn test_concise_signature_keeps_declaration_order() {
        let params: OrderedMap<ApiParameter> = [
            ("target", ApiParameter::default()),
            ("options", ApiParameter::default()),
        ]
        .into_iter()
        .collect();

        assert_eq!(concise_signature("mount", &params), "mount(target, options)");
    }
}
