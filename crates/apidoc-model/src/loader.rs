//! Loading `*.api.json` description files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::item::{ApiItem, ApiPackage};
use crate::naming::unscoped_package_name;

/// File suffix of API description files.
pub const API_JSON_SUFFIX: &str = ".api.json";

/// Error loading an API description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// File is not well-formed JSON or does not match the description schema.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Top-level item is not a package.
    #[error("{} does not describe a package (found kind `{kind}`)", path.display())]
    NotAPackage {
        /// File path.
        path: PathBuf,
        /// Kind tag that was found instead.
        kind: &'static str,
    },
    /// Package has no name.
    #[error("{} describes a package without a name", path.display())]
    MissingName {
        /// File path.
        path: PathBuf,
    },
    /// Unscoped package name still contains a path separator.
    #[error("{} has invalid package name `{name}`", path.display())]
    InvalidName {
        /// File path.
        path: PathBuf,
        /// Package name as written.
        name: String,
    },
}

/// A loaded API description.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiJsonFile {
    /// Path the description was loaded from.
    pub path: PathBuf,
    /// Package name, possibly scoped.
    pub package_name: String,
    /// Package entity.
    pub doc_package: ApiPackage,
}

impl ApiJsonFile {
    /// Read and parse a description file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), package = %file.package_name, "Loaded API description");
        Ok(file)
    }

    /// Parse description JSON; `path` is only used for error reporting.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let item: ApiItem = match serde_json::from_str(content) {
            Ok(item) => item,
            Err(source) => return Err(LoadError::Parse { path, source }),
        };
        let ApiItem::Package(doc_package) = item else {
            return Err(LoadError::NotAPackage {
                path,
                kind: item.kind(),
            });
        };
        if doc_package.name.is_empty() {
            return Err(LoadError::MissingName { path });
        }
        if unscoped_package_name(&doc_package.name).contains(['/', '\\']) {
            return Err(LoadError::InvalidName {
                path,
                name: doc_package.name,
            });
        }
        Ok(Self {
            path,
            package_name: doc_package.name.clone(),
            doc_package,
        })
    }
}

/// List `*.api.json` files directly inside `dir`, sorted by file name.
///
/// Returns an empty list if the directory doesn't exist.
pub fn discover_api_json_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let is_file = entry.file_type().is_ok_and(|t| t.is_file());
        let name = entry.file_name();
        if is_file && name.to_string_lossy().ends_with(API_JSON_SUFFIX) {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const DEMO: &str = r#"{
        "kind": "package",
        "name": "@acme/demo",
        "summary": [{"kind": "text", "text": "Demo package."}],
        "exports": {
            "Widget": {"kind": "class", "summary": [], "members": {}}
        }
    }"#;

    #[test]
    fn test_parse_package() {
        let file = ApiJsonFile::parse(DEMO, "demo.api.json").unwrap();

        assert_eq!(file.package_name, "@acme/demo");
        assert_eq!(file.path, PathBuf::from("demo.api.json"));
        assert_eq!(file.doc_package.exports.keys().collect::<Vec<_>>(), vec!["Widget"]);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = ApiJsonFile::parse("{not json", "bad.api.json").unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse bad.api.json"), "{err}");
    }

    #[test]
    fn test_parse_rejects_non_package() {
        let err = ApiJsonFile::parse(r#"{"kind": "class"}"#, "x.api.json").unwrap_err();

        assert!(matches!(err, LoadError::NotAPackage { kind: "class", .. }));
    }

    #[test]
    fn test_parse_rejects_unnamed_package() {
        let err = ApiJsonFile::parse(r#"{"kind": "package", "exports": {}}"#, "x.api.json")
            .unwrap_err();

        assert!(matches!(err, LoadError::MissingName { .. }));
    }

    #[test]
    fn test_parse_rejects_nested_package_name() {
        let json = r#"{"kind": "package", "name": "@acme/core/extra", "exports": {}}"#;

        let err = ApiJsonFile::parse(json, "extra.api.json").unwrap_err();

        assert!(
            matches!(err, LoadError::InvalidName { ref name, .. } if name == "@acme/core/extra")
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("demo.api.json");
        fs::write(&path, DEMO).unwrap();

        let file = ApiJsonFile::load_from_file(&path).unwrap();

        assert_eq!(file.path, path);
        assert_eq!(file.package_name, "@acme/demo");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();

        let err = ApiJsonFile::load_from_file(temp.path().join("missing.api.json")).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_discover_api_json_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.api.json"), DEMO).unwrap();
        fs::write(temp.path().join("alpha.api.json"), DEMO).unwrap();
        fs::write(temp.path().join("notes.json"), "{}").unwrap();
        fs::create_dir(temp.path().join("nested.api.json")).unwrap();

        let files = discover_api_json_files(temp.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha.api.json", "zeta.api.json"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();

        let files = discover_api_json_files(&temp.path().join("nope")).unwrap();

        assert!(files.is_empty());
    }
}
