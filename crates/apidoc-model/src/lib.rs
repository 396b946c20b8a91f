//! API description model for apidoc.
//!
//! This crate provides:
//! - Entity types ([`ApiItem`] and the per-kind structs) deserialized from
//!   `*.api.json` files
//! - [`ApiJsonFile`] loader with [`LoadError`]
//! - [`OrderedMap`], which keeps JSON object entries in document order
//! - Naming helpers used by page generators
//!
//! # Example
//!
//! ```
//! use apidoc_model::{ApiItem, ApiJsonFile};
//!
//! let json = r#"{"kind": "package", "name": "demo", "exports": {
//!     "Widget": {"kind": "class", "members": {}}
//! }}"#;
//! let file = ApiJsonFile::parse(json, "demo.api.json").unwrap();
//!
//! assert_eq!(file.package_name, "demo");
//! assert!(matches!(file.doc_package.exports.get("Widget"), Some(ApiItem::Class(_))));
//! ```

mod item;
mod loader;
mod naming;
mod ordered;

pub use item::{
    ApiClass, ApiDocs, ApiEnum, ApiEnumMember, ApiFunction, ApiInterface, ApiItem, ApiMethod,
    ApiPackage, ApiParameter, ApiProperty, ApiReturnValue, DocElements, EnumValue,
};
pub use loader::{API_JSON_SUFFIX, ApiJsonFile, LoadError, discover_api_json_files};
pub use naming::{concise_signature, unscoped_package_name};
pub use ordered::OrderedMap;
