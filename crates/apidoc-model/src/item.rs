//! API entity types.
//!
//! An API description is a tree of [`ApiItem`]s rooted at a package. Each
//! item is tagged with a `kind` field in JSON; kinds this crate does not know
//! deserialize to [`ApiItem::Unknown`] so newer description formats still load.

use std::fmt;

use apidoc_markup::MarkupBasicElement;
use serde::Deserialize;

use crate::ordered::OrderedMap;

/// Rich-text block.
pub type DocElements = Vec<MarkupBasicElement>;

/// Documentation fields shared by every entity kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiDocs {
    /// Short description.
    pub summary: DocElements,
    /// Extended discussion; empty when absent.
    pub remarks: DocElements,
    /// Preview (beta) flag.
    pub is_beta: bool,
}

impl ApiDocs {
    /// True if remarks are present and non-empty.
    #[must_use]
    pub fn has_remarks(&self) -> bool {
        !self.remarks.is_empty()
    }
}

/// A documentable API entity.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ApiItem {
    /// Package root.
    Package(ApiPackage),
    /// Class export.
    Class(ApiClass),
    /// Interface export.
    Interface(ApiInterface),
    /// Function export.
    Function(ApiFunction),
    /// Enumeration export.
    Enum(ApiEnum),
    /// Class or interface property.
    Property(ApiProperty),
    /// Class or interface method.
    Method(ApiMethod),
    /// Any kind tag not listed above.
    #[serde(other)]
    Unknown,
}

impl ApiItem {
    /// Kind tag as it appears in JSON.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Package(_) => "package",
            Self::Class(_) => "class",
            Self::Interface(_) => "interface",
            Self::Function(_) => "function",
            Self::Enum(_) => "enum",
            Self::Property(_) => "property",
            Self::Method(_) => "method",
            Self::Unknown => "unknown",
        }
    }
}

/// Package entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiPackage {
    /// Package name, possibly scoped (`@scope/name`).
    pub name: String,
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Exports in declaration order.
    pub exports: OrderedMap<ApiItem>,
}

/// Class entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiClass {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Members in declaration order.
    pub members: OrderedMap<ApiItem>,
}

/// Interface entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiInterface {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Members in declaration order.
    pub members: OrderedMap<ApiItem>,
}

/// Return value descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiReturnValue {
    /// Return type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Description of the returned value.
    pub description: DocElements,
}

/// Function or method parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiParameter {
    /// Parameter type, if declared.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Parameter description.
    pub description: DocElements,
}

/// Function entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiFunction {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Full declaration signature.
    pub signature: String,
    /// Return value, if documented.
    pub return_value: Option<ApiReturnValue>,
    /// Parameters in declaration order.
    pub parameters: OrderedMap<ApiParameter>,
}

/// Method entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiMethod {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Full declaration signature.
    pub signature: String,
    /// Access modifier (e.g. "public", "protected").
    pub access_modifier: Option<String>,
    /// Return value, if documented.
    pub return_value: Option<ApiReturnValue>,
    /// Parameters in declaration order.
    pub parameters: OrderedMap<ApiParameter>,
}

/// Property entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiProperty {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Declared type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Access modifier (e.g. "public", "protected").
    pub access_modifier: Option<String>,
}

/// Enumeration entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiEnum {
    /// Documentation.
    #[serde(flatten)]
    pub docs: ApiDocs,
    /// Members in declaration order.
    pub values: OrderedMap<ApiEnumMember>,
}

/// Enumeration member.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiEnumMember {
    /// Literal initializer, if declared.
    pub value: Option<EnumValue>,
    /// Member description.
    pub summary: DocElements,
}

/// Literal enum initializer: string or number.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Numeric initializer.
    Number(serde_json::Number),
    /// String initializer, kept verbatim.
    Text(String),
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
