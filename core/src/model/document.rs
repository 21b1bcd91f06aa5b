// ## 📂 File: `src/model/document.rs`

//! model/document.rs
//! The editable checklist document (YAML side).
//!
//! Layout: Document → Category → Group → Checklist → Item, every level an
//! ordered sequence. Field names are the YAML keys users edit by hand.
//!
//! Notes:
//! - Missing fields read as defaults; nothing here validates semantics.
//! - Field order of each struct is the YAML emission order.
//! - `description` is accepted as a legacy spelling of the root `detail`;
//!   when both are present `detail` is used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{item_kinds, SCHEMA_VERSION_DEFAULT};
use crate::model::de::{opt_scalar_string, scalar_string, seq_or_empty};

fn default_schema_version() -> String {
    SCHEMA_VERSION_DEFAULT.to_string()
}

/// Root of the editable checklist tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct Document {
    #[serde(rename = "checklist_name")]
    pub name: String,

    #[serde(rename = "tailNumber")]
    pub tail_number: String,

    pub detail: String,

    #[serde(rename = "schemaVersion")]
    pub schema_version: String,

    pub categories: Vec<Category>,
}

/// Read-side shape of `Document`. Keeps the legacy `description` key
/// apart so a file carrying both keys still loads; `detail` wins.
#[derive(Deserialize)]
struct DocumentRepr {
    #[serde(rename = "checklist_name", default, deserialize_with = "scalar_string")]
    name: String,

    #[serde(rename = "tailNumber", default, deserialize_with = "scalar_string")]
    tail_number: String,

    #[serde(default, deserialize_with = "opt_scalar_string")]
    detail: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar_string")]
    description: Option<String>,

    #[serde(
        rename = "schemaVersion",
        default = "default_schema_version",
        deserialize_with = "scalar_string"
    )]
    schema_version: String,

    #[serde(default, deserialize_with = "seq_or_empty")]
    categories: Vec<Category>,
}

impl From<DocumentRepr> for Document {
    fn from(raw: DocumentRepr) -> Self {
        Self {
            name: raw.name,
            tail_number: raw.tail_number,
            detail: raw.detail.or(raw.description).unwrap_or_default(),
            schema_version: raw.schema_version,
            categories: raw.categories,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self {
            name: String::new(),
            tail_number: String::new(),
            detail: String::new(),
            schema_version: default_schema_version(),
            categories: Vec::new(),
        }
    }
}

impl Document {
    /// Total number of items across the whole tree.
    pub fn item_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.groups)
            .flat_map(|g| &g.checklists)
            .map(|cl| cl.items.len())
            .sum()
    }
}

/// Top-level classification (e.g. "Normal", "Emergency").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "seq_or_empty")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "seq_or_empty")]
    pub checklists: Vec<Checklist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "seq_or_empty")]
    pub items: Vec<Item>,
}

/// One checklist line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "scalar_string")]
    pub text: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_scalar_string"
    )]
    pub detail: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: ItemKind,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_scalar_string"
    )]
    pub note: Option<String>,
}

/// Item kind. Unknown kinds are kept verbatim so a document survives a
/// load/save cycle untouched; they carry no vendor tag on export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ItemKind {
    #[default]
    Check,
    Detail,
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Check => item_kinds::CHECK,
            ItemKind::Detail => item_kinds::DETAIL,
            ItemKind::Other(s) => s,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ItemKind {
    fn from(raw: &str) -> Self {
        match raw {
            item_kinds::CHECK => ItemKind::Check,
            item_kinds::DETAIL => ItemKind::Detail,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for ItemKind {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(ItemKind::from).unwrap_or_default()
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
