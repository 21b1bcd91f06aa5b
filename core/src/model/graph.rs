// ## 📂 File: `src/model/graph.rs`

//! model/graph.rs
//! The vendor object graph carried as the container payload.
//!
//! Wire notes:
//! - Field order of each struct is the JSON key order on the wire.
//! - Every node carries an `objectId`; ids are written on export and
//!   ignored on import.
//! - Optional item fields (`detail`, `type`, `note`) are omitted when absent.
//! - Every field reads with a default, so partially populated payloads
//!   still decode.

use serde::{Deserialize, Serialize};

use crate::model::de::{opt_scalar_string, scalar_string, seq_or_empty};

/// Root payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectGraph {
    pub metadata: GraphMetadata,

    #[serde(rename = "objectId", deserialize_with = "scalar_string")]
    pub object_id: String,

    #[serde(deserialize_with = "seq_or_empty")]
    pub groups: Vec<CategoryEntry>,

    #[serde(
        rename = "schemaVersion",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_scalar_string"
    )]
    pub schema_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphMetadata {
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(rename = "tailNumber", deserialize_with = "scalar_string")]
    pub tail_number: String,

    #[serde(deserialize_with = "scalar_string")]
    pub detail: String,

    #[serde(rename = "schemaVersion", deserialize_with = "scalar_string")]
    pub schema_version: String,
}

/// One per document category; `groupType` is the lower-cased category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryEntry {
    #[serde(rename = "groupType", deserialize_with = "scalar_string")]
    pub group_type: String,

    #[serde(deserialize_with = "seq_or_empty")]
    pub items: Vec<GroupEntry>,

    #[serde(rename = "objectId", deserialize_with = "scalar_string")]
    pub object_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,

    #[serde(deserialize_with = "seq_or_empty")]
    pub items: Vec<ChecklistEntry>,

    #[serde(rename = "objectId", deserialize_with = "scalar_string")]
    pub object_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,

    #[serde(deserialize_with = "seq_or_empty")]
    pub items: Vec<ItemEntry>,

    #[serde(rename = "objectId", deserialize_with = "scalar_string")]
    pub object_id: String,
}

/// Leaf step. `type` is either absent (check) or `"comment"` (detail).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_scalar_string")]
    pub detail: Option<String>,

    #[serde(rename = "objectId", deserialize_with = "scalar_string")]
    pub object_id: String,

    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_scalar_string"
    )]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "opt_scalar_string")]
    pub note: Option<String>,
}
