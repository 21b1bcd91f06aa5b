// ## 📂 File: `src/mapper/from_graph.rs`

//! mapper/from_graph.rs
//! ObjectGraph → Document (import direction). Total: never fails.

use tracing::debug;

use crate::constants::{DETAIL_ITEM_TAG, SCHEMA_VERSION_DEFAULT};
use crate::model::{
    Category, CategoryEntry, Checklist, ChecklistEntry, Document, Group, GroupEntry, Item,
    ItemEntry, ItemKind, ObjectGraph,
};
use crate::utils::capitalize_first;

/// Map a vendor graph back to an editable document.
pub fn from_graph(graph: &ObjectGraph) -> Document {
    let doc = Document {
        name: graph.metadata.name.clone(),
        tail_number: graph.metadata.tail_number.clone(),
        detail: graph.metadata.detail.clone(),
        schema_version: graph
            .schema_version
            .clone()
            .unwrap_or_else(|| SCHEMA_VERSION_DEFAULT.to_string()),
        categories: graph.groups.iter().map(category).collect(),
    };

    debug!(
        categories = doc.categories.len(),
        items = doc.item_count(),
        "object graph mapped to document"
    );
    doc
}

fn category(entry: &CategoryEntry) -> Category {
    Category {
        name: capitalize_first(&entry.group_type),
        groups: entry.items.iter().map(group).collect(),
    }
}

fn group(entry: &GroupEntry) -> Group {
    Group {
        name: entry.title.clone(),
        checklists: entry.items.iter().map(checklist).collect(),
    }
}

fn checklist(entry: &ChecklistEntry) -> Checklist {
    Checklist {
        name: entry.title.clone(),
        items: entry.items.iter().map(item).collect(),
    }
}

fn item(entry: &ItemEntry) -> Item {
    let kind = match entry.kind.as_deref() {
        Some(DETAIL_ITEM_TAG) => ItemKind::Detail,
        _ => ItemKind::Check,
    };

    Item {
        text: entry.title.clone(),
        detail: entry.detail.clone().filter(|s| !s.is_empty()),
        kind,
        note: entry.note.clone().filter(|s| !s.is_empty()),
    }
}
