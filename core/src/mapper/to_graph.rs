// ## 📂 File: `src/mapper/to_graph.rs`

//! mapper/to_graph.rs
//! Document → ObjectGraph (export direction).

use tracing::debug;

use crate::constants::DETAIL_ITEM_TAG;
use crate::mapper::ids::{ObjectIdSource, UuidIdSource};
use crate::model::{
    Category, CategoryEntry, Checklist, ChecklistEntry, Document, GraphMetadata, Group,
    GroupEntry, Item, ItemEntry, ItemKind, ObjectGraph,
};

/// Map a document to the vendor graph with random UUID object ids.
pub fn to_graph(doc: &Document) -> ObjectGraph {
    to_graph_with(doc, &mut UuidIdSource)
}

/// Map a document to the vendor graph, drawing object ids from `ids`.
///
/// Ids are drawn parent-first, in document order.
pub fn to_graph_with<S: ObjectIdSource + ?Sized>(doc: &Document, ids: &mut S) -> ObjectGraph {
    let object_id = ids.next_id();

    let groups: Vec<CategoryEntry> = doc
        .categories
        .iter()
        .map(|category| category_entry(category, ids))
        .collect();

    debug!(
        categories = groups.len(),
        items = doc.item_count(),
        "document mapped to object graph"
    );

    ObjectGraph {
        metadata: GraphMetadata {
            name: doc.name.clone(),
            tail_number: doc.tail_number.clone(),
            detail: doc.detail.clone(),
            schema_version: doc.schema_version.clone(),
        },
        object_id,
        groups,
        schema_version: Some(doc.schema_version.clone()),
    }
}

fn category_entry<S: ObjectIdSource + ?Sized>(category: &Category, ids: &mut S) -> CategoryEntry {
    let object_id = ids.next_id();
    CategoryEntry {
        group_type: category.name.to_lowercase(),
        items: category.groups.iter().map(|g| group_entry(g, ids)).collect(),
        object_id,
    }
}

fn group_entry<S: ObjectIdSource + ?Sized>(group: &Group, ids: &mut S) -> GroupEntry {
    let object_id = ids.next_id();
    GroupEntry {
        title: group.name.clone(),
        items: group.checklists.iter().map(|cl| checklist_entry(cl, ids)).collect(),
        object_id,
    }
}

fn checklist_entry<S: ObjectIdSource + ?Sized>(checklist: &Checklist, ids: &mut S) -> ChecklistEntry {
    let object_id = ids.next_id();
    ChecklistEntry {
        title: checklist.name.clone(),
        items: checklist.items.iter().map(|item| item_entry(item, ids)).collect(),
        object_id,
    }
}

fn item_entry<S: ObjectIdSource + ?Sized>(item: &Item, ids: &mut S) -> ItemEntry {
    let kind = match item.kind {
        ItemKind::Detail => Some(DETAIL_ITEM_TAG.to_string()),
        ItemKind::Check | ItemKind::Other(_) => None,
    };

    ItemEntry {
        title: item.text.clone(),
        detail: non_empty(&item.detail),
        object_id: ids.next_id(),
        kind,
        note: non_empty(&item.note),
    }
}

#[inline]
fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|s| !s.is_empty()).cloned()
}
