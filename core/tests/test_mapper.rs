// Document <-> object graph mapping: lossy rules, ordering and object ids.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use serde_json::json;

    use checklist_core::mapper::{from_graph, to_graph, to_graph_with};
    use checklist_core::model::{
        Category, Checklist, Document, Group, Item, ItemKind, ObjectGraph,
    };

    fn item(text: &str, kind: ItemKind) -> Item {
        Item { text: text.into(), kind, ..Item::default() }
    }

    fn single_checklist(category: &str, items: Vec<Item>) -> Document {
        Document {
            name: "Engine Start".into(),
            categories: vec![Category {
                name: category.into(),
                groups: vec![Group {
                    name: "Before Start".into(),
                    checklists: vec![Checklist { name: "Start".into(), items }],
                }],
            }],
            ..Document::default()
        }
    }

    fn engine_start() -> Document {
        single_checklist(
            "Normal",
            vec![
                item("Master ON", ItemKind::Check),
                Item {
                    note: Some("Check fuel".into()),
                    ..item("Note", ItemKind::Detail)
                },
            ],
        )
    }

    fn all_ids(graph: &ObjectGraph) -> Vec<String> {
        let mut ids = vec![graph.object_id.clone()];
        for c in &graph.groups {
            ids.push(c.object_id.clone());
            for g in &c.items {
                ids.push(g.object_id.clone());
                for cl in &g.items {
                    ids.push(cl.object_id.clone());
                    ids.extend(cl.items.iter().map(|i| i.object_id.clone()));
                }
            }
        }
        ids
    }

    // --- Export ---

    #[test]
    fn engine_start_exports_vendor_shape() {
        let graph = to_graph(&engine_start());

        assert_eq!(graph.metadata.name, "Engine Start");
        assert_eq!(graph.metadata.schema_version, "1.0");
        assert_eq!(graph.schema_version.as_deref(), Some("1.0"));

        let category = &graph.groups[0];
        assert_eq!(category.group_type, "normal");
        assert_eq!(category.items[0].title, "Before Start");

        let items = &category.items[0].items[0].items;
        assert_eq!(items[0].title, "Master ON");
        assert_eq!(items[0].kind, None);
        assert_eq!(items[1].kind.as_deref(), Some("comment"));
        assert_eq!(items[1].note.as_deref(), Some("Check fuel"));
    }

    #[test]
    fn check_item_json_has_no_type_key() {
        let graph = to_graph(&engine_start());
        let value = serde_json::to_value(&graph).unwrap();
        let first = &value["groups"][0]["items"][0]["items"][0]["items"][0];

        assert!(first.get("type").is_none());
        assert!(first.get("detail").is_none());
        assert!(first.get("note").is_none());
        assert_eq!(first["title"], "Master ON");
    }

    #[test]
    fn metadata_fields_are_always_emitted() {
        let graph = to_graph(&Document::default());
        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            value["metadata"],
            json!({"name": "", "tailNumber": "", "detail": "", "schemaVersion": "1.0"})
        );
        assert_eq!(value["groups"], json!([]));
    }

    #[test]
    fn graph_keys_are_in_wire_order() {
        let graph = to_graph_with(&Document::default(), &mut || "id".to_string());
        assert_eq!(
            serde_json::to_string(&graph).unwrap(),
            r#"{"metadata":{"name":"","tailNumber":"","detail":"","schemaVersion":"1.0"},"objectId":"id","groups":[],"schemaVersion":"1.0"}"#
        );
    }

    #[test]
    fn unknown_kind_exports_without_tag() {
        let doc = single_checklist("Normal", vec![item("Flaps", ItemKind::Other("warning".into()))]);
        let graph = to_graph(&doc);
        assert_eq!(graph.groups[0].items[0].items[0].items[0].kind, None);
    }

    #[test]
    fn empty_detail_and_note_are_omitted() {
        let doc = single_checklist(
            "Normal",
            vec![Item {
                detail: Some(String::new()),
                note: Some(String::new()),
                ..item("Mixture RICH", ItemKind::Check)
            }],
        );
        let entry = &to_graph(&doc).groups[0].items[0].items[0].items[0];
        assert_eq!(entry.detail, None);
        assert_eq!(entry.note, None);
    }

    #[test]
    fn categories_are_lowercased() {
        let graph = to_graph(&single_checklist("EMERGENCY Procedures", vec![]));
        assert_eq!(graph.groups[0].group_type, "emergency procedures");
    }

    // --- Object ids ---

    #[test]
    fn ids_are_unique_32_char_hex() {
        let graph = to_graph(&engine_start());
        let ids = all_ids(&graph);

        assert_eq!(ids.len(), 6);
        for id in &ids {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn repeated_exports_share_no_ids() {
        let doc = engine_start();
        let a: HashSet<_> = all_ids(&to_graph(&doc)).into_iter().collect();
        let b: HashSet<_> = all_ids(&to_graph(&doc)).into_iter().collect();
        assert!(a.is_disjoint(&b));
    }

    #[test]
    fn custom_id_source_is_drawn_parent_first() {
        let mut n = 0u32;
        let mut next = || {
            n += 1;
            format!("id{n}")
        };
        let graph = to_graph_with(&engine_start(), &mut next);

        assert_eq!(
            all_ids(&graph),
            vec!["id1", "id2", "id3", "id4", "id5", "id6"]
        );
    }

    // --- Import ---

    #[test]
    fn engine_start_round_trips_kinds_and_names() {
        let doc = from_graph(&to_graph(&engine_start()));
        assert_eq!(doc, engine_start());
    }

    #[test]
    fn category_case_is_normalized() {
        let doc = from_graph(&to_graph(&single_checklist("INTRO", vec![])));
        assert_eq!(doc.categories[0].name, "Intro");
    }

    #[test]
    fn unknown_kind_imports_as_check() {
        let doc = single_checklist("Normal", vec![item("Flaps", ItemKind::Other("warning".into()))]);
        let back = from_graph(&to_graph(&doc));
        assert_eq!(back.categories[0].groups[0].checklists[0].items[0].kind, ItemKind::Check);
    }

    #[test]
    fn order_is_preserved() {
        let items: Vec<Item> = ["Z", "A", "M", "B"].iter().map(|t| item(t, ItemKind::Check)).collect();
        let back = from_graph(&to_graph(&single_checklist("Normal", items)));
        let texts: Vec<_> = back.categories[0].groups[0].checklists[0]
            .items
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, ["Z", "A", "M", "B"]);
    }

    #[test]
    fn partial_graph_imports_with_defaults() {
        let graph: ObjectGraph = serde_json::from_value(json!({
            "groups": [{
                "groupType": "abnormal",
                "items": [{
                    "items": [{
                        "title": "Engine Fire",
                        "items": [
                            {"title": "Fuel OFF"},
                            {"title": "Land", "type": "comment", "detail": "", "note": null},
                            {"title": "Weird", "type": "unknown"}
                        ]
                    }]
                }]
            }]
        }))
        .unwrap();

        let doc = from_graph(&graph);
        assert_eq!(doc.name, "");
        assert_eq!(doc.schema_version, "1.0");

        let category = &doc.categories[0];
        assert_eq!(category.name, "Abnormal");
        assert_eq!(category.groups[0].name, "");

        let items = &category.groups[0].checklists[0].items;
        assert_eq!(items[0].kind, ItemKind::Check);
        assert_eq!(items[1].kind, ItemKind::Detail);
        assert_eq!(items[1].detail, None);
        assert_eq!(items[1].note, None);
        assert_eq!(items[2].kind, ItemKind::Check);
    }

    #[test]
    fn partial_metadata_imports_with_defaults() {
        let graph: ObjectGraph = serde_json::from_value(json!({
            "metadata": {"name": "Run-up", "detail": null},
            "groups": [],
            "schemaVersion": 2
        }))
        .unwrap();

        let doc = from_graph(&graph);
        assert_eq!(doc.name, "Run-up");
        assert_eq!(doc.tail_number, "");
        assert_eq!(doc.detail, "");
        assert_eq!(doc.schema_version, "2");
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn empty_graph_imports_as_empty_document() {
        let doc = from_graph(&ObjectGraph::default());
        assert_eq!(doc, Document::default());
    }

    // --- Properties ---

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            "[ -~]{0,12}",
            prop::option::of("[ -~]{1,12}"),
            prop::bool::ANY,
            prop::option::of("[ -~]{1,12}"),
        )
            .prop_map(|(text, detail, is_detail, note)| Item {
                text,
                detail,
                kind: if is_detail { ItemKind::Detail } else { ItemKind::Check },
                note,
            })
    }

    fn arb_document() -> impl Strategy<Value = Document> {
        let checklist = ("[ -~]{0,8}", prop::collection::vec(arb_item(), 0..4))
            .prop_map(|(name, items)| Checklist { name, items });
        let group = ("[ -~]{0,8}", prop::collection::vec(checklist, 0..3))
            .prop_map(|(name, checklists)| Group { name, checklists });
        // Canonical category names: capitalized ASCII words survive the trip.
        let category = ("[A-Z][a-z]{0,7}", prop::collection::vec(group, 0..3))
            .prop_map(|(name, groups)| Category { name, groups });

        ("[ -~]{0,12}", "[A-Z0-9]{0,6}", "[ -~]{0,12}", prop::collection::vec(category, 0..3))
            .prop_map(|(name, tail_number, detail, categories)| Document {
                name,
                tail_number,
                detail,
                categories,
                ..Document::default()
            })
    }

    proptest! {
        #[test]
        fn prop_canonical_documents_round_trip(doc in arb_document()) {
            prop_assert_eq!(from_graph(&to_graph(&doc)), doc);
        }

        #[test]
        fn prop_item_count_is_preserved(doc in arb_document()) {
            let graph = to_graph(&doc);
            let graph_items: usize = graph.groups.iter()
                .flat_map(|c| &c.items)
                .flat_map(|g| &g.items)
                .map(|cl| cl.items.len())
                .sum();
            prop_assert_eq!(graph_items, doc.item_count());
        }
    }
}
