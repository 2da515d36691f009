use easyoff_json_model::{
    merge_model, merge_model_array, to_model, to_model_array, to_plain, to_text, Raw,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Item {
    id: i64,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Page {
    page: u32,
    total: u32,
    data: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Contact {
    email: String,
    phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Profile {
    name: String,
    contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct WithSecret {
    name: String,
    #[serde(skip_serializing)]
    secret: String,
}

#[test]
fn nested_hint_path_end_to_end() {
    let raw = json!({"page": 2, "total": 15, "data": [{"id": 1, "name": "A"}]});
    let page: Page = to_model(raw);
    assert_eq!(page.page, 2);
    assert_eq!(page.total, 15);
    assert_eq!(
        page.data,
        vec![Item {
            id: 1,
            name: "A".to_string()
        }]
    );
}

#[test]
fn to_model_accepts_text() {
    let page: Page = to_model("{\"page\": 3, \"total\": 1, \"data\": []}");
    assert_eq!(page.page, 3);
}

#[test]
fn to_model_never_fails_outward() {
    // Absent, blank, non-JSON, unparsable, and mis-shaped input all
    // yield the default model.
    assert_eq!(to_model::<Page, _>(Raw::Absent), Page::default());
    assert_eq!(to_model::<Page, _>(""), Page::default());
    assert_eq!(to_model::<Page, _>("not json"), Page::default());
    assert_eq!(to_model::<Page, _>("{broken"), Page::default());
    assert_eq!(to_model::<Page, _>(json!({"page": "two"})), Page::default());
    assert_eq!(to_model::<Page, _>(None::<&str>), Page::default());
}

#[test]
fn missing_keys_keep_declared_defaults() {
    let page: Page = to_model(json!({"page": 4}));
    assert_eq!(page.page, 4);
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
}

#[test]
fn array_failure_is_absent_not_default() {
    let items: Option<Vec<Item>> = to_model_array(json!([{"id": 1, "name": "A"}]));
    assert_eq!(
        items,
        Some(vec![Item {
            id: 1,
            name: "A".to_string()
        }])
    );

    assert_eq!(to_model_array::<Item, _>("not json"), None);
    assert_eq!(to_model_array::<Item, _>("[1,"), None);
    assert_eq!(to_model_array::<Item, _>(json!({"id": 1})), None);
    assert_eq!(to_model_array::<Item, _>(Raw::Absent), None);
}

#[test]
fn round_trip_reproduces_field_values() {
    let item = Item {
        id: 12,
        name: "overtime".to_string(),
    };
    let text = to_text(Some(&item)).unwrap();
    let back: Item = to_model(text);
    assert_eq!(back, item);
}

#[test]
fn excluded_fields_drop_out_of_output() {
    let model = WithSecret {
        name: "n".to_string(),
        secret: "hunter2".to_string(),
    };
    assert_eq!(to_text(Some(&model)).unwrap(), "{\"name\":\"n\"}");
    assert_eq!(to_plain(Some(&model)), Some(json!({"name": "n"})));

    // Round-trip is idempotent modulo the excluded field.
    let back: WithSecret = to_model(to_text(Some(&model)));
    assert_eq!(back.name, "n");
    assert_eq!(back.secret, "");
}

#[test]
fn serialize_absent_input_is_absent_output() {
    assert_eq!(to_text::<Item>(None), None);
    assert_eq!(to_plain::<Item>(None), None);
}

#[test]
fn merge_updates_in_place_and_keeps_missing_fields() {
    let mut page = Page {
        page: 1,
        total: 9,
        data: vec![Item {
            id: 5,
            name: "kept".to_string(),
        }],
    };
    assert!(merge_model(&mut page, json!({"page": 2})));
    assert_eq!(page.page, 2);
    assert_eq!(page.total, 9);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn merge_recurses_into_nested_models() {
    let mut profile = Profile {
        name: "A".to_string(),
        contact: Contact {
            email: "a@x".to_string(),
            phone: "123".to_string(),
        },
    };
    assert!(merge_model(
        &mut profile,
        json!({"contact": {"email": "b@x"}})
    ));
    assert_eq!(profile.contact.email, "b@x");
    assert_eq!(profile.contact.phone, "123");
    assert_eq!(profile.name, "A");
}

#[test]
fn merge_accepts_text_input() {
    let mut item = Item {
        id: 1,
        name: "old".to_string(),
    };
    assert!(merge_model(&mut item, "{\"name\": \"new\"}"));
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "new");
}

#[test]
fn failed_merge_leaves_existing_untouched() {
    let mut item = Item {
        id: 1,
        name: "old".to_string(),
    };
    let before = item.clone();

    assert!(!merge_model(&mut item, Raw::Absent));
    assert!(!merge_model(&mut item, "not json"));
    assert!(!merge_model(&mut item, "{broken"));
    assert!(!merge_model(&mut item, json!({"id": "five"})));
    assert_eq!(item, before);
}

#[test]
fn array_merge_is_element_wise_by_index() {
    let mut items = vec![
        Item {
            id: 1,
            name: "a".to_string(),
        },
        Item {
            id: 2,
            name: "b".to_string(),
        },
    ];
    assert!(merge_model_array(
        &mut items,
        json!([{"name": "a2"}, {"name": "b2"}])
    ));
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].name, "a2");
    assert_eq!(items[1].id, 2);
    assert_eq!(items[1].name, "b2");
}

#[test]
fn array_merge_takes_the_raw_length() {
    let mut items = vec![
        Item {
            id: 1,
            name: "a".to_string(),
        },
        Item {
            id: 2,
            name: "b".to_string(),
        },
    ];
    // Shorter raw array truncates.
    assert!(merge_model_array(&mut items, json!([{"name": "only"}])));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);

    // Longer raw array appends fresh, default-based models.
    assert!(merge_model_array(
        &mut items,
        json!([{"name": "still"}, {"id": 7, "name": "fresh"}])
    ));
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(
        items[1],
        Item {
            id: 7,
            name: "fresh".to_string()
        }
    );
}

#[test]
fn failed_array_merge_leaves_existing_untouched() {
    let mut items = vec![Item {
        id: 1,
        name: "a".to_string(),
    }];
    let before = items.clone();

    assert!(!merge_model_array(&mut items, json!({"not": "an array"})));
    assert!(!merge_model_array(&mut items, json!([{"id": "bad"}])));
    assert!(!merge_model_array(&mut items, Raw::Absent));
    assert_eq!(items, before);
}
