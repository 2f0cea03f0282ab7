// Adapters layer: concrete directory sources for external systems (CMS over http, local exports).

pub mod file;
pub mod http;

use crate::domain::model::RawEntry;

/// Property under which the child list lives when the body is a full node
/// rendition rather than a bare array.
pub const DEFAULT_LIST_PROPERTY: &str = "list";

/// Extracts the child records from a JSON rendition of the list location.
///
/// Accepted shapes, children taken in document order:
/// - an array of entry objects;
/// - an object carrying `list_property` whose value is an array or an
///   object of child objects;
/// - a bare object whose object-valued members are the entries.
/// Non-object members are skipped; anything else yields no children.
pub fn children_from_json(body: &serde_json::Value, list_property: &str) -> Vec<RawEntry> {
    match body {
        serde_json::Value::Array(items) => array_children(items),
        serde_json::Value::Object(map) => match map.get(list_property) {
            Some(serde_json::Value::Array(items)) => array_children(items),
            Some(serde_json::Value::Object(children)) => object_children(children),
            Some(_) => Vec::new(),
            None => object_children(map),
        },
        _ => Vec::new(),
    }
}

fn array_children(items: &[serde_json::Value]) -> Vec<RawEntry> {
    items
        .iter()
        .filter_map(|item| match item {
            serde_json::Value::Object(properties) => Some(raw_entry(properties)),
            _ => None,
        })
        .collect()
}

fn object_children(map: &serde_json::Map<String, serde_json::Value>) -> Vec<RawEntry> {
    map.values()
        .filter_map(|value| match value {
            serde_json::Value::Object(properties) => Some(raw_entry(properties)),
            _ => None,
        })
        .collect()
}

fn raw_entry(properties: &serde_json::Map<String, serde_json::Value>) -> RawEntry {
    RawEntry::new(
        properties
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_body() {
        let body: serde_json::Value = serde_json::from_str(
            r#"[
                {"value": "eng", "title": "Engineering"},
                {"value": "hr", "title": "HR"}
            ]"#,
        )
        .unwrap();

        let children = children_from_json(&body, DEFAULT_LIST_PROPERTY);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].properties["value"], "eng");
        assert_eq!(children[1].properties["value"], "hr");
    }

    #[test]
    fn test_array_body_skips_non_object_items() {
        let body: serde_json::Value =
            serde_json::from_str(r#"[{"value": "eng"}, "stray", 42]"#).unwrap();

        let children = children_from_json(&body, DEFAULT_LIST_PROPERTY);
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_wrapped_list_array() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{
                "jcr:title": "Departments",
                "list": [
                    {"value": "eng", "title": "Engineering"}
                ]
            }"#,
        )
        .unwrap();

        let children = children_from_json(&body, "list");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].properties["title"], "Engineering");
    }

    #[test]
    fn test_wrapped_list_object_keeps_document_order() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{
                "list": {
                    "zeta": {"value": "z"},
                    "alpha": {"value": "a"},
                    "mid": {"value": "m"}
                }
            }"#,
        )
        .unwrap();

        let children = children_from_json(&body, "list");
        let keys: Vec<&str> = children
            .iter()
            .map(|c| c.properties["value"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_bare_object_body_skips_scalar_members() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{
                "jcr:primaryType": "nt:unstructured",
                "item0": {"value": "eng", "title": "Engineering"},
                "item1": {"value": "hr", "title": "HR"}
            }"#,
        )
        .unwrap();

        let children = children_from_json(&body, "list");
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_scalar_list_property_yields_no_children() {
        let body: serde_json::Value =
            serde_json::from_str(r#"{"list": "not a list"}"#).unwrap();

        assert!(children_from_json(&body, "list").is_empty());
    }

    #[test]
    fn test_scalar_body_yields_no_children() {
        assert!(children_from_json(&serde_json::json!("departments"), "list").is_empty());
        assert!(children_from_json(&serde_json::json!(null), "list").is_empty());
    }
}
