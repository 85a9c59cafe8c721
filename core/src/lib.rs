use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

mod document;
mod properties;
mod report;
mod sample;

pub use document::{document_root, load_document};
pub use properties::{Padding, TokenProperties};
pub use report::{report, Summary};
pub use sample::{persist_sample, DEFAULT_SAMPLE_SIZE};

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected an object at the top level of the export, found {0}")]
    UnexpectedStructure(&'static str),
}

/// A matched node, detached from the tree it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedComponent {
    pub name: String,
    /// Copied verbatim; `null` when the node has no `id`.
    pub id: Value,
    /// Slash-joined names of the ancestors, root first. Empty for the root.
    pub path: String,
    pub properties: TokenProperties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMatcher {
    pub node_type: String,
    pub name_pattern: String,
}
impl Default for ComponentMatcher {
    fn default() -> Self {
        Self {
            node_type: "COMPONENT".to_string(),
            name_pattern: "Button".to_string(),
        }
    }
}
impl ComponentMatcher {
    pub fn new(node_type: impl Into<String>, name_pattern: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            name_pattern: name_pattern.into(),
        }
    }
    pub fn is_match(&self, node: &Value) -> bool {
        let Value::Object(map) = node else {
            return false;
        };
        let type_matches = map.get("type").and_then(Value::as_str) == Some(self.node_type.as_str());
        type_matches && node_name(node).unwrap_or("").contains(&self.name_pattern)
    }
    pub fn find(&self, node: &Value, path: &str) -> Vec<ExtractedComponent> {
        let mut out = Vec::new();
        self.walk(node, path, &mut out);
        out
    }
    fn walk(&self, node: &Value, path: &str, out: &mut Vec<ExtractedComponent>) {
        let Value::Object(map) = node else {
            return;
        };
        if self.is_match(node) {
            out.push(ExtractedComponent {
                name: node_name(node).unwrap_or_default().to_string(),
                id: map.get("id").cloned().unwrap_or(Value::Null),
                path: path.to_string(),
                properties: TokenProperties::from_node(map),
            });
        }
        if let Some(Value::Array(children)) = map.get("children") {
            let path = format!("{path}/{}", node_name(node).unwrap_or("unnamed"));
            for child in children {
                self.walk(child, &path, out);
            }
        }
    }
}

/// Pre-order walk collecting every `COMPONENT` whose name contains `Button`.
pub fn find_components(node: &Value, path: &str) -> Vec<ExtractedComponent> {
    ComponentMatcher::default().find(node, path)
}

fn node_name(node: &Value) -> Option<&str> {
    node.get("name").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_component_without_styles() {
        let doc = json!({"type": "COMPONENT", "name": "Button/Primary", "id": "1:1", "children": []});
        let found = find_components(&doc, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Button/Primary");
        assert_eq!(found[0].id, "1:1");
        assert_eq!(found[0].path, "");
        assert_eq!(serde_json::to_value(&found[0].properties).unwrap(), json!({}));
    }

    #[test]
    fn name_match_is_case_sensitive_substring() {
        let doc = json!({
            "name": "Page",
            "children": [
                {"type": "COMPONENT", "name": "button-primary"},
                {"type": "COMPONENT", "name": "ButtonPrimary"},
                {"type": "COMPONENT", "name": "Size=Large, Kind=IconButton"},
                {"type": "INSTANCE", "name": "Button"},
                {"type": "COMPONENT"}
            ]
        });
        let names = find_components(&doc, "")
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["ButtonPrimary", "Size=Large, Kind=IconButton"]);
    }

    #[test]
    fn path_excludes_own_name() {
        let doc = json!({
            "name": "Document",
            "children": [{
                "name": "Components",
                "children": [{
                    "type": "COMPONENT_SET",
                    "name": "Button",
                    "children": [{"type": "COMPONENT", "name": "State=Default", "id": "2:3"},
                                 {"type": "COMPONENT", "name": "Button/Hover", "id": "2:4"}]
                }]
            }]
        });
        let found = find_components(&doc, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "/Document/Components/Button");
    }

    #[test]
    fn unnamed_parents_and_pre_order() {
        let doc = json!({
            "children": [
                {"type": "COMPONENT", "name": "Button A", "children": [
                    {"type": "COMPONENT", "name": "Button A.1"}
                ]},
                {"name": 42, "children": [{"type": "COMPONENT", "name": "Button B"}]},
                [{"type": "COMPONENT", "name": "Button in bare array"}],
                "Button",
                null
            ]
        });
        let found = find_components(&doc, "");
        let summary = found
            .iter()
            .map(|c| (c.name.as_str(), c.path.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            [
                ("Button A", "/unnamed"),
                ("Button A.1", "/unnamed/Button A"),
                ("Button B", "/unnamed/unnamed"),
            ]
        );
    }

    #[test]
    fn id_is_passed_through_verbatim() {
        let doc = json!({"children": [
            {"type": "COMPONENT", "name": "Button", "id": 42},
            {"type": "COMPONENT", "name": "Button", "id": {"local": "1:7"}}
        ]});
        let found = find_components(&doc, "");
        assert_eq!(found[0].id, json!(42));
        assert_eq!(found[1].id, json!({"local": "1:7"}));
        assert_eq!(serde_json::to_value(&found[0]).unwrap()["id"], json!(42));
    }

    #[test]
    fn non_array_children_are_ignored() {
        let doc = json!({"name": "x", "children": {"type": "COMPONENT", "name": "Button"}});
        assert!(find_components(&doc, "").is_empty());
    }

    #[test]
    fn custom_matcher() {
        let doc = json!({"children": [
            {"type": "COMPONENT", "name": "Button"},
            {"type": "COMPONENT_SET", "name": "Input/Text"}
        ]});
        let found = ComponentMatcher::new("COMPONENT_SET", "Input").find(&doc, "root");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "root/unnamed");
        assert_eq!(found[0].id, Value::Null);
    }
}
