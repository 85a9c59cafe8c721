use serde::Serialize;
use serde_json::{Map, Value};

/// Raw style values copied off a matched node. A category is only present
/// when its source key exists on the node, even if the value there is `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<Value>,
}
impl TokenProperties {
    pub fn from_node(node: &Map<String, Value>) -> Self {
        let raw = |key: &str| node.get(key).cloned();
        Self {
            fills: raw("fills"),
            strokes: raw("strokes"),
            effects: raw("effects"),
            corner_radius: raw("cornerRadius"),
            // only paddingLeft gates the composite
            padding: node.contains_key("paddingLeft").then(|| Padding::from_node(node)),
            item_spacing: raw("itemSpacing"),
            layout_mode: raw("layoutMode"),
            text: raw("characters"),
            text_style: raw("style"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Padding {
    pub left: Value,
    pub right: Value,
    pub top: Value,
    pub bottom: Value,
}
impl Padding {
    fn from_node(node: &Map<String, Value>) -> Self {
        let side = |key: &str| node.get(key).cloned().unwrap_or(Value::Null);
        Self {
            left: side("paddingLeft"),
            right: side("paddingRight"),
            top: side("paddingTop"),
            bottom: side("paddingBottom"),
        }
    }
}
