use serde_json::Value;

/// A node in a parsed translation document.
///
/// Translation files are nested dictionaries whose leaves are display
/// strings. Only two shapes matter when looking for characters:
///
/// 1. **Mapping**: an object whose values are walked recursively
///    - JSON: `{"Common": {"save": "Save"}}`
///    - Keys are identifiers, never rendered, so they contribute nothing
///
/// 2. **String**: a leaf whose characters are rendered by the UI
///    - JSON: `"save": "Save"`
///
/// Everything else (numbers, booleans, null, arrays) is `Other` and is
/// skipped without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// Object node. Entries keep their document order.
    Mapping(Vec<(String, MessageNode)>),
    /// String leaf.
    String(String),
    /// Any leaf that is not a string.
    Other,
}

impl MessageNode {
    /// Visit every string leaf below this node, depth first.
    pub fn for_each_string<F: FnMut(&str)>(&self, f: &mut F) {
        match self {
            MessageNode::Mapping(entries) => {
                for (_, child) in entries {
                    child.for_each_string(f);
                }
            }
            MessageNode::String(s) => f(s),
            MessageNode::Other => {}
        }
    }

    /// Number of string leaves below this node.
    pub fn string_count(&self) -> usize {
        let mut count = 0;
        self.for_each_string(&mut |_| count += 1);
        count
    }
}

impl From<&Value> for MessageNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => MessageNode::Mapping(
                map.iter()
                    .map(|(key, val)| (key.clone(), MessageNode::from(val)))
                    .collect(),
            ),
            Value::String(s) => MessageNode::String(s.clone()),
            // Arrays are opaque leaves: only mappings are descended into.
            Value::Array(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                MessageNode::Other
            }
        }
    }
}

impl From<Value> for MessageNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => MessageNode::Mapping(
                map.into_iter()
                    .map(|(key, val)| (key, MessageNode::from(val)))
                    .collect(),
            ),
            Value::String(s) => MessageNode::String(s),
            Value::Array(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                MessageNode::Other
            }
        }
    }
}
