//! Typed nested-object schema.
//!
//! A [`SchemaNode`] is either a `Leaf` (an object with no recorded
//! properties) or an `Object` with an ordered list of named children. Only
//! objects are representable; other JSON Schema types are rejected when an
//! untyped schema is lowered with [`SchemaNode::from_json_schema`].

mod infer;

pub use infer::{infer_schema, json_to_schema, SCHEMA_DESCRIPTION, SCHEMA_DIALECT, SCHEMA_ID, SCHEMA_TITLE};

use serde_json::{json, Map, Value};

use crate::error::{SchemaError, ShapeViolation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Object with no properties. The only matching document is `{}`.
    Leaf,
    /// Object with properties in serialization order. Names are unique.
    Object(Vec<(String, SchemaNode)>),
}

impl SchemaNode {
    /// Build an object node. An empty property list gives [`SchemaNode::Leaf`].
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        let properties: Vec<(String, SchemaNode)> = properties
            .into_iter()
            .map(|(name, child)| (name.into(), child))
            .collect();
        if properties.is_empty() {
            Self::Leaf
        } else {
            Self::Object(properties)
        }
    }

    /// Single-property chain `{k0: {k1: {... {}}}}` following `names`.
    pub fn chain<I, K>(names: I) -> Self
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: DoubleEndedIterator,
        K: Into<String>,
    {
        names
            .into_iter()
            .rev()
            .fold(Self::Leaf, |child, name| Self::Object(vec![(name.into(), child)]))
    }

    pub fn properties(&self) -> &[(String, SchemaNode)] {
        match self {
            Self::Leaf => &[],
            Self::Object(properties) => properties,
        }
    }

    pub fn property_count(&self) -> usize {
        self.properties().len()
    }

    pub fn is_leaf(&self) -> bool {
        self.properties().is_empty()
    }

    /// Levels of nesting below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.properties()
            .iter()
            .map(|(_, child)| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// True when every level down to the leaf holds exactly one property.
    pub fn is_chain(&self) -> bool {
        match self.properties() {
            [] => true,
            [(_, child)] => child.is_chain(),
            _ => false,
        }
    }

    /// The document this schema describes. Leaves are always `{}`, so each
    /// schema has exactly one matching instance.
    pub fn canonical_instance(&self) -> Value {
        let mut map = Map::new();
        for (name, child) in self.properties() {
            map.insert(name.clone(), child.canonical_instance());
        }
        Value::Object(map)
    }

    /// Lower a JSON Schema document.
    ///
    /// Every level needs `"type": "object"` and a `"properties"` object.
    /// Annotation keys such as `$schema` or `title` are ignored.
    pub fn from_json_schema(schema: &Value) -> Result<Self, SchemaError> {
        lower(schema, &mut String::new())
    }

    /// Raise back to JSON Schema as nested `{type, properties}` objects.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for (name, child) in self.properties() {
            properties.insert(name.clone(), child.to_json_schema());
        }
        json!({
            "type": "object",
            "properties": properties,
        })
    }
}

impl TryFrom<&Value> for SchemaNode {
    type Error = SchemaError;

    fn try_from(schema: &Value) -> Result<Self, Self::Error> {
        Self::from_json_schema(schema)
    }
}

fn lower(schema: &Value, path: &mut String) -> Result<SchemaNode, SchemaError> {
    match schema.get("type") {
        Some(Value::String(ty)) if ty == "object" => {}
        Some(Value::String(ty)) => {
            return Err(SchemaError::unsupported(path, ShapeViolation::NotObject(ty.clone())))
        }
        Some(other) => {
            return Err(SchemaError::unsupported(
                path,
                ShapeViolation::NotObject(other.to_string()),
            ))
        }
        None => {
            return Err(SchemaError::unsupported(
                path,
                ShapeViolation::NotObject("none".to_string()),
            ))
        }
    }

    let properties = match schema.get("properties") {
        Some(Value::Object(properties)) => properties,
        None | Some(Value::Null) => {
            return Err(SchemaError::unsupported(path, ShapeViolation::MissingProperties))
        }
        Some(_) => {
            return Err(SchemaError::unsupported(path, ShapeViolation::PropertiesNotObject))
        }
    };

    let mut children = Vec::with_capacity(properties.len());
    for (name, child) in properties {
        let mark = path.len();
        path.push_str("/properties/");
        push_pointer_segment(path, name);
        let node = lower(child, path)?;
        path.truncate(mark);
        children.push((name.clone(), node));
    }
    Ok(SchemaNode::object(children))
}

/// Append `segment` with RFC 6901 escaping (`~` → `~0`, `/` → `~1`).
pub(crate) fn push_pointer_segment(path: &mut String, segment: &str) {
    for ch in segment.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            c => path.push(c),
        }
    }
}
