//! bson type aliases used by `$type`
//!
//! Type tagging is best-effort: several bson types (object id, date,
//! javascript) have no dedicated value shape and are recognised as strings.

use super::value::Value;

/// bson type, numbered by its bson type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BsonType {
    Double = 1,
    String = 2,
    Object = 3,
    Array = 4,
    BinData = 5,
    ObjectId = 7,
    Bool = 8,
    Date = 9,
    Null = 10,
    Regex = 11,
    JavaScript = 13,
    JavaScriptWithScope = 15,
    Int = 16,
    Timestamp = 17,
    Long = 18,
}

const ALL_TYPES: [BsonType; 15] = [
    BsonType::Double,
    BsonType::String,
    BsonType::Object,
    BsonType::Array,
    BsonType::BinData,
    BsonType::ObjectId,
    BsonType::Bool,
    BsonType::Date,
    BsonType::Null,
    BsonType::Regex,
    BsonType::JavaScript,
    BsonType::JavaScriptWithScope,
    BsonType::Int,
    BsonType::Timestamp,
    BsonType::Long,
];

impl BsonType {
    /// Numeric bson type id
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Human-readable alias, as written in `{"$type": "<alias>"}`
    pub fn alias(self) -> &'static str {
        match self {
            BsonType::Double => "double",
            BsonType::String => "string",
            BsonType::Object => "object",
            BsonType::Array => "array",
            BsonType::BinData => "binData",
            BsonType::ObjectId => "objectId",
            BsonType::Bool => "bool",
            BsonType::Date => "date",
            BsonType::Null => "null",
            BsonType::Regex => "regex",
            BsonType::JavaScript => "javascript",
            BsonType::JavaScriptWithScope => "javascriptWithScope",
            BsonType::Int => "int",
            BsonType::Timestamp => "timestamp",
            BsonType::Long => "long",
        }
    }

    pub fn from_alias(alias: &str) -> Option<Self> {
        ALL_TYPES.iter().copied().find(|t| t.alias() == alias)
    }

    pub fn from_id(id: i64) -> Option<Self> {
        ALL_TYPES.iter().copied().find(|t| t.id() == id)
    }

    /// Whether `value` has the shape associated with this type
    pub fn matches(self, value: &Value) -> bool {
        match self {
            BsonType::Double => matches!(value, Value::Float(_)),
            BsonType::String
            | BsonType::ObjectId
            | BsonType::Date
            | BsonType::JavaScript
            | BsonType::JavaScriptWithScope => matches!(value, Value::String(_)),
            BsonType::Object => matches!(value, Value::Object(_)),
            BsonType::Array => matches!(value, Value::Array(_)),
            BsonType::BinData => matches!(value, Value::Binary(_)),
            BsonType::Bool => matches!(value, Value::Bool(_)),
            BsonType::Null => matches!(value, Value::Null),
            BsonType::Regex => matches!(value, Value::Regex(_)),
            BsonType::Int | BsonType::Timestamp | BsonType::Long => matches!(value, Value::Int(_)),
        }
    }
}

/// What a `$type` condition selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelector {
    /// The `"number"` meta-alias: double, int or long
    Number,
    Exact(BsonType),
}

impl TypeSelector {
    /// Resolve a `$type` condition: an alias string or a numeric type id.
    ///
    /// Returns `None` for unknown aliases and ids.
    pub fn from_condition(condition: &Value) -> Option<Self> {
        match condition {
            Value::String(alias) if alias == "number" => Some(TypeSelector::Number),
            Value::String(alias) => BsonType::from_alias(alias).map(TypeSelector::Exact),
            Value::Int(id) => BsonType::from_id(*id).map(TypeSelector::Exact),
            Value::Float(id) if id.fract() == 0.0 => {
                BsonType::from_id(*id as i64).map(TypeSelector::Exact)
            }
            _ => None,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            TypeSelector::Number => [BsonType::Double, BsonType::Int, BsonType::Long]
                .iter()
                .any(|t| t.matches(value)),
            TypeSelector::Exact(t) => t.matches(value),
        }
    }
}
