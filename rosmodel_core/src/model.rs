//! Data model for introspected nodes.

use serde::{Deserialize, Serialize};

/// One introspected interface endpoint: a topic, service, action, or
/// parameter as seen from the node.
///
/// `name` is never empty after normalization; `type_name` stays empty when
/// the type could not be discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Everything collected about one node, assembled once per invocation and
/// handed to the renderer unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeModel {
    /// The node name as requested by the user (may be relative)
    pub node_name: String,
    pub subscribers: Vec<InterfaceRecord>,
    pub publishers: Vec<InterfaceRecord>,
    pub service_servers: Vec<InterfaceRecord>,
    pub service_clients: Vec<InterfaceRecord>,
    pub action_servers: Vec<InterfaceRecord>,
    pub action_clients: Vec<InterfaceRecord>,
    pub parameters: Vec<InterfaceRecord>,
}

/// Declared value type of a node parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    NotSet,
    Bool,
    Integer,
    Double,
    String,
    ByteArray,
    BoolArray,
    IntegerArray,
    DoubleArray,
    StringArray,
}

impl ParameterKind {
    /// Stable display string used in rendered models.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterKind::NotSet => "",
            ParameterKind::Bool => "bool",
            ParameterKind::Integer => "integer",
            ParameterKind::Double => "double",
            ParameterKind::String => "string",
            ParameterKind::ByteArray => "byte array",
            ParameterKind::BoolArray => "bool array",
            ParameterKind::IntegerArray => "integer array",
            ParameterKind::DoubleArray => "double array",
            ParameterKind::StringArray => "string array",
        }
    }
}

/// Structured parameter descriptor returned by the parameter service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub kind: ParameterKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_record_serializes_type_key() {
        let record = InterfaceRecord::new("/talker/chatter", "std_msgs/String");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "/talker/chatter");
        assert_eq!(json["type"], "std_msgs/String");
    }

    #[test]
    fn test_interface_record_missing_type_defaults_empty() {
        let record: InterfaceRecord =
            serde_json::from_str(r#"{"name": "/talker/chatter"}"#).unwrap();
        assert_eq!(record.name, "/talker/chatter");
        assert!(record.type_name.is_empty());
    }

    #[test]
    fn test_parameter_kind_labels() {
        assert_eq!(ParameterKind::Double.label(), "double");
        assert_eq!(ParameterKind::Bool.label(), "bool");
        assert_eq!(ParameterKind::IntegerArray.label(), "integer array");
        assert_eq!(ParameterKind::NotSet.label(), "");
    }

    #[test]
    fn test_parameter_kind_snake_case_wire_form() {
        let kind: ParameterKind = serde_json::from_str(r#""double_array""#).unwrap();
        assert_eq!(kind, ParameterKind::DoubleArray);
        assert_eq!(serde_json::to_string(&ParameterKind::Bool).unwrap(), r#""bool""#);
    }
}
