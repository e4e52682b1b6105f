//! Static tool catalog

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

/// Names of the tools this server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    QueryRequirements,
    QueryDesign,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::QueryRequirements, ToolName::QueryDesign];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::QueryRequirements => "query_requirements",
            ToolName::QueryDesign => "query_design",
        }
    }

    /// Look up a tool by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// Label prepended to the user's query before it reaches the agent
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            ToolName::QueryRequirements => "Focus on requirements: ",
            ToolName::QueryDesign => "Focus on design and architecture: ",
        }
    }
}

/// Build the prompt sent to the agent for a call to `name`
///
/// Names outside the catalog get the query unchanged.
pub fn enhanced_prompt(name: &str, query: &str) -> String {
    match ToolName::parse(name) {
        Some(tool) => format!("{}{}", tool.prompt_prefix(), query),
        None => query.to_string(),
    }
}

/// A tool as advertised to MCP clients
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub description: &'static str,
    /// JSON Schema object for the tool's arguments
    pub input_schema: Map<String, Value>,
}

const REQUIREMENTS_DESCRIPTION: &str = "Query specifically about DICOM Store Service (DSS) \
requirements specification. Use this tool when you need information about functional \
requirements, business rules, use cases, constraints, or requirements documentation. This tool \
will give details about functional and non-functional requirements";

const DESIGN_DESCRIPTION: &str = "Query the DICOM Store Service (DSS) system for design of \
features implemented in DICOM Store Service. This tool allows you to ask questions about the \
technical and low level design specifications of the DSS system. Use this tool when the user \
asks about design or component interactions, or asks for explaining a feature in terms of design \
or architecture or implementation details or design documentation or when a user asks about \
tools or sdk used or any questions related to services.";

fn query_schema(query_description: &str) -> Map<String, Value> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": query_description
            },
            "session_id": {
                "type": "string",
                "description": "Optional session ID for conversation continuity",
                "optional": true
            }
        },
        "required": ["query"]
    });
    match schema {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

static TOOL_CATALOG: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    vec![
        ToolDescriptor {
            name: ToolName::QueryRequirements,
            description: REQUIREMENTS_DESCRIPTION,
            input_schema: query_schema("Your requirements-related question"),
        },
        ToolDescriptor {
            name: ToolName::QueryDesign,
            description: DESIGN_DESCRIPTION,
            input_schema: query_schema("Your design/architecture-related question"),
        },
    ]
});

/// The fixed catalog, built on first use
pub fn catalog() -> &'static [ToolDescriptor] {
    &TOOL_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::parse("query_everything"), None);
    }

    #[test]
    fn test_enhanced_prompt() {
        assert_eq!(
            enhanced_prompt("query_requirements", "What must X do?"),
            "Focus on requirements: What must X do?"
        );
        assert_eq!(
            enhanced_prompt("query_design", "How does X work?"),
            "Focus on design and architecture: How does X work?"
        );
        assert_eq!(enhanced_prompt("other", "raw"), "raw");
    }

    #[test]
    fn test_catalog_schemas() {
        let tools = catalog();
        assert_eq!(tools.len(), 2);

        for tool in tools {
            let schema = &tool.input_schema;
            assert_eq!(schema["type"], "object");
            assert_eq!(schema["required"], json!(["query"]));
            assert_eq!(schema["properties"]["query"]["type"], "string");
            assert_eq!(schema["properties"]["session_id"]["type"], "string");
        }
    }

    #[test]
    fn test_catalog_is_stable() {
        assert_eq!(catalog(), catalog());
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
