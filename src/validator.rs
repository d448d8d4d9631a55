use std::collections::{BTreeMap, BTreeSet};

use jsonschema::Validator;
use serde_json::{Value, json};

use crate::messages::A2uiMessage;

#[derive(Debug, Clone)]
pub struct A2uiValidationError {
    pub message: String,
    pub instance_path: String,
}

impl std::fmt::Display for A2uiValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.instance_path)
    }
}

impl std::error::Error for A2uiValidationError {}

/// Envelope validator for A2UI v0.8 messages.
///
/// This validates envelope structure and required fields. Component bodies
/// are checked structurally only; catalog-level component schemas are owned
/// by the renderer.
pub struct A2uiValidator {
    v0_8: Validator,
}

impl A2uiValidator {
    pub fn new() -> Result<Self, A2uiValidationError> {
        let v0_8 = Validator::new(&schema_v0_8()).map_err(|e| A2uiValidationError {
            message: format!("Invalid v0.8 schema: {}", e),
            instance_path: "/".to_string(),
        })?;
        Ok(Self { v0_8 })
    }

    pub fn validate_message(&self, message: &A2uiMessage) -> Result<(), Vec<A2uiValidationError>> {
        let value = serde_json::to_value(message).map_err(|e| {
            vec![A2uiValidationError {
                message: format!("Serialization failed: {}", e),
                instance_path: "/".to_string(),
            }]
        })?;
        self.validate_value(&value)
    }

    pub fn validate_value(&self, value: &Value) -> Result<(), Vec<A2uiValidationError>> {
        let mapped = self
            .v0_8
            .iter_errors(value)
            .map(|e| A2uiValidationError {
                message: e.to_string(),
                instance_path: e.instance_path().to_string(),
            })
            .collect::<Vec<_>>();

        if !mapped.is_empty() {
            return Err(mapped);
        }

        Ok(())
    }
}

/// Check that component references resolve within an example sequence.
///
/// Per surface: component ids must be unique, every `beginRendering` root
/// must be defined, and every `explicitList` child, template `componentId`,
/// and `child` reference must name a defined component.
pub fn check_example_integrity(messages: &[A2uiMessage]) -> Result<(), Vec<A2uiValidationError>> {
    #[derive(Default)]
    struct Surface {
        ids: BTreeSet<String>,
        roots: Vec<String>,
        // (referencing component id, referenced id)
        refs: Vec<(String, String)>,
    }

    let mut surfaces: BTreeMap<&str, Surface> = BTreeMap::new();
    let mut errors = Vec::new();

    for message in messages {
        let surface = surfaces.entry(message.surface_id()).or_default();
        match message {
            A2uiMessage::BeginRendering(m) => {
                surface.roots.push(m.begin_rendering.root.clone());
            }
            A2uiMessage::SurfaceUpdate(m) => {
                for entry in &m.surface_update.components {
                    if !surface.ids.insert(entry.id.clone()) {
                        errors.push(A2uiValidationError {
                            message: format!("duplicate component id: {}", entry.id),
                            instance_path: format!(
                                "/{}/components/{}",
                                m.surface_update.surface_id, entry.id
                            ),
                        });
                    }
                    let mut refs = Vec::new();
                    collect_component_refs(&entry.component, &mut refs);
                    surface.refs.extend(refs.into_iter().map(|r| (entry.id.clone(), r)));
                }
            }
            A2uiMessage::DataModelUpdate(_) | A2uiMessage::DeleteSurface(_) => {}
        }
    }

    for (surface_id, surface) in &surfaces {
        for root in &surface.roots {
            if !surface.ids.contains(root) {
                errors.push(A2uiValidationError {
                    message: format!("root component not defined: {}", root),
                    instance_path: format!("/{}/root", surface_id),
                });
            }
        }
        for (from, target) in &surface.refs {
            if !surface.ids.contains(target) {
                errors.push(A2uiValidationError {
                    message: format!("unresolved component reference: {}", target),
                    instance_path: format!("/{}/components/{}", surface_id, from),
                });
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn collect_component_refs(value: &Value, refs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                match (key.as_str(), nested) {
                    ("explicitList", Value::Array(items)) => {
                        for item in items {
                            if let Value::String(id) = item {
                                refs.push(id.clone());
                            }
                        }
                    }
                    ("componentId", Value::String(id)) => refs.push(id.clone()),
                    ("child", Value::String(id)) => refs.push(id.clone()),
                    _ => collect_component_refs(nested, refs),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_component_refs(item, refs);
            }
        }
        _ => {}
    }
}

fn schema_v0_8() -> Value {
    json!({
        "type": "object",
        "oneOf": [
            {
                "required": ["beginRendering"],
                "properties": {
                    "beginRendering": {
                        "type": "object",
                        "required": ["surfaceId", "root"],
                        "properties": {
                            "surfaceId": { "type": "string" },
                            "root": { "type": "string" },
                            "styles": { "type": "object" }
                        }
                    }
                }
            },
            {
                "required": ["surfaceUpdate"],
                "properties": {
                    "surfaceUpdate": {
                        "type": "object",
                        "required": ["surfaceId", "components"],
                        "properties": {
                            "surfaceId": { "type": "string" },
                            "components": {
                                "type": "array",
                                "minItems": 1,
                                "items": {
                                    "type": "object",
                                    "required": ["id", "component"],
                                    "properties": {
                                        "id": { "type": "string" },
                                        "component": { "type": "object" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            {
                "required": ["dataModelUpdate"],
                "properties": {
                    "dataModelUpdate": {
                        "type": "object",
                        "required": ["surfaceId", "contents"],
                        "properties": {
                            "surfaceId": { "type": "string" },
                            "path": { "type": "string" },
                            "contents": { "type": "array" }
                        }
                    }
                }
            },
            {
                "required": ["deleteSurface"],
                "properties": {
                    "deleteSurface": {
                        "type": "object",
                        "required": ["surfaceId"],
                        "properties": {
                            "surfaceId": { "type": "string" }
                        }
                    }
                }
            }
        ]
    })
}
