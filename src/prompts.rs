//! Prompt text for agents emitting A2UI v0.8 surface updates.

use crate::examples::RESTAURANT_UI_EXAMPLES;

/// Guidance on the v0.8 event sequence and component structure. The rules
/// here are the ones the shipped example blocks demonstrate.
pub const UI_EXAMPLES_GUIDANCE: &str = r#"
You render UI by emitting a JSON array of A2UI events for one surface.

## Event Sequence

1. "beginRendering": names the surface, its root component id, and styles
2. "surfaceUpdate": declares the component tree as a flat list of
   { "id": ..., "component": { ComponentName: { props } } } entries
3. "dataModelUpdate": writes key/value contents into the surface data model

## Component Rules

1. Every component has an "id" (string) and a "component" (object)
2. The "component" object has ONE key: the component type name
3. Static text uses { "literalString": "..." }; dynamic values use
   { "path": "/location/in/data/model" }
4. Column children go in { "children": { "explicitList": [ids] } }
5. List components repeat a template per data entry:
   { "children": { "template": { "componentId": ..., "dataBinding": ... } } }
6. Button actions carry a "name" plus "context" key/value bindings that are
   resolved against the data model when the action fires

## Data Model Rules

1. "contents" is a list of { "key": ... } entries
2. Values are typed: "valueString", "valueNumber", "valueBool", or a nested
   "valueMap" list of entries
3. Populate the data model with the real restaurant data for the request;
   the entries in the examples are placeholders, not canned answers

## Common Mistakes to Avoid

- Referencing a child id that no surfaceUpdate defines
- A beginRendering "root" that is missing from the component list
- Raw strings where { "literalString": ... } or { "path": ... } is required

Complete example sequences follow, each between ---BEGIN NAME--- and
---END NAME--- markers.
"#;

/// Assemble the guidance plus the restaurant example blocks into one prompt
/// section, ready to interpolate into an agent instruction.
pub fn examples_prompt() -> String {
    format!("{UI_EXAMPLES_GUIDANCE}\n{RESTAURANT_UI_EXAMPLES}")
}
