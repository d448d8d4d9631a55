/// Names of the example blocks embedded in [`RESTAURANT_UI_EXAMPLES`].
pub const SINGLE_COLUMN_LIST_EXAMPLE: &str = "SINGLE_COLUMN_LIST_EXAMPLE";
pub const GET_DIRECTIONS_EXAMPLE: &str = "GET_DIRECTIONS_EXAMPLE";

/// A2UI v0.8 example payloads for the restaurant finder agent.
///
/// Two delimited blocks, each a complete server-to-client event sequence:
/// `beginRendering`, a `surfaceUpdate` carrying the component tree, and a
/// `dataModelUpdate` seeding the surface data model. The JSON between the
/// markers is strict (no comments, no trailing commas) so callers can parse
/// a block body directly with `serde_json`.
pub const RESTAURANT_UI_EXAMPLES: &str = r##"
---BEGIN SINGLE_COLUMN_LIST_EXAMPLE---
[
  { "beginRendering": { "surfaceId": "default", "root": "root-column", "styles": { "primaryColor": "#FF0000", "font": "Roboto" } } },
  { "surfaceUpdate": {
    "surfaceId": "default",
    "components": [
      { "id": "root-column", "component": { "Column": { "children": { "explicitList": ["title-heading", "google-map", "item-list"] } } } },
      { "id": "title-heading", "component": { "Text": { "usageHint": "h1", "text": { "path": "title" } } } },
      { "id": "google-map", "component": { "GoogleMap": { "lat": 47, "lng": -122, "zoom": 12, "pinAddresses": { "addresses": [{ "address": { "path": "/items/0/address" } }] } } } },
      { "id": "item-list", "component": { "List": { "direction": "vertical", "children": { "template": { "componentId": "item-card-template", "dataBinding": "/items" } } } } },
      { "id": "item-card-template", "component": { "Card": { "child": "card-layout" } } },
      { "id": "card-layout", "component": { "Column": { "children": { "explicitList": ["place-card", "get-directions-button"] } } } },
      { "id": "place-card", "component": { "PlaceCard": { "placeId": { "path": "placeId" } } } },
      { "id": "get-directions-button", "component": { "Button": { "child": "get-directions-text", "primary": true, "action": { "name": "get_directions", "context": [ { "key": "restaurantName", "value": { "path": "name" } }, { "key": "imageUrl", "value": { "path": "imageUrl" } }, { "key": "address", "value": { "path": "address" } }, { "key": "placeId", "value": { "path": "placeId" } } ] } } } },
      { "id": "get-directions-text", "component": { "Text": { "text": { "literalString": "Get Directions" } } } }
    ]
  } },
  { "dataModelUpdate": {
    "surfaceId": "default",
    "path": "/",
    "contents": [
      { "key": "items", "valueMap": [
        { "key": "item1", "valueMap": [
          { "key": "name", "valueString": "The Fancy Place" },
          { "key": "rating", "valueNumber": 4.8 },
          { "key": "detail", "valueString": "Fine dining experience" },
          { "key": "infoLink", "valueString": "https://example.com/fancy" },
          { "key": "placeId", "valueString": "abc123" },
          { "key": "address", "valueString": "123 Main St" }
        ] },
        { "key": "item2", "valueMap": [
          { "key": "name", "valueString": "Quick Bites" },
          { "key": "rating", "valueNumber": 4.2 },
          { "key": "detail", "valueString": "Casual and fast" },
          { "key": "infoLink", "valueString": "https://example.com/quick" },
          { "key": "placeId", "valueString": "def456" },
          { "key": "address", "valueString": "456 Oak Ave" }
        ] }
      ] }
    ]
  } }
]
---END SINGLE_COLUMN_LIST_EXAMPLE---

---BEGIN GET_DIRECTIONS_EXAMPLE---
[
  { "beginRendering": { "surfaceId": "get-directions-form", "root": "get-directions-form-column", "styles": { "primaryColor": "#FF0000", "font": "Roboto" } } },
  { "surfaceUpdate": {
    "surfaceId": "get-directions-form",
    "components": [
      { "id": "get-directions-form-column", "component": { "Column": { "children": { "explicitList": ["get-directions-title", "google-map", "place-card"] } } } },
      { "id": "get-directions-title", "component": { "Text": { "usageHint": "h2", "text": { "path": "title" } } } },
      { "id": "google-map", "component": { "GoogleMap": { "lat": 47, "lng": -122, "zoom": 12, "destinationAddress": { "path": "destinationAddress" }, "originAddress": { "path": "originAddress" } } } },
      { "id": "place-card", "component": { "PlaceCard": { "placeId": { "path": "placeId" } } } }
    ]
  } },
  { "dataModelUpdate": {
    "surfaceId": "get-directions-form",
    "path": "/",
    "contents": [
      { "key": "title", "valueString": "Directions to Tasty Spot" },
      { "key": "address", "valueString": "123 Main St" },
      { "key": "restaurantName", "valueString": "Tasty Spot" },
      { "key": "destinationAddress", "valueString": "123 Main St" },
      { "key": "originAddress", "valueString": "456 Oak Ave" },
      { "key": "placeId", "valueString": "def456" }
    ]
  } }
]
---END GET_DIRECTIONS_EXAMPLE---
"##;
