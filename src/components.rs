//! Builders for A2UI v0.8 components with the correct nested structure.
//!
//! Each function returns the `{ "id": ..., "component": { Name: {props} } }`
//! entry as raw JSON, matching the shapes the shipped example payloads use.

use serde_json::{Value, json};

use crate::bindings::{DynamicNumber, DynamicString};

/// Create a Text component. `usage_hint` maps to heading levels ("h1", "h2").
pub fn text(id: &str, text: &DynamicString, usage_hint: Option<&str>) -> Value {
    let mut component = json!({ "text": text });
    if let Some(hint) = usage_hint {
        component["usageHint"] = json!(hint);
    }
    json!({ "id": id, "component": { "Text": component } })
}

/// Create a Column with an explicit child list.
pub fn column(id: &str, children: Vec<&str>) -> Value {
    json!({
        "id": id,
        "component": {
            "Column": { "children": { "explicitList": children } }
        }
    })
}

/// Create a List that stamps a template component once per entry under
/// `data_binding`.
pub fn list_template(id: &str, direction: &str, template_id: &str, data_binding: &str) -> Value {
    json!({
        "id": id,
        "component": {
            "List": {
                "direction": direction,
                "children": {
                    "template": { "componentId": template_id, "dataBinding": data_binding }
                }
            }
        }
    })
}

/// Create a Card wrapping a single child component.
pub fn card(id: &str, child_id: &str) -> Value {
    json!({ "id": id, "component": { "Card": { "child": child_id } } })
}

/// Create a Button. The action context carries key/value bindings that are
/// resolved against the data model when the action fires.
pub fn button(
    id: &str,
    child_id: &str,
    primary: bool,
    action_name: &str,
    context: Vec<(&str, DynamicString)>,
) -> Value {
    let context: Vec<Value> = context
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect();
    json!({
        "id": id,
        "component": {
            "Button": {
                "child": child_id,
                "primary": primary,
                "action": { "name": action_name, "context": context }
            }
        }
    })
}

/// Create a GoogleMap that drops a pin for each address binding.
pub fn google_map_pins(
    id: &str,
    lat: DynamicNumber,
    lng: DynamicNumber,
    zoom: DynamicNumber,
    pin_addresses: Vec<DynamicString>,
) -> Value {
    let addresses: Vec<Value> =
        pin_addresses.iter().map(|a| json!({ "address": a })).collect();
    json!({
        "id": id,
        "component": {
            "GoogleMap": {
                "lat": lat,
                "lng": lng,
                "zoom": zoom,
                "pinAddresses": { "addresses": addresses }
            }
        }
    })
}

/// Create a GoogleMap showing a route between two address bindings.
pub fn google_map_route(
    id: &str,
    lat: DynamicNumber,
    lng: DynamicNumber,
    zoom: DynamicNumber,
    origin: &DynamicString,
    destination: &DynamicString,
) -> Value {
    json!({
        "id": id,
        "component": {
            "GoogleMap": {
                "lat": lat,
                "lng": lng,
                "zoom": zoom,
                "originAddress": origin,
                "destinationAddress": destination
            }
        }
    })
}

/// Create a PlaceCard resolving place details from a place id binding.
pub fn place_card(id: &str, place_id: &DynamicString) -> Value {
    json!({ "id": id, "component": { "PlaceCard": { "placeId": place_id } } })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_component() {
        let comp = text("title-heading", &DynamicString::path("title"), Some("h1"));
        assert_eq!(comp["id"], "title-heading");
        assert_eq!(comp["component"]["Text"]["usageHint"], "h1");
        assert_eq!(comp["component"]["Text"]["text"]["path"], "title");
    }

    #[test]
    fn test_column_component() {
        let comp = column("root-column", vec!["a", "b"]);
        assert_eq!(comp["component"]["Column"]["children"]["explicitList"][1], "b");
    }

    #[test]
    fn test_list_template_component() {
        let comp = list_template("item-list", "vertical", "item-card-template", "/items");
        let children = &comp["component"]["List"]["children"];
        assert_eq!(children["template"]["componentId"], "item-card-template");
        assert_eq!(children["template"]["dataBinding"], "/items");
    }

    #[test]
    fn test_button_with_action_context() {
        let comp = button(
            "get-directions-button",
            "get-directions-text",
            true,
            "get_directions",
            vec![("address", DynamicString::path("address"))],
        );
        let btn = &comp["component"]["Button"];
        assert_eq!(btn["primary"], true);
        assert_eq!(btn["action"]["name"], "get_directions");
        assert_eq!(btn["action"]["context"][0]["value"]["path"], "address");
    }

    #[test]
    fn test_google_map_pins() {
        let comp = google_map_pins(
            "map",
            DynamicNumber::literal(47.0),
            DynamicNumber::literal(-122.0),
            DynamicNumber::literal(12.0),
            vec![DynamicString::path("/items/0/address")],
        );
        let map = &comp["component"]["GoogleMap"];
        assert_eq!(map["lat"], 47.0);
        assert_eq!(map["pinAddresses"]["addresses"][0]["address"]["path"], "/items/0/address");
    }

    #[test]
    fn test_google_map_route() {
        let comp = google_map_route(
            "map",
            DynamicNumber::literal(47.0),
            DynamicNumber::literal(-122.0),
            DynamicNumber::path("zoom"),
            &DynamicString::path("originAddress"),
            &DynamicString::path("destinationAddress"),
        );
        let map = &comp["component"]["GoogleMap"];
        assert_eq!(map["lat"], 47.0);
        assert_eq!(map["zoom"]["path"], "zoom");
        assert_eq!(map["originAddress"]["path"], "originAddress");
        assert_eq!(map["destinationAddress"]["path"], "destinationAddress");
    }

    #[test]
    fn test_place_card() {
        let comp = place_card("place-card", &DynamicString::path("placeId"));
        assert_eq!(comp["component"]["PlaceCard"]["placeId"]["path"], "placeId");
    }
}
