//! Typed A2UI v0.8 server-to-client messages.
//!
//! Each message is a single-key envelope (`beginRendering`, `surfaceUpdate`,
//! `dataModelUpdate`, `deleteSurface`) addressed to one surface. Component
//! bodies stay as raw JSON in the nested `{ComponentName: {props}}` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_model::DataModelEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum A2uiMessage {
    BeginRendering(BeginRenderingMessage),
    SurfaceUpdate(SurfaceUpdateMessage),
    DataModelUpdate(DataModelUpdateMessage),
    DeleteSurface(DeleteSurfaceMessage),
}

impl A2uiMessage {
    /// The surface this message addresses.
    pub fn surface_id(&self) -> &str {
        match self {
            Self::BeginRendering(m) => &m.begin_rendering.surface_id,
            Self::SurfaceUpdate(m) => &m.surface_update.surface_id,
            Self::DataModelUpdate(m) => &m.data_model_update.surface_id,
            Self::DeleteSurface(m) => &m.delete_surface.surface_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginRenderingMessage {
    pub begin_rendering: BeginRendering,
}

/// Opens a surface and names the root component of its tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginRendering {
    pub surface_id: String,
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<SurfaceStyles>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceUpdateMessage {
    pub surface_update: SurfaceUpdate,
}

/// Declares or replaces components on a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceUpdate {
    pub surface_id: String,
    pub components: Vec<ComponentEntry>,
}

/// A component definition: an id plus the nested `{ComponentName: {props}}`
/// body, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub component: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelUpdateMessage {
    pub data_model_update: DataModelUpdate,
}

/// Writes key/value contents into the surface data model at `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelUpdate {
    pub surface_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub contents: Vec<DataModelEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurfaceMessage {
    pub delete_surface: DeleteSurface,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurface {
    pub surface_id: String,
}
