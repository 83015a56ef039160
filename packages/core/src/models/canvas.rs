//! Canvas Documents
//!
//! A canvas is a JSON board of cards (nodes) joined by connections (edges).
//! This module parses the on-disk format into a closed set of node variants
//! and defines the render-ready structures handed to the client-side layout
//! script.
//!
//! Parsing is lenient about missing or ill-typed keys:
//!
//! - node position defaults to `(0, 0)`, size to `200 x 100`
//! - edge color defaults to `#666666`
//! - an unknown, missing or non-string node `type` becomes [`CanvasNode::Other`]
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{CanvasDocument, CanvasNode};
//!
//! let doc = CanvasDocument::parse(r#"{
//!     "nodes": [{"id": "a", "type": "text", "text": "hello"}],
//!     "edges": []
//! }"#).unwrap();
//!
//! assert!(matches!(&doc.nodes[0], CanvasNode::Text { text, .. } if text == "hello"));
//! assert_eq!(doc.nodes[0].geometry().width, 200.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const DEFAULT_NODE_WIDTH: f64 = 200.0;
const DEFAULT_NODE_HEIGHT: f64 = 100.0;
const DEFAULT_EDGE_COLOR: &str = "#666666";
const DEFAULT_CANVAS_NAME: &str = "Unnamed Canvas";
const DEFAULT_CANVAS_VERSION: &str = "Unknown";

/// Canvas JSON could not be parsed
#[derive(Error, Debug)]
#[error("Invalid canvas document: {0}")]
pub struct CanvasParseError(#[from] pub serde_json::Error);

/// Top-left corner of a node in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Placement shared by every node variant
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGeometry {
    pub id: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub color: Option<String>,
}

/// One card on a canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasNode {
    /// Free text card, may contain highlights and wikilinks
    Text { geometry: NodeGeometry, text: String },
    /// Card pointing at another vault file
    File {
        geometry: NodeGeometry,
        file: String,
        label: Option<String>,
    },
    /// Card pointing at an external URL; `url` is `None` when the key is absent
    Link {
        geometry: NodeGeometry,
        url: Option<String>,
        label: Option<String>,
    },
    /// Labelled box grouping other cards
    Group {
        geometry: NodeGeometry,
        label: Option<String>,
    },
    /// Unknown or missing `type`; only the geometry is kept
    Other {
        geometry: NodeGeometry,
        kind: Option<String>,
    },
}

impl CanvasNode {
    pub fn geometry(&self) -> &NodeGeometry {
        match self {
            CanvasNode::Text { geometry, .. }
            | CanvasNode::File { geometry, .. }
            | CanvasNode::Link { geometry, .. }
            | CanvasNode::Group { geometry, .. }
            | CanvasNode::Other { geometry, .. } => geometry,
        }
    }

    /// The `type` string emitted for this node
    pub fn kind(&self) -> &str {
        match self {
            CanvasNode::Text { .. } => "text",
            CanvasNode::File { .. } => "file",
            CanvasNode::Link { .. } => "link",
            CanvasNode::Group { .. } => "group",
            CanvasNode::Other { kind, .. } => kind.as_deref().unwrap_or("text"),
        }
    }
}

/// Connection between two nodes. Endpoints are not checked against node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEdge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from_node: String,
    #[serde(default)]
    pub to_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_side: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_edge_color")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasMetadata {
    pub name: String,
    pub version: String,
}

/// Parsed canvas file
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasDocument {
    pub metadata: CanvasMetadata,
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

impl CanvasDocument {
    /// Parse canvas JSON.
    ///
    /// Only a source that is not a JSON object fails. Inside the object every
    /// field is read on its own: a value of the wrong shape (`"x": "left"`,
    /// `"type": 7`, `"label": null`) falls back to that field's default and
    /// the rest of the node or edge is kept. Entries of `nodes`/`edges` that
    /// are not objects are skipped.
    ///
    /// # Errors
    ///
    /// Returns `CanvasParseError` when the source is not a JSON object.
    pub fn parse(source: &str) -> Result<Self, CanvasParseError> {
        let root: Map<String, Value> = serde_json::from_str(source)?;

        Ok(Self {
            metadata: CanvasMetadata {
                name: metadata_string(root.get("name"), DEFAULT_CANVAS_NAME),
                version: metadata_string(root.get("version"), DEFAULT_CANVAS_VERSION),
            },
            nodes: objects(root.get("nodes"))
                .map(CanvasNode::from_fields)
                .collect(),
            edges: objects(root.get("edges"))
                .map(CanvasEdge::from_fields)
                .collect(),
        })
    }
}

impl CanvasNode {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let geometry = NodeGeometry {
            id: id_field(fields),
            position: Position {
                x: number_field(fields, "x", 0.0),
                y: number_field(fields, "y", 0.0),
            },
            width: number_field(fields, "width", DEFAULT_NODE_WIDTH),
            height: number_field(fields, "height", DEFAULT_NODE_HEIGHT),
            color: string_field(fields, "color"),
        };
        let label = string_field(fields, "label");

        let kind = string_field(fields, "type");
        match kind.as_deref() {
            Some("text") => CanvasNode::Text {
                geometry,
                text: string_field(fields, "text").unwrap_or_default(),
            },
            Some("file") => CanvasNode::File {
                geometry,
                file: string_field(fields, "file").unwrap_or_default(),
                label,
            },
            Some("link") => CanvasNode::Link {
                geometry,
                url: string_field(fields, "url"),
                label,
            },
            Some("group") => CanvasNode::Group { geometry, label },
            _ => CanvasNode::Other { geometry, kind },
        }
    }
}

impl CanvasEdge {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            id: id_field(fields),
            from_node: string_field(fields, "fromNode").unwrap_or_default(),
            to_node: string_field(fields, "toNode").unwrap_or_default(),
            from_side: string_field(fields, "fromSide"),
            to_side: string_field(fields, "toSide"),
            label: string_field(fields, "label").unwrap_or_default(),
            color: string_field(fields, "color").unwrap_or_else(default_edge_color),
        }
    }
}

fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_field(fields: &Map<String, Value>, key: &str, default: f64) -> f64 {
    fields.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Ids are strings in practice; numeric ids are kept in their JSON form
fn id_field(fields: &Map<String, Value>) -> String {
    match fields.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

fn metadata_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

fn default_edge_color() -> String {
    DEFAULT_EDGE_COLOR.to_string()
}

/// Render-ready node, serialized for the client-side layout script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RenderedNode {
    /// Node carrying only the geometry of `node`
    pub fn from_geometry(node: &CanvasNode) -> Self {
        let geometry = node.geometry();
        Self {
            id: geometry.id.clone(),
            kind: node.kind().to_string(),
            position: geometry.position,
            width: geometry.width,
            height: geometry.height,
            color: geometry.color.clone(),
            content: None,
            file: None,
            label: None,
            preview: None,
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedCanvasDocument {
    pub metadata: CanvasMetadata,
    pub nodes: Vec<RenderedNode>,
    pub edges: Vec<CanvasEdge>,
}

/// Result of rendering a canvas file.
///
/// Serializes untagged: a loaded canvas is `{metadata, nodes, edges}` and a
/// failed one is the single marker `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedCanvas {
    Loaded(RenderedCanvasDocument),
    Failed { error: String },
}

impl RenderedCanvas {
    pub const LOAD_FAILED: &'static str = "Canvas data could not be loaded";

    pub fn load_failed() -> Self {
        RenderedCanvas::Failed {
            error: Self::LOAD_FAILED.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RenderedCanvas::Failed { .. })
    }
}
