//! Tests for canvas parsing

#[cfg(test)]
mod tests {
    use crate::models::{CanvasDocument, CanvasNode, RenderedCanvas};

    #[test]
    fn test_parse_applies_defaults() {
        let doc = CanvasDocument::parse(
            r#"{"nodes": [{"id": "n1", "type": "text"}], "edges": [{"id": "e1"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.metadata.name, "Unnamed Canvas");
        assert_eq!(doc.metadata.version, "Unknown");

        let geometry = doc.nodes[0].geometry();
        assert_eq!(geometry.position.x, 0.0);
        assert_eq!(geometry.position.y, 0.0);
        assert_eq!(geometry.width, 200.0);
        assert_eq!(geometry.height, 100.0);

        assert_eq!(doc.edges[0].color, "#666666");
        assert_eq!(doc.edges[0].label, "");
    }

    #[test]
    fn test_parse_all_variants() {
        let doc = CanvasDocument::parse(
            r##"{
                "name": "Board",
                "version": 2,
                "nodes": [
                    {"id": "t", "type": "text", "text": "hi", "x": 10, "y": -20},
                    {"id": "f", "type": "file", "file": "notes/A.md", "label": "A"},
                    {"id": "l", "type": "link", "url": "https://example.com"},
                    {"id": "g", "type": "group", "label": "Cluster", "color": "3"},
                    {"id": "w", "type": "widget", "width": 50}
                ],
                "edges": [
                    {"id": "e", "fromNode": "t", "toNode": "f", "fromSide": "right", "toSide": "left", "label": "see", "color": "#ff0000"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(doc.metadata.name, "Board");
        assert_eq!(doc.metadata.version, "2");

        assert!(matches!(&doc.nodes[0], CanvasNode::Text { text, .. } if text == "hi"));
        assert_eq!(doc.nodes[0].geometry().position.y, -20.0);
        assert!(matches!(&doc.nodes[1], CanvasNode::File { file, label, .. }
            if file == "notes/A.md" && label.as_deref() == Some("A")));
        assert!(matches!(&doc.nodes[2], CanvasNode::Link { url, label: None, .. }
            if url.as_deref() == Some("https://example.com")));
        assert!(matches!(&doc.nodes[3], CanvasNode::Group { .. }));
        assert_eq!(doc.nodes[3].geometry().color.as_deref(), Some("3"));
        assert_eq!(doc.nodes[4].kind(), "widget");
        assert_eq!(doc.nodes[4].geometry().width, 50.0);

        let edge = &doc.edges[0];
        assert_eq!(edge.from_node, "t");
        assert_eq!(edge.to_node, "f");
        assert_eq!(edge.from_side.as_deref(), Some("right"));
        assert_eq!(edge.color, "#ff0000");
    }

    #[test]
    fn test_missing_type_is_other() {
        let doc = CanvasDocument::parse(r#"{"nodes": [{"id": "x"}]}"#).unwrap();
        assert!(matches!(&doc.nodes[0], CanvasNode::Other { kind: None, .. }));
        assert_eq!(doc.nodes[0].kind(), "text");
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_parse_rejects_corrupt_json() {
        assert!(CanvasDocument::parse("{not json").is_err());
        assert!(CanvasDocument::parse("[]").is_err());
    }

    #[test]
    fn test_ill_typed_fields_fall_back_per_field() {
        let doc = CanvasDocument::parse(
            r#"{
                "nodes": [
                    {"id": "a", "type": "text", "text": "hello"},
                    {"id": "b", "type": 7, "width": "wide"},
                    {"id": "c", "type": "text", "text": "x", "x": "left", "y": 5},
                    "not a node"
                ],
                "edges": [
                    {"id": "e", "fromNode": "a", "toNode": "c", "label": null, "color": 3},
                    17
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.nodes.len(), 3);
        assert!(matches!(&doc.nodes[0], CanvasNode::Text { text, .. } if text == "hello"));
        assert!(matches!(&doc.nodes[1], CanvasNode::Other { kind: None, .. }));
        assert_eq!(doc.nodes[1].geometry().width, 200.0);
        assert_eq!(doc.nodes[2].geometry().position.x, 0.0);
        assert_eq!(doc.nodes[2].geometry().position.y, 5.0);

        assert_eq!(doc.edges.len(), 1);
        assert_eq!(doc.edges[0].label, "");
        assert_eq!(doc.edges[0].color, "#666666");
    }

    #[test]
    fn test_numeric_id_and_missing_url() {
        let doc = CanvasDocument::parse(r#"{"nodes": [{"id": 42, "type": "link"}], "edges": "none"}"#)
            .unwrap();

        assert_eq!(doc.nodes[0].geometry().id, "42");
        assert!(matches!(&doc.nodes[0], CanvasNode::Link { url: None, .. }));
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_failed_canvas_serializes_as_marker() {
        let json = serde_json::to_value(RenderedCanvas::load_failed()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Canvas data could not be loaded"})
        );
    }
}
