//! Recursive element serialization.

use super::project;
use crate::json::Node;
use crate::model::{Element, ElementKind};

/// Serialize one element subtree.
///
/// Identity and bounding box are emitted for every variant; the variant
/// payload follows; children are appended last under a repeated `element`
/// key, in engine order. This generic child loop is the only recursion
/// path — text containers express their paragraph/line/word nesting
/// through `children` like everything else, so no subtree is emitted
/// twice.
pub fn serialize_element(element: &Element) -> Node {
    let mut node = Node::new();
    node.put("id", element.id);
    node.put("left", element.bounds.left);
    node.put("bottom", element.bounds.bottom);
    node.put("right", element.bounds.right);
    node.put("top", element.bounds.top);

    match &element.kind {
        ElementKind::Text { role, text, state } => {
            node.put("type", role.type_name());
            node.put("text", text.to_utf8_lossy());
            project::text_state(state, &mut node);
        }
        ElementKind::Image => {
            node.put("type", "image");
        }
        ElementKind::Path { shape, state } => {
            node.put("type", shape.type_name());
            project::color_state(&state.color, &mut node);
        }
        ElementKind::Table => {
            node.put("type", "table");
        }
        ElementKind::Unknown => {}
    }

    for child in &element.children {
        node.add_child("element", serialize_element(child));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::WideString;
    use crate::json::{write, JsonFormat, Value};
    use crate::model::{GraphicState, PathShape, Rect, TextRole, TextState};

    fn text_element(id: i64, role: TextRole, text: &str) -> Element {
        Element::new(
            id,
            Rect::default(),
            ElementKind::Text {
                role,
                text: WideString::from(text),
                state: TextState::default(),
            },
        )
    }

    #[test]
    fn test_identity_and_bbox_always_present() {
        let el = Element::new(5, Rect::new(1.0, 2.0, 3.0, 4.0), ElementKind::Unknown);
        let node = serialize_element(&el);
        assert_eq!(node.get("id"), Some(&Value::Int(5)));
        assert_eq!(node.get("left"), Some(&Value::Float(1.0)));
        assert_eq!(node.get("bottom"), Some(&Value::Float(2.0)));
        assert_eq!(node.get("right"), Some(&Value::Float(3.0)));
        assert_eq!(node.get("top"), Some(&Value::Float(4.0)));
    }

    #[test]
    fn test_unknown_has_no_type() {
        let el = Element::new(5, Rect::default(), ElementKind::Unknown);
        let node = serialize_element(&el);
        assert!(node.get("type").is_none());
    }

    #[test]
    fn test_placeholder_variants() {
        let image = serialize_element(&Element::new(1, Rect::default(), ElementKind::Image));
        assert_eq!(image.get("type"), Some(&Value::Str("image".into())));

        let table = serialize_element(&Element::new(2, Rect::default(), ElementKind::Table));
        assert_eq!(table.get("type"), Some(&Value::Str("table".into())));
    }

    #[test]
    fn test_text_state_is_sibling_of_text() {
        let node = serialize_element(&text_element(1, TextRole::Word, "Hi"));
        // type, text, and the text-state fields all live at one level.
        assert_eq!(node.get("type"), Some(&Value::Str("text_word".into())));
        assert_eq!(node.get("text"), Some(&Value::Str("Hi".into())));
        assert!(node.get("font_size").is_some());
        assert!(node.get("char_spacing").is_some());
    }

    #[test]
    fn test_path_variants_emit_color_state() {
        let el = Element::new(
            3,
            Rect::default(),
            ElementKind::Path {
                shape: PathShape::Line,
                state: GraphicState::default(),
            },
        );
        let node = serialize_element(&el);
        assert_eq!(node.get("type"), Some(&Value::Str("line".into())));
        assert!(node.get("fill_alpha").is_some());
        assert!(node.children("stroke_color").next().is_some());
    }

    #[test]
    fn test_children_serialized_once_in_order() {
        let mut paragraph = text_element(1, TextRole::Paragraph, "");
        let mut line = text_element(2, TextRole::Line, "Hi there");
        line.add_child(text_element(3, TextRole::Word, "Hi"));
        line.add_child(text_element(4, TextRole::Word, "there"));
        paragraph.add_child(line);

        let node = serialize_element(&paragraph);
        let lines: Vec<_> = node.children("element").collect();
        assert_eq!(lines.len(), 1);

        let words: Vec<_> = lines[0].children("element").collect();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].get("id"), Some(&Value::Int(3)));
        assert_eq!(words[1].get("id"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_order_preserved_across_many_children() {
        let mut root = Element::new(0, Rect::default(), ElementKind::Table);
        for id in 1..=20 {
            root.add_child(Element::new(id, Rect::default(), ElementKind::Image));
        }
        let node = serialize_element(&root);
        let ids: Vec<_> = node
            .children("element")
            .map(|c| c.get("id").cloned())
            .collect();
        let expected: Vec<_> = (1..=20).map(|id| Some(Value::Int(id))).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_deep_nesting() {
        let mut el = Element::new(200, Rect::default(), ElementKind::Image);
        for id in (0..200).rev() {
            let mut parent = Element::new(id, Rect::default(), ElementKind::Table);
            parent.add_child(el);
            el = parent;
        }
        let node = serialize_element(&el);
        let mut depth = 0;
        let mut cursor = &node;
        while let Some(child) = cursor.children("element").next() {
            cursor = child;
            depth += 1;
        }
        assert_eq!(depth, 200);
    }

    #[test]
    fn test_idempotent() {
        let mut root = text_element(1, TextRole::Paragraph, "alpha");
        root.add_child(text_element(2, TextRole::Line, "alpha"));
        let a = write(&serialize_element(&root), JsonFormat::Pretty);
        let b = write(&serialize_element(&root), JsonFormat::Pretty);
        assert_eq!(a, b);
    }
}
