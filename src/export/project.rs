//! Scalar projectors: small value types to flat JSON fragments.
//!
//! Field names and sibling order follow the engine's export schema. All
//! projections are pure and total.

use crate::json::Node;
use crate::model::{Annotation, ColorState, Font, Rgb, TextState};

/// Project a color into a `red`/`green`/`blue` fragment.
pub fn rgb(color: Rgb) -> Node {
    let mut node = Node::new();
    node.put("red", color.red);
    node.put("green", color.green);
    node.put("blue", color.blue);
    node
}

/// Emit fill/stroke opacity and color fields into `node`.
pub fn color_state(cs: &ColorState, node: &mut Node) {
    node.put("fill_alpha", cs.fill_opacity);
    node.add_child("fill_color", rgb(cs.fill_color));
    node.put("stroke_alpha", cs.stroke_opacity);
    node.add_child("stroke_color", rgb(cs.stroke_color));
}

/// Emit font identification fields into `node`, flat at the caller's level.
pub fn font(f: &Font, node: &mut Node) {
    node.put("face_name", f.face_name.to_utf8_lossy());
    node.put("font_name", f.font_name.to_utf8_lossy());
    node.put("system_font_name", f.system_font_name.to_utf8_lossy());
    node.put("system_font_bold", f.bold);
    node.put("system_font_italic", f.italic);
    node.put("system_font_charset", f.charset);
}

/// Emit text-state fields into `node`, flat at the caller's level.
pub fn text_state(ts: &TextState, node: &mut Node) {
    node.put("char_spacing", ts.char_spacing);
    node.put("flags", ts.flags);
    font(&ts.font, node);
    node.put("font_size", ts.font_size);
    color_state(&ts.color, node);
    node.put("word_spacing", ts.word_spacing);
}

/// Project an annotation into a node with its subtype and appearance.
pub fn annotation(annot: &Annotation) -> Node {
    let mut node = Node::new();
    node.put("subtype", annot.subtype.name());

    let ap = &annot.appearance;
    let mut appearance = Node::new();

    let mut fill = Node::new();
    fill.put("fill_type", ap.fill_type.name());
    fill.add_child("fill_color", rgb(ap.fill_color));
    appearance.add_child("fill", fill);

    let mut border = Node::new();
    border.put("border", ap.border.name());
    border.put("width", ap.border_width);
    border.add_child("border_color", rgb(ap.border_color));
    appearance.add_child("border", border);

    appearance.put("opacity", ap.opacity);
    appearance.put("font_size", ap.font_size);

    node.add_child("appearance", appearance);
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{write, JsonFormat, Value};
    use crate::model::{AnnotationSubtype, Appearance, BorderStyle, FillType};

    #[test]
    fn test_rgb_fragment() {
        let node = rgb(Rgb::new(255, 0, 128));
        assert_eq!(node.get("red"), Some(&Value::Int(255)));
        assert_eq!(node.get("green"), Some(&Value::Int(0)));
        assert_eq!(node.get("blue"), Some(&Value::Int(128)));
    }

    #[test]
    fn test_color_state_distinct_keys() {
        let mut cs = ColorState::default();
        cs.fill_color = Rgb::new(10, 20, 30);
        cs.stroke_color = Rgb::new(40, 50, 60);
        let mut node = Node::new();
        color_state(&cs, &mut node);

        let fill = node.children("fill_color").next().unwrap();
        let stroke = node.children("stroke_color").next().unwrap();
        assert_eq!(fill.get("red"), Some(&Value::Int(10)));
        assert_eq!(stroke.get("red"), Some(&Value::Int(40)));
    }

    #[test]
    fn test_text_state_field_order() {
        let mut node = Node::new();
        text_state(&TextState::default(), &mut node);
        let keys: Vec<_> = node.entries().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "char_spacing",
                "flags",
                "face_name",
                "font_name",
                "system_font_name",
                "system_font_bold",
                "system_font_italic",
                "system_font_charset",
                "font_size",
                "fill_alpha",
                "fill_color",
                "stroke_alpha",
                "stroke_color",
                "word_spacing",
            ]
        );
    }

    #[test]
    fn test_annotation_fragment() {
        let annot = Annotation {
            subtype: AnnotationSubtype::Highlight,
            appearance: Appearance {
                fill_type: FillType::Solid,
                fill_color: Rgb::new(255, 255, 0),
                border: BorderStyle::Dashed,
                border_width: 2.0,
                ..Default::default()
            },
        };
        let node = annotation(&annot);
        assert_eq!(node.get("subtype"), Some(&Value::Str("Highlight".into())));

        let appearance = node.children("appearance").next().unwrap();
        let fill = appearance.children("fill").next().unwrap();
        let border = appearance.children("border").next().unwrap();
        assert_eq!(fill.get("fill_type"), Some(&Value::Str("solid".into())));
        assert_eq!(border.get("border"), Some(&Value::Str("dashed".into())));
        assert_eq!(border.get("width"), Some(&Value::Float(2.0)));
    }

    #[test]
    fn test_projection_is_deterministic() {
        let annot = Annotation::default();
        let a = write(&annotation(&annot), JsonFormat::Compact);
        let b = write(&annotation(&annot), JsonFormat::Compact);
        assert_eq!(a, b);
    }
}
