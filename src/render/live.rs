//! Element tree for the on-screen preview, rebuilt on every model change.
//!
//! The host is expected to have [`super::keyframes::stylesheet`] installed so
//! that the animation names bound here resolve.

use serde::Serialize;

use super::{animation_css, background_css};
use crate::color::Color;
use crate::geometry::{transform_origin_css, LayerBox};
use crate::model::{GradientModel, Layer, LayerId};

const CONTAINER_CLASS: &str = "preview";
const NO_ANIMATION: &str = "none";
const TWO_STOP_FADE_POSITION: &str = "50%";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    pub property: &'static str,
    pub value: String,
}

impl StyleDeclaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<LayerId>,
    pub style: Vec<StyleDeclaration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|declaration| declaration.property == property)
            .map(|declaration| declaration.value.as_str())
    }

    /// Declarations in `style="..."` attribute form.
    pub fn inline_style(&self) -> String {
        self.style
            .iter()
            .map(|declaration| format!("{}: {};", declaration.property, declaration.value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html, 0);
        html
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str("<div");
        if let Some(class) = self.class {
            out.push_str(&format!(" class=\"{class}\""));
        }
        if let Some(key) = &self.key {
            out.push_str(&format!(" data-layer-id=\"{}\"", escape_attribute(key.as_str())));
        }
        out.push_str(&format!(
            " style=\"{}\">",
            escape_attribute(&self.inline_style())
        ));
        if self.children.is_empty() {
            out.push_str("</div>\n");
            return;
        }
        out.push('\n');
        for child in &self.children {
            child.write_html(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</div>\n");
    }
}

pub fn render_preview(model: &GradientModel) -> PreviewNode {
    tracing::debug!(layers = model.layers().len(), "render live preview");
    PreviewNode {
        class: Some(CONTAINER_CLASS),
        key: None,
        style: vec![
            StyleDeclaration::new("background", background_css(model.background_colors())),
            StyleDeclaration::new("resize", "both"),
        ],
        children: model.layers().iter().map(layer_node).collect(),
    }
}

fn layer_node(layer: &Layer) -> PreviewNode {
    let bounds = LayerBox::of(layer);
    let animation = animation_css(layer).unwrap_or_else(|| NO_ANIMATION.to_string());
    PreviewNode {
        class: None,
        key: Some(layer.id().clone()),
        style: vec![
            StyleDeclaration::new("position", "absolute"),
            StyleDeclaration::new("top", bounds.top.to_string()),
            StyleDeclaration::new("left", bounds.left.to_string()),
            StyleDeclaration::new("width", bounds.size.to_string()),
            StyleDeclaration::new("height", bounds.size.to_string()),
            StyleDeclaration::new("mix-blend-mode", layer.blend_mode().as_css()),
            StyleDeclaration::new("background", radial_gradient(layer.colors())),
            StyleDeclaration::new("animation", animation),
            StyleDeclaration::new("opacity", layer.opacity().to_string()),
            StyleDeclaration::new(
                "transform-origin",
                transform_origin_css(layer.transform_origin()),
            ),
        ],
        children: Vec::new(),
    }
}

/// Two stops fade out by the halfway mark; any other count is spaced evenly.
fn radial_gradient(colors: &[Color]) -> String {
    let stops = match colors {
        [inner, outer] => format!("{inner}, {outer} {TWO_STOP_FADE_POSITION}"),
        _ => join_stops(colors),
    };
    format!("radial-gradient(circle at center, {stops})")
}

fn join_stops(colors: &[Color]) -> String {
    colors
        .iter()
        .map(Color::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AnimationType, BackgroundColors, BlendMode, Percentage, Position, TimingFunction,
    };

    fn model_with(layers: Vec<Layer>) -> GradientModel {
        GradientModel::new(BackgroundColors::default(), layers)
    }

    #[test]
    fn container_carries_background_and_one_child_per_layer() {
        let model = model_with(vec![
            Layer::new(LayerId::new("a")),
            Layer::new(LayerId::new("b")),
        ]);
        let tree = render_preview(&model);

        assert_eq!(tree.class, Some("preview"));
        assert_eq!(
            tree.style_value("background"),
            Some("linear-gradient(40deg, rgba(108,0,162,1), rgba(0,17,82,0.5))")
        );
        assert_eq!(tree.style_value("resize"), Some("both"));
        let keys: Vec<&str> = tree
            .children
            .iter()
            .filter_map(|child| child.key.as_ref().map(LayerId::as_str))
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn layer_node_is_centered_square() {
        let layer = Layer::new(LayerId::new("a"))
            .with_position(Position::new(Percentage::new(20.0), Percentage::new(60.0)))
            .with_size(Percentage::new(30.0));
        let node = layer_node(&layer);

        assert_eq!(node.style_value("position"), Some("absolute"));
        assert_eq!(node.style_value("top"), Some("5%"));
        assert_eq!(node.style_value("left"), Some("45%"));
        assert_eq!(node.style_value("width"), Some("30%"));
        assert_eq!(node.style_value("height"), Some("30%"));
    }

    #[test]
    fn two_stop_gradient_pins_fade_at_half() {
        let node = layer_node(&Layer::new(LayerId::new("a")));
        assert_eq!(
            node.style_value("background"),
            Some("radial-gradient(circle at center, rgba(176,72,52,0.8), rgba(176,72,52,0) 50%)")
        );
    }

    #[test]
    fn other_stop_counts_are_spaced_evenly() {
        let layer = Layer::new(LayerId::new("a")).with_added_color_stop();
        assert_eq!(
            layer_node(&layer).style_value("background"),
            Some("radial-gradient(circle at center, rgba(176,72,52,0.8), rgba(176,72,52,0), rgba(255,255,255,0.8))")
        );

        let single = Layer::new(LayerId::new("b")).with_colors(vec![Color::new("#ff0000")]);
        assert_eq!(
            layer_node(&single).style_value("background"),
            Some("radial-gradient(circle at center, #ff0000)")
        );
    }

    #[test]
    fn animation_binds_only_for_moving_layers() {
        let still = layer_node(&Layer::new(LayerId::new("a")));
        assert_eq!(still.style_value("animation"), Some("none"));

        let moving = Layer::new(LayerId::new("b"))
            .with_animation_type(AnimationType::MoveHorizontal)
            .with_animation_duration(8.0)
            .with_timing_function(Some(TimingFunction::Linear));
        assert_eq!(
            layer_node(&moving).style_value("animation"),
            Some("moveHorizontal 8s linear infinite")
        );
    }

    #[test]
    fn blend_opacity_and_pivot_follow_layer() {
        let layer = Layer::new(LayerId::new("a"))
            .with_blend_mode(BlendMode::Multiply)
            .with_opacity(0.6)
            .with_transform_origin(None);
        let node = layer_node(&layer);
        assert_eq!(node.style_value("mix-blend-mode"), Some("multiply"));
        assert_eq!(node.style_value("opacity"), Some("0.6"));
        assert_eq!(node.style_value("transform-origin"), Some("center center"));
    }

    #[test]
    fn html_fragment_nests_layers_inside_container() {
        let model = model_with(vec![Layer::new(LayerId::new("a\"b"))]);
        let html = render_preview(&model).to_html();
        assert!(html.starts_with("<div class=\"preview\" style=\"background: linear-gradient("));
        assert!(html.contains("\n  <div data-layer-id=\"a&quot;b\" style=\"position: absolute;"));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn empty_model_renders_bare_container() {
        let tree = render_preview(&GradientModel::default());
        assert!(tree.children.is_empty());
        assert_eq!(
            tree.to_html(),
            "<div class=\"preview\" style=\"background: linear-gradient(40deg, rgba(108,0,162,1), rgba(0,17,82,0.5)); resize: both;\"></div>\n"
        );
    }
}
