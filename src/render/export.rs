//! Standalone stylesheet equivalent to the live preview.
//!
//! The output targets a `.preview` element whose direct `div` children match
//! the model's layers one-to-one and in order; layers are addressed by
//! position, never by id.

use super::{animation_css, background_css, keyframes};
use crate::color::Color;
use crate::geometry::{transform_origin_css, LayerBox};
use crate::model::{GradientModel, Layer};

const CONTAINER_SELECTOR: &str = ".preview";
const CONTAINER_SIZE_PX: u32 = 500;

/// Serializes a model snapshot: container rule, the predefined keyframes, then
/// one rule per layer.
pub fn export_css(model: &GradientModel) -> String {
    let mut blocks = vec![container_rule(model), keyframes::stylesheet()];
    blocks.extend(
        model
            .layers()
            .iter()
            .enumerate()
            .map(|(index, layer)| layer_rule(index + 1, layer)),
    );
    tracing::debug!(layers = model.layers().len(), "exported stylesheet");
    let mut css = blocks.join("\n\n");
    css.push('\n');
    css
}

fn container_rule(model: &GradientModel) -> String {
    format!(
        "{CONTAINER_SELECTOR} {{
  width: {CONTAINER_SIZE_PX}px;
  height: {CONTAINER_SIZE_PX}px;
  background: {background};
  position: relative;
  overflow: hidden;
}}",
        background = background_css(model.background_colors()),
    )
}

/// Rule for the layer at 1-based `structural_index`.
fn layer_rule(structural_index: usize, layer: &Layer) -> String {
    let bounds = LayerBox::of(layer);
    let animation = animation_css(layer)
        .map(|animation| format!("  animation: {animation};\n"))
        .unwrap_or_default();
    format!(
        "{CONTAINER_SELECTOR} > div:nth-of-type({structural_index}) {{
  position: absolute;
  top: {top};
  left: {left};
  width: {size};
  height: {size};
  mix-blend-mode: {blend};
  background: {background};
  opacity: {opacity};
  transform-origin: {origin};
{animation}}}",
        top = bounds.top,
        left = bounds.left,
        size = bounds.size,
        blend = layer.blend_mode(),
        background = radial_gradient(layer.colors()),
        opacity = layer.opacity(),
        origin = transform_origin_css(layer.transform_origin()),
    )
}

// Unlike the live preview, two-stop gradients are not pinned at 50% here.
fn radial_gradient(colors: &[Color]) -> String {
    let stops = colors
        .iter()
        .map(Color::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("radial-gradient(circle at center, {stops})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnimationType, BackgroundColors, LayerId, Percentage, Position};

    #[test]
    fn container_rule_has_fixed_box_and_background() {
        let model = GradientModel::new(
            BackgroundColors::new("rgba(108,0,162,1)", "rgba(0,17,82,0.5)"),
            Vec::new(),
        );
        assert_eq!(
            container_rule(&model),
            ".preview {\n  width: 500px;\n  height: 500px;\n  background: linear-gradient(40deg, rgba(108,0,162,1), rgba(0,17,82,0.5));\n  position: relative;\n  overflow: hidden;\n}"
        );
    }

    #[test]
    fn still_layer_rule_matches_expected_text() {
        let layer = Layer::new(LayerId::new("a"))
            .with_position(Position::new(Percentage::new(40.0), Percentage::new(50.0)))
            .with_size(Percentage::new(60.0));
        assert_eq!(
            layer_rule(2, &layer),
            ".preview > div:nth-of-type(2) {
  position: absolute;
  top: 10%;
  left: 20%;
  width: 60%;
  height: 60%;
  mix-blend-mode: hard-light;
  background: radial-gradient(circle at center, rgba(176,72,52,0.8), rgba(176,72,52,0));
  opacity: 1;
  transform-origin: calc(50% + 0px) calc(50% + 0px);
}"
        );
    }

    #[test]
    fn moving_layer_rule_ends_with_animation() {
        let layer = Layer::new(LayerId::new("a"))
            .with_animation_type(AnimationType::MoveVertical)
            .with_animation_duration(30.0)
            .with_timing_function(None);
        let rule = layer_rule(1, &layer);
        assert!(rule.ends_with("  animation: moveVertical 30s ease infinite;\n}"));
    }

    #[test]
    fn two_stop_gradient_is_not_pinned() {
        let layer = Layer::new(LayerId::new("a"));
        assert_eq!(
            radial_gradient(layer.colors()),
            "radial-gradient(circle at center, rgba(176,72,52,0.8), rgba(176,72,52,0))"
        );
    }

    #[test]
    fn output_orders_container_keyframes_then_layers() {
        let model = GradientModel::default()
            .with_layer_appended(Layer::new(LayerId::new("x")))
            .with_layer_appended(Layer::new(LayerId::new("y")));
        let css = export_css(&model);

        let container = css.find(".preview {").expect("container rule");
        let keyframes = css.find("@keyframes moveInCircle").expect("keyframes");
        let first = css.find("div:nth-of-type(1)").expect("first layer");
        let second = css.find("div:nth-of-type(2)").expect("second layer");
        assert!(container < keyframes && keyframes < first && first < second);
        assert!(!css.contains("nth-of-type(3)"));
        assert!(css.ends_with("}\n"));
    }
}
