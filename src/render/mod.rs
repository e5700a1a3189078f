//! Projections of a [`GradientModel`](crate::model::GradientModel) into styling.
//!
//! [`live`] builds the element tree shown while editing, [`export`] writes the
//! equivalent standalone stylesheet. Both take geometry from
//! [`crate::geometry`]; each keeps its own radial-gradient builder.

pub mod export;
pub mod keyframes;
pub mod live;

use crate::model::{BackgroundColors, Layer};

pub use export::export_css;
pub use live::{render_preview, PreviewNode, StyleDeclaration};

const BACKGROUND_ANGLE_DEG: u16 = 40;

pub(crate) fn background_css(colors: &BackgroundColors) -> String {
    format!(
        "linear-gradient({BACKGROUND_ANGLE_DEG}deg, {}, {})",
        colors.from, colors.to
    )
}

/// `animation` value for a layer; `None` when the layer does not move.
pub(crate) fn animation_css(layer: &Layer) -> Option<String> {
    let name = layer.animation_type().keyframes_name()?;
    Some(format!(
        "{name} {}s {} infinite",
        layer.animation_duration(),
        layer.effective_timing_function()
    ))
}
