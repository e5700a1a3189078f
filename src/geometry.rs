//! Layer geometry shared by the live renderer and the stylesheet exporter.

use crate::model::{AxisOrigin, Layer, Percentage, TransformOrigin};

const CENTER: &str = "center";

/// Square bounding box of a layer, positioned so that its center sits on the
/// layer's `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerBox {
    pub top: Percentage,
    pub left: Percentage,
    pub size: Percentage,
}

impl LayerBox {
    pub fn of(layer: &Layer) -> Self {
        let position = layer.position();
        let size = layer.size();
        Self {
            top: position.top - size.half(),
            left: position.left - size.half(),
            size,
        }
    }
}

/// CSS `transform-origin` value: each axis as `calc(base% + offsetpx)`, or the
/// element center when no origin is set.
pub fn transform_origin_css(origin: Option<TransformOrigin>) -> String {
    match origin {
        Some(origin) => format!("{} {}", axis_css(origin.x), axis_css(origin.y)),
        None => format!("{CENTER} {CENTER}"),
    }
}

fn axis_css(axis: AxisOrigin) -> String {
    format!("calc({}% + {}px)", axis.base, axis.offset)
}
