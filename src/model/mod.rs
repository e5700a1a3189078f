//! The gradient composition being edited: a base linear gradient plus an
//! ordered stack of radial layers. Later layers paint on top.

mod kinds;
mod layer;

use serde::Serialize;

use crate::color::Color;

pub use kinds::{AnimationType, BlendMode, Percentage, TimingFunction, UnknownVariant};
pub use layer::{AxisOrigin, Layer, LayerId, Position, TransformOrigin};

const DEFAULT_BACKGROUND_FROM: &str = "rgba(108,0,162,1)";
const DEFAULT_BACKGROUND_TO: &str = "rgba(0,17,82,0.5)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub from: Color,
    pub to: Color,
}

impl BackgroundColors {
    pub fn new(from: impl Into<Color>, to: impl Into<Color>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn with_from(self, from: Color) -> Self {
        Self { from, ..self }
    }

    pub fn with_to(self, to: Color) -> Self {
        Self { to, ..self }
    }
}

impl Default for BackgroundColors {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND_FROM, DEFAULT_BACKGROUND_TO)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientModel {
    background_colors: BackgroundColors,
    layers: Vec<Layer>,
}

impl GradientModel {
    pub fn new(background_colors: BackgroundColors, layers: Vec<Layer>) -> Self {
        Self {
            background_colors,
            layers,
        }
    }

    pub fn background_colors(&self) -> &BackgroundColors {
        &self.background_colors
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    pub fn contains_layer(&self, id: &LayerId) -> bool {
        self.layer(id).is_some()
    }

    pub fn with_background_colors(self, background_colors: BackgroundColors) -> Self {
        Self {
            background_colors,
            ..self
        }
    }

    pub fn with_layer_appended(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Swaps in `layer` for the entry with the same id; unchanged when no entry matches.
    pub fn with_layer_replaced(mut self, layer: Layer) -> Self {
        if let Some(slot) = self.layers.iter_mut().find(|slot| slot.id() == layer.id()) {
            *slot = layer;
        }
        self
    }
}
