use std::fmt;

use serde::Serialize;

use super::kinds::{AnimationType, BlendMode, Percentage, TimingFunction};
use crate::color::Color;

const DEFAULT_STOP_COLOR: &str = "rgba(176,72,52,0.8)";
const DEFAULT_FADE_COLOR: &str = "rgba(176,72,52,0)";
const ADDED_STOP_COLOR: &str = "rgba(255,255,255,0.8)";
const DEFAULT_OPACITY: f64 = 1.0;
const DEFAULT_POSITION_PERCENT: f64 = 50.0;
const DEFAULT_SIZE_PERCENT: f64 = 80.0;
const DEFAULT_ANIMATION_DURATION_SECS: f64 = 30.0;
const DEFAULT_ORIGIN_BASE_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Center of a layer within its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub top: Percentage,
    pub left: Percentage,
}

impl Position {
    pub const fn new(top: Percentage, left: Percentage) -> Self {
        Self { top, left }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(
            Percentage::new(DEFAULT_POSITION_PERCENT),
            Percentage::new(DEFAULT_POSITION_PERCENT),
        )
    }
}

/// One axis of a pivot point: `base` percent of the element plus `offset` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisOrigin {
    pub base: f64,
    pub offset: f64,
}

impl AxisOrigin {
    pub const fn new(base: f64, offset: f64) -> Self {
        Self { base, offset }
    }
}

impl Default for AxisOrigin {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN_BASE_PERCENT, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TransformOrigin {
    pub x: AxisOrigin,
    pub y: AxisOrigin,
}

impl TransformOrigin {
    pub const fn new(x: AxisOrigin, y: AxisOrigin) -> Self {
        Self { x, y }
    }
}

/// One radial-gradient element of the stack.
///
/// Layers are values: every edit goes through a `with_*` method that consumes
/// the layer and returns the edited copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    id: LayerId,
    colors: Vec<Color>,
    opacity: f64,
    position: Position,
    size: Percentage,
    blend_mode: BlendMode,
    animation_type: AnimationType,
    animation_duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    animation_timing_function: Option<TimingFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform_origin: Option<TransformOrigin>,
}

impl Layer {
    /// A layer with the defaults the editor uses for newly added layers.
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            colors: vec![
                Color::new(DEFAULT_STOP_COLOR),
                Color::new(DEFAULT_FADE_COLOR),
            ],
            opacity: DEFAULT_OPACITY,
            position: Position::default(),
            size: Percentage::new(DEFAULT_SIZE_PERCENT),
            blend_mode: BlendMode::HardLight,
            animation_type: AnimationType::None,
            animation_duration: DEFAULT_ANIMATION_DURATION_SECS,
            animation_timing_function: Some(TimingFunction::Ease),
            transform_origin: Some(TransformOrigin::default()),
        }
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Percentage {
        self.size
    }

    pub fn blend_mode(&self) -> &BlendMode {
        &self.blend_mode
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    pub fn animation_duration(&self) -> f64 {
        self.animation_duration
    }

    /// The timing function as stored; `None` means it was never set.
    pub fn animation_timing_function(&self) -> Option<TimingFunction> {
        self.animation_timing_function
    }

    /// The timing function renderers use, `ease` when unset.
    pub fn effective_timing_function(&self) -> TimingFunction {
        self.animation_timing_function.unwrap_or_default()
    }

    pub fn transform_origin(&self) -> Option<TransformOrigin> {
        self.transform_origin
    }

    pub fn with_colors(self, colors: Vec<Color>) -> Self {
        Self { colors, ..self }
    }

    /// Re-colors one stop from a hex pick, keeping that stop's alpha.
    pub fn with_color_at(mut self, index: usize, hex: &str) -> Self {
        if let Some(stop) = self.colors.get_mut(index) {
            *stop = stop.with_hex(hex);
        }
        self
    }

    pub fn with_added_color_stop(mut self) -> Self {
        self.colors.push(Color::new(ADDED_STOP_COLOR));
        self
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub fn with_top(self, top: Percentage) -> Self {
        let position = Position::new(top, self.position.left);
        Self { position, ..self }
    }

    pub fn with_left(self, left: Percentage) -> Self {
        let position = Position::new(self.position.top, left);
        Self { position, ..self }
    }

    pub fn with_size(self, size: Percentage) -> Self {
        Self { size, ..self }
    }

    pub fn with_blend_mode(self, blend_mode: BlendMode) -> Self {
        Self { blend_mode, ..self }
    }

    pub fn with_animation_type(self, animation_type: AnimationType) -> Self {
        Self {
            animation_type,
            ..self
        }
    }

    pub fn with_animation_duration(self, animation_duration: f64) -> Self {
        Self {
            animation_duration,
            ..self
        }
    }

    pub fn with_timing_function(self, timing: Option<TimingFunction>) -> Self {
        Self {
            animation_timing_function: timing,
            ..self
        }
    }

    pub fn with_transform_origin(self, transform_origin: Option<TransformOrigin>) -> Self {
        Self {
            transform_origin,
            ..self
        }
    }

    /// Sets the x pivot; a missing y pivot becomes the default center.
    pub fn with_transform_origin_x(self, x: AxisOrigin) -> Self {
        let y = self.transform_origin.map(|origin| origin.y).unwrap_or_default();
        self.with_transform_origin(Some(TransformOrigin::new(x, y)))
    }

    /// Sets the y pivot; a missing x pivot becomes the default center.
    pub fn with_transform_origin_y(self, y: AxisOrigin) -> Self {
        let x = self.transform_origin.map(|origin| origin.x).unwrap_or_default();
        self.with_transform_origin(Some(TransformOrigin::new(x, y)))
    }
}
