//! Editing session: the working model plus the layer selection.
//!
//! Every edit takes `&self` and returns the next session value, leaving the
//! previous one untouched. Failed edits return an error and no new value.

mod error;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{BackgroundColors, GradientModel, Layer, LayerId};

pub use error::{SessionError, SessionResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorSession {
    model: GradientModel,
    selected: Option<LayerId>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_model(model: GradientModel) -> Self {
        Self {
            model,
            selected: None,
        }
    }

    pub fn model(&self) -> &GradientModel {
        &self.model
    }

    pub fn selected_layer_id(&self) -> Option<&LayerId> {
        self.selected.as_ref()
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected.as_ref().and_then(|id| self.model.layer(id))
    }

    /// Appends a default layer under a fresh timestamp-derived id and selects it.
    pub fn add_layer(&self) -> Self {
        let id = fresh_layer_id(&self.model, timestamp_token());
        self.append_layer(Layer::new(id))
    }

    /// Appends a default layer under a caller-chosen id and selects it.
    pub fn add_layer_with_id(&self, id: LayerId) -> SessionResult<Self> {
        if self.model.contains_layer(&id) {
            tracing::warn!(%id, "refusing to add layer with duplicate id");
            return Err(SessionError::DuplicateLayerId { id });
        }
        Ok(self.append_layer(Layer::new(id)))
    }

    /// Replaces the layer sharing `layer`'s id.
    pub fn update_layer(&self, layer: Layer) -> SessionResult<Self> {
        tracing::debug!(id = %layer.id(), "update layer");
        self.require_layer(layer.id())?;
        Ok(Self {
            model: self.model.clone().with_layer_replaced(layer),
            selected: self.selected.clone(),
        })
    }

    pub fn select_layer(&self, id: &LayerId) -> SessionResult<Self> {
        self.require_layer(id)?;
        tracing::debug!(%id, "select layer");
        Ok(Self {
            model: self.model.clone(),
            selected: Some(id.clone()),
        })
    }

    /// Applies `edit` to the selected layer.
    pub fn edit_selected_layer(&self, edit: impl FnOnce(Layer) -> Layer) -> SessionResult<Self> {
        let layer = self
            .selected_layer()
            .cloned()
            .ok_or(SessionError::NoLayerSelected)?;
        self.update_layer(edit(layer))
    }

    pub fn set_background_colors(&self, colors: BackgroundColors) -> Self {
        tracing::debug!(from = %colors.from, to = %colors.to, "set background colors");
        Self {
            model: self.model.clone().with_background_colors(colors),
            selected: self.selected.clone(),
        }
    }

    /// Re-colors the gradient start from a hex pick, keeping its alpha.
    pub fn set_background_from_hex(&self, hex: &str) -> Self {
        let colors = self.model.background_colors().clone();
        let from = colors.from.with_hex(hex);
        self.set_background_colors(colors.with_from(from))
    }

    /// Re-colors the gradient end from a hex pick, keeping its alpha.
    pub fn set_background_to_hex(&self, hex: &str) -> Self {
        let colors = self.model.background_colors().clone();
        let to = colors.to.with_hex(hex);
        self.set_background_colors(colors.with_to(to))
    }

    fn append_layer(&self, layer: Layer) -> Self {
        let id = layer.id().clone();
        tracing::debug!(%id, count = self.model.layers().len() + 1, "add layer");
        Self {
            model: self.model.clone().with_layer_appended(layer),
            selected: Some(id),
        }
    }

    fn require_layer(&self, id: &LayerId) -> SessionResult<()> {
        if self.model.contains_layer(id) {
            Ok(())
        } else {
            tracing::warn!(%id, "no layer with this id");
            Err(SessionError::LayerNotFound { id: id.clone() })
        }
    }
}

fn timestamp_token() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}

/// `token` as an id, suffixed with a counter when already taken.
fn fresh_layer_id(model: &GradientModel, token: u128) -> LayerId {
    let base = LayerId::new(token.to_string());
    if !model.contains_layer(&base) {
        return base;
    }
    (1u32..)
        .map(|suffix| LayerId::new(format!("{token}-{suffix}")))
        .find(|candidate| !model.contains_layer(candidate))
        .unwrap_or(base)
}
