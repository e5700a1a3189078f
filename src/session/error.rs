use crate::model::LayerId;
use thiserror::Error;

pub type SessionResult<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a layer with id {id} already exists")]
    DuplicateLayerId { id: LayerId },
    #[error("layer not found: {id}")]
    LayerNotFound { id: LayerId },
    #[error("no layer selected")]
    NoLayerSelected,
}
