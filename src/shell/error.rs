use std::io;

use thiserror::Error;

use crate::model::UnknownVariant;
use crate::session::SessionError;

pub type ShellResult<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("{command} needs a {argument} argument")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("invalid {argument} for {command}: {value}")]
    InvalidArgument {
        command: String,
        argument: &'static str,
        value: String,
    },
    #[error(transparent)]
    Variant(#[from] UnknownVariant),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to read shell input")]
    Input(#[source] io::Error),
    #[error("failed to write shell output")]
    Output(#[from] io::Error),
}
