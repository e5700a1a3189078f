//! Line-oriented front end: each input line is one edit or output command
//! applied to the [`EditorSession`].

mod command;
mod error;

use std::io::{BufRead, Write};

use crate::clipboard::{ClipboardBackend, WlCopyBackend};
use crate::config::AppConfig;
use crate::delivery;
use crate::model::Layer;
use crate::notification;
use crate::render::{export_css, keyframes, render_preview, PreviewNode};
use crate::session::EditorSession;

pub use command::{ShellCommand, HELP};
pub use error::{ShellError, ShellResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: EditorSession,
    preview: PreviewNode,
    clipboard: Option<Box<dyn ClipboardBackend>>,
    notifications: bool,
}

impl Shell {
    pub fn new(config: &AppConfig) -> Self {
        let clipboard = config.clipboard.then(|| {
            Box::new(WlCopyBackend::new(config.clipboard_command.as_str()))
                as Box<dyn ClipboardBackend>
        });
        Self::with_clipboard(EditorSession::new(), clipboard, config.notifications)
    }

    pub fn with_clipboard(
        session: EditorSession,
        clipboard: Option<Box<dyn ClipboardBackend>>,
        notifications: bool,
    ) -> Self {
        let preview = render_preview(session.model());
        Self {
            session,
            preview,
            clipboard,
            notifications,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// The live preview of the current model.
    pub fn preview(&self) -> &PreviewNode {
        &self.preview
    }

    /// Runs commands from `input` until it ends or `quit` is read.
    ///
    /// Bad commands are reported on `out` and skipped. Bytes that are not
    /// UTF-8 are decoded lossily, so such a line fails as a bad command.
    /// Only read and write failures end the loop early.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut dyn Write) -> ShellResult<()> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            let read = input
                .read_until(b'\n', &mut buffer)
                .map_err(ShellError::Input)?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            let flow = match ShellCommand::parse_line(&line) {
                Ok(Some(command)) => self.execute(command, out),
                Ok(None) => Ok(Flow::Continue),
                Err(err) => Err(err),
            };
            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ShellError::Output(err)) => return Err(ShellError::Output(err)),
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: ShellCommand, out: &mut dyn Write) -> ShellResult<Flow> {
        tracing::debug!(?command, "execute shell command");
        match command {
            ShellCommand::Add => {
                let next = self.session.add_layer();
                if let Some(id) = next.selected_layer_id() {
                    writeln!(out, "added layer {id}")?;
                }
                self.commit(next);
            }
            ShellCommand::List => self.write_layer_list(out)?,
            ShellCommand::Select(id) => {
                let next = self.session.select_layer(&id)?;
                writeln!(out, "selected layer {id}")?;
                self.commit(next);
            }
            ShellCommand::Opacity(opacity) => self.edit_layer(|l| l.with_opacity(opacity))?,
            ShellCommand::Top(top) => self.edit_layer(|l| l.with_top(top))?,
            ShellCommand::Left(left) => self.edit_layer(|l| l.with_left(left))?,
            ShellCommand::Size(size) => self.edit_layer(|l| l.with_size(size))?,
            ShellCommand::Blend(mode) => self.edit_layer(|l| l.with_blend_mode(mode))?,
            ShellCommand::Animation(kind) => self.edit_layer(|l| l.with_animation_type(kind))?,
            ShellCommand::Duration(secs) => {
                self.edit_layer(|l| l.with_animation_duration(secs))?
            }
            ShellCommand::Timing(timing) => {
                self.edit_layer(|l| l.with_timing_function(Some(timing)))?
            }
            ShellCommand::Color { index, hex } => {
                self.edit_layer(|l| l.with_color_at(index, &hex))?
            }
            ShellCommand::AddStop => self.edit_layer(Layer::with_added_color_stop)?,
            ShellCommand::OriginX(axis) => self.edit_layer(|l| l.with_transform_origin_x(axis))?,
            ShellCommand::OriginY(axis) => self.edit_layer(|l| l.with_transform_origin_y(axis))?,
            ShellCommand::BackgroundFrom(hex) => {
                let next = self.session.set_background_from_hex(&hex);
                self.commit(next);
            }
            ShellCommand::BackgroundTo(hex) => {
                let next = self.session.set_background_to_hex(&hex);
                self.commit(next);
            }
            ShellCommand::Preview => write!(out, "{}", self.preview.to_html())?,
            ShellCommand::Keyframes => writeln!(out, "{}", keyframes::stylesheet())?,
            ShellCommand::State => {
                let json = serde_json::to_string_pretty(self.session.model())
                    .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"));
                writeln!(out, "{json}")?;
            }
            ShellCommand::Export => self.export(out)?,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn edit_layer(&mut self, edit: impl FnOnce(Layer) -> Layer) -> ShellResult<()> {
        let next = self.session.edit_selected_layer(edit)?;
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, session: EditorSession) {
        self.preview = render_preview(session.model());
        self.session = session;
    }

    fn write_layer_list(&self, out: &mut dyn Write) -> ShellResult<()> {
        let layers = self.session.model().layers();
        if layers.is_empty() {
            writeln!(out, "no layers")?;
            return Ok(());
        }
        let selected = self.session.selected_layer_id();
        for (index, layer) in layers.iter().enumerate() {
            let marker = if Some(layer.id()) == selected { '*' } else { ' ' };
            writeln!(
                out,
                "{marker} {} {} blend={} animation={} opacity={}",
                index + 1,
                layer.id(),
                layer.blend_mode(),
                layer.animation_type(),
                layer.opacity()
            )?;
        }
        Ok(())
    }

    fn export(&self, out: &mut dyn Write) -> ShellResult<()> {
        let css = export_css(self.session.model());
        let outcome = delivery::deliver(&css, self.clipboard.as_deref(), out);
        writeln!(out, "{}", outcome.acknowledgement())?;
        if self.notifications {
            notification::notify_export(outcome);
        }
        Ok(())
    }
}
