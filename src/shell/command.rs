use std::str::FromStr;

use super::error::{ShellError, ShellResult};
use crate::color;
use crate::model::{AnimationType, AxisOrigin, BlendMode, LayerId, Percentage, TimingFunction};

const OPACITY_RANGE: (f64, f64) = (0.0, 1.0);
const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);
const ORIGIN_OFFSET_RANGE: (f64, f64) = (-200.0, 200.0);

pub const HELP: &str = "\
commands:
  add                          add a layer with default settings and select it
  list                         list layers, * marks the selection
  select <id>                  select a layer
  opacity <0..1>               set the selected layer's opacity
  top <0..100>                 set the selected layer's vertical center (%)
  left <0..100>                set the selected layer's horizontal center (%)
  size <0..100>                set the selected layer's size (%)
  blend <mode>                 hard-light | screen | multiply | overlay
  animation <type>             none | moveInCircle | moveVertical | moveHorizontal
  duration <secs>              set the animation cycle length
  timing <fn>                  ease | linear | ease-in | ease-out | ease-in-out
  color <index> <#rrggbb>      recolor one stop, keeping its alpha
  add-stop                     append a translucent white stop
  origin-x <base> <offset>     pivot x as base% + offset px
  origin-y <base> <offset>     pivot y as base% + offset px
  bg-from <#rrggbb>            recolor the background start
  bg-to <#rrggbb>              recolor the background end
  preview                      print the live preview as HTML
  keyframes                    print the motion keyframes used by the preview
  state                        print the current model as JSON
  export                       copy the stylesheet (or print it)
  help                         show this text
  quit                         leave the editor";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add,
    List,
    Select(LayerId),
    Opacity(f64),
    Top(Percentage),
    Left(Percentage),
    Size(Percentage),
    Blend(BlendMode),
    Animation(AnimationType),
    Duration(f64),
    Timing(TimingFunction),
    Color { index: usize, hex: String },
    AddStop,
    OriginX(AxisOrigin),
    OriginY(AxisOrigin),
    BackgroundFrom(String),
    BackgroundTo(String),
    Preview,
    Keyframes,
    State,
    Export,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> ShellResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args = Args {
            command: name,
            words: words.collect(),
        };

        let command = match name {
            "add" => Self::Add,
            "list" => Self::List,
            "select" => Self::Select(LayerId::new(args.word(0, "id")?)),
            "opacity" => Self::Opacity(args.bounded(0, "opacity", OPACITY_RANGE)?),
            "top" => Self::Top(args.percentage(0, "top")?),
            "left" => Self::Left(args.percentage(0, "left")?),
            "size" => Self::Size(args.percentage(0, "size")?),
            "blend" => Self::Blend(BlendMode::from(args.word(0, "mode")?.to_string())),
            "animation" => Self::Animation(args.word(0, "type")?.parse()?),
            "duration" => Self::Duration(args.bounded(0, "seconds", (0.0, f64::MAX))?),
            "timing" => Self::Timing(args.word(0, "function")?.parse()?),
            "color" => Self::Color {
                index: args.index(0, "index")?,
                hex: args.hex(1, "hex")?,
            },
            "add-stop" => Self::AddStop,
            "origin-x" => Self::OriginX(args.axis_origin()?),
            "origin-y" => Self::OriginY(args.axis_origin()?),
            "bg-from" => Self::BackgroundFrom(args.hex(0, "hex")?),
            "bg-to" => Self::BackgroundTo(args.hex(0, "hex")?),
            "preview" => Self::Preview,
            "keyframes" => Self::Keyframes,
            "state" => Self::State,
            "export" => Self::Export,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

struct Args<'a> {
    command: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn word(&self, position: usize, argument: &'static str) -> ShellResult<&'a str> {
        self.words
            .get(position)
            .copied()
            .ok_or_else(|| ShellError::MissingArgument {
                command: self.command.to_string(),
                argument,
            })
    }

    fn invalid(&self, argument: &'static str, value: &str) -> ShellError {
        ShellError::InvalidArgument {
            command: self.command.to_string(),
            argument,
            value: value.to_string(),
        }
    }

    fn bounded(
        &self,
        position: usize,
        argument: &'static str,
        (min, max): (f64, f64),
    ) -> ShellResult<f64> {
        let raw = self.word(position, argument)?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| (min..=max).contains(value))
            .ok_or_else(|| self.invalid(argument, raw))
    }

    fn percentage(&self, position: usize, argument: &'static str) -> ShellResult<Percentage> {
        let raw = self.word(position, argument)?;
        Percentage::parse(raw)
            .filter(|value| (PERCENT_RANGE.0..=PERCENT_RANGE.1).contains(&value.value()))
            .ok_or_else(|| self.invalid(argument, raw))
    }

    fn index(&self, position: usize, argument: &'static str) -> ShellResult<usize> {
        let raw = self.word(position, argument)?;
        raw.parse().map_err(|_| self.invalid(argument, raw))
    }

    fn hex(&self, position: usize, argument: &'static str) -> ShellResult<String> {
        let raw = self.word(position, argument)?;
        if color::is_hex(raw) {
            Ok(raw.to_string())
        } else {
            Err(self.invalid(argument, raw))
        }
    }

    fn axis_origin(&self) -> ShellResult<AxisOrigin> {
        Ok(AxisOrigin::new(
            self.bounded(0, "base", PERCENT_RANGE)?,
            self.bounded(1, "offset", ORIGIN_OFFSET_RANGE)?,
        ))
    }
}
