//! Output sinks for the printer.
//!
//! The printer only ever emits two kinds of text: structural punctuation
//! and whitespace (`write_str`), and tokens that carry a [`Style`]
//! (`write_styled`). Sinks decide how styles are shown.

use std::io;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Deserialize;

use crate::hnode::Style;
use crate::strings::escape_html;

pub trait Output {
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn write_styled(&mut self, s: &str, style: Style) -> io::Result<()>;
}

impl<O: Output + ?Sized> Output for &mut O {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn write_styled(&mut self, s: &str, style: Style) -> io::Result<()> {
        (**self).write_styled(s, style)
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn write_styled(&mut self, s: &str, style: Style) -> io::Result<()> {
        (**self).write_styled(s, style)
    }
}

/// Plain text; styles are dropped.
#[derive(Debug)]
pub struct TextOutput<W> {
    writer: W,
}

impl<W: io::Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Output for TextOutput<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn write_styled(&mut self, s: &str, _style: Style) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }
}

/// Styled tokens are wrapped in ANSI escape sequences.
#[derive(Debug)]
pub struct AnsiOutput<W> {
    writer: W,
}

impl<W: io::Write> AnsiOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ansi_style(style: Style) -> owo_colors::Style {
    let base = owo_colors::Style::new();
    match style {
        Style::TypeName => base.yellow(),
        Style::StringConst => base.bold(),
        Style::NumberConst | Style::BoolConst => base.green(),
        Style::UserType => base.cyan(),
        Style::Missing => base.red().bold(),
    }
}

impl<W: io::Write> Output for AnsiOutput<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn write_styled(&mut self, s: &str, style: Style) -> io::Result<()> {
        write!(self.writer, "{}", s.style(ansi_style(style)))
    }
}

/// HTML fragment; styled tokens become `<span class="...">`. The caller
/// supplies the surrounding `<pre>` and stylesheet.
#[derive(Debug)]
pub struct HtmlOutput<W> {
    writer: W,
}

impl<W: io::Write> HtmlOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Output for HtmlOutput<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(escape_html(s).as_bytes())
    }

    fn write_styled(&mut self, s: &str, style: Style) -> io::Result<()> {
        write!(
            self.writer,
            "<span class=\"{}\">{}</span>",
            style.class_name(),
            escape_html(s)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when the stream is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve<S: IsTerminal>(self, stream: &S) -> bool {
        match self {
            ColorChoice::Auto => stream.is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

pub fn output_for<'a, W: io::Write + 'a>(writer: W, color: bool) -> Box<dyn Output + 'a> {
    if color {
        Box::new(AnsiOutput::new(writer))
    } else {
        Box::new(TextOutput::new(writer))
    }
}

/// An output for stdout, coloured according to `choice`.
pub fn stdout_output(choice: ColorChoice) -> Box<dyn Output> {
    let stdout = io::stdout();
    let color = choice.resolve(&stdout);
    output_for(stdout, color)
}
