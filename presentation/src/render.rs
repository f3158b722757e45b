use colored::Colorize;
use domain::Speaker;
use shared::utils::wrap_words;
use std::io::{self, Write};

const DEFAULT_WIDTH: usize = 80;
const MIN_TEXT_WIDTH: usize = 20;

/// Writes transcript turns as `Label: text` followed by a blank line,
/// wrapping the text under the label.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptRenderer {
    width: usize,
    use_color: bool,
}

impl TranscriptRenderer {
    pub fn new(width: usize, use_color: bool) -> Self {
        Self { width, use_color }
    }

    /// Sized to the current terminal, 80 columns when that is unknown.
    pub fn for_terminal(use_color: bool) -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(width, use_color)
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn message<W: Write>(&self, out: &mut W, speaker: Speaker, text: &str) -> io::Result<()> {
        let label = format!("{}: ", speaker.label());
        let indent = " ".repeat(label.len());
        let text_width = self.width.saturating_sub(label.len()).max(MIN_TEXT_WIDTH);

        for (i, line) in wrap_words(text, text_width).iter().enumerate() {
            if i == 0 {
                writeln!(out, "{}{}", self.label(speaker, &label), line)?;
            } else {
                writeln!(out, "{indent}{line}")?;
            }
        }
        writeln!(out)
    }

    pub fn banner<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "{}", title.bold())?;
            writeln!(out, "{}", "Type 'exit' or 'quit' to leave.".dimmed())?;
        } else {
            writeln!(out, "{title}")?;
            writeln!(out, "Type 'exit' or 'quit' to leave.")?;
        }
        writeln!(out)
    }

    pub fn note<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "{}", text.dimmed())
        } else {
            writeln!(out, "{text}")
        }
    }

    fn label(&self, speaker: Speaker, label: &str) -> String {
        if !self.use_color {
            return label.to_string();
        }
        match speaker {
            Speaker::User => label.blue().bold().to_string(),
            Speaker::Bot => label.green().bold().to_string(),
        }
    }
}
