use super::Renderer;
use crate::selection::{ArrowView, ButtonView, PanelView, RenderInstruction};
use plutchik::{Color, EmotionId, Section};
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

fn section_label(section: Section) -> &'static str {
    match section {
        Section::SimilarWords => "Similar words",
        Section::Sensations => "Sensations",
        Section::Message => "Message",
        Section::Purpose => "Purpose",
    }
}

/// `text` on a 24-bit background, with black or white foreground.
fn paint(text: &str, background: Color) -> String {
    let (r, g, b) = background.rgb().into_components();
    let (fr, fg, fb) = background.contrasting().rgb().into_components();
    format!("\x1b[48;2;{r};{g};{b}m\x1b[38;2;{fr};{fg};{fb}m {text} {RESET}")
}

fn arrow(key: &str, label: &str, view: &ArrowView) -> String {
    if view.enabled {
        paint(&format!("[{key}] {label}"), view.color)
    } else {
        format!("{DIM}[{key}] {label}{RESET}")
    }
}

fn button(key: &str, view: &ButtonView) -> String {
    paint(&format!("[{key}] {}", view.label), view.color)
}

/// Line-oriented stand-in for the wheel's panel.
pub struct TerminalRenderer<W: Write> {
    out: W,
    static_mode: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            static_mode: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn is_static(&self) -> bool {
        self.static_mode
    }

    fn write_panel(&mut self, instruction: &RenderInstruction) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "{}", paint(&instruction.title, instruction.title_color))?;

        for section in instruction.sections.iter().filter(|s| s.visible) {
            writeln!(out, "  {}: {}", section_label(section.section), section.text)?;
        }

        match &instruction.panel {
            PanelView::Base {
                intensity_label,
                opposite,
                increase,
                decrease,
            } => {
                writeln!(out, "  Intensity: {intensity_label}")?;
                writeln!(
                    out,
                    "  {}  {}  {}",
                    arrow("+", "more intense", increase),
                    arrow("-", "less intense", decrease),
                    button("o", opposite),
                )?;
            }
            PanelView::Intermediate {
                components,
                explanation,
            } => {
                writeln!(
                    out,
                    "  {} + {}",
                    button("a", &components[0]),
                    button("b", &components[1]),
                )?;
                writeln!(out, "  {explanation}")?;
            }
        }
        out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            log::error!("Terminal write error: {}", e);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn show_placeholder(&mut self) {
        Self::report(self.write_line("Type an emotion to explore the wheel."));
    }

    fn hide_placeholder(&mut self) {
        Self::report(self.write_line(
            "Navigate with o (opposite), + / - (intensity), a / b (components), q to quit.",
        ));
    }

    fn render(&mut self, instruction: &RenderInstruction) {
        if self.static_mode {
            return;
        }
        let result = self.write_panel(instruction);
        Self::report(result);
    }

    fn escape_to_static_mode(&mut self, message: &str) {
        if self.static_mode {
            return;
        }
        self.static_mode = true;
        Self::report(self.write_line(&format!(
            "The wheel is unavailable ({message}). Input is disabled."
        )));
    }

    fn highlight_region(&mut self, id: &EmotionId, color: Option<Color>) {
        if self.static_mode {
            return;
        }
        if let Some(color) = color {
            Self::report(self.write_line(&format!("~ {}", paint(id, color))));
        }
    }
}
