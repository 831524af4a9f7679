use crate::SpanRange;
use colored::*;

#[derive(Clone, Copy)]
enum Color {
    None,
    Red,
    Blue,
    Yellow,
}

#[derive(Clone, Copy)]
pub struct ColorScheme {
    line_no: Color,
    underline: Color,
}

impl ColorScheme {
    pub fn none() -> Self {
        ColorScheme {
            line_no: Color::None,
            underline: Color::None,
        }
    }

    pub fn error() -> Self {
        ColorScheme {
            line_no: Color::Blue,
            underline: Color::Red,
        }
    }

    pub fn warning() -> Self {
        ColorScheme {
            line_no: Color::Blue,
            underline: Color::Yellow,
        }
    }

    fn paint(color: Color, s: &str) -> String {
        match color {
            Color::None => s.to_string(),
            Color::Red => s.red().to_string(),
            Color::Blue => s.blue().to_string(),
            Color::Yellow => s.yellow().to_string(),
        }
    }

    pub(crate) fn bar(&self) -> String {
        ColorScheme::paint(self.line_no, "│")
    }

    pub(crate) fn dots(&self) -> String {
        ColorScheme::paint(self.line_no, "...")
    }

    pub(crate) fn underline(&self) -> String {
        ColorScheme::paint(self.underline, "^")
    }

    pub(crate) fn render_num(&self, n: usize) -> String {
        let n = format!("{n}");
        let pre = " ".repeat(8usize.saturating_sub(n.len()));

        // do not color whitespaces!
        format!("{pre}{}", ColorScheme::paint(self.line_no, &n))
    }
}

/// Renders line numbers and underlines for error messages.
/// Lines far from any span are collapsed into `...`.
pub fn render_spans(source: &[u8], spans: &[SpanRange], color: ColorScheme) -> String {
    let spans = spans.iter().filter(
        |sp| !sp.is_dummy() && sp.start() <= source.len()
    ).collect::<Vec<_>>();

    if spans.is_empty() {
        return String::new();
    }

    let lines = split_lines(source);
    let is_highlighted = |start: usize, end: usize| spans.iter().any(
        |sp| sp.start() < end.max(start + 1) && start < sp.end().max(sp.start() + 1)
    );

    let first = spans.iter().map(|sp| **sp).min().unwrap_or_else(|| SpanRange::dummy(0));
    let (line_no, col) = first.line_col(source);
    let mut rendered = vec![format!("at line {line_no}, column {col}")];
    let mut last_was_dots = false;

    for (index, (start, end)) in lines.iter().enumerate() {
        let close_to_span = (index.saturating_sub(1)..(index + 2).min(lines.len())).any(
            |i| is_highlighted(lines[i].0, lines[i].1)
        );

        if !close_to_span {
            if !last_was_dots && !rendered.is_empty() {
                rendered.push(format!("{}", color.dots()));
                last_was_dots = true;
            }

            continue;
        }

        last_was_dots = false;
        let line = String::from_utf8_lossy(&source[*start..*end]).to_string();
        rendered.push(format!("{} {} {line}", color.render_num(index + 1), color.bar()));

        if is_highlighted(*start, *end) {
            let mut marks = String::new();

            for i in *start..(*end).max(*start + 1) {
                let hit = spans.iter().any(|sp| sp.start() <= i && i < sp.end().max(sp.start() + 1));

                if hit {
                    marks.push_str(&color.underline());
                }

                else {
                    marks.push(' ');
                }
            }

            rendered.push(format!("{} {} {}", " ".repeat(8), color.bar(), marks.trim_end()));
        }
    }

    // trailing dots don't tell anything
    if last_was_dots {
        rendered.pop();
    }

    rendered.join("\n")
}

// (start, end) of each line, without the '\n'
fn split_lines(source: &[u8]) -> Vec<(usize, usize)> {
    let mut result = vec![];
    let mut start = 0;

    for (i, c) in source.iter().enumerate() {
        if *c == b'\n' {
            result.push((start, i));
            start = i + 1;
        }
    }

    result.push((start, source.len()));
    result
}
