#![deny(unused_imports)]

use colored::Colorize;
use ninal_span::{ColorScheme, SpanRange, render_spans};
use smallvec::SmallVec;
use std::collections::hash_map;
use std::hash::Hasher;

mod ctxt;
mod dist;
mod extra_info;
mod universal;


pub use ctxt::ErrorContext;
pub use dist::{edit_distance, substr_edit_distance};
pub use extra_info::ExtraErrInfo;
pub use universal::UniversalError;

pub trait NinalError<K: NinalErrorKind> {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo;

    fn get_error_info(&self) -> &ExtraErrInfo;

    fn get_spans(&self) -> &[SpanRange];

    fn get_spans_mut(&mut self) -> &mut SmallVec<[SpanRange; 1]>;

    fn err_kind(&self) -> &K;

    /// Errors at different stages have different indices.
    /// For example, clap errors, read errors and eval errors have different ones.
    fn index(&self) -> u32;

    /// override this when it's a warning
    fn is_warning(&self) -> bool {
        false
    }

    fn get_first_span(&self) -> Option<SpanRange> {
        self.get_spans().iter().filter(|sp| !sp.is_dummy()).min().copied()
    }

    fn color_scheme(&self) -> ColorScheme {
        if self.is_warning() {
            ColorScheme::warning()
        }

        else {
            ColorScheme::error()
        }
    }

    fn set_err_context(&mut self, context: ErrorContext) -> &mut Self {
        self.get_mut_error_info().set_err_context(context);

        self
    }

    // sets the error context when,
    // 1. it's not set previously
    // 2. the given context is not none
    fn try_set_err_context(&mut self, context: Option<ErrorContext>) -> &mut Self {
        let info = self.get_mut_error_info();

        if info.context == ErrorContext::Unknown {
            if let Some(context) = context {
                info.context = context;
            }
        }

        self
    }

    fn set_message(&mut self, message: String) -> &mut Self {
        self.get_mut_error_info().set_message(message);

        self
    }

    /// Errors raised deep inside a tree don't know where they are.
    /// The driver gives them the span of the form being processed.
    fn set_span_if_missing(&mut self, span: SpanRange) -> &mut Self {
        if self.get_first_span().is_none() {
            self.get_spans_mut().push(span);
        }

        self
    }

    fn to_universal(&self, source: &[u8]) -> UniversalError {
        let context = self.get_error_info().context.to_string();
        let rendered = self.render_error(source, true);
        let hash = {
            let mut hasher = hash_map::DefaultHasher::new();

            if let Some(span) = self.get_first_span() {
                hasher.write(&(span.start() as u64).to_be_bytes());
                hasher.write(&(span.end() as u64).to_be_bytes());
            }

            hasher.write(&[self.is_warning() as u8]);
            hasher.write(&self.err_kind().index().to_be_bytes());
            hasher.write(&self.index().to_be_bytes());
            hasher.write(self.err_kind().msg().as_bytes());

            hasher.finish()
        };

        UniversalError {
            context,
            rendered,
            is_warning: self.is_warning(),
            first_span: self.get_first_span().unwrap_or_else(|| SpanRange::dummy(0)),
            hash,
        }
    }

    fn render_error(&self, source: &[u8], render_title: bool) -> String {
        let is_warning = self.is_warning();
        let title = if render_title {
            format!(
                "{}\n",
                render_error_title(self.get_error_info().context.to_string(), is_warning),
            )
        } else {
            String::new()
        };

        let kind = self.err_kind();

        let msg = format!(
            "{}{:04}: {}",
            if is_warning { "W" } else { "E" },
            self.index() * 100 + kind.index(),
            kind.msg(),
        );
        let help = match kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };
        let extra_msg = match &self.get_error_info().msg {
            s if s.is_empty() => String::new(),
            s => format!("\nNote: {s}"),
        };

        let span = if self.get_error_info().show_span {
            match render_spans(source, self.get_spans(), self.color_scheme()) {
                s if s.is_empty() => String::new(),
                s => format!("\n{s}"),
            }
        } else {
            String::new()
        };

        format!("{title}{msg}{help}{extra_msg}{span}")
    }
}

pub trait NinalErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    fn msg(&self) -> String;

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    fn help(&self) -> String;

    /// identifier of this errkind
    fn index(&self) -> u32;
}

pub fn concat_commas(list: &[String], term: &str, prefix: &str, suffix: &str) -> String {
    match list.len() {
        0 => String::new(),
        1 => format!("{prefix}{}{suffix}", list[0]),
        2 => format!("{prefix}{}{suffix} {term} {prefix}{}{suffix}", list[0], list[1]),
        _ => format!("{prefix}{}{suffix}, {}", list[0], concat_commas(&list[1..], term, prefix, suffix)),
    }
}

/// `abcdefghijklmnop` -> `abc...nop`
pub fn trim_long_string(s: String, head: usize, tail: usize) -> String {
    let chars = s.chars().collect::<Vec<char>>();

    if chars.len() <= head + tail + 3 {
        s
    }

    else {
        format!(
            "{}...{}",
            chars[..head].iter().collect::<String>(),
            chars[(chars.len() - tail)..].iter().collect::<String>(),
        )
    }
}

pub(crate) fn render_error_title(
    context: String,
    is_warning: bool,
) -> String {
    if is_warning {
        "[Warning]".yellow()
    } else {
        let context = if context.is_empty() {
            String::new()
        } else {
            format!(" while {context}")
        };

        format!("[Error{context}]").red()
    }.to_string()
}
