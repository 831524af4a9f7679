#![deny(unused_imports)]

use log::error;
use ninal_error::UniversalError;
use std::collections::HashSet;


/// Everything a run produces, except what `print` wrote to a real stdout.
#[derive(Default)]
pub struct InterpreterOutput {
    errors: Vec<UniversalError>,
    warnings: Vec<UniversalError>,

    // `print` lines and dumps, when they're captured
    stdout: Vec<String>,

    /// appends "N errors and M warnings" to stderr
    pub show_overall_result: bool,

    seen: HashSet<u64>,
}

impl InterpreterOutput {
    pub fn new() -> Self {
        InterpreterOutput::default()
    }

    pub fn push_error(&mut self, mut error: UniversalError) {
        if error.is_warning {
            error!("InterpreterOutput::push_error(), got a warning: {}", error.context());
            error.is_warning = false;
        }

        self.push(error);
    }

    pub fn push_warning(&mut self, mut warning: UniversalError) {
        if !warning.is_warning {
            error!("InterpreterOutput::push_warning(), got an error: {}", warning.context());
            warning.is_warning = true;
        }

        self.push(warning);
    }

    // the hash covers `is_warning`, so an error and a warning never collide
    fn push(&mut self, e: UniversalError) {
        if !self.seen.insert(e.hash()) {
            return;
        }

        if e.is_warning {
            self.warnings.push(e);
        } else {
            self.errors.push(e);
        }
    }

    pub fn dump_to_stdout(&mut self, message: String) {
        self.stdout.push(message);
    }

    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Sorted by the position of the first span.
    pub fn concat_errors(&mut self) -> String {
        concat_sorted(&mut self.errors)
    }

    pub fn concat_warnings(&mut self) -> String {
        concat_sorted(&mut self.warnings)
    }

    /// (stdout, stderr). Warnings come before errors.
    pub fn concat_results(&mut self) -> (String, String) {
        let stderr = [
            self.concat_warnings(),
            self.concat_errors(),
            if self.show_overall_result { self.overall_result() } else { String::new() },
        ];

        (
            self.stdout.join("\n"),
            stderr.into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join("\n\n"),
        )
    }

    fn overall_result(&self) -> String {
        format!(
            "had {} error{} and {} warning{} in total",
            self.errors.len(),
            plural(self.errors.len()),
            self.warnings.len(),
            plural(self.warnings.len()),
        )
    }

    pub fn concat_and_dump_results(&mut self) {
        let (stdout, stderr) = self.concat_results();

        if !stdout.is_empty() {
            println!("{stdout}");
        }

        if !stderr.is_empty() {
            eprintln!("{stderr}");
        }
    }
}

fn concat_sorted(list: &mut Vec<UniversalError>) -> String {
    list.sort_by_key(|e| e.first_span());

    list.iter().map(
        |e| e.rendered().to_string()
    ).collect::<Vec<String>>().join("\n\n")
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
