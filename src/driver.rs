use crate::DriverError;
use log::{debug, info};
use ninal_ast::build_unit;
use ninal_config::InterpreterOption;
use ninal_error::{ErrorContext, NinalError, NinalErrorKind};
use ninal_interpreter::{BufferedSink, EvalCtxt, OutputSink, StdoutSink, run_unit};
use ninal_output::InterpreterOutput;
use ninal_reader::{Reader, read_all};
use ninal_span::SpanRange;

/// Reads, builds and evaluates forms one at a time.
///
/// A read error stops the run, because the reader cannot find where the next form starts.
/// A build or evaluation error only aborts the current form: functions that are
/// already defined stay in the table.
pub struct Driver {
    option: InterpreterOption,
    source: Vec<u8>,

    // where the next form starts
    cursor: usize,

    ctxt: EvalCtxt,
    output: InterpreterOutput,

    // `Some` when `print` is captured
    captured: Option<BufferedSink>,

    // set by a read error or a file error
    halted: bool,
}

impl Driver {
    pub fn new(option: InterpreterOption) -> Self {
        let mut output = InterpreterOutput::new();
        let mut halted = false;

        let source = match (&option.raw_input, &option.input_path) {
            (Some(raw_input), _) => raw_input.clone(),
            (None, Some(path)) => match std::fs::read(path) {
                Ok(source) => source,
                Err(e) => {
                    let e = DriverError::cannot_read_file(path, e.to_string());
                    output.push_error(e.to_universal(b""));
                    halted = true;

                    vec![]
                },
            },
            (None, None) => vec![],
        };

        let (sink, captured) = if option.capture_output {
            let sink = BufferedSink::new();

            (Box::new(sink.clone()) as Box<dyn OutputSink>, Some(sink))
        } else {
            (Box::new(StdoutSink) as Box<dyn OutputSink>, None)
        };

        info!(
            "ninal::Driver::new(), {} bytes of input, max_call_depth: {}",
            source.len(),
            option.max_call_depth,
        );

        Driver {
            ctxt: EvalCtxt::new(sink, option.max_call_depth),
            option,
            source,
            cursor: 0,
            output,
            captured,
            halted,
        }
    }

    /// Reads the next form and, if there is one, builds and evaluates it.
    /// `Ok(false)` means it reached the end of the input. `Err(())` means
    /// it cannot continue: the error is in the output.
    pub fn step(&mut self) -> Result<bool, ()> {
        if self.halted {
            return Err(());
        }

        let mut reader = Reader::starting_at(&self.source, self.cursor);

        let form = match reader.at_end() {
            Ok(true) => {
                return Ok(false);
            },
            Ok(false) => {
                let start = reader.cursor();

                match reader.parse_list() {
                    Ok(form) => (form, SpanRange::new(start, reader.cursor())),
                    Err(e) => {
                        self.halt_with(e);
                        return Err(());
                    },
                }
            },
            Err(e) => {
                self.halt_with(e);
                return Err(());
            },
        };

        let (form, span) = form;
        self.cursor = span.end();

        debug!(
            "ninal::Driver::step(), form at {}..{}",
            span.start(),
            span.end(),
        );

        let unit = match build_unit(&form) {
            Ok((unit, warnings)) => {
                if self.option.show_warnings {
                    for warning in warnings {
                        self.push_warning(warning, span, ErrorContext::BuildingForm);
                    }
                }

                unit
            },
            Err(e) => {
                self.push_error(e, span, ErrorContext::BuildingForm);
                return Ok(true);
            },
        };

        if self.option.dump_ast {
            self.ctxt.emit_line(unit.to_string());
        }

        if let Err(e) = run_unit(&unit, &mut self.ctxt) {
            self.push_error(e, span, ErrorContext::EvaluatingForm);
        }

        Ok(true)
    }

    pub fn run_all(&mut self) {
        if self.option.dump_forms {
            self.dump_forms();
            return;
        }

        while let Ok(true) = self.step() {}
    }

    // forms are not built: unknown symbols and arity errors go unnoticed
    fn dump_forms(&mut self) {
        if self.halted {
            return;
        }

        match read_all(&self.source) {
            Ok(forms) => {
                for form in forms.iter() {
                    self.ctxt.emit_line(form.to_string());
                }

                self.cursor = self.source.len();
            },
            Err(e) => {
                self.halt_with(e);
            },
        }
    }

    pub fn output(&self) -> &InterpreterOutput {
        &self.output
    }

    pub fn finish(mut self) -> InterpreterOutput {
        if let Some(captured) = &self.captured {
            for line in captured.take_lines() {
                self.output.dump_to_stdout(line);
            }
        }

        self.output
    }

    fn halt_with<K: NinalErrorKind, E: NinalError<K>>(&mut self, mut e: E) {
        e.try_set_err_context(Some(ErrorContext::ReadingForm));
        self.output.push_error(e.to_universal(&self.source));
        self.halted = true;
    }

    fn push_error<K: NinalErrorKind, E: NinalError<K>>(&mut self, mut e: E, span: SpanRange, context: ErrorContext) {
        e.set_span_if_missing(span).try_set_err_context(Some(context));
        self.output.push_error(e.to_universal(&self.source));
    }

    fn push_warning<K: NinalErrorKind, E: NinalError<K>>(&mut self, mut w: E, span: SpanRange, context: ErrorContext) {
        w.set_span_if_missing(span).try_set_err_context(Some(context));
        self.output.push_warning(w.to_universal(&self.source));
    }
}
