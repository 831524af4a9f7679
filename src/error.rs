use ninal_error::{ExtraErrInfo, NinalError, NinalErrorKind};
use ninal_span::SpanRange;
use smallvec::{SmallVec, smallvec};

/// Errors that are not about the code being interpreted.
#[derive(Debug)]
pub struct DriverError {
    kind: DriverErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl DriverError {
    fn new(kind: DriverErrorKind) -> Self {
        DriverError {
            kind,
            spans: smallvec![],
            extra: ExtraErrInfo::none().set_show_span(false).to_owned(),
        }
    }

    pub fn cannot_read_file(path: &str, reason: String) -> Self {
        DriverError::new(DriverErrorKind::CannotReadFile {
            path: path.to_string(),
            reason,
        })
    }

    pub fn cannot_spawn_thread(reason: String) -> Self {
        DriverError::new(DriverErrorKind::CannotSpawnThread(reason))
    }

    pub fn interpreter_panicked() -> Self {
        DriverError::new(DriverErrorKind::InterpreterPanicked)
    }
}

impl NinalError<DriverErrorKind> for DriverError {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn get_spans(&self) -> &[SpanRange] {
        &self.spans
    }

    fn get_spans_mut(&mut self) -> &mut SmallVec<[SpanRange; 1]> {
        &mut self.spans
    }

    fn err_kind(&self) -> &DriverErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        4
    }
}

#[derive(Debug)]
pub enum DriverErrorKind {
    CannotReadFile {
        path: String,
        reason: String,
    },
    CannotSpawnThread(String),
    InterpreterPanicked,
}

impl NinalErrorKind for DriverErrorKind {
    fn msg(&self) -> String {
        match self {
            DriverErrorKind::CannotReadFile { path, reason } => format!("cannot read `{path}`: {reason}"),
            DriverErrorKind::CannotSpawnThread(reason) => format!("cannot spawn the interpreter thread: {reason}"),
            DriverErrorKind::InterpreterPanicked => String::from("the interpreter panicked"),
        }
    }

    fn help(&self) -> String {
        match self {
            DriverErrorKind::InterpreterPanicked => String::from("It's a bug. Try `--verbose 2` to see where it stopped."),
            _ => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            DriverErrorKind::CannotReadFile { .. } => 0,
            DriverErrorKind::CannotSpawnThread(_) => 1,
            DriverErrorKind::InterpreterPanicked => 2,
        }
    }
}
