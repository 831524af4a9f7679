use crate::{ArgKind, FLAGS, Flag};
use hmath::BigInt;
use ninal_error::{
    ErrorContext,
    ExtraErrInfo,
    NinalError,
    NinalErrorKind,
    substr_edit_distance,
    trim_long_string,
};
use ninal_span::SpanRange;
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Debug)]
pub struct ClapError {
    kind: ClapErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl ClapError {
    pub fn invalid_flag(token: &str, span: SpanRange) -> Self {
        // it catches the typo
        let mut closest_flag: &[u8] = b"";
        let mut closest_dist = usize::MAX;

        for flag in FLAGS.iter() {
            for candidate in [Some(flag.long()), flag.short()].into_iter().flatten() {
                let dist = substr_edit_distance(token.as_bytes(), candidate);

                if dist < closest_dist {
                    closest_dist = dist;
                    closest_flag = candidate;
                }
            }
        }

        let mut extra = ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine);

        //  --xx -> -h  (no sense)
        //  --dmp-ast -> --dump-ast  (makes sense)
        //  --verrrsion -> --version (makes sense)
        if (token.len() > 4 && closest_dist < 3) || closest_dist < 2 {
            extra.set_message(format!("Do you mean `{}`?", String::from_utf8_lossy(closest_flag)));
        }

        ClapError {
            kind: ClapErrorKind::InvalidFlag(token.to_string()),
            spans: smallvec![span],
            extra,
        }
    }

    pub fn invalid_argument(kind: ArgKind, argument: &str, span: SpanRange) -> Self {
        ClapError {
            kind: ClapErrorKind::InvalidArgument(kind, argument.to_string()),
            spans: smallvec![span],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }

    pub fn no_arg(flag: Flag, kind: ArgKind, span: SpanRange) -> Self {
        ClapError {
            kind: ClapErrorKind::NoArg(flag, kind),
            spans: smallvec![span],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }

    pub fn no_input_file() -> Self {
        ClapError {
            kind: ClapErrorKind::NoInputFile,
            spans: smallvec![],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine).set_show_span(false).to_owned(),
        }
    }

    pub fn multiple_input_files(span1: SpanRange, span2: SpanRange) -> Self {
        ClapError {
            kind: ClapErrorKind::MultipleInputFiles,
            spans: smallvec![span1, span2],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }

    pub fn same_flag_multiple_times(flag: Flag, spans: SmallVec<[SpanRange; 1]>) -> Self {
        ClapError {
            kind: ClapErrorKind::SameFlagMultipleTimes(flag),
            spans,
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }

    pub fn incompatible_flags(
        flag1: Flag,
        span1: SpanRange,
        flag2: Flag,
        span2: SpanRange,
    ) -> Self {
        ClapError {
            kind: ClapErrorKind::IncompatibleFlags(flag1, flag2),
            spans: smallvec![span1, span2],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }

    // both `start` and `end` are inclusive
    pub fn integer_range_error(start: BigInt, end: BigInt, given: BigInt, span: SpanRange) -> Self {
        ClapError {
            kind: ClapErrorKind::IntegerRangeError {
                start, end, given,
            },
            spans: smallvec![span],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }
}

impl NinalError<ClapErrorKind> for ClapError {
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

    fn err_kind(&self) -> &ClapErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        0
    }
}

#[derive(Clone, Debug)]
pub enum ClapErrorKind {
    InvalidFlag(String),
    InvalidArgument(ArgKind, String),
    NoArg(Flag, ArgKind),
    NoInputFile,
    MultipleInputFiles,
    IncompatibleFlags(Flag, Flag),
    SameFlagMultipleTimes(Flag),
    IntegerRangeError {
        start: BigInt,  // inclusive
        end: BigInt,    // inclusive
        given: BigInt,
    },
}

impl NinalErrorKind for ClapErrorKind {
    fn msg(&self) -> String {
        match self {
            ClapErrorKind::InvalidFlag(s) => format!("invalid flag: `{}`", trim_long_string(s.to_string(), 16, 16)),
            ClapErrorKind::InvalidArgument(kind, arg) => format!(
                "expected {}, got `{}`",
                kind.render_error(),
                trim_long_string(arg.to_string(), 16, 16),
            ),
            ClapErrorKind::NoArg(flag, kind) => format!(
                "`{flag}` expects {}, got nothing",
                kind.render_error(),
            ),
            ClapErrorKind::NoInputFile => String::from("no input file"),
            ClapErrorKind::MultipleInputFiles => String::from("multiple inputs"),
            ClapErrorKind::SameFlagMultipleTimes(flag) => format!("`{flag}` given more than once"),
            ClapErrorKind::IncompatibleFlags(flag1, flag2) => format!("`{flag1}` and `{flag2}` are incompatible"),
            ClapErrorKind::IntegerRangeError { start, end, given } => format!(
                "expected an integer in range {}..={}, got {}",
                start.to_string(),
                end.to_string(),
                trim_long_string(given.to_string(), 8, 8),
            ),
        }
    }

    fn help(&self) -> String {
        match self {
            ClapErrorKind::InvalidFlag(_)
            | ClapErrorKind::NoInputFile => String::from("Try `ninal --help` to see available options."),
            ClapErrorKind::MultipleInputFiles => String::from("`ninal` runs either a single file or `--raw-input`."),
            ClapErrorKind::IncompatibleFlags(flag1, flag2) => match (flag1, flag2) {
                (Flag::Help, f)
                | (f, Flag::Help) => format!("There's no help message for `{f}`."),
                (Flag::Version, f)
                | (f, Flag::Version) => format!("There's no version info for `{f}`."),
                (Flag::DumpForms, Flag::DumpAst)
                | (Flag::DumpAst, Flag::DumpForms) => format!(
                    "`{}` doesn't build anything, so there's no tree to dump.",
                    Flag::DumpForms,
                ),
                _ => String::new(),
            },
            ClapErrorKind::InvalidArgument(_, _)
            | ClapErrorKind::NoArg(_, _)
            | ClapErrorKind::SameFlagMultipleTimes(_)
            | ClapErrorKind::IntegerRangeError { .. } => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            ClapErrorKind::InvalidFlag(_) => 0,
            ClapErrorKind::InvalidArgument(_, _) => 1,
            ClapErrorKind::NoArg(_, _) => 2,
            ClapErrorKind::NoInputFile => 3,
            ClapErrorKind::MultipleInputFiles => 4,
            ClapErrorKind::SameFlagMultipleTimes(_) => 5,
            ClapErrorKind::IncompatibleFlags(_, _) => 6,
            ClapErrorKind::IntegerRangeError { .. } => 7,
        }
    }
}
