#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! I want it to emit ninal-style error messages. Let's not use [`clap`][clap].
//!
//! [clap]: https://crates.io/crates/clap

use hmath::BigInt;
use ninal_config::{
    InterpreterOption,
    MAX_CALL_DEPTH,
    MAX_VERBOSITY,
    MIN_CALL_DEPTH,
    MIN_VERBOSITY,
    SpecialOutput,
};
use ninal_span::SpanRange;
use smallvec::smallvec;
use std::collections::HashMap;

mod arg;
mod error;
mod flag;
mod lex;
mod parse;
mod warn;


pub use arg::{Arg, ArgKind};
pub use error::{ClapError, ClapErrorKind};
pub use flag::{FLAGS, Flag};
use lex::into_line;
use parse::{FlagWithArg, parse_cli};
pub use warn::{ClapWarning, ClapWarningKind};

pub struct ClapResult {
    pub result: InterpreterOption,
    pub errors: Vec<ClapError>,
    pub warnings: Vec<ClapWarning>,

    /// the arguments joined into a single line, spans of the errors point to this
    pub command_line: Vec<u8>,
}

impl ClapResult {
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn parse_cli_args() -> ClapResult {
    // first argument is the path to the binary
    let args = std::env::args().skip(1).collect::<Vec<String>>();

    parse_args(&args)
}

pub fn parse_args(args: &[String]) -> ClapResult {
    let (command_line, tokens) = into_line(args);

    let (parsed_flags, mut errors) = parse_cli(&tokens);
    let mut warnings = vec![];

    // it helps generating errors and warnings
    let mut previous_spans = HashMap::new();
    let mut input_path_span: Option<SpanRange> = None;

    let mut result = InterpreterOption::default();

    // `parse_cli` guarantees that args have correct kinds
    for FlagWithArg {
        flag,
        flag_span,
        arg,
        arg_span,
    } in parsed_flags.into_iter() {
        let flag = match flag {
            Some(flag) => flag,

            // input path
            None => {
                let path = match arg {
                    Some(Arg::Path(path)) => path,
                    _ => { continue; },
                };

                if let Some(previous_span) = input_path_span {
                    errors.push(ClapError::multiple_input_files(previous_span, arg_span));
                    continue;
                }

                result.input_path = Some(path);
                input_path_span = Some(arg_span);
                continue;
            },
        };

        if let Some(previous_span) = previous_spans.get(&flag) {
            errors.push(ClapError::same_flag_multiple_times(
                flag,
                smallvec![*previous_span, flag_span],
            ));
            continue;
        }

        previous_spans.insert(flag, flag_span);

        match (flag, arg) {
            (Flag::Help, _) => {
                result.do_not_run_and_do_this = Some(SpecialOutput::HelpMessage);
            },
            (Flag::Version, _) => {
                result.do_not_run_and_do_this = Some(SpecialOutput::VersionInfo);
            },
            (Flag::RawInput, Some(Arg::RawInput(code))) => {
                result.raw_input = Some(code.into_bytes());
            },
            (Flag::DumpForms, _) => {
                result.dump_forms = true;
            },
            (Flag::DumpAst, _) => {
                result.dump_ast = true;
            },
            (Flag::ShowWarnings, _) => {
                result.show_warnings = true;
            },
            (Flag::HideWarnings, _) => {
                result.show_warnings = false;
            },
            (Flag::MaxCallDepth, Some(Arg::Integer(n))) => {
                match check_range(n, MIN_CALL_DEPTH as i64, MAX_CALL_DEPTH as i64, arg_span) {
                    Ok(n) => {
                        result.max_call_depth = n as usize;
                    },
                    Err(e) => {
                        errors.push(e);
                    },
                }
            },
            (Flag::Verbose, Some(Arg::Integer(n))) => {
                match check_range(n, MIN_VERBOSITY as i64, MAX_VERBOSITY as i64, arg_span) {
                    Ok(n) => {
                        result.verbosity = n as u8;
                    },
                    Err(e) => {
                        errors.push(e);
                    },
                }
            },

            // `parse_cli` already pushed an error for this one
            _ => {},
        }
    }

    for error in check_incompatible_flags(&previous_spans, input_path_span) {
        errors.push(error);
    }

    for warning in warn_useless_flags(&previous_spans) {
        warnings.push(warning);
    }

    if result.do_not_run_and_do_this.is_none()
        && result.input_path.is_none()
        && result.raw_input.is_none()
        && errors.is_empty()
    {
        errors.push(ClapError::no_input_file());
    }

    ClapResult {
        result,
        errors,
        warnings,
        command_line,
    }
}

// both ends are inclusive
fn check_range(n: BigInt, start: i64, end: i64, span: SpanRange) -> Result<i64, ClapError> {
    let in_range = !n.lt_bi(&BigInt::from(start)) && !n.gt_bi(&BigInt::from(end));

    if in_range {
        // it fits: `start` and `end` are `i64`s
        if let Ok(n) = n.to_string().parse::<i64>() {
            return Ok(n);
        }
    }

    Err(ClapError::integer_range_error(
        BigInt::from(start),
        BigInt::from(end),
        n,
        span,
    ))
}

fn check_incompatible_flags(flags: &HashMap<Flag, SpanRange>, input_path_span: Option<SpanRange>) -> Vec<ClapError> {
    let mut result = vec![];

    if let (Some(show_span), Some(hide_span)) = (flags.get(&Flag::ShowWarnings), flags.get(&Flag::HideWarnings)) {
        result.push(ClapError::incompatible_flags(
            Flag::ShowWarnings,
            *show_span,
            Flag::HideWarnings,
            *hide_span,
        ));
    }

    if let (Some(forms_span), Some(ast_span)) = (flags.get(&Flag::DumpForms), flags.get(&Flag::DumpAst)) {
        result.push(ClapError::incompatible_flags(
            Flag::DumpForms,
            *forms_span,
            Flag::DumpAst,
            *ast_span,
        ));
    }

    if let (Some(input_path_span), Some(raw_input_span)) = (input_path_span, flags.get(&Flag::RawInput)) {
        result.push(ClapError::multiple_input_files(input_path_span, *raw_input_span));
    }

    for special in [Flag::Help, Flag::Version] {
        if let Some(special_span) = flags.get(&special) {
            // the first one in the command line, so that the result doesn't depend on `HashMap`
            let other = flags.iter().filter(
                |(flag, _)| **flag != special
            ).min_by_key(|(_, span)| **span);

            if let Some((other, other_span)) = other {
                result.push(ClapError::incompatible_flags(
                    special,
                    *special_span,
                    *other,
                    *other_span,
                ));

                break;
            }
        }
    }

    result
}

fn warn_useless_flags(flags: &HashMap<Flag, SpanRange>) -> Vec<ClapWarning> {
    let mut result = vec![];

    // `--dump-forms` doesn't evaluate anything
    if let (Some(forms_span), Some(depth_span)) = (flags.get(&Flag::DumpForms), flags.get(&Flag::MaxCallDepth)) {
        result.push(ClapWarning::useless_flag(
            Flag::MaxCallDepth,
            *depth_span,
            Flag::DumpForms,
            *forms_span,
        ));
    }

    result
}
