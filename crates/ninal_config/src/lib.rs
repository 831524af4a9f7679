#![deny(unused_imports)]

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;
pub const MIN_CALL_DEPTH: usize = 1;
pub const MAX_CALL_DEPTH: usize = 65536;

type Path = String;

#[derive(Clone, Debug)]
pub struct InterpreterOption {
    pub do_not_run_and_do_this: Option<SpecialOutput>,
    pub input_path: Option<Path>,

    // It has to be `Vec<u8>` because the test code has to run
    // non-ascii inputs.
    pub raw_input: Option<Vec<u8>>,

    /// read and print every form, without evaluating them
    pub dump_forms: bool,

    /// print the tree of each form before evaluating it
    pub dump_ast: bool,

    pub show_warnings: bool,
    pub max_call_depth: usize,

    // 0: warn, 1: info, 2: debug
    pub verbosity: u8,

    // `print` writes to `InterpreterOutput` instead of stdout
    // users cannot set this flag manually
    pub capture_output: bool,
}

impl InterpreterOption {
    pub fn help_message() -> Self {
        InterpreterOption::do_this_and_quit(SpecialOutput::HelpMessage)
    }

    pub fn version_info() -> Self {
        InterpreterOption::do_this_and_quit(SpecialOutput::VersionInfo)
    }

    pub fn do_this_and_quit(s: SpecialOutput) -> Self {
        InterpreterOption {
            do_not_run_and_do_this: Some(s),
            ..InterpreterOption::default()
        }
    }

    pub fn test_runner(code: &[u8]) -> Self {
        InterpreterOption {
            raw_input: Some(code.to_vec()),
            capture_output: true,
            ..InterpreterOption::default()
        }
    }
}

impl Default for InterpreterOption {
    fn default() -> Self {
        InterpreterOption {
            do_not_run_and_do_this: None,
            input_path: None,
            raw_input: None,
            dump_forms: false,
            dump_ast: false,
            show_warnings: true,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            verbosity: 0,
            capture_output: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpecialOutput {
    HelpMessage,
    VersionInfo,
}
