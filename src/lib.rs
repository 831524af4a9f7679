#![deny(unused_imports)]

use ninal_config::{InterpreterOption, SpecialOutput};
use ninal_error::NinalError;
use ninal_output::InterpreterOutput;

mod driver;
mod error;


pub use driver::Driver;
pub use error::{DriverError, DriverErrorKind};

/// Runs the whole input with the given option, on a thread of its own.
pub fn run(option: InterpreterOption) -> InterpreterOutput {
    match run_with_large_stack(option) {
        Ok(output) => output,
        Err(e) => {
            let mut output = InterpreterOutput::new();
            output.push_error(e.to_universal(b""));

            output
        },
    }
}

/// Runs on the current thread. Evaluation grows its own stack, but dropping
/// and printing deeply nested lists still recurse on this one.
pub fn run_on_current_thread(option: InterpreterOption) -> InterpreterOutput {
    if let Some(special) = option.do_not_run_and_do_this {
        let mut output = InterpreterOutput::new();

        match special {
            SpecialOutput::HelpMessage => {
                output.dump_to_stdout(INTERPRETER_HELP_MESSAGE.to_string());
            },
            SpecialOutput::VersionInfo => {
                output.dump_to_stdout(format!("ninal {MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}"));
            },
        }

        return output;
    }

    let mut driver = Driver::new(option);
    driver.run_all();

    driver.finish()
}

/// Dropping a value recurses once per level of list nesting.
pub fn run_with_large_stack(option: InterpreterOption) -> Result<InterpreterOutput, DriverError> {
    let handle = std::thread::Builder::new()
        .name(String::from("ninal"))
        .stack_size(STACK_SIZE)
        .spawn(move || run_on_current_thread(option));

    match handle {
        Ok(handle) => match handle.join() {
            Ok(output) => Ok(output),
            Err(_) => Err(DriverError::interpreter_panicked()),
        },
        Err(e) => Err(DriverError::cannot_spawn_thread(e.to_string())),
    }
}

/// `print` is captured: see `InterpreterOutput::stdout`.
pub fn interpret_input(input: &[u8]) -> InterpreterOutput {
    run(InterpreterOption::test_runner(input))
}

pub fn interpret_file(path: &str) -> InterpreterOutput {
    run(InterpreterOption {
        input_path: Some(path.to_string()),
        ..InterpreterOption::default()
    })
}

const STACK_SIZE: usize = 64 * 1024 * 1024;

pub const INTERPRETER_HELP_MESSAGE: &str =
"Usage: ninal [OPTIONS] INPUT

Examples:
    ninal fib.nl
        It reads `fib.nl` and evaluates its forms one by one.

    ninal --raw-input \"(print (+ 1 2))\"
        It evaluates the given code instead of a file.

Options:
    -h, --help                      Display this message
    --version                       Display the version
    --raw-input CODE                Evaluate CODE instead of a file
    --dump-forms                    Print every form without evaluating it
    --dump-ast                      Print the tree of every form before evaluating it
    --show-warnings                 Show warning messages (default)
    --hide-warnings                 Hide warning messages
    --max-call-depth N              Limit nested function calls, 1..=65536 (default: 512)
    -v, --verbose N                 0: warn, 1: info, 2: debug (default: 0)
                                    `RUST_LOG` still applies
";

pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 1;
pub const PATCH_VERSION: u8 = 0;
