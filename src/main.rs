#![deny(unused_imports)]

use log::LevelFilter;
use ninal::run;
use ninal_clap::parse_cli_args;
use ninal_error::NinalError;
use ninal_output::InterpreterOutput;

fn main() {
    let clap_result = parse_cli_args();

    init_logger(clap_result.result.verbosity);

    let mut interpreter_output = InterpreterOutput::new();

    for warning in clap_result.warnings.iter() {
        interpreter_output.push_warning(warning.to_universal(&clap_result.command_line));
    }

    for error in clap_result.errors.iter() {
        interpreter_output.push_error(error.to_universal(&clap_result.command_line));
    }

    if clap_result.has_error() {
        interpreter_output.concat_and_dump_results();
        std::process::exit(1);
    }

    // clap warnings are shown before the program runs
    interpreter_output.concat_and_dump_results();

    let mut output = run(clap_result.result);

    output.show_overall_result = output.error_count() + output.warning_count() > 0;
    output.concat_and_dump_results();

    if output.has_error() {
        std::process::exit(1);
    }
}

// `RUST_LOG` overrides `--verbose`
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
