//! The `check` command: compile without writing anything.

use dhba_emit::StringSink;

use super::{build_source, read_input, report, BuildOptions, Outcome};

pub fn check_file(options: &BuildOptions) -> Outcome {
    let input = match read_input(&options.input) {
        Ok(input) => input,
        Err(err) => {
            report(err, None, options.color);
            return Outcome::Failure;
        }
    };

    let mut sink = StringSink::new();
    match build_source(&input.text, &mut sink, "<memory>") {
        Ok(()) => {
            let lines = sink.as_str().lines().count();
            println!("OK: {} ({lines} lines of Go)", input.name);
            Outcome::Success
        }
        Err(err) => {
            report(err, Some(&input), options.color);
            Outcome::Failure
        }
    }
}
