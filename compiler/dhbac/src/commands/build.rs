//! The `build` command: compile a program and write the Go artifact.

use std::io;
use std::path::{Path, PathBuf};

use dhba_diagnostic::emitter::ColorMode;
use dhba_emit::{ArtifactSink, FileSink, WriterSink};
use dhba_parse::compile;
use tracing::debug;

use super::{read_input, report, Outcome, STDIN_PATH};
use crate::DriverError;

/// Output name used when the program comes from stdin.
const DEFAULT_OUTPUT: &str = "out.go";
const GO_EXTENSION: &str = "go";

/// Options shared by `build`, `check` and `lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Source path, or `-` for stdin.
    pub input: String,
    /// Explicit `-o` path.
    pub output: Option<PathBuf>,
    /// Write the artifact to stdout instead of a file.
    pub stdout: bool,
    pub color: ColorMode,
}

/// Parse the arguments following `build`.
pub fn parse_build_options(args: &[String]) -> Result<BuildOptions, String> {
    parse_options(args, true)
}

/// Parse the arguments following `check` or `lex`, which write no artifact
/// and so reject `-o` and `--stdout`.
pub fn parse_input_options(args: &[String]) -> Result<BuildOptions, String> {
    parse_options(args, false)
}

fn parse_options(args: &[String], output_flags: bool) -> Result<BuildOptions, String> {
    let mut options = BuildOptions::default();
    let mut input = None;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" | "--stdout" if !output_flags => {
                return Err(format!("`{arg}` is only accepted by `dhba build`"));
            }
            "-o" | "--output" => {
                let Some(path) = args.next() else {
                    return Err(format!("`{arg}` needs a file name"));
                };
                options.output = Some(PathBuf::from(path));
            }
            "--stdout" => options.stdout = true,
            STDIN_PATH if input.is_some() => {
                return Err(format!("unexpected argument '{arg}'"));
            }
            STDIN_PATH => input = Some(arg.clone()),
            _ => {
                if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = ColorMode::parse(value).ok_or_else(|| {
                        format!("invalid color mode '{value}' (expected auto, always or never)")
                    })?;
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option '{arg}'"));
                } else if input.is_some() {
                    return Err(format!("unexpected argument '{arg}'"));
                } else {
                    input = Some(arg.clone());
                }
            }
        }
    }

    options.input = input.ok_or_else(|| "missing input file".to_string())?;
    Ok(options)
}

/// Where the artifact goes.
///
/// An explicit name gets `.go` appended unless it already ends in `.go`.
/// Without one, the input's extension is replaced by `.go`; stdin builds
/// write `out.go`.
pub fn output_path(input: &str, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.extension().is_some_and(|ext| ext == GO_EXTENSION) => {
            path.to_path_buf()
        }
        Some(path) => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".");
            name.push(GO_EXTENSION);
            PathBuf::from(name)
        }
        None if input == STDIN_PATH => PathBuf::from(DEFAULT_OUTPUT),
        None => Path::new(input).with_extension(GO_EXTENSION),
    }
}

/// Compile `source` and hand the artifact to `sink`. `dest` names the sink in
/// error messages.
pub fn build_source(
    source: &str,
    sink: &mut dyn ArtifactSink,
    dest: &str,
) -> Result<(), DriverError> {
    let artifact = compile(source)?;
    sink.write_artifact(&artifact).map_err(|err| DriverError::Write {
        path: dest.to_string(),
        source: err,
    })
}

/// Run `dhba build`.
pub fn build_file(options: &BuildOptions) -> Outcome {
    if !options.stdout {
        println!("dhemiaBASIC compiler");
    }

    let input = match read_input(&options.input) {
        Ok(input) => input,
        Err(err) => {
            report(err, None, options.color);
            return Outcome::Failure;
        }
    };

    let result = if options.stdout {
        let mut sink = WriterSink::new(io::stdout().lock());
        build_source(&input.text, &mut sink, "<stdout>")
    } else {
        let path = output_path(&options.input, options.output.as_deref());
        debug!(output = %path.display(), "building");
        let mut sink = FileSink::new(&path);
        build_source(&input.text, &mut sink, &path.display().to_string())
    };

    match result {
        Ok(()) => {
            if !options.stdout {
                println!("Compiling completed.");
            }
            Outcome::Success
        }
        Err(err) => {
            report(err, Some(&input), options.color);
            Outcome::Failure
        }
    }
}
