//! dhemiaBASIC compiler CLI.

use dhbac::commands::{
    build_file, check_file, lex_file, parse_build_options, parse_input_options, Outcome,
};

fn main() {
    dhbac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();

    let outcome = match command {
        "build" | "check" | "lex" => {
            let parsed = if command == "build" {
                parse_build_options(&args[2..])
            } else {
                parse_input_options(&args[2..])
            };
            let options = match parsed {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_command_usage(command);
                    std::process::exit(1);
                }
            };
            match command {
                "build" => build_file(&options),
                "check" => check_file(&options),
                _ => lex_file(&options),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Outcome::Success
        }
        "version" | "--version" | "-V" => {
            println!("dhba {}", env!("CARGO_PKG_VERSION"));
            Outcome::Success
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            Outcome::Failure
        }
    };

    std::process::exit(outcome.exit_code());
}

fn print_command_usage(command: &str) {
    match command {
        "build" => {
            eprintln!("Usage: dhba build <file.dhba> [options]");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  -o, --output <path>   Output file (`.go` is appended if missing)");
            eprintln!("  --stdout              Write the Go source to stdout");
            eprintln!("  --color=<mode>        auto, always or never");
        }
        "check" => eprintln!("Usage: dhba check <file.dhba> [--color=<mode>]"),
        _ => eprintln!("Usage: dhba lex <file.dhba> [--color=<mode>]"),
    }
}

fn print_usage() {
    println!("dhemiaBASIC compiler {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: dhba <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <file>   Compile to Go (writes <file>.go, or out.go for stdin)");
    println!("  check <file>   Compile without writing output");
    println!("  lex <file>     Print the token stream");
    println!("  help           Show this message");
    println!("  version        Show the compiler version");
    println!();
    println!("Use `-` as <file> to read the program from stdin.");
    println!("Set DHBA_LOG (e.g. DHBA_LOG=debug) to enable logging on stderr.");
}
