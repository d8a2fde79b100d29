/// CLI: reads a JSON build script from stdin or a file, emits JavaScript to stdout.
///
/// Usage:
///   jsb < script.json > out.js
///   jsb script.json   > out.js
///
/// Set JSB_LOG (e.g. JSB_LOG=debug) to trace the builder on stderr.
use std::io::Read;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("JSB_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut file_path: Option<&str> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                eprintln!("Usage: jsb [script.json]");
                eprintln!("  Reads a JSON build script from file or stdin, emits JavaScript to stdout.");
                std::process::exit(0);
            }
            path => file_path = Some(path),
        }
    }

    let json_str = match file_path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Cannot read {path}: {e}");
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| {
                    eprintln!("Cannot read stdin: {e}");
                    std::process::exit(1);
                });
            buf
        }
    };

    let code = jsb::script::render(&json_str).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    print!("{code}");
}
