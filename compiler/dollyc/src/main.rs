//! Dolly CLI
//!
//! Generates clone methods for types marked `[Clonable]`.

use std::path::PathBuf;

use dollyc::commands::{check_file, explain_error, generate_file};
use dollyc::config::{parse_generate_options, GenerateOptions};

/// Parse options after the input path, handling `-o <dir>` (needs lookahead).
fn parse_options(args: &[String]) -> GenerateOptions {
    let mut options = GenerateOptions::default();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "-o" && i + 1 < args.len() {
            options.out_dir = Some(PathBuf::from(&args[i + 1]));
            i += 2;
        } else {
            let parsed = parse_generate_options(&args[i..=i]);
            options.merge(&parsed);
            i += 1;
        }
    }
    options
}

fn main() {
    dollyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "generate" => {
            if args.len() < 3 {
                eprintln!("Usage: dolly generate <input.json> [options]");
                eprintln!();
                print_generate_options();
                std::process::exit(1);
            }
            generate_file(&args[2], &parse_options(&args[3..]))
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: dolly check <input.json> [options]");
                std::process::exit(1);
            }
            check_file(&args[2], &parse_options(&args[3..]))
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: dolly explain <ERROR_CODE>");
                eprintln!("Example: dolly explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("Dolly {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_generate_options() {
    println!("Options:");
    println!("  -o <dir>, --out-dir=<dir>  Write generated files to <dir>");
    println!("  --module=<name>            Module the support types live in (default: App)");
    println!("  --nullable, --no-nullable  Override the input's nullability context");
    println!("  --type=<name>              Only process the named type");
    println!("  --error-format=<fmt>       Diagnostics: human (default), json");
    println!("  --color=<when>             Colors: auto (default), always, never");
    println!("  --jobs=<n>                 Worker threads (default: one per core)");
    println!("  --dry-run                  Report what would be written");
}

fn print_usage() {
    println!("Dolly clone generator");
    println!();
    println!("Usage: dolly <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <input.json>  Generate clone methods for marked types");
    println!("  check <input.json>     Classify marked types without generating");
    println!("  explain <code>         Explain an error code (e.g., E1002)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    print_generate_options();
    println!();
    println!("Examples:");
    println!("  dolly generate types.json -o generated");
    println!("  dolly generate types.json --module=Shop --dry-run -o generated");
    println!("  dolly check types.json --error-format=json");
    println!("  dolly explain E1002");
}
