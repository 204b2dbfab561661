//! RED command line.

use redc::commands::{check_files, dump_file, lex_file, parse_file};
use redc::{init_tracing, CliOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "parse" | "dump" | "check" => {
            let options = match CliOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(error) => {
                    eprintln!("error: {error}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            };
            let Some(path) = options.paths.first() else {
                eprintln!("Usage: red {command} <file.robot> [options]");
                std::process::exit(1);
            };
            let ok = match command.as_str() {
                "lex" => lex_file(path, &options),
                "parse" => parse_file(path, &options),
                "dump" => dump_file(path, &options),
                _ => check_files(&options.paths, &options),
            };
            if !ok {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("RED {}", env!("CARGO_PKG_VERSION"));
            println!("Robot Framework parser and dumper");
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("RED (Robot Framework parser and dumper)");
    println!();
    println!("Usage: red <command> [options] <file>");
    println!();
    println!("Commands:");
    println!("  lex <file>           Show the cells of each line and their token types");
    println!("  parse <file>         Show the model and build messages of a file");
    println!("  dump <file>          Parse a file and write the model back out");
    println!("  check <files...>     Report build messages and round trip failures");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --rf-version <x.y[.z]>  Robot Framework version to parse for (default: 3.1)");
    println!("  --format <robot|tsv>    File format (default: from the file extension)");
    println!("  --pipes                 Dump every line with pipe separators");
    println!("  -o, --output <path>     Where `dump` writes (default: stdout)");
    println!();
    println!("Set RUST_LOG to enable tracing output, RED_LOG_TREE=1 for a span tree.");
}
