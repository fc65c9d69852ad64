//! Splice CLI
//!
//! Normalize, lay out and evaluate Splice scripts.

use splicec::commands::{beautify_file, eval_expression, normalize_files, run_file};
use splicec::{init_tracing, parse_options, CliOptions, MAX_DEPTH_ENV};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let options = match parse_options(&args[2..]) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "normalize" => {
            if options.inputs.is_empty() {
                eprintln!("Usage: splice normalize <file>... [--line-map]");
                std::process::exit(1);
            }
            let config = config_or_exit(&options);
            normalize_files(&options.inputs, &config.normalize, options.line_map);
        }
        "beautify" => {
            let Some(path) = options.inputs.first() else {
                eprintln!("Usage: splice beautify <file> [--header=TEXT] [--indent=N]");
                std::process::exit(1);
            };
            let config = config_or_exit(&options);
            beautify_file(path, options.header.as_deref(), &config);
        }
        "eval" => {
            if options.inputs.is_empty() {
                eprintln!("Usage: splice eval <expr> [--max-depth=N]");
                eprintln!("Example: splice eval \"sum(1, 2, 3) * 2\"");
                std::process::exit(1);
            }
            let source = options.inputs.join(" ");
            eval_expression(&source, config_or_exit(&options));
        }
        "run" => {
            let Some(path) = options.inputs.first() else {
                eprintln!("Usage: splice run <file> [--max-depth=N]");
                std::process::exit(1);
            };
            run_file(path, config_or_exit(&options));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Splice {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn config_or_exit(options: &CliOptions) -> splice_scan::ScanConfig {
    match options.scan_config_from_env() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Splice script front end");
    println!();
    println!("Usage: splice <command> [options]");
    println!();
    println!("Commands:");
    println!("  normalize <file>...  Print the compact form of each file");
    println!("  beautify <file>      Normalize a file and lay it out again");
    println!("  eval <expr>          Evaluate statements given on the command line");
    println!("  run <file>           Run a script, printing each expression statement");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --line-map           normalize: also print offset -> line entries");
    println!("  --header=TEXT        beautify: block header (default: '<file stem> {{')");
    println!("  --indent=N           beautify: indentation step (default: 2)");
    println!("  --max-depth=N        eval, run: nesting budget (default: 256)");
    println!();
    println!("Environment:");
    println!("  {MAX_DEPTH_ENV}     Default for --max-depth");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=splice_scan=trace");
    println!();
    println!("Examples:");
    println!("  splice normalize a.splice b.splice --line-map");
    println!("  splice beautify report.splice --header=\"function report() {{\"");
    println!("  splice eval \"x = {{1, 2}}; sum(x) * 10\"");
    println!("  splice run main.splice");
}
