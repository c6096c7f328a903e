//! tdb - tdbg command line.
//!
//! `tdb demo` walks through every trace call; `tdb wrap` runs the line
//! wrapper over stdin.

use std::io::{self, ErrorKind, Read, Write};

use tdbg::TraceError;

fn main() {
    tdbg::init_tracing();
    if let Err(e) = tdbg::init_from_env() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "demo" => {
            let result = run_demo();
            tdbg::flush();
            if let Err(e) = result {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "wrap" => {
            let Some(options) = parse_wrap_options(&args[2..]) else {
                eprintln!("Usage: tdb wrap [--width <n>] [--delimiter <text>]");
                std::process::exit(1);
            };
            run_wrap(&options);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tdb - conditional console tracing");
    println!();
    println!("Usage: tdb <command> [options]");
    println!();
    println!("Commands:");
    println!("  demo                 Emit one of each trace kind, ending in a failed assert");
    println!("  wrap                 Wrap stdin at a column width");
    println!("      --width <n>      Line wrap width (default: {})", tdbg::DEFAULT_LINE_WRAP);
    println!("      --delimiter <d>  Token delimiter (default: \" \")");
    println!("  help                 Show this message");
    println!();
    println!("Environment:");
    println!("  TDB_TRACE            1/on/true, 0/off/false, out, err");
    println!("  TDB_LINE_WRAP        Default line wrap width");
    println!("  TDB_COLOR            auto, always, never");
    println!("  TDB_FRAMES           Frames printed beneath plain traces");
    println!("  RUST_LOG             Library diagnostics (e.g. tdb_trace=debug)");
}

fn run_demo() -> Result<(), TraceError> {
    tdbg::trace_err("Trace to standard error");
    tdbg::trace_out("Trace to standard out");
    tdbg::trace_out_frames("0 lines of trace", 0);
    tdbg::trace_out_frames("2 lines of trace", 2);

    let answer = 6 * 7;
    tdbg::check_out(answer == 43, "check failures are highlighted", 1);

    let array = ["1", "2", "3"];
    tdbg::array_err(&array, 0, array.len(), 1)?;

    tdbg::assert_out(answer == 43, "assert is fatal, check is not", 1)?;
    Ok(())
}

struct WrapOptions {
    width: Option<String>,
    delimiter: String,
}

/// Accepts `--width <n>`, `--width=<n>`, `--delimiter <d>`, `--delimiter=<d>`.
fn parse_wrap_options(args: &[String]) -> Option<WrapOptions> {
    let mut options = WrapOptions {
        width: None,
        delimiter: " ".to_string(),
    };

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(value) = arg.strip_prefix("--width=") {
            options.width = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--delimiter=") {
            options.delimiter = value.to_string();
        } else if arg == "--width" || arg == "--delimiter" {
            let value = args.get(i + 1)?.clone();
            if arg == "--width" {
                options.width = Some(value);
            } else {
                options.delimiter = value;
            }
            i += 1;
        } else {
            return None;
        }
        i += 1;
    }

    Some(options)
}

fn run_wrap(options: &WrapOptions) {
    if let Some(width) = &options.width {
        let Ok(width) = width.parse::<usize>() else {
            eprintln!("error: invalid width {width:?}");
            std::process::exit(1);
        };
        if let Err(e) = tdbg::set_line_wrap(width) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {e}");
        std::process::exit(1);
    }

    let formatted = tdbg::format_text_with(input.trim_end_matches('\n'), &options.delimiter);
    match write_wrapped(io::stdout().lock(), &formatted) {
        // The reader went away (`tdb wrap | head`); nothing left to do.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("error: failed to write stdout: {e}");
            std::process::exit(1);
        }
        Ok(()) => {}
    }
}

/// Write `formatted`, ending it with a newline if the formatter did not.
fn write_wrapped(mut out: impl Write, formatted: &str) -> io::Result<()> {
    out.write_all(formatted.as_bytes())?;
    if !formatted.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
