use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use declscan::{
    errors::errors::{Error, ErrorTip},
    parse, ParseOptions,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "declscan", about = "Lists the declarations and returns of a script fragment as JSON")]
struct Cli {
    /// Source file to scan.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write the JSON here instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Offset added to every reported position.
    #[arg(long, default_value_t = 0)]
    base: usize,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!(file = %cli.file.display(), "failed to read file: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let parsed = match parse(&source, ParseOptions::with_base(cli.base)) {
        Ok(parsed) => parsed,
        Err(err) => {
            display_error(&err, &cli.file, &source, cli.base);
            return ExitCode::FAILURE;
        }
    };
    debug!(elapsed = ?start.elapsed(), statements = parsed.statements.len(), "parsed");

    let json = if cli.compact {
        serde_json::to_string(&parsed)
    } else {
        serde_json::to_string_pretty(&parsed)
    };
    let json = match json {
        Ok(json) => json,
        Err(err) => {
            error!("failed to serialize parse result: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(err) = fs::write(&path, json) {
                error!(file = %path.display(), "failed to write output: {err}");
                return ExitCode::FAILURE;
            }
        }
        None => println!("{}", json),
    }

    ExitCode::SUCCESS
}

fn display_error(error: &Error, file: &Path, source: &str, base: usize) {
    /*
        Error: InvalidIdentifier (Variable cannot start with `1`)
        -> fixture.js @ 4
           |
           | var 1x = 1;
           | ----^
    */

    let offset = error.get_position().0;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {} @ {}", file.display(), offset);

    let Some((line_text, line_pos)) = line_at_offset(source, offset.saturating_sub(base)) else {
        return;
    };

    eprintln!("   |");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("   | {}", line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    eprintln!("   | {:->arrows$}", "^");
}

/// Returns the line holding the character at `offset` and the offset's
/// position within that line, both counted in characters.
fn line_at_offset(source: &str, offset: usize) -> Option<(String, usize)> {
    let mut start = 0;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&offset) {
            return Some((line.to_string(), offset - start));
        }

        start = end;
    }

    None
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
