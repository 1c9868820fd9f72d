#![allow(clippy::print_stderr)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{IsTerminal, Write};

use jstrip_cli::args::CliArgs;
use jstrip_cli::driver::{self, TargetKind};
use jstrip_cli::reporter::Reporter;

const EXIT_FAILURE: i32 = 1;

fn main() -> Result<()> {
    // No-op unless JSTRIP_LOG or RUST_LOG is set.
    jstrip_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();

    if args.stdout {
        return print_stripped(&args);
    }

    let summary = match driver::run(&args) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let reporter = Reporter::new(args.pretty.unwrap_or_else(|| std::io::stdout().is_terminal()))
        .quiet(args.quiet);
    let rendered = if args.json {
        reporter
            .render_json(&summary)
            .context("failed to serialize results")?
    } else {
        reporter.render(&summary)
    };
    println!("{rendered}");

    let code = summary.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// `--stdout`: strip a single file and write the result to stdout, touching nothing on disk.
fn print_stripped(args: &CliArgs) -> Result<()> {
    if driver::classify_target(&args.path)? != TargetKind::File {
        bail!("--stdout requires a single .java file");
    }
    let options = driver::resolve_for_args(args)?;
    let stripped = driver::strip_file(&args.path, &options.emit)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&stripped.contents)
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
