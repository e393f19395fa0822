//! nkl front-end driver
//!
//! Usage: nklc [OPTIONS] <input>

use anyhow::Context;
use clap::Parser as ClapParser;
use nkl_front::common::DiagnosticReporter;
use nkl_front::driver::{read_source, FrontendConfig, Session};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "nklc")]
#[command(version)]
#[command(about = "Tokenizer and scope checker for the nkl language", long_about = None)]
struct Args {
    /// Input source file, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the source had errors that were already reported
fn run(args: &Args) -> anyhow::Result<bool> {
    let (filename, source) = if args.input.as_os_str() == "-" {
        ("<stdin>".to_string(), read_source(io::stdin().lock())?)
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("cannot open {}", args.input.display()))?;
        (args.input.display().to_string(), read_source(file)?)
    };

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let config = FrontendConfig {
        dump_tokens: args.dump_tokens,
        verbose: args.verbose,
    };
    let session = Session::new(filename, file_id, &reporter, config);

    let Ok(tokens) = session.tokenize(&source) else {
        return Ok(false);
    };

    if session.config().verbose {
        eprintln!("Successfully tokenized {}", session.filename);
    }
    println!("{} tokens", tokens.len());

    Ok(true)
}
