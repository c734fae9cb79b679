//! flicker-module-to-string — embeds a script as a C string constant.
//!
//! Reads `<input>`, escapes it line by line, and writes a
//! `<name>Source` declaration to `<output>`, where `<name>` is the
//! input's file name without its extension.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use flicker_codegen::write_embedded_file;

#[derive(Parser, Debug)]
#[command(version, about = "Embed a text file as a C string constant")]
struct Args {
    /// Text file to embed
    input: PathBuf,

    /// Destination file, overwritten if it exists
    output: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let name = write_embedded_file(&args.input, &args.output).with_context(
        || format!("cannot embed {}", args.input.display()),
    )?;
    log::debug!("{} -> {name}", args.input.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
