//! flicker-call-writer — disassembler dispatch-table generator.
//!
//! Writes the `case` arms for the CALL / INVOKE / SUPER opcode
//! families, operand counts 0 through 16, to the given file.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use flicker_codegen::{write_dispatch_file, DispatchConfig, Template};

fn parse_template(s: &str) -> Result<Template, String> {
    Template::from_name(s)
        .ok_or_else(|| format!("unknown template `{s}` (expected prefixed or bare)"))
}

#[derive(Parser, Debug)]
#[command(version, about = "Generate disassembler case arms for call-like opcodes")]
struct Args {
    /// Destination file, overwritten if it exists
    output: PathBuf,

    /// Shape of the generated case arms: `prefixed` for a standalone
    /// include, `bare` for arms pasted into the decode loop's switch
    #[arg(long, default_value = "prefixed", value_parser = parse_template)]
    template: Template,
}

fn run(args: &Args) -> Result<()> {
    let config = DispatchConfig::for_template(args.template);
    log::debug!(
        "template: {}, {} famil(ies)",
        config.template.name(),
        config.families.len()
    );
    write_dispatch_file(&config, &args.output)
        .with_context(|| format!("cannot generate {}", args.output.display()))?;
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
