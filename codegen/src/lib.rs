//! Build-time source generators for the Flicker VM.
//!
//! - [`dispatch`] expands the call-like opcode families into `case`
//!   arms for the disassembler's decode `switch`.
//! - [`embed`] turns a script file into a C string constant that is
//!   compiled straight into the binary.
//!
//! Both are usable from a `build.rs`; the `flicker-call-writer` and
//! `flicker-module-to-string` binaries wrap the file-level entry points
//! below.

pub mod dispatch;
pub mod embed;
pub mod error;
pub mod output;

use std::path::Path;

pub use dispatch::{DispatchConfig, Family, HelperKind, Template};
pub use error::{Error, Result};

// ── Public API ─────────────────────────────────────────────────

/// Write the dispatch table for `config` to `out`, replacing any
/// previous contents. Returns the number of case blocks written.
pub fn write_dispatch_file(config: &DispatchConfig, out: &Path) -> Result<usize> {
    let mut blocks = 0;
    output::write_with(out, |w| {
        blocks = dispatch::generate(config, w)?;
        Ok(())
    })?;
    log::info!("wrote {blocks} case block(s) to {}", out.display());
    Ok(blocks)
}

/// Embed the contents of `input` as a C constant written to `out`. Returns
/// the name of the generated constant.
pub fn write_embedded_file(input: &Path, out: &Path) -> Result<String> {
    let module = embed::module_name(input).ok_or_else(|| Error::BadFileName {
        path: input.to_path_buf(),
    })?;
    let source = output::read_source(input)?;
    log::debug!(
        "read {} line(s) from {}",
        embed::split_lines(&source).count(),
        input.display()
    );
    output::write_with(out, |w| embed::generate(&module, &source, w))?;
    let name = embed::constant_name(&module);
    log::info!("wrote {name} to {}", out.display());
    Ok(name)
}
