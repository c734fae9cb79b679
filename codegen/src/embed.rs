//! Source-embedding generator.
//!
//! Turns a file into a single C string constant built from adjacent
//! literal segments, one segment per input line:
//!
//! ```text
//! // Automatically generated file. Do not edit.
//! static const char* coreSource __attribute__((unused)) =
//! "class Bool {}\n"
//! "class Function {}\n";
//! ```
//!
//! Input is handled as raw bytes split on `\n`; no encoding is assumed
//! and nothing is rejected.

use std::io::{self, Write};
use std::path::Path;

pub const HEADER: &str = "// Automatically generated file. Do not edit.";

/// Suffix appended to the module name to form the constant name.
pub const CONSTANT_SUFFIX: &str = "Source";

// ── Escaping ───────────────────────────────────────────────────

/// Escape one line for use inside a double-quoted literal.
///
/// Backslashes, quotes and the line terminator are rewritten in one
/// left-to-right pass, so escapes produced for one byte are never
/// re-escaped for another. The newline becomes `\n"`, closing the segment.
///
/// Carriage returns are additionally written as `\r`, so CRLF input
/// round-trips instead of leaving a raw CR inside the literal. Every
/// other byte is copied unchanged.
pub fn escape_line(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + 4);
    for &b in line {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'"' => out.extend_from_slice(b"\\\""),
            b'\n' => out.extend_from_slice(b"\\n\""),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
    out
}

/// Split `source` into lines, each keeping its trailing `\n`. Only the
/// last line may lack one; an empty source has no lines.
pub fn split_lines(source: &[u8]) -> impl Iterator<Item = &[u8]> {
    source.split_inclusive(|&b| b == b'\n')
}

/// Render one line as a complete literal segment.
pub fn segment(line: &[u8]) -> Vec<u8> {
    let mut seg = Vec::with_capacity(line.len() + 4);
    seg.push(b'"');
    seg.extend_from_slice(&escape_line(line));
    // A terminated line is already closed by its escaped newline.
    if !line.ends_with(b"\n") {
        seg.push(b'"');
    }
    seg
}

/// Join every line of `source` into the initializer body, one segment per
/// output line.
pub fn join_segments(source: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(source.len() + source.len() / 8);
    for line in split_lines(source) {
        if !body.is_empty() {
            body.push(b'\n');
        }
        body.extend_from_slice(&segment(line));
    }
    if body.is_empty() {
        body.extend_from_slice(b"\"\"");
    }
    body
}

// ── Naming ─────────────────────────────────────────────────────

/// Module name for `path`: the file name without directory or final
/// extension, case preserved (`foo/bar/Baz.txt` → `Baz`).
pub fn module_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    Some(stem.to_string())
}

pub fn constant_name(module: &str) -> String {
    format!("{module}{CONSTANT_SUFFIX}")
}

pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ── Code generation ────────────────────────────────────────────

/// Write the constant declaration embedding `source` under `module`.
pub fn generate(module: &str, source: &[u8], w: &mut dyn Write) -> io::Result<()> {
    let name = constant_name(module);
    if !is_c_identifier(&name) {
        log::warn!("`{name}` is not a valid C identifier");
    }
    writeln!(w, "{HEADER}")?;
    writeln!(w, "static const char* {name} __attribute__((unused)) =")?;
    w.write_all(&join_segments(source))?;
    w.write_all(b";\n")
}

pub fn generate_to_vec(module: &str, source: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = generate(module, source, &mut out);
    out
}
