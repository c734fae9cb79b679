//! Disassembler dispatch-table generator.
//!
//! Expands a fixed, ordered table of instruction families into one
//! `case` arm per (family, operand count) pair, for operand counts
//! `0..=MAX_OPERANDS`. The output is meant to be `#include`-d inside the
//! disassembler's `switch`, which supplies `chunk` and `offset`.

use std::io::{self, Write};

/// Highest operand count a family is expanded to (inclusive).
pub const MAX_OPERANDS: u8 = 16;

/// Number of case blocks emitted per family.
pub const BLOCKS_PER_FAMILY: usize = MAX_OPERANDS as usize + 1;

// ── Families ───────────────────────────────────────────────────

/// The disassembly helper a family is printed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelperKind {
    /// `simpleInstruction(name, offset)`
    Simple,
    /// `byteInstruction(name, chunk, offset)`
    Byte,
    /// `invokeInstruction(name, chunk, offset)`
    Invoke,
}

impl HelperKind {
    /// Prefix of the C helper function, `<prefix>Instruction`.
    pub fn helper(self) -> &'static str {
        match self {
            HelperKind::Simple => "simple",
            HelperKind::Byte => "byte",
            HelperKind::Invoke => "invoke",
        }
    }

    /// Whether the helper reads operands out of the chunk.
    pub fn takes_chunk(self) -> bool {
        !matches!(self, HelperKind::Simple)
    }

    /// Argument list following the opcode name literal.
    fn trailing_args(self) -> &'static str {
        if self.takes_chunk() {
            "chunk, offset"
        } else {
            "offset"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Family {
    pub name: &'static str,
    pub kind: HelperKind,
}

impl Family {
    pub const fn new(name: &'static str, kind: HelperKind) -> Family {
        Family { name, kind }
    }
}

/// Families for the standalone `OP_`-prefixed table.
pub const PREFIXED_FAMILIES: &[Family] = &[
    Family::new("CALL", HelperKind::Byte),
    Family::new("INVOKE", HelperKind::Invoke),
    Family::new("SUPER", HelperKind::Invoke),
];

/// Families for the table spliced into the decode loop. Calls carry no
/// inline operand there, so they print through the simple helper.
pub const BARE_FAMILIES: &[Family] = &[
    Family::new("OP_CALL", HelperKind::Simple),
    Family::new("OP_INVOKE", HelperKind::Invoke),
    Family::new("OP_SUPER", HelperKind::Invoke),
];

// ── Templates ──────────────────────────────────────────────────

/// Shape of a rendered case block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Template {
    /// `OP_` is prepended to the family name, arm at column 0.
    #[default]
    Prefixed,
    /// Family name used verbatim, arm indented one level into the
    /// enclosing `switch`.
    Bare,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Template::Prefixed => "prefixed",
            Template::Bare => "bare",
        }
    }

    pub fn from_name(s: &str) -> Option<Template> {
        match s {
            "prefixed" => Some(Template::Prefixed),
            "bare" => Some(Template::Bare),
            _ => None,
        }
    }

    /// Render the case block for `family` with `count` operands.
    pub fn render(self, family: &Family, count: u8) -> String {
        let kind = family.kind;
        match self {
            Template::Prefixed => {
                let op = format!("OP_{}_{count}", family.name);
                format!(
                    "case {op}:\n  return {}Instruction(\"{op}\", {});\n",
                    kind.helper(),
                    kind.trailing_args()
                )
            }
            Template::Bare => {
                let op = format!("{}_{count}", family.name);
                format!(
                    "  case {op}:\n    return {}Instruction(\"{op}\", {});\n",
                    kind.helper(),
                    kind.trailing_args()
                )
            }
        }
    }
}

// ── Configuration ──────────────────────────────────────────────

/// A template paired with the family table it expands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    pub template: Template,
    pub families: &'static [Family],
}

impl DispatchConfig {
    pub const fn new(
        template: Template,
        families: &'static [Family],
    ) -> DispatchConfig {
        DispatchConfig { template, families }
    }

    pub const fn prefixed() -> DispatchConfig {
        DispatchConfig::new(Template::Prefixed, PREFIXED_FAMILIES)
    }

    pub const fn bare() -> DispatchConfig {
        DispatchConfig::new(Template::Bare, BARE_FAMILIES)
    }

    /// Built-in configuration that goes with `template`.
    pub const fn for_template(template: Template) -> DispatchConfig {
        match template {
            Template::Prefixed => DispatchConfig::prefixed(),
            Template::Bare => DispatchConfig::bare(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.families.len() * BLOCKS_PER_FAMILY
    }
}

impl Default for DispatchConfig {
    fn default() -> DispatchConfig {
        DispatchConfig::prefixed()
    }
}

// ── Code generation ────────────────────────────────────────────

/// All blocks of `config`, families in table order, counts ascending.
pub fn case_blocks(
    config: &DispatchConfig,
) -> impl Iterator<Item = String> + '_ {
    config.families.iter().flat_map(move |f| {
        (0..=MAX_OPERANDS).map(move |n| config.template.render(f, n))
    })
}

/// Write every case block of `config` to `w`. Returns the number of
/// blocks written.
pub fn generate(config: &DispatchConfig, w: &mut dyn Write) -> io::Result<usize> {
    let mut count = 0;
    for block in case_blocks(config) {
        w.write_all(block.as_bytes())?;
        count += 1;
    }
    log::debug!(
        "rendered {count} case block(s) with the {} template",
        config.template.name()
    );
    Ok(count)
}

/// Render the whole table into a string.
pub fn generate_to_string(config: &DispatchConfig) -> String {
    case_blocks(config).collect()
}
