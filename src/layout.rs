//! Column layout of a known-good (nestest-style) 6502 trace line.
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
//! |<-- 0..19 ------>|<-- operand, 19..48 ------->|<-- registers, 48..74 -->|<-PPU 74..86->|<- 86.. ->
//! ```
//!
//! The candidate emulator prints no operand disassembly and no PPU position, so
//! those columns are blanked or dropped. Columns count characters, not bytes.

/// End of the address/opcode/mnemonic field.
pub const MNEMONIC_END: usize = 19;
/// Start of the `A:.. X:.. Y:.. P:.. SP:..` register field.
pub const REGISTERS_START: usize = 48;
pub const REGISTERS_END: usize = 74;
/// Start of the cycle counter; everything from here on is kept.
pub const CYCLES_START: usize = 86;
/// Width of the blank run that stands in for the operand field.
pub const OPERAND_FILL: usize = 18;

/// nestest marks undocumented opcodes with `*` right before the mnemonic.
pub const ILLEGAL_MARKER_COL: usize = 15;
/// The candidate flags the same opcodes with `?` right after the mnemonic.
pub const ILLEGAL_FLAG_COL: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedLine {
    pub text: String,
    /// True when the `*` marker was rewritten into the `?` flag.
    pub illegal: bool,
}

/// Re-splice one trace line (without its terminator).
///
/// Short lines never fault: a field past the end of `content` is just empty.
pub fn splice_line(content: &str) -> SplicedLine {
    let chars: Vec<char> = content.chars().collect();

    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    out.extend_from_slice(columns(&chars, 0, MNEMONIC_END));
    out.extend(std::iter::repeat(' ').take(OPERAND_FILL));
    out.extend_from_slice(columns(&chars, REGISTERS_START, REGISTERS_END));
    out.extend_from_slice(columns(&chars, CYCLES_START, chars.len()));

    let illegal = fix_illegal_marker(&mut out);
    SplicedLine {
        text: out.into_iter().collect(),
        illegal,
    }
}

/// Move the illegal-opcode marker from column 15 to column 19.
///
/// Lines of 19 characters or fewer are left alone.
pub fn fix_illegal_marker(line: &mut [char]) -> bool {
    if line.len() <= ILLEGAL_FLAG_COL || line[ILLEGAL_MARKER_COL] != '*' {
        return false;
    }
    line[ILLEGAL_MARKER_COL] = ' ';
    line[ILLEGAL_FLAG_COL] = '?';
    true
}

fn columns(chars: &[char], start: usize, end: usize) -> &[char] {
    let end = end.min(chars.len());
    let start = start.min(end);
    &chars[start..end]
}
