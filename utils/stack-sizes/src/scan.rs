//! Extraction of stack allocations from textual disassembly.
//!
//! Only one instruction shape is recognized: a subtraction of a literal immediate from the x86-64
//! stack pointer in AT&T syntax, as printed by `objdump --prefix-addresses`:
//!
//! ```text
//! 0000000000001139 <main+0x4> sub    $0x10,%rsp
//! ```
//!
//! Adjustments through registers or memory operands are not recognized.

use std::fmt;

use log::{debug, warn};

const STACK_POINTER: &str = ",%rsp";
const SUB_IMMEDIATE: &str = " sub $0x";

/// One stack-pointer decrement found in the disassembly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackAllocation {
    /// The immediate operand in bytes.
    pub size: u64,
    /// The enclosing symbol as reported by the disassembler, without offset.
    pub function: String,
}

impl fmt::Display for StackAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x} => {}", self.size, self.function)
    }
}

/// The result of scanning a complete disassembly.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scan {
    /// All allocations in the order they appear in the disassembly.
    pub allocations: Vec<StackAllocation>,
    /// Number of lines that look like a stack-pointer decrement but could not be parsed.
    pub skipped: usize,
}

#[derive(Debug, Eq, PartialEq)]
enum Line {
    Allocation(StackAllocation),
    Malformed,
    Other,
}

/// Collapses every run of whitespace into a single space.
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_line(line: &str) -> Line {
    let line = normalize(line);
    if !line.ends_with(STACK_POINTER) {
        return Line::Other;
    }
    let Some((left, right)) = line.split_once(SUB_IMMEDIATE) else {
        return Line::Other;
    };

    let function = left
        .split_once('<')
        .map(|(_, symbol)| {
            let symbol = symbol.trim_end();
            symbol.strip_suffix('>').unwrap_or(symbol)
        })
        .and_then(|symbol| symbol.split('+').next())
        .filter(|function| !function.is_empty());
    let size = right
        .split_once(',')
        .and_then(|(immediate, _)| u64::from_str_radix(immediate, 16).ok());

    match (function, size) {
        (Some(function), Some(size)) => Line::Allocation(StackAllocation {
            size,
            function: function.to_owned(),
        }),
        _ => Line::Malformed,
    }
}

/// Extracts all stack allocations from the disassembler output.
///
/// Every matching line yields one allocation, so a function that adjusts the stack pointer more
/// than once is listed more than once.  Matching lines without a `<symbol>` annotation or with an
/// unparsable immediate are skipped and counted.
pub fn parse_disassembly(text: &str) -> Scan {
    let mut scan = Scan::default();
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Line::Allocation(allocation) => scan.allocations.push(allocation),
            Line::Malformed => {
                warn!("Skipping malformed line {}: {}", i + 1, line.trim());
                scan.skipped += 1;
            }
            Line::Other => {}
        }
    }
    debug!(
        "Found {} stack allocations, skipped {} lines",
        scan.allocations.len(),
        scan.skipped
    );
    scan
}
