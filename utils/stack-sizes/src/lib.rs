//! Reports the largest stack frames of the functions in an executable.
//!
//! The executable is disassembled with `objdump` and every instruction that reserves stack space
//! by subtracting an immediate from the stack pointer is collected.  This only covers x86-64
//! binaries and frames of a static size.

mod error;
pub mod objdump;
pub mod rank;
pub mod report;
pub mod scan;

pub use error::{Error, Result};
pub use objdump::Objdump;
pub use report::write_report;
pub use scan::{parse_disassembly, Scan, StackAllocation};

/// Scans `disassembly` and keeps only the `num` largest allocations, largest first.
pub fn largest_allocations(disassembly: &str, num: i64) -> Scan {
    let scan = parse_disassembly(disassembly);
    Scan {
        allocations: rank::top(scan.allocations, num),
        skipped: scan.skipped,
    }
}
