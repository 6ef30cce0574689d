use std::io::Write;

use crate::{error::Result, scan::StackAllocation};

/// Writes one `<size> => <function>` line per allocation.
pub fn write_report<W: Write>(out: &mut W, allocations: &[StackAllocation]) -> Result<()> {
    for allocation in allocations {
        writeln!(out, "{allocation}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        let allocations = [
            StackAllocation {
                size: 0x1048,
                function: "core::fmt::write".to_owned(),
            },
            StackAllocation {
                size: 0x8,
                function: "main".to_owned(),
            },
        ];
        let mut out = Vec::new();
        write_report(&mut out, &allocations).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0x1048 => core::fmt::write\n0x8 => main\n"
        );
    }

    #[test]
    fn empty() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
