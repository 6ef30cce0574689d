use crate::scan::StackAllocation;

/// Returns the `num` largest allocations, largest first.
///
/// Allocations of equal size keep their order from the disassembly.  A non-positive `num` yields
/// an empty list.
pub fn top(mut allocations: Vec<StackAllocation>, num: i64) -> Vec<StackAllocation> {
    let num = usize::try_from(num).unwrap_or(0);
    // sort_by is stable
    allocations.sort_by(|a, b| b.size.cmp(&a.size));
    allocations.truncate(num);
    allocations
}
