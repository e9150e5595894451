//! Build-time bit-width sizing for counter registers.
//!
//! All functions are `const fn` so counter widths are resolved during
//! constant evaluation; no storage size is ever computed at runtime.

/// Ceiling log2: the smallest `w` such that `2^w >= n`.
///
/// `clog2(0)` and `clog2(1)` are both 0.
pub const fn clog2(n: u64) -> u32 {
    let mut width = 0u32;
    while width < u64::BITS && (1u64 << width) < n {
        width += 1;
    }
    width
}

/// Minimal register width (in bits) that can hold every value in
/// `0..=max_value`. Never less than 1, so a degenerate range still gets
/// a real register.
pub const fn counter_width(max_value: u64) -> u32 {
    if max_value == u64::MAX {
        return u64::BITS;
    }
    let width = clog2(max_value + 1);
    if width == 0 {
        1
    } else {
        width
    }
}

/// All-ones mask for a register of `width` bits.
pub const fn width_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clog2_boundaries() {
        assert_eq!(clog2(0), 0);
        assert_eq!(clog2(1), 0);
        assert_eq!(clog2(2), 1);
        assert_eq!(clog2(3), 2);
        assert_eq!(clog2(4), 2);
        assert_eq!(clog2(5), 3);
        assert_eq!(clog2(32), 5);
        assert_eq!(clog2(33), 6);
        assert_eq!(clog2(100), 7);
    }

    #[test]
    fn test_counter_width_holds_max_value() {
        // A width-w register holds 0..2^w, so the max value must fit.
        assert_eq!(counter_width(0), 1);
        assert_eq!(counter_width(1), 1);
        assert_eq!(counter_width(2), 2);
        assert_eq!(counter_width(3), 2);
        assert_eq!(counter_width(4), 3);
        assert_eq!(counter_width(31), 5);
        assert_eq!(counter_width(32), 6);
        assert_eq!(counter_width(99), 7);
    }

    #[test]
    fn test_width_mask() {
        assert_eq!(width_mask(1), 0b1);
        assert_eq!(width_mask(5), 0b1_1111);
        assert_eq!(width_mask(7), 0b111_1111);
        assert_eq!(width_mask(64), u64::MAX);
        assert_eq!(width_mask(65), u64::MAX);
    }

    #[test]
    fn test_const_evaluation() {
        const WIDTH: u32 = counter_width(99);
        const MASK: u64 = width_mask(WIDTH);
        assert_eq!(WIDTH, 7);
        assert_eq!(MASK, 127);
    }
}
