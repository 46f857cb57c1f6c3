//! Saturating counters for narrow hardware fields.
//!
//! Table entries pack counters that are only a few bits wide (a 3-bit signed
//! prediction counter, a 2-bit usefulness counter). They are stored in the
//! smallest machine integer that holds them and every update goes through the
//! helpers here, so a value can never leave its configured range.

/// Bounds of a two's-complement saturating counter `width` bits wide.
///
/// The representable range is `[-2^(width-1), 2^(width-1) - 1]`, e.g. `[-4, 3]`
/// for a 3-bit counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedBounds {
    min: i8,
    max: i8,
}

impl SignedBounds {
    /// Creates the bounds of a signed counter of the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `[1, 8]`.
    pub const fn with_width(width: u32) -> Self {
        assert!(width >= 1 && width <= 8, "signed counter width must be in [1, 8]");
        let half = 1i16 << (width - 1);
        Self {
            min: -half as i8,
            max: (half - 1) as i8,
        }
    }

    /// Smallest value the counter may hold.
    #[inline]
    pub const fn min(self) -> i8 {
        self.min
    }

    /// Largest value the counter may hold.
    #[inline]
    pub const fn max(self) -> i8 {
        self.max
    }

    /// Returns true if `value` lies within the bounds.
    #[inline]
    pub const fn contains(self, value: i8) -> bool {
        value >= self.min && value <= self.max
    }

    /// Moves `value` one step up (`increment`) or down, saturating at the bounds.
    #[inline]
    pub fn step(self, value: &mut i8, increment: bool) {
        if increment {
            if *value < self.max {
                *value += 1;
            }
        } else if *value > self.min {
            *value -= 1;
        }
    }
}

/// Moves an unsigned counter one step up or down within `[0, max]`.
#[inline]
pub fn step_unsigned(value: &mut u8, increment: bool, max: u8) {
    if increment {
        if *value < max {
            *value += 1;
        }
    } else {
        *value = value.saturating_sub(1);
    }
}
