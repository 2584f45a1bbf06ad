//! Condition flag register (`FL`)

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// `FL` bits, laid out as `00000LGE`.
///
/// After a compare exactly one of the three bits is set. Before the first
/// compare the register is zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags(u8);

impl Flags {
    pub const EQUAL: u8 = 0b0000_0001;
    pub const GREATER: u8 = 0b0000_0010;
    pub const LESS: u8 = 0b0000_0100;

    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Flag value produced by comparing `a` with `b`
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Flags(Self::EQUAL),
            Ordering::Greater => Flags(Self::GREATER),
            Ordering::Less => Flags(Self::LESS),
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }

    #[inline]
    pub const fn is_greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    #[inline]
    pub const fn is_less(self) -> bool {
        self.0 & Self::LESS != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.is_less() { 'L' } else { '-' },
            if self.is_greater() { 'G' } else { '-' },
            if self.is_equal() { 'E' } else { '-' },
        )
    }
}
