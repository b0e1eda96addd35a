//! XOR hash deltas reported by every mutator.
//!
//! The running content hash of a game state is owned by the caller. Every
//! mutation in this workspace returns the XOR delta it applied, and the
//! caller folds it into its accumulator. Applying the same delta twice
//! cancels it, which is what makes the hash exactly reversible.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};

/// The XOR difference between a state's hash before and after a mutation.
///
/// # Examples
///
/// ```
/// use strata_core::HashDelta;
///
/// let mut running = 0xdead_beef_u64;
/// let delta = HashDelta(0x1234);
/// delta.apply(&mut running);
/// delta.apply(&mut running);
/// assert_eq!(running, 0xdead_beef);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HashDelta(pub u64);

impl HashDelta {
    /// The delta of a mutation that did not change the hash.
    pub const NONE: HashDelta = HashDelta(0);

    /// Fold this delta into a running hash.
    #[inline]
    pub fn apply(self, hash: &mut u64) {
        *hash ^= self.0;
    }

    /// Returns `true` if the hash is unchanged.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitXor for HashDelta {
    type Output = HashDelta;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        HashDelta(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for HashDelta {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXorAssign<u64> for HashDelta {
    #[inline]
    fn bitxor_assign(&mut self, rhs: u64) {
        self.0 ^= rhs;
    }
}

impl fmt::Display for HashDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
