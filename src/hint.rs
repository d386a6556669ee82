//! Advisory remaining-length estimates.
//!
//! A hint is never trusted for correctness. It only feeds pre-allocation
//! and is allowed to go stale once a sequence passes through adapters that
//! drop or multiply elements.

use std::ops::Add;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthHint {
    /// The source reported matching lower and upper bounds.
    Exact(usize),
    /// A best guess, usually a lower bound or a sum with unknown parts.
    Estimate(usize),
    #[default]
    Unknown,
}

impl LengthHint {
    pub fn from_size_hint((lower, upper): (usize, Option<usize>)) -> Self {
        match upper {
            Some(upper) if upper == lower => LengthHint::Exact(lower),
            _ if lower > 0 => LengthHint::Estimate(lower),
            _ => LengthHint::Unknown,
        }
    }

    pub fn of<I>(iter: &I) -> Self
    where
        I: Iterator + ?Sized,
    {
        Self::from_size_hint(iter.size_hint())
    }

    pub fn get(&self) -> Option<usize> {
        match self {
            LengthHint::Exact(n) | LengthHint::Estimate(n) => Some(*n),
            LengthHint::Unknown => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, LengthHint::Exact(_))
    }

    /// The count to reserve for, with unknown treated as zero.
    pub fn capacity(&self) -> usize {
        self.get().unwrap_or(0)
    }

    /// Accounts for one element having been produced.
    pub fn decrement(&mut self) {
        match self {
            LengthHint::Exact(n) | LengthHint::Estimate(n) => *n = n.saturating_sub(1),
            LengthHint::Unknown => {}
        }
    }
}

impl Add for LengthHint {
    type Output = LengthHint;

    fn add(self, rhs: Self) -> Self::Output {
        use LengthHint::*;
        match (self, rhs) {
            (Exact(a), Exact(b)) => Exact(a.saturating_add(b)),
            (Unknown, Unknown) => Unknown,
            (a, b) => Estimate(a.capacity().saturating_add(b.capacity())),
        }
    }
}

impl std::iter::Sum for LengthHint {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        // An empty concatenation is exactly empty.
        iter.fold(LengthHint::Exact(0), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_size_hints() {
        assert_eq!(LengthHint::from_size_hint((3, Some(3))), LengthHint::Exact(3));
        assert_eq!(LengthHint::from_size_hint((2, Some(7))), LengthHint::Estimate(2));
        assert_eq!(LengthHint::from_size_hint((0, Some(7))), LengthHint::Unknown);
        assert_eq!(LengthHint::from_size_hint((0, None)), LengthHint::Unknown);
        assert_eq!(LengthHint::from_size_hint((0, Some(0))), LengthHint::Exact(0));
    }

    #[test]
    fn unknown_is_not_zero() {
        assert_eq!(LengthHint::Unknown.get(), None);
        assert_eq!(LengthHint::Exact(0).get(), Some(0));
        assert_eq!(LengthHint::Unknown.capacity(), 0);
    }

    #[test]
    fn exactness_survives_counting_down() {
        let mut hint = LengthHint::Exact(2);
        hint.decrement();
        assert!(hint.is_exact());
        assert!(!LengthHint::Estimate(2).is_exact());
        assert!(!LengthHint::Unknown.is_exact());
        assert!(!(LengthHint::Exact(1) + LengthHint::Unknown).is_exact());
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut hint = LengthHint::Exact(1);
        hint.decrement();
        assert_eq!(hint, LengthHint::Exact(0));
        hint.decrement();
        assert_eq!(hint, LengthHint::Exact(0));

        let mut hint = LengthHint::Unknown;
        hint.decrement();
        assert_eq!(hint, LengthHint::Unknown);
    }

    #[test]
    fn sums_degrade_to_estimates() {
        use LengthHint::*;
        assert_eq!(Exact(2) + Exact(3), Exact(5));
        assert_eq!(Exact(2) + Unknown, Estimate(2));
        assert_eq!(Estimate(1) + Exact(3), Estimate(4));
        assert_eq!(Unknown + Unknown, Unknown);
        assert_eq!(Vec::<LengthHint>::new().into_iter().sum::<LengthHint>(), Exact(0));
        assert_eq!([Exact(1), Unknown, Exact(2)].into_iter().sum::<LengthHint>(), Estimate(3));
    }
}
