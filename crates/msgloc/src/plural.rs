//! Plural selection: mapping a quantity to a variant index.
//!
//! The engine ships no language rules. A [`PluralSelector`] wraps whatever
//! rule the caller supplies for its target grammar; the two constructors
//! provided here are the locale-neutral building blocks most rules start
//! from.
//!
//! # Invariants
//!
//! 1. Selectors are pure: the same quantity always yields the same index.
//! 2. Selectors are total over `u64`.
//! 3. The selector never bounds-checks against a message; the
//!    [`Localizer`](crate::Localizer) clamps the index to the variants it
//!    actually has.

use core::fmt;
use std::sync::Arc;

type SelectFn = dyn Fn(u64) -> usize + Send + Sync;

/// A shareable plural rule mapping a quantity to a zero-based variant
/// index.
///
/// Cloning is cheap; clones share the same rule.
///
/// # Example
///
/// ```
/// use msgloc::PluralSelector;
///
/// // 0 -> "none", 1 -> "one", everything else -> "many".
/// let rule = PluralSelector::clamped(2);
/// assert_eq!(rule.select(0), 0);
/// assert_eq!(rule.select(1), 1);
/// assert_eq!(rule.select(1000), 2);
///
/// // "one" for 1, "other" for everything else.
/// let english = PluralSelector::new(|n| usize::from(n != 1));
/// assert_eq!(english.select(1), 0);
/// assert_eq!(english.select(7), 1);
/// ```
#[derive(Clone)]
pub struct PluralSelector {
    rule: Arc<SelectFn>,
}

impl PluralSelector {
    /// Wrap a caller-supplied rule.
    ///
    /// The rule must be deterministic and free of side effects.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(u64) -> usize + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Index equals quantity, saturating at `usize::MAX`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }

    /// Index equals quantity, capped at `max_index`.
    ///
    /// `clamped(2)` is the usual "zero / one / other" layout.
    #[must_use]
    pub fn clamped(max_index: usize) -> Self {
        Self::new(move |n| usize::try_from(n).map_or(max_index, |i| i.min(max_index)))
    }

    /// Apply the rule. No bounds checking is performed.
    #[must_use]
    pub fn select(&self, quantity: u64) -> usize {
        (self.rule)(quantity)
    }
}

impl fmt::Debug for PluralSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PluralSelector(...)")
    }
}
