//! Message resolution: lookup, plural selection, interpolation.
//!
//! # Invariants
//!
//! 1. **Missing content is visible, not fatal**: an unknown key or an empty
//!    plural list resolves to the key itself; arguments are ignored.
//!
//! 2. **Quantity never affects fixed entries**: every quantity-aware call on
//!    a fixed entry yields the same template.
//!
//! 3. **Selection is bounded**: a selector index past the last variant is
//!    clamped to the last variant.
//!
//! 4. **Thread safety**: `Localizer` is `Send + Sync`; the table and the
//!    selector are immutable after construction.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in table | Returns the key |
//! | Empty plural list | Entry authored with no variants | Returns the key |
//! | Index out of range | Selector/table mismatch | Clamped to last variant |
//! | Unresolved placeholder | Argument absent | Token left as-is |
//! | No selector | Quantity-aware call before [`Localizer::selector`] | `Err(I18nError::MissingSelector)` |

use std::fmt;

use crate::format::{NamedArgs, format_named, format_positional};
use crate::plural::PluralSelector;
use crate::table::{MessageEntry, MessageTable};

/// Errors from message resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A quantity-aware operation ran without a plural selector configured.
    MissingSelector {
        /// Key of the call that exposed the misconfiguration.
        key: String,
    },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSelector { key } => {
                write!(f, "no plural selector configured (resolving '{key}')")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Resolves message keys to display strings.
///
/// # Example
///
/// ```
/// use msgloc::{Localizer, MessageTable, NamedArgs, PluralSelector};
///
/// let mut table = MessageTable::new();
/// table.insert("title", "Basket");
/// table.insert_plural("apples", ["no apples", "one apple", "{0} apples"]);
/// table.insert_plural("pears", ["no pears", "one pear", "{count} pears"]);
///
/// let l10n = Localizer::new(table).selector(PluralSelector::clamped(2));
///
/// assert_eq!(l10n.get("title"), "Basket");
/// assert_eq!(l10n.get("missing.key"), "missing.key");
/// assert_eq!(l10n.get_plural("apples", 1).unwrap(), "one apple");
/// assert_eq!(l10n.format_plural("apples", 20, &[&20]).unwrap(), "20 apples");
/// assert_eq!(
///     l10n.format_plural_named("pears", 7, &NamedArgs::new().with("count", 7)).unwrap(),
///     "7 pears"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    table: MessageTable,
    selector: Option<PluralSelector>,
}

impl Localizer {
    /// Create a localizer with no plural selector.
    ///
    /// Quantity-aware operations return [`I18nError::MissingSelector`]
    /// until one is attached with [`selector`](Self::selector).
    #[must_use]
    pub fn new(table: MessageTable) -> Self {
        Self {
            table,
            selector: None,
        }
    }

    /// Create a localizer with a plural selector.
    #[must_use]
    pub fn with_selector(table: MessageTable, selector: PluralSelector) -> Self {
        Self {
            table,
            selector: Some(selector),
        }
    }

    /// Attach or replace the plural selector.
    #[must_use]
    pub fn selector(mut self, selector: PluralSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// The underlying message table.
    #[must_use]
    pub fn table(&self) -> &MessageTable {
        &self.table
    }

    /// Whether quantity-aware operations are available.
    #[must_use]
    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    // -----------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------

    /// Resolve `key` without a quantity.
    ///
    /// Plural entries use their first variant.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.template(key, None).unwrap_or(key)
    }

    /// Resolve `key`, choosing a plural variant for `quantity`.
    pub fn get_plural<'a>(&'a self, key: &'a str, quantity: u64) -> Result<&'a str, I18nError> {
        let selector = self.require_selector(key)?;
        Ok(self
            .template(key, Some((selector, quantity)))
            .unwrap_or(key))
    }

    /// Resolve `key` and substitute positional `{N}` placeholders.
    #[must_use]
    pub fn format(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        match self.template(key, None) {
            Some(template) => format_positional(template, args),
            None => key.to_owned(),
        }
    }

    /// Resolve `key` for `quantity` and substitute positional placeholders.
    pub fn format_plural(
        &self,
        key: &str,
        quantity: u64,
        args: &[&dyn fmt::Display],
    ) -> Result<String, I18nError> {
        let selector = self.require_selector(key)?;
        Ok(match self.template(key, Some((selector, quantity))) {
            Some(template) => format_positional(template, args),
            None => key.to_owned(),
        })
    }

    /// Resolve `key` and substitute named `{name}` placeholders.
    #[must_use]
    pub fn format_named(&self, key: &str, values: &NamedArgs) -> String {
        match self.template(key, None) {
            Some(template) => format_named(template, values),
            None => key.to_owned(),
        }
    }

    /// Resolve `key` for `quantity` and substitute named placeholders.
    pub fn format_plural_named(
        &self,
        key: &str,
        quantity: u64,
        values: &NamedArgs,
    ) -> Result<String, I18nError> {
        let selector = self.require_selector(key)?;
        Ok(match self.template(key, Some((selector, quantity))) {
            Some(template) => format_named(template, values),
            None => key.to_owned(),
        })
    }

    fn require_selector(&self, key: &str) -> Result<&PluralSelector, I18nError> {
        self.selector.as_ref().ok_or_else(|| {
            tracing::warn!(key, "quantity-aware lookup without a plural selector");
            I18nError::MissingSelector {
                key: key.to_owned(),
            }
        })
    }

    /// Pick the template for `key`, or `None` when the key should be
    /// echoed back (absent, or plural with no variants).
    fn template(&self, key: &str, quantity: Option<(&PluralSelector, u64)>) -> Option<&str> {
        let Some(entry) = self.table.get(key) else {
            tracing::debug!(key, "message key not found");
            return None;
        };

        let variants = match entry {
            MessageEntry::Fixed(text) => return Some(text.as_str()),
            MessageEntry::Plural(variants) => variants,
        };

        let Some(last) = variants.len().checked_sub(1) else {
            tracing::debug!(key, "plural entry has no variants");
            return None;
        };

        let index = match quantity {
            Some((selector, quantity)) => {
                let index = selector.select(quantity);
                if index > last {
                    tracing::debug!(
                        key,
                        quantity,
                        index,
                        variants = variants.len(),
                        "plural index clamped to last variant"
                    );
                }
                index.min(last)
            }
            None => 0,
        };

        variants.get(index).map(String::as_str)
    }
}
