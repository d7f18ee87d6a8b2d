#![forbid(unsafe_code)]

//! Plural-aware message lookup with placeholder interpolation.
//!
//! Resolves a message key to display text in three steps:
//!
//! 1. look the key up in a [`MessageTable`];
//! 2. for plural entries, pick a variant with a caller-supplied
//!    [`PluralSelector`];
//! 3. substitute positional (`{0}`) or named (`{count}`) placeholders.
//!
//! [`Localizer`] composes the three. Missing keys, empty plural lists and
//! unmatched placeholders degrade to visible output rather than errors; the
//! only error is asking for a quantity-aware lookup with no selector.
//!
//! ```
//! use msgloc::{Localizer, MessageTable, PluralSelector};
//!
//! let mut table = MessageTable::new();
//! table.insert_plural("apples", ["no apples", "one apple", "{0} apples"]);
//!
//! let l10n = Localizer::new(table).selector(PluralSelector::clamped(2));
//! assert_eq!(l10n.format_plural("apples", 3, &[&3]).unwrap(), "3 apples");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`MessageTable`]; a JSON string becomes a fixed
//!   entry, an array becomes plural variants.

pub mod format;
pub mod localizer;
pub mod plural;
pub mod table;

pub use format::{NamedArgs, format_named, format_positional};
pub use localizer::{I18nError, Localizer};
pub use plural::PluralSelector;
pub use table::{MessageEntry, MessageTable};
