//! Property tests for lookup, selection and substitution.

use msgloc::{
    Localizer, MessageTable, NamedArgs, PluralSelector, format_named, format_positional,
};
use proptest::prelude::*;

const VARIANTS: [&str; 3] = ["none", "one", "{0} many"];

fn localizer() -> Localizer {
    let mut table = MessageTable::new();
    table.insert("fixed", "always {0}");
    table.insert_plural("plural", VARIANTS);
    table.insert_plural("empty", Vec::<String>::new());
    Localizer::new(table).selector(PluralSelector::identity())
}

proptest! {
    /// Unknown keys echo back through every operation.
    #[test]
    fn unknown_keys_echo(key in "missing\\.[a-z{}0-9]{0,12}", n in any::<u64>(), arg in any::<i64>()) {
        let l10n = localizer();
        let named = NamedArgs::new().with("count", arg);
        prop_assert_eq!(l10n.get(&key), key.as_str());
        prop_assert_eq!(l10n.get_plural(&key, n).unwrap(), key.as_str());
        prop_assert_eq!(l10n.format(&key, &[&arg]), key.clone());
        prop_assert_eq!(l10n.format_plural(&key, n, &[&arg]).unwrap(), key.clone());
        prop_assert_eq!(l10n.format_named(&key, &named), key.clone());
        prop_assert_eq!(l10n.format_plural_named(&key, n, &named).unwrap(), key.clone());
    }

    /// Empty plural lists behave exactly like unknown keys.
    #[test]
    fn empty_plural_echoes(n in any::<u64>(), arg in any::<u32>()) {
        let l10n = localizer();
        prop_assert_eq!(l10n.get_plural("empty", n).unwrap(), "empty");
        prop_assert_eq!(l10n.format_plural("empty", n, &[&arg]).unwrap(), "empty");
    }

    /// Fixed entries ignore quantity entirely.
    #[test]
    fn fixed_ignores_quantity(n in any::<u64>(), arg in any::<u32>()) {
        let l10n = localizer();
        prop_assert_eq!(l10n.get_plural("fixed", n).unwrap(), l10n.get("fixed"));
        prop_assert_eq!(
            l10n.format_plural("fixed", n, &[&arg]).unwrap(),
            l10n.format("fixed", &[&arg])
        );
    }

    /// Selected variant is the selector's index clamped to the last variant.
    #[test]
    fn selection_is_clamped(n in any::<u64>()) {
        let l10n = localizer();
        let index = usize::try_from(n).unwrap_or(usize::MAX).min(VARIANTS.len() - 1);
        prop_assert_eq!(l10n.get_plural("plural", n).unwrap(), VARIANTS[index]);
    }

    /// Resolving twice gives the same text.
    #[test]
    fn resolution_is_idempotent(n in any::<u64>(), arg in ".*") {
        let l10n = localizer();
        let first = l10n.format_plural("plural", n, &[&arg]).unwrap();
        let second = l10n.format_plural("plural", n, &[&arg]).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Brace-free templates pass through both formatters untouched.
    #[test]
    fn brace_free_templates_unchanged(template in "[^{}]*", arg in any::<i32>()) {
        prop_assert_eq!(format_positional(&template, &[&arg]), template.clone());
        let named = NamedArgs::new().with("a", arg);
        prop_assert_eq!(format_named(&template, &named), template);
    }

    /// Substituted values are emitted verbatim, never re-scanned.
    #[test]
    fn values_are_not_rescanned(value in ".*") {
        prop_assert_eq!(format_positional("{0}", &[&value, &"x"]), value.clone());
        let named = NamedArgs::new().with("v", &value).with("0", "x");
        prop_assert_eq!(format_named("<{v}>", &named), format!("<{value}>"));
    }

    /// Every occurrence of a repeated placeholder gets the same value.
    #[test]
    fn repeated_placeholders_agree(reps in 1usize..8, arg in any::<u16>()) {
        let template = "{0}|".repeat(reps);
        let expected = format!("{arg}|").repeat(reps);
        prop_assert_eq!(format_positional(&template, &[&arg]), expected);
    }
}
