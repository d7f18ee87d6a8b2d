#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use msgloc::{Localizer, MessageEntry, MessageTable, PluralSelector};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(String, Option<String>, Vec<String>)>,
    max_index: u8,
    lookups: Vec<(String, u64)>,
}

fuzz_target!(|input: Input| {
    let table: MessageTable = input
        .entries
        .into_iter()
        .map(|(key, fixed, variants)| {
            let entry = match fixed {
                Some(text) => MessageEntry::Fixed(text),
                None => MessageEntry::Plural(variants),
            };
            (key, entry)
        })
        .collect();
    let selector = PluralSelector::clamped(usize::from(input.max_index));
    let l10n = Localizer::new(table).selector(selector);

    for (key, quantity) in &input.lookups {
        let resolved = l10n.get_plural(key, *quantity).expect("selector configured");
        match l10n.table().get(key) {
            None => assert_eq!(resolved, key.as_str()),
            Some(MessageEntry::Plural(variants)) if variants.is_empty() => {
                assert_eq!(resolved, key.as_str());
            }
            Some(MessageEntry::Fixed(text)) => assert_eq!(resolved, text.as_str()),
            Some(MessageEntry::Plural(variants)) => {
                assert!(variants.iter().any(|v| v == resolved));
            }
        }
    }
});
