#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use msgloc::{NamedArgs, format_named, format_positional};
use std::fmt::Display;

#[derive(Debug, Arbitrary)]
struct Input {
    template: String,
    positional: Vec<String>,
    named: Vec<(String, String)>,
}

fuzz_target!(|input: Input| {
    let args: Vec<&dyn Display> = input
        .positional
        .iter()
        .map(|s| s as &dyn Display)
        .collect();
    let positional = format_positional(&input.template, &args);

    let named_args: NamedArgs = input.named.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let named = format_named(&input.template, &named_args);

    if !input.template.contains('{') {
        assert_eq!(positional, input.template);
        assert_eq!(named, input.template);
    }
    if args.is_empty() {
        assert_eq!(positional, input.template);
    }
    if named_args.is_empty() {
        assert_eq!(named, input.template);
    }
});
