//! Property tests for the resolver's parsing and name transforms.
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use wn::commands::resolver::{canonical_name, type_name};
use wn::parse_args;

proptest! {
    /// Tokens without the option prefix come back as positionals, in order.
    #[test]
    fn positional_tokens_keep_their_relative_order(
        tokens in proptest::collection::vec("[a-z0-9./@:-]{1,12}", 0..8)
    ) {
        let (params, _) = parse_args(&tokens);
        let expected: Vec<String> = tokens
            .iter()
            .filter(|t| !t.starts_with("--"))
            .cloned()
            .collect();
        prop_assert_eq!(params, expected);
    }

    /// Option tokens never leak into the positional list.
    #[test]
    fn option_tokens_never_appear_as_parameters(
        names in proptest::collection::vec("[a-z]{1,10}", 1..6)
    ) {
        let tokens: Vec<String> = names.iter().map(|n| format!("--{n}")).collect();
        let (params, options) = parse_args(&tokens);
        prop_assert!(params.is_empty());
        for name in &names {
            prop_assert!(options.contains_key(name.as_str()));
        }
    }

    /// `--name=value` carries the value through, quotes stripped when wrapping.
    #[test]
    fn valued_options_round_trip(
        name in "[a-z]{1,10}",
        value in "[A-Za-z0-9 ]{0,20}",
        quoted in any::<bool>(),
    ) {
        let token = if quoted {
            format!("--{name}=\"{value}\"")
        } else {
            format!("--{name}={value}")
        };
        let (_, options) = parse_args(&[token]);
        prop_assert_eq!(
            options.get(name.as_str()).and_then(|v| v.as_str()),
            Some(value.as_str())
        );
    }

    /// Canonical names round-trip back to the type identifier they came from.
    #[test]
    fn name_transforms_round_trip(
        words in proptest::collection::vec("[A-Z][a-z]{0,8}", 1..5)
    ) {
        let ident: String = words.concat();
        prop_assert_eq!(type_name(&canonical_name(&ident)), ident);
    }

    /// Arbitrary argument vectors never panic the parser.
    #[test]
    fn parse_args_total(tokens in proptest::collection::vec(".{0,20}", 0..10)) {
        let _ = parse_args(&tokens);
    }
}
