use proptest::prelude::*;

use bemtree::bem::{FilterConfig, TokenKind, classify, classify_detailed};
use bemtree::extract::{AttrSet, ClassSet, extract_class_tokens};

fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{1,3}",
        "[a-c]{1,3}_[x-z]{1,2}",
        "[a-c]{1,3}__[m-o]{1,2}",
        "[a-c]{1,3}__[m-o]{1,2}_[x-z]{1,2}",
        "[a-c]{1,3}-js",
        "[a-c_\\-]{1,6}",
    ]
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_token(), 0..24)
}

fn arb_attrs() -> impl Strategy<Value = AttrSet> {
    prop::collection::vec("[a-c]{1,3}-js", 0..4).prop_map(AttrSet::from_names)
}

proptest! {
    #[test]
    fn every_block_in_tree_was_a_block_token(tokens in arb_tokens(), attrs in arb_attrs()) {
        let classes = ClassSet::from_tokens(tokens.clone());
        let tree = classify(&classes, &attrs, &FilterConfig::default());

        for name in tree.names() {
            prop_assert!(
                tokens.iter().any(|t| t == name),
                "block {name} has no declaring token"
            );
            prop_assert!(matches!(TokenKind::parse(name), TokenKind::Block { .. }), "expected Block for {:?}", name);
        }
    }

    #[test]
    fn every_token_is_attached_dropped_or_filtered(tokens in arb_tokens(), omit in "[a-c]{0,1}") {
        let classes = ClassSet::from_tokens(tokens);
        let filter = FilterConfig::new("", &omit);
        let outcome = classify_detailed(&classes, &AttrSet::default(), &filter);

        prop_assert!(outcome.filtered + outcome.dropped.len() <= classes.len());
        if omit.is_empty() {
            prop_assert_eq!(outcome.filtered, 0);
        }
        for token in &outcome.dropped {
            prop_assert!(filter.allows(token));
        }
    }

    #[test]
    fn omitted_prefixes_never_reach_tree(tokens in arb_tokens(), omit in "[a-c]") {
        let classes = ClassSet::from_tokens(tokens);
        let tree = classify(&classes, &AttrSet::default(), &FilterConfig::new("", &omit));

        for name in tree.names() {
            prop_assert!(!name.starts_with(omit.as_str()));
        }
    }

    #[test]
    fn class_set_is_deduplicated_and_grouped(tokens in arb_tokens()) {
        let classes = ClassSet::from_tokens(tokens.clone());
        let ordered: Vec<&str> = classes.iter().collect();

        let mut seen = std::collections::HashSet::new();
        for token in &ordered {
            prop_assert!(seen.insert(*token), "duplicate {token}");
        }
        for token in &tokens {
            prop_assert!(seen.contains(token.as_str()));
        }
        for pair in ordered.windows(2) {
            let a = pair[0].split('_').next().unwrap_or_default();
            let b = pair[1].split('_').next().unwrap_or_default();
            prop_assert!(a <= b, "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn classification_is_deterministic(tokens in arb_tokens(), attrs in arb_attrs()) {
        let classes = ClassSet::from_tokens(tokens);
        let first = classify(&classes, &attrs, &FilterConfig::default());
        let second = classify(&classes, &attrs, &FilterConfig::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn extraction_never_panics(text in ".{0,200}") {
        let _ = extract_class_tokens(&text);
    }
}
