use std::path::PathBuf;

use proptest::prelude::*;

use bemtree::bem::{FilterConfig, classify};
use bemtree::extract::{AttrSet, ClassSet};
use bemtree::generate::{Generator, GeneratorConfig};
use bemtree::test_utils::MemoryWorkspace;

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            "[a-d]{1,4}",
            "[a-d]{1,4}_[x-z]{1,2}",
            "[a-d]{1,4}__[m-o]{1,2}",
            "[a-d]{1,4}-js",
        ],
        1..16,
    )
}

fn config() -> GeneratorConfig {
    GeneratorConfig {
        root: PathBuf::from("site"),
        manifest: Some(PathBuf::from("src/js/blocks.js")),
        ..GeneratorConfig::default()
    }
}

proptest! {
    #[test]
    fn second_run_writes_nothing(tokens in arb_tokens()) {
        let tree = classify(&ClassSet::from_tokens(tokens), &AttrSet::default(), &FilterConfig::default());
        let ws = MemoryWorkspace::new();
        let cfg = config();

        let first = Generator::new(&cfg, &ws).run(&tree);
        let writes = ws.writes().len();
        let second = Generator::new(&cfg, &ws).run(&tree);

        prop_assert!(first.failures.is_empty());
        prop_assert_eq!(first.stylesheets.len(), tree.len());
        prop_assert_eq!(first.scripts.len(), tree.scripted_count());
        prop_assert!(!second.changed());
        prop_assert_eq!(ws.writes().len(), writes);
    }

    #[test]
    fn manifest_has_one_line_per_scripted_block(tokens in arb_tokens()) {
        let tree = classify(&ClassSet::from_tokens(tokens), &AttrSet::default(), &FilterConfig::default());
        let ws = MemoryWorkspace::new();
        let cfg = config();
        let _ = Generator::new(&cfg, &ws).run(&tree);
        let _ = Generator::new(&cfg, &ws).run(&tree);

        let manifest = ws.file("site/src/js/blocks.js").unwrap_or_default();
        prop_assert_eq!(manifest.lines().count(), tree.scripted_count());
        for (name, node) in tree.iter() {
            let line = format!("import '../blocks/{name}/{name}.js';");
            prop_assert_eq!(manifest.lines().any(|l| l == line), node.has_script);
        }
    }
}
