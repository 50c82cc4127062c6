use super::fixture::TestFixture;
use crate::{assert_command_success, assert_file_exists};

#[test]
fn test_package_json_options_are_used() {
    let fixture = TestFixture::with_sample_site("test_package_json_options_are_used");
    fixture.write(
        "package.json",
        r#"{ "name": "site", "bemtree": { "to": "styles/blocks", "omit": "is-", "js": false } }"#,
    );

    let output = fixture.run_bemtree(&[]);
    assert_command_success!(output);

    assert_file_exists!(&fixture.path("styles/blocks/card/card.scss"));
    assert!(!fixture.exists("styles/blocks/is-hidden"));
    assert!(!fixture.exists("styles/blocks/menu/menu.js"));
}

#[test]
fn test_project_toml_overrides_package_json() {
    let fixture = TestFixture::with_sample_site("test_project_toml_overrides_package_json");
    fixture.write("package.json", r#"{ "bemtree": { "to": "from-package" } }"#);
    fixture.write("bemtree.toml", "to = \"from-toml\"\nstyle_ext = \"less\"\n");

    let output = fixture.run_bemtree(&[]);
    assert_command_success!(output);

    assert_file_exists!(&fixture.path("from-toml/card/card.less"));
    assert!(!fixture.exists("from-package"));
}

#[test]
fn test_explicit_config_flag() {
    let fixture = TestFixture::with_sample_site("test_explicit_config_flag");
    fixture.write("conf/custom.toml", "to = \"custom\"\n");

    let output = fixture.run_bemtree(&["--config", "conf/custom.toml"]);
    assert_command_success!(output);

    assert_file_exists!(&fixture.path("custom/card/card.scss"));
}

#[test]
fn test_env_var_then_argument_precedence() {
    let fixture = TestFixture::with_sample_site("test_env_var_then_argument_precedence");

    let output = fixture.run_bemtree_with_env(&["to=from-arg"], &[("BEMTREE_TO", "from-env")]);
    assert_command_success!(output);
    assert_file_exists!(&fixture.path("from-arg/card/card.scss"));

    let output = fixture.run_bemtree_with_env(&[], &[("BEMTREE_TO", "from-env")]);
    assert_command_success!(output);
    assert_file_exists!(&fixture.path("from-env/card/card.scss"));
}

#[test]
fn test_broken_package_json_is_skipped() {
    let fixture = TestFixture::with_sample_site("test_broken_package_json_is_skipped");
    fixture.write("package.json", "{ broken");

    let output = fixture.run_bemtree(&[]);
    assert_command_success!(output);

    assert_file_exists!(&fixture.path("src/blocks/card/card.scss"));
    assert!(output.stderr.contains("Skipping config source"));
}

#[test]
fn test_global_config_is_lowest_priority() {
    let fixture = TestFixture::with_sample_site("test_global_config_is_lowest_priority");
    fixture.write(".config/bemtree/config.toml", "to = \"global\"\nsuffix = false\n");

    let output = fixture.run_bemtree(&["use=header"]);
    assert_command_success!(output);

    assert_eq!(fixture.read("global/header/header.scss"), ".header {\n}\n");
}
