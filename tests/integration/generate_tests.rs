use super::fixture::TestFixture;
use crate::{assert_command_success, assert_file_contains, assert_file_exists};

#[test]
fn test_generate_scaffolds_every_block() {
    let fixture = TestFixture::with_sample_site("test_generate_scaffolds_every_block");

    let output = fixture.run_bemtree(&["generate", "omit=is-"]);
    assert_command_success!(output);

    assert_eq!(
        fixture.files(),
        [
            "src/blocks/card/card.scss",
            "src/blocks/footer/footer.scss",
            "src/blocks/header/header.scss",
            "src/blocks/menu/menu.scss",
            "src/blocks/slider/slider.scss",
            "src/index.html",
            "src/parts/footer.html",
        ]
    );
    assert_file_contains!(fixture.path("src/blocks/menu/menu.scss"), "\t&__link {\n\n\t\t&_active {");
    assert_file_contains!(fixture.path("src/blocks/card/card.scss"), "\t&_wide {");
}

#[test]
fn test_generate_with_manifest_creates_scripts() {
    let fixture = TestFixture::with_sample_site("test_generate_with_manifest_creates_scripts");

    let output = fixture.run_bemtree(&["js=src/js/blocks.js", "omit=is-"]);
    assert_command_success!(output);

    assert_file_exists!(&fixture.path("src/blocks/menu/menu.js"));
    assert_file_exists!(&fixture.path("src/blocks/slider/slider.js"));
    assert!(!fixture.exists("src/blocks/card/card.js"));
    assert_eq!(fixture.read("src/blocks/menu/menu.js"), "");

    let manifest = fixture.read("src/js/blocks.js");
    let lines: Vec<&str> = manifest.lines().collect();
    assert_eq!(
        lines,
        [
            "import '../blocks/menu/menu.js';",
            "import '../blocks/slider/slider.js';",
        ]
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let fixture = TestFixture::with_sample_site("test_second_run_changes_nothing");
    let args = ["--robot", "generate", "js=main.js"];

    let first = fixture.run_bemtree(&args);
    assert_command_success!(first);
    let files_after_first = fixture.files();
    let manifest_after_first = fixture.read("main.js");

    let second = fixture.run_bemtree(&args);
    assert_command_success!(second);

    assert_eq!(fixture.files(), files_after_first);
    assert_eq!(fixture.read("main.js"), manifest_after_first);

    let json = second.json();
    assert!(json["data"]["stylesheets"].as_array().unwrap().is_empty());
    assert!(json["data"]["scripts"].as_array().unwrap().is_empty());
    assert!(json["data"]["imports_added"].as_array().unwrap().is_empty());
}

#[test]
fn test_removed_import_line_is_not_restored() {
    let fixture = TestFixture::with_sample_site("test_removed_import_line_is_not_restored");

    let first = fixture.run_bemtree(&["js=main.js"]);
    assert_command_success!(first);
    fixture.write("main.js", "// entry\n");

    let second = fixture.run_bemtree(&["--robot", "js=main.js"]);
    assert_command_success!(second);

    assert_eq!(fixture.read("main.js"), "// entry\n");
    assert!(second.json()["data"]["imports_added"].as_array().unwrap().is_empty());
}

#[test]
fn test_existing_files_are_preserved() {
    let fixture = TestFixture::with_sample_site("test_existing_files_are_preserved");
    fixture.write("src/blocks/card/card.scss", "// hand written\n");
    fixture.write("main.js", "import './vendor.js';\n");

    let output = fixture.run_bemtree(&["js=main.js"]);
    assert_command_success!(output);

    assert_eq!(fixture.read("src/blocks/card/card.scss"), "// hand written\n");
    let manifest = fixture.read("main.js");
    assert!(manifest.starts_with("import './vendor.js';\n"));
    assert!(manifest.contains("import './src/blocks/menu/menu.js';"));
}

#[test]
fn test_use_restricts_blocks() {
    let fixture = TestFixture::with_sample_site("test_use_restricts_blocks");

    let output = fixture.run_bemtree(&["--robot", "tree", "use=card, menu"]);
    assert_command_success!(output);

    let json = output.json();
    let names: Vec<&str> = json["data"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["card", "menu"]);
}

#[test]
fn test_prefix_and_suffix_options() {
    let fixture = TestFixture::with_sample_site("test_prefix_and_suffix_options");

    let output = fixture.run_bemtree(&["prefix=@use 'vars';", "suffix=", "use=header"]);
    assert_command_success!(output);

    assert_eq!(
        fixture.read("src/blocks/header/header.scss"),
        "@use 'vars';\n\n.header {\n}\n"
    );
}

#[test]
fn test_percent_alternation_in_from() {
    let fixture = TestFixture::new("test_percent_alternation_in_from");
    fixture.write("src/a.html", r#"<i class="alpha"></i>"#);
    fixture.write("src/b.php", r#"<i class="beta"></i>"#);
    fixture.write("src/c.txt", r#"<i class="gamma"></i>"#);

    let output = fixture.run_bemtree(&["--robot", "tree", "from=./src/*.+(html%php)"]);
    assert_command_success!(output);

    let json = output.json();
    assert!(json["data"].get("alpha").is_some());
    assert!(json["data"].get("beta").is_some());
    assert!(json["data"].get("gamma").is_none());
}

#[test]
fn test_negated_group_in_from_skips_named_files() {
    let fixture = TestFixture::new("test_negated_group_in_from_skips_named_files");
    fixture.write("src/index.html", r#"<i class="alpha"></i>"#);
    fixture.write("src/draft.html", r#"<i class="beta"></i>"#);

    let output = fixture.run_bemtree(&["--robot", "tree", "from=src/!(draft).html"]);
    assert_command_success!(output);

    let json = output.json();
    assert!(json["data"].get("alpha").is_some());
    assert!(json["data"].get("beta").is_none());
}

#[test]
fn test_blocked_output_directory_is_reported() {
    let fixture = TestFixture::with_sample_site("test_blocked_output_directory_is_reported");
    fixture.write("src/blocks/card", "not a directory");

    let output = fixture.run_bemtree(&["--robot", "generate", "omit=is-"]);
    assert_command_success!(output);

    let json = output.json();
    assert_eq!(json["status"], "partial");
    assert_eq!(json["failures"][0]["code"], "DIRECTORY_CREATE_FAILED");
    assert_file_exists!(&fixture.path("src/blocks/menu/menu.scss"));
}
