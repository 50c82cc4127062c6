use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tempfile::TempDir;

/// Assert that a file exists at the given path
#[macro_export]
macro_rules! assert_file_exists {
    ($path:expr) => {
        assert!(
            std::path::Path::new($path).exists(),
            "Expected file to exist: {:?}",
            $path
        );
    };
}

/// Assert that a file contains expected content
#[macro_export]
macro_rules! assert_file_contains {
    ($path:expr, $expected:expr) => {{
        let content = std::fs::read_to_string($path).expect(&format!("Failed to read {:?}", $path));
        assert!(
            content.contains($expected),
            "File {:?} does not contain '{}'\nActual content:\n{}",
            $path,
            $expected,
            content
        );
    }};
}

/// Assert command succeeded
#[macro_export]
macro_rules! assert_command_success {
    ($output:expr) => {
        assert!(
            $output.success,
            "Command failed with exit code {}\nstdout: {}\nstderr: {}",
            $output.exit_code, $output.stdout, $output.stderr
        );
    };
}

/// Isolated project directory with its own HOME.
pub struct TestFixture {
    pub temp_dir: TempDir,
    /// Project root; the CLI runs here.
    pub root: PathBuf,
    test_name: String,
    start_time: Instant,
}

impl TestFixture {
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        println!("\n{}", "=".repeat(70));
        println!("[FIXTURE] Test: {test_name}");
        println!("[FIXTURE] Root: {root:?}");
        println!("{}", "=".repeat(70));

        Self {
            temp_dir,
            root,
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    /// Fixture with a small two-page site under `src/`.
    pub fn with_sample_site(test_name: &str) -> Self {
        let fixture = Self::new(test_name);
        fixture.write(
            "src/index.html",
            r#"<header class="header">
  <nav class="menu menu_main" data-menu-js>
    <a class='menu__link menu__link_active' href="/">Home</a>
  </nav>
</header>
<div class="card card_wide slider-js slider">
  <h2 class="card__title"></h2>
</div>"#,
        );
        fixture.write(
            "src/parts/footer.html",
            r#"<footer class="footer footer__copy is-hidden"></footer>"#,
        );
        fixture
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|err| panic!("Failed to read {relative}: {err}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn run_bemtree(&self, args: &[&str]) -> CommandOutput {
        self.run_bemtree_with_env(args, &[])
    }

    pub fn run_bemtree_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> CommandOutput {
        let start = Instant::now();
        println!("\n[CMD] bemtree {}", args.join(" "));

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bemtree"));
        cmd.args(args)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", self.root.join(".config"))
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute bemtree");
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        println!("[CMD] Exit code: {}", output.status.code().unwrap_or(-1));
        println!("[CMD] Timing: {:?}", start.elapsed());
        if !stdout.is_empty() {
            println!("[STDOUT]\n{stdout}");
        }
        if !stderr.is_empty() {
            println!("[STDERR]\n{stderr}");
        }

        CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        }
    }

    /// Every file under the root, relative and sorted, skipping HOME dotfiles.
    pub fn files(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_files(&self.root, &self.root, &mut found);
        found.sort();
        found
    }
}

fn collect_files(root: &Path, dir: &Path, found: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("Failed to list dir").flatten() {
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.is_dir() {
            collect_files(root, &path, found);
        } else if let Ok(relative) = path.strip_prefix(root) {
            found.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        println!(
            "[FIXTURE] {} finished in {:?}",
            self.test_name,
            self.start_time.elapsed()
        );
    }
}

pub struct CommandOutput {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is not JSON")
    }
}
