use std::path::PathBuf;

use tempfile::TempDir;

/// Test fixture providing an isolated project directory on disk.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!("[FIXTURE] Created file: {full_path:?} ({} bytes)", content.len());
        full_path
    }

    /// Create a markup page under `src/` wrapping `body` in a minimal document.
    pub fn create_page(&self, name: &str, body: &str) -> PathBuf {
        let html = format!("<!doctype html>\n<html>\n<body>\n{body}\n</body>\n</html>\n");
        self.create_file(&format!("src/{name}.html"), &html)
    }

    /// Read a file relative to the fixture root.
    pub fn read(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.data_path.join(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {relative_path}: {e}"))
    }
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {}", self.data_path.display());
    }
}
