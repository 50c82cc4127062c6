use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{BemError, Result};

/// Environment variable prefix; `BEMTREE_FROM` sets `from` and so on.
pub const ENV_PREFIX: &str = "BEMTREE_";

/// Key of the options block inside `package.json`.
pub const PACKAGE_KEY: &str = "bemtree";

/// Project-level config file, looked up in the working directory.
pub const PROJECT_FILE: &str = "bemtree.toml";

/// Every settable option, as spelled in files, env vars and `key=value` args.
pub const OPTION_KEYS: [&str; 10] = [
    "cwd",
    "from",
    "to",
    "omit",
    "use",
    "js",
    "prefix",
    "suffix",
    "style_ext",
    "script_ext",
];

/// Resolved run options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Root for the markup pattern, the output directory and the manifest.
    pub cwd: PathBuf,
    /// Markup glob. `%` may stand in for `|`.
    pub from: String,
    /// Output directory for block folders, relative to `cwd`.
    pub to: String,
    /// Comma-separated prefixes; matching tokens are ignored.
    pub omit: String,
    /// Comma-separated prefixes; when set, only matching tokens are kept.
    #[serde(rename = "use")]
    pub use_list: String,
    /// Script manifest path relative to `cwd`. Empty disables script stubs.
    pub js: String,
    pub prefix: String,
    pub suffix: String,
    pub style_ext: String,
    pub script_ext: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("."),
            from: "./src/**/*.html".to_string(),
            to: "src/blocks".to_string(),
            omit: String::new(),
            use_list: String::new(),
            js: String::new(),
            prefix: String::new(),
            suffix: "$self: &;".to_string(),
            style_ext: "scss".to_string(),
            script_ext: "js".to_string(),
        }
    }
}

impl Options {
    /// Resolve options for a run started in `base`.
    ///
    /// Sources in increasing priority: defaults, the global config file, the
    /// `bemtree` block of `package.json`, `bemtree.toml` (or `explicit_path`),
    /// `BEMTREE_*` variables, then `overrides` (`key=value` strings).
    pub fn load(base: &Path, explicit_path: Option<&Path>, overrides: &[String]) -> Self {
        let global = dirs::config_dir().map(|dir| dir.join("bemtree/config.toml"));
        Self::resolve(base, global.as_deref(), explicit_path, overrides, |key| {
            std::env::var(key).ok()
        })
    }

    /// [`Options::load`] with the global file and environment supplied by
    /// the caller.
    pub fn resolve(
        base: &Path,
        global_path: Option<&Path>,
        explicit_path: Option<&Path>,
        overrides: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut options = Self {
            cwd: base.to_path_buf(),
            ..Self::default()
        };

        if let Some(path) = global_path {
            options.merge_source(path, load_toml_patch(path));
        }

        let package = base.join("package.json");
        options.merge_source(&package, load_package_patch(&package));

        let project = explicit_path.map_or_else(|| base.join(PROJECT_FILE), Path::to_path_buf);
        match load_toml_patch(&project) {
            Ok(None) if explicit_path.is_some() => {
                warn!(path = %project.display(), "Config file not found");
            }
            loaded => options.merge_source(&project, loaded),
        }

        options.merge_patch(OptionsPatch::from_env(env));
        options.apply_overrides(overrides);

        if options.cwd.is_relative() {
            options.cwd = base.join(&options.cwd);
        }
        options
    }

    fn merge_source(&mut self, path: &Path, loaded: Result<Option<OptionsPatch>>) {
        match loaded {
            Ok(Some(patch)) => {
                debug!(path = %path.display(), "Applying config source");
                for key in patch.unknown_keys() {
                    warn!(path = %path.display(), key, "Ignoring unknown option");
                }
                self.merge_patch(patch);
            }
            Ok(None) => {}
            Err(err) => warn!(path = %path.display(), error = %err, "Skipping config source"),
        }
    }

    pub fn merge_patch(&mut self, patch: OptionsPatch) {
        if let Some(value) = patch.cwd {
            self.cwd = PathBuf::from(value);
        }
        if let Some(value) = patch.from {
            self.from = value;
        }
        if let Some(value) = patch.to {
            self.to = value;
        }
        if let Some(value) = patch.omit {
            self.omit = value;
        }
        if let Some(value) = patch.use_list {
            self.use_list = value;
        }
        if let Some(value) = patch.js {
            self.js = value;
        }
        if let Some(value) = patch.prefix {
            self.prefix = value;
        }
        if let Some(value) = patch.suffix {
            self.suffix = value;
        }
        if let Some(value) = patch.style_ext {
            self.style_ext = value;
        }
        if let Some(value) = patch.script_ext {
            self.script_ext = value;
        }
    }

    /// Apply `key=value` arguments in order. Later keys win; the value is
    /// everything after the first `=`.
    pub fn apply_overrides(&mut self, overrides: &[String]) {
        for raw in overrides {
            match parse_override(raw) {
                Ok((key, value)) => {
                    if !self.set(key, value) {
                        warn!(key, "Ignoring unknown option");
                    }
                }
                Err(err) => warn!(argument = %raw, error = %err, "Ignoring argument"),
            }
        }
    }

    /// Set one option by key. Returns false for an unknown key.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let value = value.to_string();
        match key {
            "cwd" => self.cwd = PathBuf::from(value),
            "from" => self.from = value,
            "to" => self.to = value,
            "omit" => self.omit = value,
            "use" => self.use_list = value,
            "js" => self.js = value,
            "prefix" => self.prefix = value,
            "suffix" => self.suffix = value,
            "style_ext" => self.style_ext = value,
            "script_ext" => self.script_ext = value,
            _ => return false,
        }
        true
    }
}

/// Partial options from one source. `false` in a file means empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsPatch {
    #[serde(default, deserialize_with = "string_or_false")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub omit: Option<String>,
    #[serde(default, rename = "use", deserialize_with = "string_or_false")]
    pub use_list: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub js: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub prefix: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub suffix: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub style_ext: Option<String>,
    #[serde(default, deserialize_with = "string_or_false")]
    pub script_ext: Option<String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, IgnoredAny>,
}

impl OptionsPatch {
    /// Patch from `BEMTREE_<KEY>` variables.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| env(&format!("{ENV_PREFIX}{}", key.to_uppercase()));
        Self {
            cwd: var("cwd"),
            from: var("from"),
            to: var("to"),
            omit: var("omit"),
            use_list: var("use"),
            js: var("js"),
            prefix: var("prefix"),
            suffix: var("suffix"),
            style_ext: var("style_ext"),
            script_ext: var("script_ext"),
            unknown: BTreeMap::new(),
        }
    }

    /// Keys the source set that are not options.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }
}

fn string_or_false<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Flag(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Flag(false)) => Some(String::new()),
        Some(Raw::Flag(true)) | None => None,
    })
}

/// Split `key=value`. The key must be non-empty.
pub fn parse_override(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(BemError::Config(format!("expected KEY=VALUE, got '{raw}'"))),
    }
}

fn load_toml_patch(path: &Path) -> Result<Option<OptionsPatch>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| BemError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let patch = toml::from_str(&raw)?;
    Ok(Some(patch))
}

fn load_package_patch(path: &Path) -> Result<Option<OptionsPatch>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| BemError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let mut package: serde_json::Value = serde_json::from_str(&raw)?;
    match package.get_mut(PACKAGE_KEY).map(serde_json::Value::take) {
        Some(block) => Ok(Some(serde_json::from_value(block)?)),
        None => Ok(None),
    }
}
