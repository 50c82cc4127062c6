use colored::Colorize;
use serde::Serialize;

use crate::error::{BemError, Failure, Result};

/// Envelope for `--robot` output.
#[derive(Debug, Serialize)]
pub struct RobotResponse<T: Serialize> {
    pub status: RobotStatus,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Failure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    /// Some files failed; everything else was processed.
    Partial,
}

pub fn robot_ok<T: Serialize>(data: T, failures: Vec<Failure>) -> RobotResponse<T> {
    RobotResponse {
        status: if failures.is_empty() {
            RobotStatus::Ok
        } else {
            RobotStatus::Partial
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        failures,
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).map_err(BemError::Json)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("{} {value}", padded.dimmed()));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Failures as red bullets under a section header.
    pub fn failures(&mut self, failures: &[Failure]) -> &mut Self {
        if failures.is_empty() {
            return self;
        }
        self.blank().section("Failures");
        for failure in failures {
            let line = format!("{} {}", failure.code.code_string().red(), failure.message);
            self.bullet(&line);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
