//! Shell configuration assembled from command-line flags.

use std::fs;
use std::path::PathBuf;

use liuren_calendar::LunarTable;
use liuren_core::{Divination, Tables};

/// Settings shared by the presentation shells.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// JSON file replacing the built-in tables.
    pub tables_path: Option<PathBuf>,
    /// Wait for Enter between palaces in the prompt session.
    pub pause: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tables_path: None,
            pause: true,
            color: true,
        }
    }
}

impl ShellConfig {
    /// Set the tables file.
    pub fn with_tables_path(mut self, path: Option<PathBuf>) -> Self {
        self.tables_path = path;
        self
    }

    /// Enable or disable pausing between palaces.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Enable or disable colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Apply the color setting process-wide.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Load the tables: the configured file, or the built-ins.
    pub fn tables(&self) -> Result<Tables, String> {
        let Some(path) = &self.tables_path else {
            return Ok(Tables::builtin());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read tables file {}: {e}", path.display()))?;
        let tables = serde_json::from_str(&text)
            .map_err(|e| format!("invalid tables file {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded custom tables");
        Ok(tables)
    }

    /// Build the calculator for this configuration.
    pub fn divination(&self) -> Result<Divination<LunarTable>, String> {
        Ok(Divination::new(LunarTable::new()).with_tables(self.tables()?))
    }
}
