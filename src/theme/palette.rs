//! Palette files: shell-style `name=value` color assignments

use super::ThemeError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `[export ]name=value`, value bare or quoted, optional trailing comment.
/// As in sh, `#` only starts a comment at the beginning of a word.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)=(?:"([^"]*)"|'([^']*)'|([^\s"']*))(?:\s+#.*)?\s*$"#,
    )
    .expect("palette regex is valid")
});

/// Named colors read from a palette file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    path: PathBuf,
    colors: HashMap<String, String>,
}

impl Palette {
    /// Read and parse a palette file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse palette text. `path` only labels error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ThemeError> {
        let mut colors = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let captures = ASSIGNMENT.captures(line).ok_or_else(|| ThemeError::Syntax {
                path: path.to_path_buf(),
                line: index + 1,
                content: trimmed.to_string(),
            })?;

            let name = captures[1].to_string();
            let value = (2..=4)
                .find_map(|group| captures.get(group))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            colors.insert(name, value);
        }

        log::info!("Loaded {} palette colors from {:?}", colors.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            colors,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
