//! Top-level merge of new data into an existing JSON locale file.
//!
//! Keys present in the new data replace the existing value wholesale (no deep
//! merge). Keys absent from it are left as they are. Key order is preserved:
//! existing keys stay in place, new keys are appended.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Action taken on a top-level key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
    Unchanged,
}

impl KeyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
            KeyAction::Unchanged => "unchanged",
        }
    }

    /// True if applying this action changes the document.
    pub fn is_change(self) -> bool {
        !matches!(self, KeyAction::Unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChange {
    pub key: String,
    pub action: KeyAction,
}

/// What a merge did (or would do) to one file.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub path: PathBuf,
    pub changes: Vec<KeyChange>,
}

impl MergeOutcome {
    pub fn changed_count(&self) -> usize {
        self.changes.iter().filter(|c| c.action.is_change()).count()
    }

    pub fn is_up_to_date(&self) -> bool {
        self.changed_count() == 0
    }
}

/// An existing JSON object file loaded for merging.
#[derive(Debug)]
pub struct JsonMerger {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonMerger {
    /// Open an existing JSON file. The root must be an object.
    ///
    /// A missing file is an error; nothing is created.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        let data = match value {
            Value::Object(map) => map,
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
        })
    }

    /// Overwrite or insert every top-level key of `new_data`.
    pub fn merge_top_level(&mut self, new_data: &Map<String, Value>) -> Vec<KeyChange> {
        new_data
            .iter()
            .map(|(key, value)| KeyChange {
                key: key.clone(),
                action: self.set(key, value.clone()),
            })
            .collect()
    }

    fn set(&mut self, key: &str, value: Value) -> KeyAction {
        let action = match self.data.get(key) {
            None => KeyAction::Added,
            Some(existing) if *existing == value => KeyAction::Unchanged,
            Some(_) => KeyAction::Updated,
        };
        // IndexMap keeps the slot of an existing key on insert
        self.data.insert(key.to_string(), value);
        action
    }

    /// Serialize with 2-space indentation and a trailing newline.
    ///
    /// Non-ASCII characters are written as-is.
    pub fn render(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;
        content.push('\n');
        Ok(content)
    }

    pub fn save(&self) -> Result<()> {
        let content = self.render()?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Read `path`, merge `new_data` into its top level and write it back.
pub fn update_json(path: &Path, new_data: &Map<String, Value>) -> Result<MergeOutcome> {
    let mut merger = JsonMerger::open(path)?;
    let changes = merger.merge_top_level(new_data);
    merger.save()?;
    Ok(MergeOutcome {
        path: path.to_path_buf(),
        changes,
    })
}

/// Same as [`update_json`] but leaves the file untouched.
pub fn preview_json(path: &Path, new_data: &Map<String, Value>) -> Result<MergeOutcome> {
    let mut merger = JsonMerger::open(path)?;
    let changes = merger.merge_top_level(new_data);
    Ok(MergeOutcome {
        path: path.to_path_buf(),
        changes,
    })
}

/// Load a JSON file whose root must be an object, e.g. the data side of `merge`.
pub fn read_object(path: &Path) -> Result<Map<String, Value>> {
    Ok(JsonMerger::open(path)?.data)
}
