// ABOUTME: Generic add/update/remove editor for the draft's ordered string lists
// ABOUTME: One reducer serves responsibilities, required skills and benefits

use std::fmt;

/// The list-valued fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Responsibilities,
    RequiredSkills,
    Benefits,
}

impl ListField {
    pub fn label(&self) -> &'static str {
        match self {
            ListField::Responsibilities => "Responsibility",
            ListField::RequiredSkills => "Required skill",
            ListField::Benefits => "Benefit",
        }
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEdit {
    Add,
    Update { index: usize, value: String },
    Remove { index: usize },
}

impl ListEdit {
    pub fn apply_to(self, entries: &mut Vec<String>) {
        match self {
            ListEdit::Add => add_entry(entries),
            ListEdit::Update { index, value } => update_entry(entries, index, value),
            ListEdit::Remove { index } => remove_entry(entries, index),
        }
    }
}

pub fn add_entry(entries: &mut Vec<String>) {
    entries.push(String::new());
}

/// Out-of-range indices are ignored.
pub fn update_entry(entries: &mut [String], index: usize, value: String) {
    if let Some(slot) = entries.get_mut(index) {
        *slot = value;
    }
}

/// Keeps at least one input row: removing the last remaining entry is a no-op.
pub fn remove_entry(entries: &mut Vec<String>, index: usize) {
    if entries.len() > 1 && index < entries.len() {
        entries.remove(index);
    }
}

/// Trimmed, non-blank entries in their original order.
pub fn non_blank(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}
