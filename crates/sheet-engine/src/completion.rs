//! Completion metrics

use serde::{Deserialize, Serialize};

use sheet_model::TableSection;

/// How filled-in a section (or the whole sheet) is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    /// `round(completed / total * 100)`; 0 when there are no fields
    pub percentage: u8,
}

impl CompletionStats {
    fn from_counts(total: usize, completed: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        CompletionStats {
            total,
            completed,
            percentage,
        }
    }
}

/// Completion of a single section. A field counts as completed unless its
/// value is absent or the empty string; empty lists, `0` and `false` are
/// deliberate entries and do count.
pub fn section_completion(section: &TableSection) -> CompletionStats {
    let total = section.fields.len();
    let completed = section.fields.iter().filter(|f| f.is_completed()).count();
    CompletionStats::from_counts(total, completed)
}

/// Completion of the whole document. Totals are aggregated across
/// sections before dividing, so small sections do not weigh the same as
/// large ones the way an average of percentages would.
pub fn overall_completion(sections: &[TableSection]) -> CompletionStats {
    let total = sections.iter().map(|s| s.fields.len()).sum();
    let completed = sections
        .iter()
        .flat_map(|s| s.fields.iter())
        .filter(|f| f.is_completed())
        .count();
    CompletionStats::from_counts(total, completed)
}
