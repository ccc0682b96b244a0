//! Domain types for term-checklist.

use serde::Serialize;

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for selection reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output, one chosen label per line.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// A single chosen item: the stable index plus its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenItem {
    /// Position of the item in the original choice list.
    pub index: usize,
    /// The label as it was displayed.
    pub label: String,
}

/// Final outcome of a checklist session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionReport {
    /// The header prompt the user answered.
    pub header: String,
    /// Total number of choices presented.
    pub total: usize,
    /// Chosen items in ascending index order.
    pub chosen: Vec<ChosenItem>,
}

impl SelectionReport {
    /// Assemble a report from a finished session.
    ///
    /// Indices outside the choice list are dropped rather than invented;
    /// the widget never produces them, so this is pure bookkeeping.
    pub fn new(header: &str, choices: &[String], selected: &[usize]) -> Self {
        let chosen = selected
            .iter()
            .filter_map(|&i| {
                choices.get(i).map(|label| ChosenItem {
                    index: i,
                    label: label.clone(),
                })
            })
            .collect();

        SelectionReport {
            header: header.to_string(),
            total: choices.len(),
            chosen,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["red".to_string(), "green".to_string(), "blue".to_string()]
    }

    #[test]
    fn report_carries_labels_for_selected_indices() {
        let report = SelectionReport::new("Pick colors:", &choices(), &[0, 2]);
        assert_eq!(report.header, "Pick colors:");
        assert_eq!(report.total, 3);
        assert_eq!(
            report.chosen,
            vec![
                ChosenItem { index: 0, label: "red".to_string() },
                ChosenItem { index: 2, label: "blue".to_string() },
            ]
        );
    }

    #[test]
    fn report_from_empty_selection_is_empty() {
        let report = SelectionReport::new("Pick colors:", &choices(), &[]);
        assert_eq!(report.total, 3);
        assert!(report.chosen.is_empty());
    }

    #[test]
    fn out_of_range_indices_are_dropped() {
        let report = SelectionReport::new("Pick colors:", &choices(), &[1, 9]);
        assert_eq!(report.chosen.len(), 1);
        assert_eq!(report.chosen[0].index, 1);
    }

    #[test]
    fn output_format_defaults_to_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
