//! Chart panel layout per dataset.

use crate::domain::dataset::Dataset;
use crate::domain::report_type::DatasetCode;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: String,
    pub columns: Vec<String>,
}

impl ChartPanel {
    fn new(title: &str, columns: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// File-name friendly version of the title.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') && !slug.is_empty() {
                slug.push('_');
            }
        }
        slug.trim_end_matches('_').to_string()
    }
}

pub const LONG_COLUMNS: [&str; 5] = [
    "producer_merchant_processor_user_longs",
    "swap_dealer_longs",
    "money_manager_longs",
    "other_reportable_longs",
    "non_reportable_longs",
];

pub const SHORT_COLUMNS: [&str; 5] = [
    "producer_merchant_processor_user_shorts",
    "swap_dealer_shorts",
    "money_manager_shorts",
    "other_reportable_shorts",
    "non_reportable_shorts",
];

/// Numeric-looking columns that name a contract rather than measure it.
fn is_identifier(column: &str) -> bool {
    column == "id" || column.ends_with("_id") || column.ends_with("_code")
}

/// Panels to draw for `dataset_code`, restricted to columns present in `data`.
///
/// The disaggregated futures-and-options report has a fixed layout; every
/// other dataset gets one panel with all numeric fields except identifiers.
pub fn panels_for(dataset_code: Option<DatasetCode>, data: &Dataset) -> Vec<ChartPanel> {
    let candidates = match dataset_code {
        Some(DatasetCode::Fon) => vec![
            ChartPanel::new("Market Participation Over Time", &["market_participation"]),
            ChartPanel::new("Long Positions by Participant Type", &LONG_COLUMNS),
            ChartPanel::new("Short Positions by Participant Type", &SHORT_COLUMNS),
        ],
        _ => vec![ChartPanel {
            title: "All Fields".to_string(),
            columns: data
                .field_names()
                .into_iter()
                .filter(|c| !is_identifier(c))
                .collect(),
        }],
    };

    candidates
        .into_iter()
        .filter_map(|mut panel| {
            panel.columns.retain(|c| data.has_field(c));
            if panel.columns.is_empty() {
                None
            } else {
                Some(panel)
            }
        })
        .collect()
}
