//! Applying resolved highlight ranges to a render target.

use crate::domain::dataset::Dataset;
use crate::domain::period::PeriodSpec;
use crate::domain::range_resolver::{resolve, ResolvedInterval};
use crate::ports::render_port::RenderTarget;

/// Where a shape is drawn relative to the data traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Below,
    Above,
}

/// Visual style for a highlighted interval.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightStyle {
    pub fill_color: String,
    pub opacity: f64,
    pub line_width: f64,
    pub line_color: String,
    pub layer: Layer,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            fill_color: "rgba(255, 50, 50, 0.5)".to_string(),
            opacity: 0.9,
            line_width: 2.0,
            line_color: "black".to_string(),
            layer: Layer::Below,
        }
    }
}

/// Resolve `periods` against `dataset` and shade each interval on `target`.
///
/// Repeated calls on the same target add more shapes; nothing is cleared.
pub fn apply(target: &mut dyn RenderTarget, dataset: &Dataset, periods: &[PeriodSpec]) {
    apply_with_style(target, dataset, periods, &HighlightStyle::default());
}

pub fn apply_with_style(
    target: &mut dyn RenderTarget,
    dataset: &Dataset,
    periods: &[PeriodSpec],
    style: &HighlightStyle,
) {
    let ranges = resolve(dataset, periods);
    if ranges.is_empty() {
        log::info!("No recurring highlight periods defined.");
        return;
    }
    shade_ranges(target, &ranges, style);
}

/// Shade already-resolved intervals.
pub fn shade_ranges(
    target: &mut dyn RenderTarget,
    ranges: &[ResolvedInterval],
    style: &HighlightStyle,
) {
    for range in ranges {
        target.shade_x_range(range.start, range.end, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Observation;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct Recorder {
        shaded: Vec<(NaiveDate, NaiveDate, HighlightStyle)>,
    }

    impl RenderTarget for Recorder {
        fn shade_x_range(&mut self, start: NaiveDate, end: NaiveDate, style: &HighlightStyle) {
            self.shaded.push((start, end, style.clone()));
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn two_years() -> Dataset {
        Dataset::new(vec![
            Observation::new(d(2020, 1, 1)),
            Observation::new(d(2021, 12, 31)),
        ])
    }

    #[test]
    fn one_instruction_per_interval() {
        let mut target = Recorder::default();
        let periods = [PeriodSpec::recurring(9, 1, 9, 15).unwrap()];
        apply(&mut target, &two_years(), &periods);

        assert_eq!(target.shaded.len(), 2);
        assert_eq!(target.shaded[0].0, d(2020, 9, 1));
        assert_eq!(target.shaded[1].1, d(2021, 9, 15));
        assert_eq!(target.shaded[0].2, HighlightStyle::default());
    }

    #[test]
    fn nothing_resolved_issues_no_instructions() {
        let mut target = Recorder::default();
        apply(&mut target, &two_years(), &[]);
        assert!(target.shaded.is_empty());
    }

    #[test]
    fn repeated_calls_accumulate() {
        let mut target = Recorder::default();
        let periods = [PeriodSpec::recurring(2, 1, 2, 14).unwrap()];
        apply(&mut target, &two_years(), &periods);
        apply(&mut target, &two_years(), &periods);
        assert_eq!(target.shaded.len(), 4);
    }

    #[test]
    fn custom_style_is_passed_through() {
        let mut target = Recorder::default();
        let style = HighlightStyle {
            fill_color: "rgba(0, 0, 255, 0.2)".into(),
            layer: Layer::Above,
            ..HighlightStyle::default()
        };
        let periods = [PeriodSpec::recurring(2, 1, 2, 14).unwrap()];
        apply_with_style(&mut target, &two_years(), &periods, &style);
        assert!(target.shaded.iter().all(|(_, _, s)| *s == style));
    }

    #[test]
    fn default_style_matches_chart_convention() {
        let style = HighlightStyle::default();
        assert_eq!(style.fill_color, "rgba(255, 50, 50, 0.5)");
        assert_eq!(style.line_color, "black");
        assert_eq!(style.layer, Layer::Below);
        assert!((style.opacity - 0.9).abs() < f64::EPSILON);
        assert!((style.line_width - 2.0).abs() < f64::EPSILON);
    }
}
