//! End-to-end resolution and highlighting over realistic report data.

mod common;

use chrono::Datelike;
use common::*;
use cotmonitor::domain::dataset::Dataset;
use cotmonitor::domain::highlight::{self, HighlightStyle};
use cotmonitor::domain::period::{parse_periods, PeriodSpec, RawPeriod};
use cotmonitor::domain::range_resolver::{resolve, ResolvedInterval};
use cotmonitor::ports::data_port::{DataPort, ReportQuery};

fn query(contract_code: &str) -> ReportQuery {
    ReportQuery {
        dataset_code: "QDL/FON".into(),
        contract_code: contract_code.into(),
        type_category: "F_ALL".into(),
    }
}

fn recurring(sm: u32, sd: u32, em: u32, ed: u32) -> PeriodSpec {
    PeriodSpec::recurring(sm, sd, em, ed).unwrap()
}

mod emptiness {
    use super::*;

    #[test]
    fn no_periods_no_ranges() {
        let data = weekly_reports("2019-01-01", 200);
        assert!(resolve(&data, &[]).is_empty());
    }

    #[test]
    fn no_rows_no_ranges() {
        let periods = [recurring(1, 1, 12, 31), recurring(2, 1, 2, 14)];
        assert!(resolve(&Dataset::default(), &periods).is_empty());
    }

    #[test]
    fn date_filter_to_nothing_gives_nothing() {
        let data = weekly_reports("2019-01-01", 52);
        let filtered = data.between(date(2030, 1, 1), date(2030, 12, 31));
        assert!(resolve(&filtered, &[recurring(2, 1, 2, 14)]).is_empty());
    }
}

mod containment {
    use super::*;

    #[test]
    fn weekly_reports_contain_every_range() {
        let data = weekly_reports("2018-01-02", 300);
        let (min, max) = data.coverage().unwrap();
        let periods = [
            recurring(1, 1, 1, 10),
            recurring(2, 1, 2, 14),
            recurring(9, 1, 9, 15),
            recurring(12, 1, 12, 31),
        ];
        let ranges = resolve(&data, &periods);
        assert!(!ranges.is_empty());
        for r in &ranges {
            assert!(min <= r.start && r.start <= r.end && r.end <= max, "{r}");
        }
    }

    #[test]
    fn first_and_last_partial_years_drop_out() {
        // Coverage 2018-01-02 .. 2018-01-02 + 299 weeks (2023-09-26).
        let data = weekly_reports("2018-01-02", 300);
        let ranges = resolve(&data, &[recurring(1, 1, 1, 10), recurring(12, 1, 12, 31)]);
        let jan_years: Vec<i32> = ranges
            .iter()
            .filter(|r| r.start.month() == 1)
            .map(|r| r.start.year())
            .collect();
        let dec_years: Vec<i32> = ranges
            .iter()
            .filter(|r| r.start.month() == 12)
            .map(|r| r.start.year())
            .collect();
        assert_eq!(jan_years, vec![2019, 2020, 2021, 2022, 2023]);
        assert_eq!(dec_years, vec![2018, 2019, 2020, 2021, 2022]);
    }
}

mod year_independence {
    use super::*;

    #[test]
    fn removing_a_middle_year_removes_only_its_ranges() {
        let full = daily(date(2019, 1, 1), date(2022, 12, 31));
        let without_2020 = Dataset::new(
            full.rows
                .iter()
                .filter(|r| r.date.year() != 2020)
                .cloned()
                .collect(),
        );
        assert_eq!(full.coverage(), without_2020.coverage());

        let periods = [recurring(2, 1, 2, 14), recurring(9, 1, 9, 15)];
        let all = resolve(&full, &periods);
        let reduced = resolve(&without_2020, &periods);

        let expected: Vec<ResolvedInterval> =
            all.into_iter().filter(|r| r.start.year() != 2020).collect();
        assert_eq!(reduced, expected);
    }
}

mod leap_day {
    use super::*;

    #[test]
    fn feb_28_to_29_resolves_only_in_leap_year() {
        let data = daily(date(2023, 1, 1), date(2024, 12, 31));
        let ranges = resolve(&data, &[recurring(2, 28, 2, 29)]);
        assert_eq!(
            ranges,
            vec![ResolvedInterval {
                start: date(2024, 2, 28),
                end: date(2024, 2, 29),
            }]
        );
    }

    #[test]
    fn leap_day_failure_does_not_affect_other_periods() {
        let data = daily(date(2023, 1, 1), date(2024, 12, 31));
        let ranges = resolve(&data, &[recurring(2, 29, 3, 1), recurring(3, 1, 3, 5)]);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].start, date(2024, 2, 29));
        assert_eq!(ranges[1].start, date(2023, 3, 1));
        assert_eq!(ranges[2].start, date(2024, 3, 1));
    }
}

mod explicit_ranges {
    use super::*;

    #[test]
    fn explicit_range_projects_onto_both_years() {
        let data = daily(date(2020, 1, 1), date(2021, 12, 31));
        let periods = [PeriodSpec::explicit(date(2020, 9, 1), date(2020, 9, 15))];
        assert_eq!(
            resolve(&data, &periods),
            vec![
                ResolvedInterval {
                    start: date(2020, 9, 1),
                    end: date(2020, 9, 15),
                },
                ResolvedInterval {
                    start: date(2021, 9, 1),
                    end: date(2021, 9, 15),
                },
            ]
        );
    }

    #[test]
    fn explicit_range_year_outside_data_still_applies() {
        let data = daily(date(2022, 1, 1), date(2022, 12, 31));
        let periods = [PeriodSpec::explicit(date(2015, 12, 1), date(2015, 12, 12))];
        assert_eq!(resolve(&data, &periods).len(), 1);
    }
}

mod malformed {
    use super::*;

    #[test]
    fn partial_entry_is_skipped_without_affecting_others() {
        let raw = vec![
            RawPeriod::new().with("start_month", 2),
            RawPeriod::new()
                .with("start_month", 9)
                .with("start_day", 1)
                .with("end_month", 9)
                .with("end_day", 15),
            RawPeriod::new().with("label", "nothing useful"),
        ];
        let data = daily(date(2020, 1, 1), date(2021, 12, 31));

        let periods = parse_periods(&raw);
        assert_eq!(periods.len(), 1);

        let ranges = resolve(&data, &periods);
        let reference = resolve(&data, &[recurring(9, 1, 9, 15)]);
        assert_eq!(ranges, reference);
        assert_eq!(ranges.len(), 2);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn identical_input_identical_output() {
        let data = weekly_reports("2015-01-06", 520);
        let periods = [
            recurring(12, 1, 12, 12),
            PeriodSpec::explicit(date(2019, 2, 1), date(2019, 2, 14)),
            recurring(2, 29, 3, 10),
        ];
        assert_eq!(resolve(&data, &periods), resolve(&data, &periods));
    }
}

mod data_port {
    use super::*;

    #[test]
    fn highlights_from_fetched_report() {
        let port = MockDataPort::new().with_report("088691", weekly_reports("2020-01-07", 104));
        let data = port.fetch_report(&query("088691")).unwrap();

        let mut target = RecordingTarget::default();
        highlight::apply(&mut target, &data, &[recurring(2, 1, 2, 14)]);

        assert_eq!(
            target.shaded,
            vec![
                (date(2020, 2, 1), date(2020, 2, 14)),
                (date(2021, 2, 1), date(2021, 2, 14)),
            ]
        );
        assert!(target.styles.iter().all(|s| *s == HighlightStyle::default()));
    }

    #[test]
    fn data_range_from_default_method() {
        let port = MockDataPort::new().with_report("088691", weekly_reports("2020-01-07", 3));
        assert_eq!(
            port.get_data_range(&query("088691")).unwrap(),
            Some((date(2020, 1, 7), date(2020, 1, 21), 3))
        );
        assert!(port.get_data_range(&query("000000")).is_err());
    }

    #[test]
    fn empty_report_shades_nothing() {
        let port = MockDataPort::new().with_report("088691", Dataset::default());
        let data = port.fetch_report(&query("088691")).unwrap();
        let mut target = RecordingTarget::default();
        highlight::apply(&mut target, &data, &[recurring(2, 1, 2, 14)]);
        assert!(target.shaded.is_empty());
        assert_eq!(port.get_data_range(&query("088691")).unwrap(), None);
    }
}
