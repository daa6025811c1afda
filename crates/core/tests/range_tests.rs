// ═══════════════════════════════════════════════════════════════════
// Range Tests — RangeService window selection: mode predicates,
// inclusive boundaries, malformed-date exclusion, ascending order
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use weight_tracker_core::dates::CalendarDate;
use weight_tracker_core::models::entry::WeightEntry;
use weight_tracker_core::models::range::RangeSelection;
use weight_tracker_core::services::range_service::RangeService;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::from_date(NaiveDate::from_ymd_opt(y, m, day).unwrap())
}

fn entry(date: &str, lbs: f64) -> WeightEntry {
    WeightEntry::new(date, lbs)
}

/// Unsorted log spanning two years, with one malformed row mixed in.
fn sample_log() -> Vec<WeightEntry> {
    vec![
        entry("03/02/2024", 198.5),
        entry("01/15/2023", 210.0),
        entry("not-a-date", 195.0),
        entry("02/28/2024", 200.0),
        entry("03/31/2024", 196.0),
        entry("12/31/2023", 205.5),
    ]
}

fn selected_dates(window: &[WeightEntry]) -> Vec<&str> {
    window.iter().map(|e| e.date.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  AllTime
// ═══════════════════════════════════════════════════════════════════

mod all_time {
    use super::*;

    #[test]
    fn selects_every_dated_entry_ascending() {
        let service = RangeService::new();
        let window = service.select(&sample_log(), &RangeSelection::AllTime, d(2024, 3, 31));
        assert_eq!(
            selected_dates(&window),
            vec![
                "01/15/2023",
                "12/31/2023",
                "02/28/2024",
                "03/02/2024",
                "03/31/2024",
            ]
        );
    }

    #[test]
    fn excludes_malformed_dates() {
        let service = RangeService::new();
        let window = service.select(&sample_log(), &RangeSelection::AllTime, d(2024, 3, 31));
        assert!(window.iter().all(|e| e.date != "not-a-date"));
    }

    #[test]
    fn output_is_a_subset_of_the_input() {
        let log = sample_log();
        let service = RangeService::new();
        let window = service.select(&log, &RangeSelection::AllTime, d(2024, 3, 31));
        for selected in &window {
            assert!(log.contains(selected));
        }
    }

    #[test]
    fn empty_log_selects_nothing() {
        let service = RangeService::new();
        assert!(service
            .select(&[], &RangeSelection::AllTime, d(2024, 3, 31))
            .is_empty());
    }

    #[test]
    fn all_malformed_log_selects_nothing() {
        let log = vec![entry("bogus", 190.0), entry("", 191.0)];
        let service = RangeService::new();
        assert!(service
            .select(&log, &RangeSelection::AllTime, d(2024, 3, 31))
            .is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trailing30Days
// ═══════════════════════════════════════════════════════════════════

mod trailing_30_days {
    use super::*;

    #[test]
    fn includes_entry_29_days_before_now() {
        let service = RangeService::new();
        let window = service.select(
            &sample_log(),
            &RangeSelection::Trailing30Days,
            d(2024, 3, 31),
        );
        assert!(window.iter().any(|e| e.date == "03/02/2024"));
    }

    #[test]
    fn includes_the_boundary_day_itself() {
        let log = vec![entry("03/01/2024", 197.0)];
        let service = RangeService::new();
        let window = service.select(&log, &RangeSelection::Trailing30Days, d(2024, 3, 31));
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn excludes_entry_32_days_before_now() {
        let service = RangeService::new();
        let window = service.select(
            &sample_log(),
            &RangeSelection::Trailing30Days,
            d(2024, 3, 31),
        );
        assert!(window.iter().all(|e| e.date != "02/28/2024"));
    }

    #[test]
    fn includes_now_itself() {
        let service = RangeService::new();
        let window = service.select(
            &sample_log(),
            &RangeSelection::Trailing30Days,
            d(2024, 3, 31),
        );
        assert!(window.iter().any(|e| e.date == "03/31/2024"));
    }

    #[test]
    fn window_is_ascending() {
        let service = RangeService::new();
        let window = service.select(
            &sample_log(),
            &RangeSelection::Trailing30Days,
            d(2024, 3, 31),
        );
        assert_eq!(selected_dates(&window), vec!["03/02/2024", "03/31/2024"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Year
// ═══════════════════════════════════════════════════════════════════

mod year {
    use super::*;

    #[test]
    fn selects_only_matching_calendar_year() {
        let service = RangeService::new();
        let window = service.select(&sample_log(), &RangeSelection::Year(2023), d(2024, 3, 31));
        assert_eq!(selected_dates(&window), vec!["01/15/2023", "12/31/2023"]);
    }

    #[test]
    fn year_with_no_entries_selects_nothing() {
        let service = RangeService::new();
        assert!(service
            .select(&sample_log(), &RangeSelection::Year(2020), d(2024, 3, 31))
            .is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Custom
// ═══════════════════════════════════════════════════════════════════

mod custom {
    use super::*;

    #[test]
    fn both_bounds_are_inclusive() {
        let service = RangeService::new();
        let selection = RangeSelection::Custom {
            start: Some(d(2023, 12, 31)),
            end: Some(d(2024, 3, 2)),
        };
        let window = service.select(&sample_log(), &selection, d(2024, 3, 31));
        assert_eq!(
            selected_dates(&window),
            vec!["12/31/2023", "02/28/2024", "03/02/2024"]
        );
    }

    #[test]
    fn absent_start_leaves_the_early_side_open() {
        let service = RangeService::new();
        let selection = RangeSelection::Custom {
            start: None,
            end: Some(d(2023, 12, 31)),
        };
        let window = service.select(&sample_log(), &selection, d(2024, 3, 31));
        assert_eq!(selected_dates(&window), vec!["01/15/2023", "12/31/2023"]);
    }

    #[test]
    fn absent_end_leaves_the_late_side_open() {
        let service = RangeService::new();
        let selection = RangeSelection::Custom {
            start: Some(d(2024, 3, 1)),
            end: None,
        };
        let window = service.select(&sample_log(), &selection, d(2024, 3, 31));
        assert_eq!(selected_dates(&window), vec!["03/02/2024", "03/31/2024"]);
    }

    #[test]
    fn both_bounds_absent_matches_all_time() {
        let service = RangeService::new();
        let open = RangeSelection::Custom {
            start: None,
            end: None,
        };
        let all = service.select(&sample_log(), &RangeSelection::AllTime, d(2024, 3, 31));
        let custom = service.select(&sample_log(), &open, d(2024, 3, 31));
        assert_eq!(all, custom);
    }

    #[test]
    fn single_day_range() {
        let service = RangeService::new();
        let selection = RangeSelection::Custom {
            start: Some(d(2024, 2, 28)),
            end: Some(d(2024, 2, 28)),
        };
        let window = service.select(&sample_log(), &selection, d(2024, 3, 31));
        assert_eq!(selected_dates(&window), vec!["02/28/2024"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ordering contract
// ═══════════════════════════════════════════════════════════════════

mod ordering {
    use super::*;

    #[test]
    fn same_day_entries_keep_their_original_relative_order() {
        let log = vec![
            WeightEntry::with_notes("01/10/2024", 200.0, "first"),
            WeightEntry::with_notes("01/05/2024", 199.0, "earlier day"),
            WeightEntry::with_notes("01/10/2024", 201.0, "second"),
        ];
        let service = RangeService::new();
        let window = service.select(&log, &RangeSelection::AllTime, d(2024, 3, 31));
        assert_eq!(window[0].notes_text(), "earlier day");
        assert_eq!(window[1].notes_text(), "first");
        assert_eq!(window[2].notes_text(), "second");
    }

    #[test]
    fn single_digit_and_padded_text_for_the_same_day_tie() {
        let log = vec![
            WeightEntry::with_notes("1/10/2024", 200.0, "unpadded"),
            WeightEntry::with_notes("01/10/2024", 201.0, "padded"),
        ];
        let service = RangeService::new();
        let window = service.select(&log, &RangeSelection::AllTime, d(2024, 3, 31));
        assert_eq!(window[0].notes_text(), "unpadded");
        assert_eq!(window[1].notes_text(), "padded");
    }
}
