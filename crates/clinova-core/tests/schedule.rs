//! Tests for the weekly grid and the bookable-slot resolver.

use jiff::civil::{Weekday, date};

use clinova_core::schedule::{
    BlockState, BookingPlanner, ReservedSlot, WeeklyAvailability, available_blocks, block_end_hour,
    block_label, block_start_hour, date_in_same_week, day_key, monday_of_week, weekday_from_key,
};

fn day_with_enabled(enabled: &[u8]) -> Vec<BlockState> {
    (1..=12)
        .map(|block| BlockState {
            block,
            enabled: enabled.contains(&block),
        })
        .collect()
}

fn grid_with_tuesday(enabled: &[u8]) -> WeeklyAvailability {
    let mut weekly = WeeklyAvailability::blank();
    weekly.tuesday = day_with_enabled(enabled);
    weekly
}

// 2025-08-05 is a Tuesday, 2025-08-03 a Sunday.
const TUESDAY: (i16, i8, i8) = (2025, 8, 5);
const SUNDAY: (i16, i8, i8) = (2025, 8, 3);

#[test]
fn fully_disabled_day_yields_nothing() {
    let weekly = WeeklyAvailability::blank();
    let (y, m, d) = TUESDAY;
    assert!(available_blocks(&weekly, date(y, m, d), &[]).is_empty());
}

#[test]
fn all_enabled_and_none_reserved_yields_all_twelve() {
    let weekly = grid_with_tuesday(&(1..=12).collect::<Vec<u8>>());
    let (y, m, d) = TUESDAY;
    assert_eq!(
        available_blocks(&weekly, date(y, m, d), &[]),
        (1..=12).collect::<Vec<u8>>()
    );
}

#[test]
fn all_enabled_and_all_reserved_yields_nothing() {
    let weekly = grid_with_tuesday(&(1..=12).collect::<Vec<u8>>());
    let reserved: Vec<u8> = (1..=12).collect();
    let (y, m, d) = TUESDAY;
    assert!(available_blocks(&weekly, date(y, m, d), &reserved).is_empty());
}

#[test]
fn reserved_blocks_never_appear_in_the_result() {
    let weekly = grid_with_tuesday(&[1, 3, 5, 7, 9, 11]);
    let reserved = [3, 7, 11];
    let (y, m, d) = TUESDAY;
    let open = available_blocks(&weekly, date(y, m, d), &reserved);
    for block in &reserved {
        assert!(!open.contains(block));
    }
    assert_eq!(open, vec![1, 5, 9]);
}

#[test]
fn partial_template_minus_reservation() {
    let weekly = grid_with_tuesday(&[1, 3, 5]);
    let (y, m, d) = TUESDAY;
    assert_eq!(available_blocks(&weekly, date(y, m, d), &[3]), vec![1, 5]);
}

#[test]
fn duplicate_reservations_collapse() {
    let weekly = grid_with_tuesday(&[1, 2, 3]);
    let (y, m, d) = TUESDAY;
    assert_eq!(
        available_blocks(&weekly, date(y, m, d), &[2, 2, 2]),
        vec![1, 3]
    );
}

#[test]
fn resolver_is_idempotent_and_order_stable() {
    let weekly = grid_with_tuesday(&[4, 2, 8]);
    let (y, m, d) = TUESDAY;
    let first = available_blocks(&weekly, date(y, m, d), &[2]);
    let second = available_blocks(&weekly, date(y, m, d), &[2]);
    assert_eq!(first, second);
    assert_eq!(first, vec![4, 8]);
}

#[test]
fn malformed_day_row_degrades_to_empty() {
    let mut weekly = WeeklyAvailability::blank();
    // Eleven entries instead of twelve.
    weekly.tuesday = day_with_enabled(&(1..=12).collect::<Vec<u8>>())
        .into_iter()
        .take(11)
        .collect();
    let (y, m, d) = TUESDAY;
    assert!(available_blocks(&weekly, date(y, m, d), &[]).is_empty());
}

#[test]
fn out_of_range_block_numbers_degrade_to_empty() {
    let mut weekly = WeeklyAvailability::blank();
    let mut row = day_with_enabled(&[1, 2]);
    row[0].block = 13;
    weekly.tuesday = row;
    let (y, m, d) = TUESDAY;
    assert_eq!(available_blocks(&weekly, date(y, m, d), &[]), vec![2]);
}

/// A platform-native Sunday must resolve to the "sunday" key, not wrap
/// into Monday's row.
#[test]
fn sunday_resolves_to_sunday_key() {
    let (y, m, d) = SUNDAY;
    let sunday = date(y, m, d);
    assert_eq!(sunday.weekday(), Weekday::Sunday);
    assert_eq!(day_key(sunday.weekday()), "sunday");

    let mut weekly = WeeklyAvailability::blank();
    weekly.sunday = day_with_enabled(&[6]);
    weekly.monday = day_with_enabled(&[1]);
    assert_eq!(available_blocks(&weekly, sunday, &[]), vec![6]);
}

#[test]
fn monday_first_day_keys() {
    assert_eq!(day_key(Weekday::Monday), "monday");
    assert_eq!(day_key(Weekday::Wednesday), "wednesday");
    assert_eq!(day_key(Weekday::Saturday), "saturday");
}

#[test]
fn day_keys_round_trip() {
    for weekday in [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ] {
        assert_eq!(weekday_from_key(day_key(weekday)), Some(weekday));
    }
    assert_eq!(weekday_from_key("lunes"), None);
}

#[test]
fn block_hours_share_one_convention() {
    assert_eq!(block_start_hour(1), 8);
    assert_eq!(block_end_hour(1), 9);
    assert_eq!(block_start_hour(12), 19);
    assert_eq!(block_end_hour(12), 20);
    assert_eq!(block_label(1), "08:00 - 09:00");
    assert_eq!(block_label(12), "19:00 - 20:00");
}

#[test]
fn week_navigation_lands_on_the_same_week() {
    let (y, m, d) = TUESDAY;
    let base = date(y, m, d);
    assert_eq!(monday_of_week(base), date(2025, 8, 4));
    assert_eq!(date_in_same_week(base, Weekday::Sunday), date(2025, 8, 10));
    assert_eq!(date_in_same_week(base, Weekday::Monday), date(2025, 8, 4));
}

#[test]
fn open_days_lists_only_days_with_an_enabled_block() {
    let mut weekly = grid_with_tuesday(&[4]);
    weekly.sunday = day_with_enabled(&[1, 2]);
    assert_eq!(weekly.open_days(), vec!["tuesday", "sunday"]);
    assert!(WeeklyAvailability::blank().open_days().is_empty());
}

#[test]
fn toggle_flips_and_validates_range() {
    let mut weekly = WeeklyAvailability::blank();
    assert!(weekly.toggle_block(Weekday::Friday, 3).unwrap());
    assert!(!weekly.toggle_block(Weekday::Friday, 3).unwrap());
    assert!(weekly.toggle_block(Weekday::Friday, 0).is_err());
    assert!(weekly.toggle_block(Weekday::Friday, 13).is_err());
}

#[test]
fn toggle_recovers_a_malformed_row() {
    let mut weekly = WeeklyAvailability::blank();
    weekly.friday.truncate(3);
    assert!(weekly.toggle_block(Weekday::Friday, 12).unwrap());
    assert_eq!(weekly.enabled_blocks(Weekday::Friday), vec![12]);
}

#[test]
fn planner_recomputes_on_every_input_change() {
    let mut planner = BookingPlanner::new();
    assert!(planner.open_blocks().is_empty());

    planner.set_weekly(grid_with_tuesday(&[1, 3, 5]));
    assert!(planner.open_blocks().is_empty());

    let (y, m, d) = TUESDAY;
    planner.set_date(date(y, m, d));
    assert_eq!(planner.day_key(), Some("tuesday"));
    assert_eq!(planner.open_blocks(), &[1, 3, 5]);

    planner.set_reserved(vec![ReservedSlot {
        day: "tuesday".to_string(),
        block: 3,
    }]);
    assert_eq!(planner.open_blocks(), &[1, 5]);
}

#[test]
fn planner_ignores_reservations_for_other_days() {
    let mut planner = BookingPlanner::new();
    planner.set_weekly(grid_with_tuesday(&[1, 2]));
    let (y, m, d) = TUESDAY;
    planner.set_date(date(y, m, d));
    planner.set_reserved(vec![ReservedSlot {
        day: "wednesday".to_string(),
        block: 1,
    }]);
    assert_eq!(planner.open_blocks(), &[1, 2]);
}

#[test]
fn planner_drops_a_selection_that_is_no_longer_open() {
    let mut planner = BookingPlanner::new();
    planner.set_weekly(grid_with_tuesday(&[1, 2]));
    let (y, m, d) = TUESDAY;
    planner.set_date(date(y, m, d));
    assert!(planner.select_block(2));
    assert_eq!(planner.selected_block(), Some(2));

    planner.set_reserved(vec![ReservedSlot {
        day: "tuesday".to_string(),
        block: 2,
    }]);
    assert_eq!(planner.selected_block(), None);
}

#[test]
fn planner_rejects_selecting_a_closed_block() {
    let mut planner = BookingPlanner::new();
    planner.set_weekly(grid_with_tuesday(&[1]));
    let (y, m, d) = TUESDAY;
    planner.set_date(date(y, m, d));
    assert!(!planner.select_block(7));
    assert_eq!(planner.selected_block(), None);
}

#[test]
fn clearing_the_date_clears_the_open_set() {
    let mut planner = BookingPlanner::new();
    planner.set_weekly(grid_with_tuesday(&[1, 2, 3]));
    let (y, m, d) = TUESDAY;
    planner.set_date(date(y, m, d));
    assert!(!planner.open_blocks().is_empty());

    planner.clear_date();
    assert!(planner.open_blocks().is_empty());
    assert_eq!(planner.day_key(), None);
}
