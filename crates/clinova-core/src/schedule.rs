//! Weekly availability vocabulary and the bookable-slot resolver.
//!
//! A therapist's recurring availability is a grid of 12 one-hour blocks per
//! weekday, numbered 1–12 and spanning 08:00–20:00 local time. Everything
//! here is pure: resolving the open blocks for a calendar date is a set
//! difference between the template for that date's weekday and the
//! reservations already made for that date.

use std::collections::BTreeSet;

use jiff::Span;
use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const BLOCKS_PER_DAY: usize = 12;
pub const FIRST_BLOCK: u8 = 1;
pub const LAST_BLOCK: u8 = 12;

/// Local start hour of a block. Block 1 opens at 08:00, block 12 at 19:00.
///
/// This is the single hour convention in the client: display labels and
/// stored booking timestamps both derive from it.
pub fn block_start_hour(block: u8) -> i8 {
    7 + block as i8
}

/// Local end hour of a block (exclusive).
pub fn block_end_hour(block: u8) -> i8 {
    8 + block as i8
}

/// Display label for a block, e.g. `"08:00 - 09:00"` for block 1.
pub fn block_label(block: u8) -> String {
    format!(
        "{:02}:00 - {:02}:00",
        block_start_hour(block),
        block_end_hour(block)
    )
}

/// All weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Backend day keys, Monday first.
pub const DAY_KEYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Lowercase backend key for a weekday.
///
/// The week starts on Monday; a date falling on a platform-native Sunday
/// resolves to `"sunday"`, it never wraps into the next row.
pub fn day_key(weekday: Weekday) -> &'static str {
    DAY_KEYS[weekday.to_monday_zero_offset() as usize]
}

/// Parse a backend day key back into a weekday.
pub fn weekday_from_key(key: &str) -> Option<Weekday> {
    match key {
        "monday" => Some(Weekday::Monday),
        "tuesday" => Some(Weekday::Tuesday),
        "wednesday" => Some(Weekday::Wednesday),
        "thursday" => Some(Weekday::Thursday),
        "friday" => Some(Weekday::Friday),
        "saturday" => Some(Weekday::Saturday),
        "sunday" => Some(Weekday::Sunday),
        _ => None,
    }
}

/// The Monday of the week containing `date`. Saturates at the calendar
/// bounds rather than failing.
pub fn monday_of_week(date: Date) -> Date {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    date.checked_sub(Span::new().days(offset)).unwrap_or(date)
}

/// The date in the same week as `base` that falls on `weekday`.
pub fn date_in_same_week(base: Date, weekday: Weekday) -> Date {
    let monday = monday_of_week(base);
    let offset = i64::from(weekday.to_monday_zero_offset());
    monday.checked_add(Span::new().days(offset)).unwrap_or(base)
}

/// One hourly cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BlockState {
    #[serde(rename = "bloque")]
    pub block: u8,
    #[serde(rename = "activado")]
    pub enabled: bool,
}

/// A therapist's recurring weekly availability, independent of any
/// calendar date. Created on first save, toggled afterwards, never deleted.
///
/// Days the backend omits deserialize as empty rows, which the resolver
/// treats as "no blocks available" for that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyAvailability {
    #[serde(default)]
    pub monday: Vec<BlockState>,
    #[serde(default)]
    pub tuesday: Vec<BlockState>,
    #[serde(default)]
    pub wednesday: Vec<BlockState>,
    #[serde(default)]
    pub thursday: Vec<BlockState>,
    #[serde(default)]
    pub friday: Vec<BlockState>,
    #[serde(default)]
    pub saturday: Vec<BlockState>,
    #[serde(default)]
    pub sunday: Vec<BlockState>,
}

impl WeeklyAvailability {
    /// A full grid with every block disabled — the state a therapist sees
    /// before their first save.
    pub fn blank() -> Self {
        Self {
            monday: blank_day(),
            tuesday: blank_day(),
            wednesday: blank_day(),
            thursday: blank_day(),
            friday: blank_day(),
            saturday: blank_day(),
            sunday: blank_day(),
        }
    }

    pub fn day(&self, weekday: Weekday) -> &[BlockState] {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut Vec<BlockState> {
        match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Flip one cell of the grid and return its new enabled state.
    ///
    /// A malformed day row is replaced with a fresh disabled row before the
    /// toggle, so editing recovers from bad server data instead of erroring.
    pub fn toggle_block(&mut self, weekday: Weekday, block: u8) -> Result<bool, CoreError> {
        if !(FIRST_BLOCK..=LAST_BLOCK).contains(&block) {
            return Err(CoreError::BlockOutOfRange(block));
        }
        let day = self.day_mut(weekday);
        if day.len() != BLOCKS_PER_DAY {
            *day = blank_day();
        }
        let cell = &mut day[(block - 1) as usize];
        cell.enabled = !cell.enabled;
        Ok(cell.enabled)
    }

    /// Block numbers enabled for a weekday, ascending. A malformed day row
    /// (wrong length or out-of-range block numbers) yields nothing.
    pub fn enabled_blocks(&self, weekday: Weekday) -> Vec<u8> {
        let day = self.day(weekday);
        if day.len() != BLOCKS_PER_DAY {
            return Vec::new();
        }
        let mut blocks: Vec<u8> = day
            .iter()
            .filter(|cell| cell.enabled)
            .map(|cell| cell.block)
            .filter(|block| (FIRST_BLOCK..=LAST_BLOCK).contains(block))
            .collect();
        blocks.sort_unstable();
        blocks.dedup();
        blocks
    }

    /// Whether any block at all is enabled for `weekday`.
    pub fn has_open_day(&self, weekday: Weekday) -> bool {
        !self.enabled_blocks(weekday).is_empty()
    }

    /// Day keys with at least one enabled block, Monday first. Drives the
    /// day buttons in the booking widget.
    pub fn open_days(&self) -> Vec<&'static str> {
        WEEKDAYS
            .iter()
            .filter(|weekday| self.has_open_day(**weekday))
            .map(|weekday| day_key(*weekday))
            .collect()
    }
}

fn blank_day() -> Vec<BlockState> {
    (FIRST_BLOCK..=LAST_BLOCK)
        .map(|block| BlockState {
            block,
            enabled: false,
        })
        .collect()
}

/// A block already committed to an appointment on a specific date, as
/// returned by the reservation-list endpoint. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReservedSlot {
    #[serde(rename = "dia")]
    pub day: String,
    #[serde(rename = "bloque")]
    pub block: u8,
}

/// Compute the blocks still bookable on `date`: those enabled in the
/// weekly template for that date's weekday and absent from `reserved`.
///
/// Pure and idempotent. Duplicate reservations are collapsed, the result
/// is ascending, and an empty result is valid (fully booked or fully
/// disabled day).
pub fn available_blocks(weekly: &WeeklyAvailability, date: Date, reserved: &[u8]) -> Vec<u8> {
    let reserved: BTreeSet<u8> = reserved.iter().copied().collect();
    weekly
        .enabled_blocks(date.weekday())
        .into_iter()
        .filter(|block| !reserved.contains(block))
        .collect()
}

/// Client-side state behind the booking widget: the therapist's template,
/// the selected date, and the reservations fetched for that date.
///
/// The open set is recomputed whenever any input changes, and a previously
/// selected block that is no longer open is dropped so a stale selection
/// can never be submitted.
#[derive(Debug, Clone, Default)]
pub struct BookingPlanner {
    weekly: Option<WeeklyAvailability>,
    date: Option<Date>,
    reserved: Vec<ReservedSlot>,
    open: Vec<u8>,
    selected: Option<u8>,
}

impl BookingPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weekly(&mut self, weekly: WeeklyAvailability) {
        self.weekly = Some(weekly);
        self.recompute();
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = Some(date);
        self.recompute();
    }

    pub fn clear_date(&mut self) {
        self.date = None;
        self.reserved.clear();
        self.recompute();
    }

    /// Replace the reservation list for the currently selected date.
    pub fn set_reserved(&mut self, reserved: Vec<ReservedSlot>) {
        self.reserved = reserved;
        self.recompute();
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Backend day key for the selected date, if any.
    pub fn day_key(&self) -> Option<&'static str> {
        self.date.map(|date| day_key(date.weekday()))
    }

    pub fn open_blocks(&self) -> &[u8] {
        &self.open
    }

    pub fn selected_block(&self) -> Option<u8> {
        self.selected
    }

    /// Select a block for booking. Returns false (and leaves the selection
    /// untouched) if the block is not currently open.
    pub fn select_block(&mut self, block: u8) -> bool {
        if self.open.contains(&block) {
            self.selected = Some(block);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn recompute(&mut self) {
        self.open = match (&self.weekly, self.date) {
            (Some(weekly), Some(date)) => {
                let key = day_key(date.weekday());
                let reserved: Vec<u8> = self
                    .reserved
                    .iter()
                    .filter(|slot| slot.day == key)
                    .map(|slot| slot.block)
                    .collect();
                available_blocks(weekly, date, &reserved)
            }
            _ => Vec::new(),
        };
        if let Some(block) = self.selected
            && !self.open.contains(&block)
        {
            self.selected = None;
        }
    }
}
