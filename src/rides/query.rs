//! Pure filter and sort transformation producing the displayed ride view.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::rides::ride::{PaymentMethod, RideRecord};

/// Recency ordering for the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    MostRecentFirst,
    OldestFirst,
}

/// Trailing window ending at "now" that a ride's `logged_at` must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Day,
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::Year,
        TimeWindow::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Day => "Last day",
            TimeWindow::Week => "Last week",
            TimeWindow::Month => "Last month",
            TimeWindow::Year => "Last year",
            TimeWindow::All => "All",
        }
    }

    fn duration(&self) -> Option<Duration> {
        match self {
            TimeWindow::Day => Some(Duration::days(1)),
            TimeWindow::Week => Some(Duration::days(7)),
            TimeWindow::Month => Some(Duration::days(30)),
            TimeWindow::Year => Some(Duration::days(365)),
            TimeWindow::All => None,
        }
    }
}

/// Process-wide filter, ordering, and window choices for the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuerySelection {
    pub payment_filter: Option<PaymentMethod>,
    pub sort_order: SortOrder,
    pub time_window: TimeWindow,
}

/// Derives the ordered subset of `records` selected by `selection`.
///
/// Pure and idempotent: no side effects, and identical inputs always produce
/// the same sequence. Ordering is by `id`, which the registry keeps unique,
/// so ties cannot occur.
pub fn visible_rides<'a>(
    records: &'a [RideRecord],
    selection: &QuerySelection,
    now: DateTime<Utc>,
) -> Vec<&'a RideRecord> {
    let cutoff = selection.time_window.duration().map(|window| now - window);
    let mut view: Vec<&RideRecord> = records
        .iter()
        .filter(|ride| {
            selection
                .payment_filter
                .map_or(true, |wanted| ride.payment_method == wanted)
        })
        .filter(|ride| cutoff.map_or(true, |cutoff| ride.logged_at >= cutoff))
        .collect();
    match selection.sort_order {
        SortOrder::MostRecentFirst => view.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::OldestFirst => view.sort_by(|a, b| a.id.cmp(&b.id)),
    }
    view
}
