//! Remote directory templating for the daily and yearly trees.

use chrono::{Datelike, NaiveDate};

use crate::config::FeedLayout;

/// `<front_root>/<year>/<month>/<day:02>`. The month is not zero padded.
pub fn daily_manifest_dir(layout: &FeedLayout, date: NaiveDate) -> String {
    format!(
        "{}/{}/{}/{:02}",
        layout.front_root.trim_end_matches('/'),
        date.year(),
        date.month(),
        date.day()
    )
}

/// `<back_root>/<year>`.
pub fn year_dir(layout: &FeedLayout, date: NaiveDate) -> String {
    format!("{}/{}", layout.back_root.trim_end_matches('/'), date.year())
}
