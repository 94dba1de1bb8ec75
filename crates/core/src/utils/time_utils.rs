use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current UTC timestamp without timezone, the form timestamps are stored in.
pub fn now_naive_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            // Only reachable at NaiveDate::MAX
            break;
        }
    }
    days
}
