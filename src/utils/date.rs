use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d.with_day(1).unwrap_or(d);
    let next_first = if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    };
    let last = next_first.and_then(|n| n.pred_opt()).unwrap_or(d);
    (first, last)
}

pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    month_bounds(today())
}

/// Resolve a period string into an inclusive `(from, to)` date range.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
pub fn bounds_from_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if p.len() == 10
        && let Some(d) = parse_date(p)
    {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Some(d) = parse_date(&format!("{p}-01"))
    {
        return Ok(month_bounds(d));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Range `start:end`, both sides using the same granularity.
pub fn bounds_from_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if start.trim().len() != end.trim().len() {
        return Err(format!("Mismatched range: {}:{}", start, end));
    }

    let (from, _) = bounds_from_period(start)?;
    let (_, to) = bounds_from_period(end)?;

    if to < from {
        return Err(format!("Range end before start: {}:{}", start, end));
    }
    Ok((from, to))
}

/// Resolve the `--period` / `--range` CLI value.
///
/// `None` means "current month"; `Some("all")` means no bounds.
pub fn resolve_period(period: Option<&str>) -> Result<Option<(NaiveDate, NaiveDate)>, String> {
    match period {
        None => Ok(Some(current_month_bounds())),
        Some("all") => Ok(None),
        Some(p) => {
            if let Some((start, end)) = p.split_once(':') {
                bounds_from_range(start, end).map(Some)
            } else {
                bounds_from_period(p).map(Some)
            }
        }
    }
}
