//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Right-pad using the display width, so icons and accented text line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human label for a stored day type code.
pub fn describe_day_type(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "normal" => "Normal".into(),
        "overtime" => "Overtime".into(),
        other => other.to_string(),
    }
}
