use chrono::{DateTime, Utc};

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;

// Formats each x1000 step with one truncated decimal, dropping a trailing ".0"
pub fn format_count(count: u64) -> String {
    let (unit, suffix) = match count {
        c if c < THOUSAND => return c.to_string(),
        c if c < MILLION => (THOUSAND, "K"),
        c if c < BILLION => (MILLION, "M"),
        _ => (BILLION, "B"),
    };

    let tenths = count / (unit / 10);
    let whole = tenths / 10;
    let fraction = tenths % 10;

    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}

pub fn format_relative_time(iso_date: &str) -> String {
    format_relative_time_at(iso_date, Utc::now())
}

/// Human phrase for `iso_date` relative to `now`, e.g. "3 days ago".
///
/// Thresholds follow the usual "from now" convention: anything under 45
/// seconds is "a few seconds", under 90 seconds is "a minute", and so on up to
/// years. Timestamps in the future read "in ...".
pub fn format_relative_time_at(iso_date: &str, now: DateTime<Utc>) -> String {
    let Ok(datetime) = iso_date.parse::<DateTime<Utc>>() else {
        return String::from("Invalid date");
    };

    let delta = now.signed_duration_since(datetime);
    let seconds = delta.num_seconds().abs();
    let phrase = relative_phrase(seconds);

    if delta.num_seconds() < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(seconds: i64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as i64;
    let hours = (seconds as f64 / 3_600.0).round() as i64;
    let days = (seconds as f64 / 86_400.0).round() as i64;
    let months = (seconds as f64 / (86_400.0 * 30.4375)).round() as i64;
    let years = (seconds as f64 / (86_400.0 * 365.25)).round() as i64;

    match seconds {
        s if s < 45 => "a few seconds".to_string(),
        s if s < 90 => "a minute".to_string(),
        s if s < 45 * 60 => format!("{minutes} minutes"),
        s if s < 90 * 60 => "an hour".to_string(),
        s if s < 22 * 3_600 => format!("{hours} hours"),
        s if s < 36 * 3_600 => "a day".to_string(),
        s if s < 26 * 86_400 => format!("{days} days"),
        s if s < 45 * 86_400 => "a month".to_string(),
        s if s < 320 * 86_400 => format!("{} months", months.max(2)),
        s if s < 548 * 86_400 => "a year".to_string(),
        _ => format!("{} years", years.max(2)),
    }
}

pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        (fixed_now() - duration).to_rfc3339()
    }

    #[test]
    fn counts_below_a_thousand_are_literal() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn counts_use_suffix_tiers_and_drop_zero_decimal() {
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(1_000_000), "1M");
        assert_eq!(format_count(2_000_000), "2M");
        assert_eq!(format_count(4_560_000), "4.5M");
        assert_eq!(format_count(1_000_000_000), "1B");
        assert_eq!(format_count(12_345_678_901), "12.3B");
    }

    #[test]
    fn counts_never_round_up_into_the_next_tier_label() {
        assert_eq!(format_count(999_999), "999.9K");
        assert_eq!(format_count(999_999_999), "999.9M");
    }

    #[test]
    fn relative_time_covers_each_threshold() {
        assert_eq!(format_relative_time_at(&ago(Duration::seconds(10)), fixed_now()), "a few seconds ago");
        assert_eq!(format_relative_time_at(&ago(Duration::seconds(60)), fixed_now()), "a minute ago");
        assert_eq!(format_relative_time_at(&ago(Duration::minutes(5)), fixed_now()), "5 minutes ago");
        assert_eq!(format_relative_time_at(&ago(Duration::minutes(60)), fixed_now()), "an hour ago");
        assert_eq!(format_relative_time_at(&ago(Duration::hours(5)), fixed_now()), "5 hours ago");
        assert_eq!(format_relative_time_at(&ago(Duration::hours(30)), fixed_now()), "a day ago");
        assert_eq!(format_relative_time_at(&ago(Duration::days(3)), fixed_now()), "3 days ago");
        assert_eq!(format_relative_time_at(&ago(Duration::days(30)), fixed_now()), "a month ago");
        assert_eq!(format_relative_time_at(&ago(Duration::days(100)), fixed_now()), "3 months ago");
        assert_eq!(format_relative_time_at(&ago(Duration::days(400)), fixed_now()), "a year ago");
        assert_eq!(format_relative_time_at(&ago(Duration::days(365 * 5)), fixed_now()), "5 years ago");
    }

    #[test]
    fn relative_time_handles_future_and_invalid_input() {
        let future = (fixed_now() + Duration::days(2)).to_rfc3339();
        assert_eq!(format_relative_time_at(&future, fixed_now()), "in 2 days");
        assert_eq!(format_relative_time_at("", fixed_now()), "Invalid date");
        assert_eq!(format_relative_time_at("yesterday", fixed_now()), "Invalid date");
    }

    #[test]
    fn relative_time_accepts_platform_timestamps() {
        assert_eq!(
            format_relative_time_at("2024-06-12T12:00:00Z", fixed_now()),
            "3 days ago"
        );
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("", 3), "");
    }
}
