//! Conversion between displayed lap times (`M:SS.mmm`) and millisecond durations.

/// Millisecond value standing in for "no recorded time".
///
/// Larger than any real duration so missing times sort after every real
/// time in ascending order.
pub const NO_TIME_MS: i64 = i64::MAX;

/// Text shown wherever a lap time is absent or unparseable.
pub const NO_TIME_TEXT: &str = "--:--.--";

pub struct TimeCodec;

impl TimeCodec {
    /// Parses a lap time string into milliseconds.
    ///
    /// The text is split on `:` and `.` and must yield exactly three parts
    /// (minutes, seconds, fraction). Each part is read as a leading integer,
    /// a non-numeric part counting as `0`. The fraction is right-padded with
    /// `'0'` and cut to three digits, so `"5"` means 500 ms.
    ///
    /// # Returns
    /// The duration in milliseconds, or [`NO_TIME_MS`] for empty text, the
    /// `"--:--.--"` placeholder, or any text that does not split into three parts.
    pub fn parse(text: &str) -> i64 {
        if text.is_empty() || text == NO_TIME_TEXT {
            return NO_TIME_MS;
        }

        let parts: Vec<&str> = text.split([':', '.']).collect();
        let [minutes, seconds, fraction] = parts.as_slice() else {
            return NO_TIME_MS;
        };

        let fraction: String = fraction.chars().chain(std::iter::repeat('0')).take(3).collect();

        let minutes = leading_int(minutes);
        let seconds = leading_int(seconds);
        let millis = leading_int(&fraction);

        minutes
            .saturating_mul(60_000)
            .saturating_add(seconds.saturating_mul(1_000))
            .saturating_add(millis)
            .min(NO_TIME_MS - 1)
    }

    /// Same as [`TimeCodec::parse`] for an optional field value.
    pub fn parse_opt(text: Option<&str>) -> i64 {
        text.map_or(NO_TIME_MS, Self::parse)
    }

    /// Formats milliseconds as `M:SS.mmm`.
    ///
    /// [`NO_TIME_MS`] and negative durations map back to `"--:--.--"`.
    /// Zero is a real duration and formats as `0:00.000`.
    pub fn format(ms: i64) -> String {
        if ms == NO_TIME_MS || ms < 0 {
            return NO_TIME_TEXT.to_string();
        }

        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{}:{:02}.{:03}", minutes, seconds, millis)
    }

    pub fn is_real(ms: i64) -> bool {
        ms != NO_TIME_MS
    }
}

/// Reads an optionally signed run of leading ASCII digits, ignoring leading
/// whitespace. Anything unreadable is `0`.
fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -value } else { value }
}
