/// Utility helpers for RustCast

/// Create a simple slug from a string suitable for URLs.
/// Lowercases the string, converts groups of non-alphanumeric chars to single hyphens,
/// and trims leading/trailing hyphens.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else {
            if !prev_dash {
                out.push('-');
                prev_dash = true;
            }
        }
    }

    out.trim_matches('-').to_string()
}

/// Format a position in seconds as `MM:SS`, or `H:MM:SS` past the hour.
/// Non-finite and negative inputs render as `00:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Episode #12 -- The Return  "), "episode-12-the-return");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn timestamps_render_minutes_and_hours() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(100.0), "01:40");
        assert_eq!(format_timestamp(59.9), "00:59");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
    }

    #[test]
    fn timestamps_tolerate_unready_media_values() {
        assert_eq!(format_timestamp(f64::NAN), "00:00");
        assert_eq!(format_timestamp(f64::INFINITY), "00:00");
        assert_eq!(format_timestamp(-4.0), "00:00");
    }
}
