//! Small parsing and URL helpers for the YouTube adapters.

/// Parse an ISO-8601 time duration of the `PT#H#M#S` family into seconds.
///
/// Anything that does not start with `PT` (including date components) maps
/// to zero, as does garbage between the markers.
#[must_use]
pub(crate) fn parse_iso8601_duration(iso: &str) -> i64 {
    let Some(body) = iso.strip_prefix("PT") else {
        return 0;
    };

    let (mut hours, mut minutes, mut seconds) = (0i64, 0i64, 0i64);
    let mut num = String::new();
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            num.push(ch);
            continue;
        }
        let value = num.parse().unwrap_or(0);
        match ch {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => {}
        }
        num.clear();
    }

    hours * 3600 + minutes * 60 + seconds
}

#[must_use]
pub(crate) fn video_url(video_id: &str) -> String {
    if video_id.is_empty() {
        return String::new();
    }
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[must_use]
pub(crate) fn channel_url(channel_id: &str) -> String {
    if channel_id.is_empty() {
        return String::new();
    }
    format!("https://www.youtube.com/channel/{channel_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_parse_component_wise() {
        assert_eq!(parse_iso8601_duration("PT3M20S"), 200);
        assert_eq!(parse_iso8601_duration("PT1H2M3S"), 3723);
        assert_eq!(parse_iso8601_duration("PT45S"), 45);
        assert_eq!(parse_iso8601_duration("PT2H"), 7200);
    }

    #[test]
    fn non_time_durations_map_to_zero() {
        assert_eq!(parse_iso8601_duration(""), 0);
        assert_eq!(parse_iso8601_duration("P1DT2H"), 0);
        assert_eq!(parse_iso8601_duration("garbage"), 0);
    }

    #[test]
    fn urls_guard_against_empty_ids() {
        assert_eq!(video_url(""), "");
        assert_eq!(video_url("abc"), "https://www.youtube.com/watch?v=abc");
        assert_eq!(channel_url(""), "");
        assert_eq!(
            channel_url("UC123"),
            "https://www.youtube.com/channel/UC123"
        );
    }
}
