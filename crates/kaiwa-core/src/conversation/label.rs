//! Display label derivation for conversation metadata.

use chrono::{DateTime, Utc};

/// Maximum length of a title derived from the first user message.
pub const TITLE_LIMIT: usize = 32;

/// Maximum length of a sidebar preview derived from the latest message.
pub const PREVIEW_LIMIT: usize = 60;

/// Truncates `text` to `limit` characters, appending `...` when it was cut.
///
/// Counts characters rather than bytes so multi-byte content is never split
/// inside a code point.
pub fn truncate_label(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Renders a relative freshness label for a timestamp.
///
/// Labels are deliberately coarse: "Just now" under a minute, then calendar
/// day granularity ("Today", "Yesterday", "N days ago"). Timestamps in the
/// future (clock skew) render as "Just now".
pub fn freshness_label(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(updated_at);
    if elapsed.num_seconds() < 60 {
        return "Just now".to_string();
    }

    let days = now
        .date_naive()
        .signed_duration_since(updated_at.date_naive())
        .num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d => format!("{d} days ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_label("hello", PREVIEW_LIMIT), "hello");
    }

    #[test]
    fn exact_limit_is_untouched() {
        let text = "a".repeat(TITLE_LIMIT);
        assert_eq!(truncate_label(&text, TITLE_LIMIT), text);
    }

    #[test]
    fn long_text_gains_ellipsis() {
        let text = "a".repeat(40);
        let label = truncate_label(&text, TITLE_LIMIT);
        assert_eq!(label.chars().count(), TITLE_LIMIT + 3);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "日本語".repeat(30);
        let label = truncate_label(&text, PREVIEW_LIMIT);
        assert!(label.ends_with("..."));
        assert_eq!(label.chars().count(), PREVIEW_LIMIT + 3);
    }

    #[test]
    fn freshness_labels() {
        let now = Utc::now();
        assert_eq!(freshness_label(now, now), "Just now");
        assert_eq!(freshness_label(now + Duration::hours(2), now), "Just now");

        let earlier_today = now - Duration::minutes(5);
        let label = freshness_label(earlier_today, now);
        // Five minutes back may cross midnight, but never by more than a day.
        assert!(label == "Today" || label == "Yesterday");

        assert_eq!(freshness_label(now - Duration::days(1), now), "Yesterday");
        assert_eq!(freshness_label(now - Duration::days(4), now), "4 days ago");
    }
}
