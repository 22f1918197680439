//! Sidebar search over conversation summaries.

use super::model::Conversation;

/// Filters conversations by case-insensitive substring match against title
/// or preview.
///
/// A blank (empty or whitespace-only) query yields every conversation in
/// store order. The returned iterator borrows the input and is recomputed on
/// every call, so callers simply re-run it whenever the query or the store
/// changes; the store itself is never mutated. No matches yields an empty
/// sequence - presenting an empty state is the caller's concern.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    query: &str,
) -> impl Iterator<Item = &'a Conversation> + 'a {
    let term = query.trim().to_lowercase();
    conversations.iter().filter(move |conversation| {
        term.is_empty()
            || conversation.title.to_lowercase().contains(&term)
            || conversation.preview.to_lowercase().contains(&term)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Conversation> {
        let mut interview = Conversation::new("c1");
        interview.title = "Interview Prep".to_string();
        interview.preview = "Let's polish your elevator pitch.".to_string();

        let mut cover = Conversation::new("c2");
        cover.title = "Cover Letter Draft".to_string();
        cover.preview = "This opening paragraph feels confident.".to_string();

        vec![interview, cover]
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let conversations = sample();

        let all: Vec<_> = filter_conversations(&conversations, "").collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "c1");
        assert_eq!(all[1].id, "c2");

        let padded: Vec<_> = filter_conversations(&conversations, "   ").collect();
        assert_eq!(padded.len(), 2);
    }

    #[test]
    fn match_is_case_insensitive() {
        let conversations = sample();

        let hits: Vec<_> = filter_conversations(&conversations, "INTERVIEW").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Interview Prep");
    }

    #[test]
    fn preview_text_also_matches() {
        let conversations = sample();

        let hits: Vec<_> = filter_conversations(&conversations, "opening paragraph").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c2");
    }

    #[test]
    fn no_match_yields_empty() {
        let conversations = sample();

        assert_eq!(filter_conversations(&conversations, "nonexistent").count(), 0);
    }

    #[test]
    fn filter_is_restartable() {
        let conversations = sample();

        assert_eq!(filter_conversations(&conversations, "cover").count(), 1);
        assert_eq!(filter_conversations(&conversations, "cover").count(), 1);
    }
}
