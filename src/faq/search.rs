use super::types::FaqEntry;

/// Score assigned when a keyword appears verbatim inside the question; a
/// literal keyword hit outranks most fuzzy scores but can still lose to a
/// near-exact question match.
pub const KEYWORD_SUBSTRING_SCORE: f64 = 0.8;

/// Normalized similarity of two strings in [0, 1], case-insensitive.
///
/// Computes `2 * M / T` where M is the number of characters covered by the
/// matching blocks (longest common block first, then the same search on the
/// pieces left and right of it) and T is the combined length of both
/// strings. Identical strings score 1.0, strings with no characters in
/// common score 0.0, and two empty strings count as identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

/// Finds the longest block of characters common to `a` and `b`, preferring
/// the earliest start in `a` and then in `b` on equal lengths. Returns
/// `(start_a, start_b, len)` with `len == 0` when nothing matches.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // row[j + 1] holds the length of the common suffix ending at (i, j).
    let mut row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { prev_diagonal + 1 } else { 0 };
            if row[j + 1] > best.2 {
                best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
            }
            prev_diagonal = above;
        }
    }
    best
}

/// Scores one FAQ entry against a free-text question: the question-to-question
/// similarity, raised by the best question-to-keyword similarity, with a
/// floor of [`KEYWORD_SUBSTRING_SCORE`] when a keyword occurs literally in
/// the question.
pub fn score_entry(question: &str, entry: &FaqEntry) -> f64 {
    let mut score = similarity(question, &entry.question);

    for keyword in &entry.keywords {
        let keyword_score = similarity(question, keyword);
        if keyword_score > score {
            score = keyword_score;
        }
    }

    let question_lower = question.to_lowercase();
    for keyword in &entry.keywords {
        if question_lower.contains(&keyword.to_lowercase()) {
            score = score.max(KEYWORD_SUBSTRING_SCORE);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical_strings() {
        assert!((similarity("school hours", "school hours") - 1.0).abs() < 1e-9);
        assert!((similarity("", "") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_is_case_insensitive() {
        assert!((similarity("SCHOOL Hours", "school hours") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_disjoint_strings() {
        assert!((similarity("abc", "xyz") - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_empty_against_non_empty() {
        assert!((similarity("", "anything") - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_known_ratio() {
        // Blocks: "bcd" of 8 total characters -> 2 * 3 / 8.
        assert!((similarity("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            ("what time does school start", "what are school hours?"),
            ("abcd", "bcde"),
            ("hello", "help"),
            ("", "nonempty"),
        ];
        for (a, b) in pairs {
            assert!(
                (similarity(a, b) - similarity(b, a)).abs() < 1e-9,
                "similarity not symmetric for {:?} / {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_similarity_school_hours_boundary() {
        // Matched blocks: " school " (8) + "what " (5) + "e" + "s" of
        // 27 + 22 = 49 total characters -> 30 / 49, just above 0.6.
        let score = similarity("what time does school start", "What are school hours?");
        assert!((score - 30.0 / 49.0).abs() < 1e-9);
        assert!(score >= 0.6);
    }

    fn entry(question: &str, answer: &str, keywords: &[&str]) -> FaqEntry {
        FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_score_entry_keyword_similarity_can_raise_score() {
        let e = entry("What are school hours?", "8am-3pm", &["hours"]);
        let with_keywords = score_entry("hours", &e);
        let without_keywords = similarity("hours", "What are school hours?");
        assert!(with_keywords > without_keywords);
        // "hours" matches both the keyword exactly and the substring rule.
        assert!((with_keywords - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_entry_keyword_substring_floor() {
        let e = entry("What are school hours?", "8am-3pm", &["schedule"]);
        let score = score_entry("I need the schedule please", &e);
        assert!(score >= KEYWORD_SUBSTRING_SCORE);
    }

    #[test]
    fn test_score_entry_substring_check_ignores_case() {
        let e = entry("What are school hours?", "8am-3pm", &["Schedule"]);
        let score = score_entry("send me the SCHEDULE", &e);
        assert!(score >= KEYWORD_SUBSTRING_SCORE);
    }

    #[test]
    fn test_score_entry_without_keywords_is_plain_similarity() {
        let e = entry("What are school hours?", "8am-3pm", &[]);
        let question = "what are school hours?";
        assert!((score_entry(question, &e) - similarity(question, &e.question)).abs() < 1e-9);
    }
}
