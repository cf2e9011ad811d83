//! Stop-sequence truncation.

/// Cut `text` at the first occurrence of any stop sequence.
///
/// The match with the lowest byte offset wins; on a tie the sequence listed
/// first in `stop` wins. Empty sequences are skipped, otherwise they would
/// match at offset zero and erase the whole text.
pub fn truncate_at_stop<'a>(text: &'a str, stop: &[String]) -> &'a str {
    let mut cut: Option<usize> = None;
    for needle in stop {
        if needle.is_empty() {
            continue;
        }
        if let Some(at) = text.find(needle.as_str()) {
            if cut.is_none_or(|best| at < best) {
                cut = Some(at);
            }
        }
    }
    match cut {
        Some(at) => &text[..at],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn truncates_at_first_occurrence() {
        assert_eq!(
            truncate_at_stop("Hello world", &stops(&["world"])),
            "Hello "
        );
    }

    #[test]
    fn lowest_offset_wins() {
        let text = "alpha beta gamma";
        assert_eq!(
            truncate_at_stop(text, &stops(&["gamma", "beta"])),
            "alpha "
        );
    }

    #[test]
    fn tie_breaks_to_first_listed() {
        // Both needles match at offset 4; the longer one is listed first and
        // must win even though the result prefix is identical here.
        let text = "out\nObservation: done";
        let cut = truncate_at_stop(text, &stops(&["Observation:", "Obs"]));
        assert_eq!(cut, "out\n");
    }

    #[test]
    fn no_match_returns_input_unchanged() {
        assert_eq!(truncate_at_stop("Hello", &stops(&["###"])), "Hello");
    }

    #[test]
    fn empty_stop_list_is_a_no_op() {
        assert_eq!(truncate_at_stop("Hello", &[]), "Hello");
    }

    #[test]
    fn empty_needles_are_ignored() {
        assert_eq!(truncate_at_stop("Hello", &stops(&["", "l"])), "He");
    }

    #[test]
    fn match_at_start_yields_empty_string() {
        assert_eq!(truncate_at_stop("Hello", &stops(&["He"])), "");
    }
}
