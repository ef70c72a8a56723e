use hacker_stories::history::{SearchHistory, MAX_HISTORY};
use hacker_stories::request::SearchDescriptor;

fn search(term: &str, page: u32) -> SearchDescriptor {
    SearchDescriptor::encode(term, page).unwrap()
}

fn terms(history: &SearchHistory) -> Vec<&str> {
    history.iter().map(SearchDescriptor::decode).collect()
}

#[test]
fn test_empty_history_has_no_current_entry() {
    let history = SearchHistory::new();

    assert!(history.is_empty());
    assert_eq!(history.current(), None);
    assert!(history.past_searches().is_empty());
}

#[test]
fn test_admit_does_not_mutate_input() {
    let history = SearchHistory::new().admit(search("react", 0));
    let next = history.admit(search("rust", 0));

    assert_eq!(terms(&history), vec!["react"]);
    assert_eq!(terms(&next), vec!["react", "rust"]);
}

#[test]
fn test_history_keeps_most_recent_five_distinct_terms() {
    let mut history = SearchHistory::new();
    for term in ["a", "b", "c", "d", "e", "f", "g"] {
        history = history.admit(search(term, 0));
    }

    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(terms(&history), vec!["c", "d", "e", "f", "g"]);
    assert_eq!(history.current(), Some(&search("g", 0)));
}

#[test]
fn test_equivalent_term_moves_to_front_without_growing() {
    let history = SearchHistory::new()
        .admit(search("a", 0))
        .admit(search("b", 0))
        .admit(search("c", 0));

    let history = history.admit(search("a", 2));

    assert_eq!(history.len(), 3);
    assert_eq!(terms(&history), vec!["b", "c", "a"]);
    assert_eq!(history.current().map(SearchDescriptor::page), Some(2));
}

#[test]
fn test_readmitting_when_full_evicts_nothing() {
    let mut history = SearchHistory::new();
    for term in ["a", "b", "c", "d", "e"] {
        history = history.admit(search(term, 0));
    }

    let history = history.admit(search("b", 1));

    assert_eq!(terms(&history), vec!["a", "c", "d", "e", "b"]);
}

#[test]
fn test_past_searches_skip_current_and_list_newest_first() {
    let single = SearchHistory::new().admit(search("only", 0));
    assert!(single.past_searches().is_empty());

    let history = single
        .admit(search("second", 0))
        .admit(search("third", 1));

    assert_eq!(history.past_searches(), vec!["second", "only"]);
}
