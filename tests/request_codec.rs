use hacker_stories::request::{RequestError, SearchDescriptor};
use reqwest::Url;

fn api_base() -> Url {
    Url::parse("https://hn.algolia.com/api/v1").unwrap()
}

#[test]
fn test_term_round_trips_for_every_page() {
    for term in ["react", "  padded  ", "c++ & rust", "a=b?c", "日本語", "100%"] {
        for page in [0, 1, 7, u32::MAX] {
            let descriptor = SearchDescriptor::encode(term, page).expect("term is valid");
            assert_eq!(descriptor.decode(), term);
            assert_eq!(descriptor.page(), page);
        }
    }
}

#[test]
fn test_blank_terms_are_rejected() {
    assert_eq!(
        SearchDescriptor::encode("", 0),
        Err(RequestError::InvalidInput)
    );
    assert_eq!(
        SearchDescriptor::encode(" \t\n", 3),
        Err(RequestError::InvalidInput)
    );
}

#[test]
fn test_equivalence_ignores_page() {
    let first = SearchDescriptor::encode("rust", 0).unwrap();
    let later = SearchDescriptor::encode("rust", 4).unwrap();
    let other = SearchDescriptor::encode("Rust", 0).unwrap();

    assert!(first.is_equivalent(&later));
    assert_ne!(first, later);
    assert!(!first.is_equivalent(&other));
}

#[test]
fn test_url_carries_term_page_and_page_size() {
    let descriptor = SearchDescriptor::encode("react", 2).unwrap();
    let url = descriptor.to_url(&api_base(), 16);

    assert_eq!(
        url.as_str(),
        "https://hn.algolia.com/api/v1/search?query=react&page=2&hitsPerPage=16"
    );
}

#[test]
fn test_url_appends_to_base_with_trailing_slash() {
    let base = Url::parse("http://127.0.0.1:8080/api/v1/").unwrap();
    let url = SearchDescriptor::encode("x", 0).unwrap().to_url(&base, 5);

    assert_eq!(url.path(), "/api/v1/search");
}

#[test]
fn test_url_round_trips_reserved_characters() {
    for term in ["c++ & rust", "a=b?c&page=9", "#hash", "日本語", " spaced "] {
        let descriptor = SearchDescriptor::encode(term, 3).unwrap();
        let url = descriptor.to_url(&api_base(), 16);

        let recovered = SearchDescriptor::from_url(&url).expect("url was built by to_url");
        assert_eq!(recovered, descriptor);
        assert_eq!(recovered.decode(), term);
    }
}

#[test]
fn test_from_url_rejects_foreign_urls() {
    let url = Url::parse("https://hn.algolia.com/api/v1/items/1").unwrap();
    assert!(matches!(
        SearchDescriptor::from_url(&url),
        Err(RequestError::MalformedUrl(_))
    ));

    let url = Url::parse("https://hn.algolia.com/api/v1/search?query=&page=0").unwrap();
    assert_eq!(
        SearchDescriptor::from_url(&url),
        Err(RequestError::InvalidInput)
    );
}
