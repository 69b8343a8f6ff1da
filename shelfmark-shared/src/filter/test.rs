use super::*;

fn book_default() -> SearchFilter {
    SearchFilter::new()
        .with_single("sort", "popularity")
        .with_multi("genres", Vec::<String>::new())
}

#[test]
fn sets_compare_as_sets() {
    let a = book_default().with_multi("genres", ["Fantasy", "Poetry"]);
    let b = book_default().with_multi("genres", ["Poetry", "Fantasy"]);
    assert!(a.is_default(&b));
    assert!(!a.is_default(&book_default()));
}

#[test]
fn toggling_back_returns_to_default() {
    let default = book_default();
    let mut filter = default.clone();
    filter.toggle("genres", "Fantasy");
    assert!(!filter.is_default(&default));
    filter.toggle("genres", "Fantasy");
    assert!(filter.is_default(&default));

    filter.toggle("sort", "latest");
    assert_eq!(filter.get("sort"), Some(&FilterValue::Single("latest".into())));
    assert!(!filter.is_default(&default));
}

#[test]
fn missing_key_counts_as_empty() {
    let partial = SearchFilter::new().with_single("sort", "popularity");
    assert!(partial.is_default(&book_default()));
    assert!(book_default().is_default(&partial));
}

#[test]
fn query_string_contains_text_and_filters() {
    let filter = book_default().with_multi("genres", ["Science Fiction", "Drama"]);
    assert_eq!(
        build_query_string("  dune ", &filter),
        "q=dune&genres=Drama%2CScience%20Fiction&sort=popularity"
    );
    assert_eq!(
        build_query_string("", &book_default()),
        "q=&genres=&sort=popularity"
    );
}

#[test]
fn filter_survives_the_url() {
    let default = book_default();
    let mut filter = default.clone();
    filter.toggle("genres", "Science Fiction");
    filter.toggle("genres", "Drama & Romance");
    filter.set_single("sort", "oldest");

    let url = build_query_string("the hobbit", &filter);
    let restored = SearchFilter::from_query_string(&format!("?{url}"), &default);
    assert_eq!(restored, filter);
    assert_eq!(query_text_from(&url), "the hobbit");
}

#[test]
fn unknown_and_missing_keys() {
    let default = book_default();
    let restored = SearchFilter::from_query_string("?sort=latest&page=3", &default);
    assert_eq!(restored.get("sort"), Some(&FilterValue::Single("latest".into())));
    assert_eq!(restored.get("genres"), default.get("genres"));
    assert_eq!(restored.get("page"), None);
    assert_eq!(SearchFilter::from_query_string("", &default), default);
}

#[test]
fn plus_is_a_space() {
    assert_eq!(
        parse_query_string("q=lord+of+the&x"),
        vec![
            ("q".to_string(), "lord of the".to_string()),
            ("x".to_string(), String::new())
        ]
    );
}
