use time::macros::datetime;

use super::*;

#[test]
fn featured_payload() {
    let sections: Vec<FeaturedSection> = serde_json::from_str(
        r#"[
            {"title": "Popular", "books": [{"title": "Dune", "ISBN": "9780441013593", "cover": "book_covers/dune.png"}]},
            {"title": "Staff picks", "books": []}
        ]"#,
    )
    .expect("valid test json");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].books[0].isbn, "9780441013593");
    assert!(sections[1].books.is_empty());
}

#[test]
fn records_payload() {
    let records: Vec<BorrowRecord> = serde_json::from_str(
        r#"[{
            "id": 12,
            "borrow_date": "2025-06-07T05:24:00.123Z",
            "due_date": "2025-06-21T05:24:00.123Z",
            "return_date": null,
            "book__id": 3,
            "book__ISBN": "9780441013593",
            "book__title": "Dune",
            "book__author": "Frank Herbert",
            "book__cover": "book_covers/dune.png"
        }, {
            "id": 9,
            "borrow_date": "2025-05-01T10:00:00",
            "due_date": "2025-05-15T10:00:00",
            "return_date": "2025-05-03T10:00:00+12:00",
            "book__ISBN": "9780261103573",
            "book__title": "The Hobbit"
        }]"#,
    )
    .expect("valid test json");
    assert!(records[0].is_active());
    assert_eq!(records[0].due_date, datetime!(2025-06-21 05:24:00.123 UTC));
    assert!(!records[1].is_active());
    // naive timestamps are utc
    assert_eq!(records[1].borrow_date, datetime!(2025-05-01 10:00 UTC));
    assert_eq!(records[1].book().title, "The Hobbit");
}

#[test]
fn search_payload() {
    let res: SearchBooksResponse = serde_json::from_str(
        r#"{"books": [{
            "id": 1, "title": "Dune", "author": "Frank Herbert", "ISBN": "9780441013593",
            "date_published": "1965-08-01", "cover": "book_covers/dune.png",
            "description": "Spice.", "available_quantity": 0, "total_quantity": 2, "borrow_count": 1520,
            "genre_id": 3
        }], "is_staff": true}"#,
    )
    .expect("valid test json");
    assert!(res.is_staff);
    assert!(!res.books[0].is_available());
    assert_eq!(res.books[0].borrow_count, Some(1520));
}

#[test]
fn bad_timestamps_are_rejected() {
    assert!(timestamp::parse_timestamp("yesterday").is_err());
    assert!(serde_json::from_str::<BorrowRecord>(
        r#"{"id": 1, "book__ISBN": "1", "book__title": "t", "borrow_date": "x", "due_date": "y"}"#
    )
    .is_err());
}
