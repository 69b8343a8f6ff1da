//! URLs shared between front- and backend
//!
//! for consistency, all endpoint urls in this module always start with a /

/// Base url of all json endpoints of the catalog backend
pub const API_BASE_URL: &str = "/api";
/// Base url of uploaded files (book covers)
pub const MEDIA_BASE_URL: &str = "/media";
/// Base url under which the auth forms are posted
///
/// The server forwards these to the page urls of the backend.
pub const AUTH_BASE_URL: &str = "/auth";

pub const FEATURED_DATA_ENDPOINT: &str = "/api/get-featured-data/";
pub const RECORDS_DATA_ENDPOINT: &str = "/api/get-records-data/";
pub const SEARCH_BOOKS_ENDPOINT: &str = "/api/search-books/";
pub const SEARCH_RECORDS_ENDPOINT: &str = "/api/search-records/";
pub const BORROW_BOOK_ENDPOINT: &str = "/api/borrow-book/";
pub const RETURN_BOOK_ENDPOINT: &str = "/api/return-book/";
pub const DELETE_BOOK_ENDPOINT: &str = "/api/admin/delete-book/";
pub const LOGOUT_ENDPOINT: &str = "/api/logout/";
pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const REGISTER_ENDPOINT: &str = "/auth/register/";

/// Page urls keep the trailing slash the backend links them with
pub const LIBRARY_PAGE: &str = "/library/";
pub const YOUR_BORROWS_PAGE: &str = "/your-borrows/";
pub const LOGIN_PAGE: &str = "/login/";
pub const REGISTER_PAGE: &str = "/register/";

/// Where a book cover lives
pub fn media_url(cover: &str) -> String {
    format!("{MEDIA_BASE_URL}/{}", cover.trim_start_matches('/'))
}

/// The detail page of a book
pub fn book_detail_url(isbn: &str) -> String {
    format!("/library/book/{}/", urlencoding::encode(isbn))
}

/// The page of a genre
pub fn genre_url(name: &str) -> String {
    format!("/library/genre/{}/", urlencoding::encode(name))
}

/// Featured sections of a page (`home`, `library` or `genre`)
pub fn featured_data_url(page: &str, genre: Option<&str>) -> String {
    match genre {
        Some(g) => format!(
            "{FEATURED_DATA_ENDPOINT}?page={}&genre={}",
            urlencoding::encode(page),
            urlencoding::encode(g)
        ),
        None => format!("{FEATURED_DATA_ENDPOINT}?page={}", urlencoding::encode(page)),
    }
}

pub fn records_data_url(user_id: Option<i64>) -> String {
    match user_id {
        Some(id) => format!("{RECORDS_DATA_ENDPOINT}?user_id={id}"),
        None => RECORDS_DATA_ENDPOINT.to_string(),
    }
}

/// A search endpoint with an already built query string
pub fn search_url(endpoint: &str, params: &str) -> String {
    format!("{endpoint}?{params}")
}

/// An action endpoint that takes the book as `?isbn=`
pub fn isbn_action_url(endpoint: &str, isbn: &str) -> String {
    format!("{endpoint}?isbn={}", urlencoding::encode(isbn))
}

/// The id of the row of a rendered borrow record
pub fn record_element_id(record_id: i64) -> String {
    format!("record-{record_id}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resource_urls() {
        assert_eq!(media_url("book_covers/a.png"), "/media/book_covers/a.png");
        assert_eq!(book_detail_url("9780261103573"), "/library/book/9780261103573/");
        assert_eq!(genre_url("Science Fiction"), "/library/genre/Science%20Fiction/");
    }

    #[test]
    fn page_urls_end_with_a_slash() {
        for page in [LIBRARY_PAGE, YOUR_BORROWS_PAGE, LOGIN_PAGE, REGISTER_PAGE] {
            assert!(page.starts_with('/') && page.ends_with('/'), "{page}");
        }
    }

    #[test]
    fn endpoint_urls() {
        assert_eq!(
            featured_data_url("genre", Some("Poetry")),
            "/api/get-featured-data/?page=genre&genre=Poetry"
        );
        assert_eq!(featured_data_url("home", None), "/api/get-featured-data/?page=home");
        assert_eq!(
            isbn_action_url(BORROW_BOOK_ENDPOINT, "9780261103573"),
            "/api/borrow-book/?isbn=9780261103573"
        );
        assert_eq!(records_data_url(Some(4)), "/api/get-records-data/?user_id=4");
    }
}
