//! The actions that are confirmed in the shared modal

use time::UtcOffset;

use crate::{
    dates::format_date,
    urls::{
        isbn_action_url, BORROW_BOOK_ENDPOINT, DELETE_BOOK_ENDPOINT, LOGOUT_ENDPOINT,
        RETURN_BOOK_ENDPOINT,
    },
    Book, BorrowRecord,
};

/// Loans run for this long; used to preview the due date before borrowing
pub const LOAN_PERIOD: time::Duration = time::Duration::days(14);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Borrow(Book),
    Return(BorrowRecord),
    /// Staff only
    Delete(Book),
    Logout,
}
impl ModalAction {
    /// Where the confirmed action is posted to
    pub fn endpoint(&self) -> String {
        match self {
            Self::Borrow(book) => isbn_action_url(BORROW_BOOK_ENDPOINT, &book.isbn),
            Self::Return(record) => isbn_action_url(RETURN_BOOK_ENDPOINT, &record.book_isbn),
            Self::Delete(book) => isbn_action_url(DELETE_BOOK_ENDPOINT, &book.isbn),
            Self::Logout => LOGOUT_ENDPOINT.to_string(),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Borrow(_) => "Borrow this book?",
            Self::Return(_) => "Return this book?",
            Self::Delete(_) => "Delete this book?",
            Self::Logout => "Log out?",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::Borrow(_) => "Borrow",
            Self::Return(_) => "Return",
            Self::Delete(_) => "Delete",
            Self::Logout => "Log out",
        }
    }

    /// The book shown in the preview, if the action is about one
    pub fn book(&self) -> Option<Book> {
        match self {
            Self::Borrow(book) | Self::Delete(book) => Some(book.clone()),
            Self::Return(record) => Some(record.book()),
            Self::Logout => None,
        }
    }

    /// Labelled dates shown in the preview
    ///
    /// Borrowing previews the due date a loan started at `now` would get.
    pub fn preview_dates(
        &self,
        now: time::OffsetDateTime,
        offset: UtcOffset,
    ) -> Vec<(&'static str, String)> {
        match self {
            Self::Borrow(_) => vec![
                ("Borrowed", format_date(now, offset)),
                ("Due", format_date(now + LOAN_PERIOD, offset)),
            ],
            Self::Return(record) => vec![
                ("Borrowed", format_date(record.borrow_date, offset)),
                ("Due", format_date(record.due_date, offset)),
            ],
            Self::Delete(_) | Self::Logout => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;
    use crate::BookSummary;

    fn dune() -> Book {
        BookSummary {
            isbn: "9780441013593".to_string(),
            title: "Dune".to_string(),
            cover: String::new(),
        }
        .into()
    }

    #[test]
    fn endpoints() {
        assert_eq!(
            ModalAction::Borrow(dune()).endpoint(),
            "/api/borrow-book/?isbn=9780441013593"
        );
        assert_eq!(
            ModalAction::Delete(dune()).endpoint(),
            "/api/admin/delete-book/?isbn=9780441013593"
        );
        assert_eq!(ModalAction::Logout.endpoint(), "/api/logout/");
        assert_eq!(ModalAction::Logout.book(), None);
    }

    #[test]
    fn borrow_preview_shows_the_loan_period() {
        let now = datetime!(2025-06-07 17:24 UTC);
        let dates = ModalAction::Borrow(dune()).preview_dates(now, UtcOffset::UTC);
        assert_eq!(dates[1], ("Due", "Saturday 21 June 2025 5:24 p.m.".to_string()));
    }
}
