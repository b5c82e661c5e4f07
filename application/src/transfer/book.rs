use uuid::Uuid;

use kernel::prelude::entity::{Book, BookSummary, DestructBook, DestructBookSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub comments: Vec<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            comments,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            comments: comments.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub comment_count: i64,
}

impl From<BookSummary> for BookSummaryDto {
    fn from(value: BookSummary) -> Self {
        let DestructBookSummary {
            id,
            title,
            comment_count,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            comment_count: comment_count.into(),
        }
    }
}

// Ids arrive exactly as the client sent them; services decide whether they name a book.
pub struct GetBookDto {
    pub id: String,
}

pub struct CreateBookDto {
    pub title: String,
}

pub struct AddCommentDto {
    pub id: String,
    pub comment: String,
}

pub struct DeleteBookDto {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedBookDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedAllBooksDto {
    pub count: u64,
}
