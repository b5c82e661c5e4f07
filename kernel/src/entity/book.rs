mod comment;
mod id;
mod summary;
mod title;

pub use self::{comment::*, id::*, summary::*, title::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    comments: Vec<BookComment>,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, comments: Vec<BookComment>) -> Self {
        Self {
            id,
            title,
            comments,
        }
    }

    pub fn comment_count(&self) -> BookCommentCount {
        BookCommentCount::new(self.comments.len() as i64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn comment_count_follows_comments() {
        let id = BookId::new(uuid::Uuid::new_v4());
        let book = Book::new(id.clone(), BookTitle::new("Dune"), vec![]);
        assert_eq!(book.comment_count(), BookCommentCount::new(0));

        let book = Book::new(
            id,
            BookTitle::new("Dune"),
            vec![BookComment::new("spice"), BookComment::new("worms")],
        );
        assert_eq!(book.comment_count(), BookCommentCount::new(2));
    }
}
