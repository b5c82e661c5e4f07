use destructure::Destructure;
use vodca::References;

use crate::entity::{BookCommentCount, BookId, BookTitle};

/// List projection of a [`Book`](crate::entity::Book); the count is computed by the store.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookSummary {
    id: BookId,
    title: BookTitle,
    comment_count: BookCommentCount,
}

impl BookSummary {
    pub fn new(id: BookId, title: BookTitle, comment_count: BookCommentCount) -> Self {
        Self {
            id,
            title,
            comment_count,
        }
    }
}
