use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookComment(String);

impl BookComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self(comment.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookCommentCount(i64);

impl BookCommentCount {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into())
    }
}
