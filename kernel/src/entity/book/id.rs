use error_stack::ResultExt;
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }

    /// An id that cannot be parsed can never name a stored book, so it fails as `NotFound`.
    pub fn parse(raw: &str) -> error_stack::Result<Self, KernelError> {
        Uuid::parse_str(raw)
            .map(Self)
            .change_context_lazy(|| KernelError::NotFound)
            .attach_printable_lazy(|| format!("Malformed book id: {}", raw))
    }
}
