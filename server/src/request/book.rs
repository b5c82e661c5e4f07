use crate::controller::Intake;
use application::transfer::{AddCommentDto, CreateBookDto, DeleteBookDto, GetBookDto};
use serde::Deserialize;

// Fields stay optional so a missing value reaches the service as empty and
// is reported there with the contract message instead of a deserialize error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddCommentRequest {
    comment: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title.unwrap_or_default(),
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<(String, AddCommentRequest)> for BookTransformer {
    type To = AddCommentDto;
    fn emit(&self, input: (String, AddCommentRequest)) -> Self::To {
        let (id, input) = input;
        AddCommentDto {
            id,
            comment: input.comment.unwrap_or_default(),
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
