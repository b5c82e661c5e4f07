use error_stack::{Report, ResultExt};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookComment, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{
    AddCommentDto, BookDto, BookSummaryDto, CreateBookDto, DeleteBookDto, DeletedAllBooksDto,
    DeletedBookDto, GetBookDto,
};

pub const MISSING_TITLE: &str = "missing title";
pub const MISSING_COMMENT: &str = "missing required field comment";

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::parse(&dto.id)?;
        let mut connection = self.database_connection().transact().await?;

        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        book.map(BookDto::from)
            .ok_or_else(|| Report::new(KernelError::NotFound))
            .attach_printable_lazy(|| format!("No book with id {}", dto.id))
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookSummaryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all(&mut connection).await?;

        Ok(books.into_iter().map(BookSummaryDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        if dto.title.is_empty() {
            return Err(Report::new(KernelError::Validation(MISSING_TITLE)));
        }

        let mut connection = self.database_connection().transact().await?;

        let book = Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(dto.title),
            Vec::new(),
        );
        self.book_modifier().create(&mut connection, &book).await?;

        connection.commit().await?;

        tracing::debug!("Created book {:?}", book.id());
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait CommentBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn add_comment(&self, dto: AddCommentDto) -> error_stack::Result<BookDto, KernelError> {
        if dto.comment.is_empty() {
            return Err(Report::new(KernelError::Validation(MISSING_COMMENT)));
        }
        let id = BookId::parse(&dto.id)?;

        let mut connection = self.database_connection().transact().await?;

        self.book_modifier()
            .add_comment(&mut connection, &id, &BookComment::new(dto.comment))
            .await?;
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))
            .attach_printable_lazy(|| format!("Book {} vanished after commenting", dto.id))?;

        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CommentBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<DeletedBookDto, KernelError> {
        let id = BookId::parse(&dto.id)?;

        let mut connection = self.database_connection().transact().await?;

        self.book_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;

        Ok(DeletedBookDto { id: id.into() })
    }

    async fn delete_all_books(&self) -> error_stack::Result<DeletedAllBooksDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let count = self.book_modifier().delete_all(&mut connection).await?;

        connection.commit().await?;

        tracing::info!("Removed {} books from the catalog", count);
        Ok(DeletedAllBooksDto { count })
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
