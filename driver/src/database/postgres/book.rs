use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookComment, BookCommentCount, BookId, BookSummary, BookTitle,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<BookSummary>, KernelError> {
        PgBookInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn add_comment(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::add_comment(con, book_id, comment).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }

    async fn delete_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<u64, KernelError> {
        PgBookInternal::delete_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    comments: Vec<String>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            value.comments.into_iter().map(BookComment::new).collect(),
        )
    }
}

#[derive(sqlx::FromRow)]
struct BookSummaryRow {
    id: Uuid,
    title: String,
    comment_count: i64,
}

impl From<BookSummaryRow> for BookSummary {
    fn from(value: BookSummaryRow) -> Self {
        BookSummary::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookCommentCount::new(value.comment_count),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, comments
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        let found = row.map(Book::from);
        Ok(found)
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<BookSummary>, KernelError> {
        let rows = sqlx::query_as::<_, BookSummaryRow>(
            // language=postgresql
            r#"
            SELECT id, title, cardinality(comments)::BIGINT AS comment_count
            FROM books
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(BookSummary::from).collect())
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        let comments = book
            .comments()
            .iter()
            .map(|comment| comment.as_ref().clone())
            .collect::<Vec<String>>();
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO books (id, title, comments)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(comments)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn add_comment(
        con: &mut PgConnection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE books
            SET comments = array_append(comments, $2)
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .bind(comment.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book to comment: {:?}", book_id)));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book to delete: {:?}", book_id)));
        }
        Ok(())
    }

    async fn delete_all(con: &mut PgConnection) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM books
            "#,
        )
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected())
    }
}
