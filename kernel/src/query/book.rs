use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, Isbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Send>: 'static + Sync + Send {
    /// Every stored book, ordered by title.
    async fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_isbn(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<<Self::DatabaseConnection as DatabaseConnection>::Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
