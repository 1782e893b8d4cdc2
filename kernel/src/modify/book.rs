use destructure::Destructure;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{
    AmazonUrl, Book, BookAuthor, BookLanguage, BookPages, BookPublisher, BookTitle, Isbn,
    PublishedYear,
};
use crate::KernelError;

/// Mutable attributes of a book to overwrite. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Eq, PartialEq, Destructure)]
pub struct BookPatch {
    amazon_url: Option<AmazonUrl>,
    author: Option<BookAuthor>,
    language: Option<BookLanguage>,
    pages: Option<BookPages>,
    publisher: Option<BookPublisher>,
    title: Option<BookTitle>,
    year: Option<PublishedYear>,
}

impl BookPatch {
    pub fn new(
        amazon_url: Option<AmazonUrl>,
        author: Option<BookAuthor>,
        language: Option<BookLanguage>,
        pages: Option<BookPages>,
        publisher: Option<BookPublisher>,
        title: Option<BookTitle>,
        year: Option<PublishedYear>,
    ) -> Self {
        Self {
            amazon_url,
            author,
            language,
            pages,
            publisher,
            title,
            year,
        }
    }
}

#[async_trait::async_trait]
pub trait BookModifier<Connection: Send>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        book: Book,
    ) -> error_stack::Result<Book, KernelError>;
    /// Returns `None` when no book has the given isbn.
    async fn update(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
        patch: BookPatch,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    /// Returns `false` when no book has the given isbn.
    async fn delete(&self, con: &mut Connection, isbn: &Isbn)
        -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<<Self::DatabaseConnection as DatabaseConnection>::Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
