use error_stack::{Report, ResultExt};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, BookPatch, DependOnBookModifier};
use kernel::prelude::entity::{
    AmazonUrl, Book, BookAuthor, BookLanguage, BookPages, BookPublisher, BookTitle, Isbn,
    PublishedYear,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

fn not_found(isbn: &Isbn) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("There is no book with an isbn '{isbn}'"))
}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let isbn = Isbn::new(dto.isbn);
        let book = self
            .book_query()
            .find_by_isbn(&mut connection, &isbn)
            .await?
            .ok_or_else(|| not_found(&isbn))?;
        Ok(BookDto::from(book))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let isbn = Isbn::new(dto.isbn);
        let book = Book::new(
            isbn.clone(),
            AmazonUrl::new(dto.amazon_url),
            BookAuthor::new(dto.author),
            BookLanguage::new(dto.language),
            BookPages::new(dto.pages),
            BookPublisher::new(dto.publisher),
            BookTitle::new(dto.title),
            PublishedYear::new(dto.year),
        );
        let created = self
            .book_modifier()
            .create(&mut connection, book)
            .await
            .attach_printable_lazy(|| format!("Failed to create book '{isbn}'"))?;
        tracing::debug!(%isbn, "book created");
        Ok(BookDto::from(created))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let isbn = Isbn::new(dto.isbn);
        let patch = BookPatch::new(
            dto.amazon_url.map(AmazonUrl::new),
            dto.author.map(BookAuthor::new),
            dto.language.map(BookLanguage::new),
            dto.pages.map(BookPages::new),
            dto.publisher.map(BookPublisher::new),
            dto.title.map(BookTitle::new),
            dto.year.map(PublishedYear::new),
        );
        let updated = self
            .book_modifier()
            .update(&mut connection, &isbn, patch)
            .await?
            .ok_or_else(|| not_found(&isbn))?;
        tracing::debug!(%isbn, "book updated");
        Ok(BookDto::from(updated))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let isbn = Isbn::new(dto.isbn);
        if !self.book_modifier().delete(&mut connection, &isbn).await? {
            return Err(not_found(&isbn));
        }
        tracing::debug!(%isbn, "book deleted");
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
