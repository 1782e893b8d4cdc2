mod amazon_url;
mod author;
mod isbn;
mod language;
mod pages;
mod publisher;
mod title;
mod year;

pub use self::{
    amazon_url::*, author::*, isbn::*, language::*, pages::*, publisher::*, title::*, year::*,
};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    isbn: Isbn,
    amazon_url: AmazonUrl,
    author: BookAuthor,
    language: BookLanguage,
    pages: BookPages,
    publisher: BookPublisher,
    title: BookTitle,
    year: PublishedYear,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        isbn: Isbn,
        amazon_url: AmazonUrl,
        author: BookAuthor,
        language: BookLanguage,
        pages: BookPages,
        publisher: BookPublisher,
        title: BookTitle,
        year: PublishedYear,
    ) -> Self {
        Self {
            isbn,
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
