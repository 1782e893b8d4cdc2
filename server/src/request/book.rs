use crate::controller::{Intake, TryIntake};
use application::schema::{BookSchema, ValidationErrors};
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct CreateBookBody {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

// `isbn` may be sent but is never applied; the path decides which book changes.
#[derive(Debug, Deserialize)]
struct UpdateBookBody {
    amazon_url: Option<String>,
    author: Option<String>,
    language: Option<String>,
    pages: Option<i32>,
    publisher: Option<String>,
    title: Option<String>,
    year: Option<i32>,
}

#[derive(Debug)]
pub struct CreateBookRequest(Value);

impl CreateBookRequest {
    pub fn new(body: Value) -> Self {
        Self(body)
    }
}

#[derive(Debug)]
pub struct UpdateBookRequest(Value);

impl UpdateBookRequest {
    pub fn new(body: Value) -> Self {
        Self(body)
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    isbn: String,
}

impl GetBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    isbn: String,
}

impl DeleteBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

pub struct BookTransformer {
    schema: BookSchema,
}

impl BookTransformer {
    pub fn new(schema: BookSchema) -> Self {
        Self { schema }
    }
}

fn unreadable(error: serde_json::Error) -> ValidationErrors {
    ValidationErrors::new(vec![error.to_string()])
}

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = ValidationErrors;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        self.schema.validate_create(&input.0)?;
        let body = serde_json::from_value::<CreateBookBody>(input.0).map_err(unreadable)?;
        Ok(CreateBookDto {
            isbn: body.isbn,
            amazon_url: body.amazon_url,
            author: body.author,
            language: body.language,
            pages: body.pages,
            publisher: body.publisher,
            title: body.title,
            year: body.year,
        })
    }
}

impl TryIntake<(String, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    type Error = ValidationErrors;
    fn emit(&self, input: (String, UpdateBookRequest)) -> Result<Self::To, Self::Error> {
        let (isbn, input) = input;
        self.schema.validate_update(&input.0)?;
        let body = serde_json::from_value::<UpdateBookBody>(input.0).map_err(unreadable)?;
        Ok(UpdateBookDto {
            isbn,
            amazon_url: body.amazon_url,
            author: body.author,
            language: body.language,
            pages: body.pages,
            publisher: body.publisher,
            title: body.title,
            year: body.year,
        })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { isbn: input.isbn }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { isbn: input.isbn }
    }
}

#[cfg(test)]
mod test {
    use super::{BookTransformer, CreateBookRequest, UpdateBookRequest};
    use crate::controller::TryIntake;
    use application::schema::BookSchema;
    use serde_json::json;

    fn transformer() -> BookTransformer {
        BookTransformer::new(BookSchema::new().unwrap())
    }

    #[test]
    fn update_ignores_isbn_in_body() {
        let dto = transformer()
            .emit((
                "9780316769488".to_string(),
                UpdateBookRequest::new(json!({ "isbn": "9780451524935", "pages": 230 })),
            ))
            .unwrap();
        assert_eq!(dto.isbn, "9780316769488");
        assert_eq!(dto.pages, Some(230));
        assert_eq!(dto.title, None);
    }

    #[test]
    fn create_reports_schema_violations() {
        let errors = transformer()
            .emit(CreateBookRequest::new(json!({ "isbn": "9780140449266" })))
            .unwrap_err();
        assert!(!errors.messages().is_empty());
    }
}
