//! JSON Schema checks for book payloads, run before anything touches storage.

use std::sync::Arc;

use error_stack::{Report, ResultExt};
use jsonschema::{ValidationError, Validator};
use serde_json::Value;

use kernel::KernelError;

static BOOK_SCHEMA: &str = include_str!("../schema/book.json");

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationMode {
    /// Every property is required.
    Create,
    /// Any subset of properties, each checked like in `Create`.
    Update,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Invalid book payload: {}", .0.join(", "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl From<ValidationErrors> for Vec<String> {
    fn from(value: ValidationErrors) -> Self {
        value.0
    }
}

#[derive(Clone)]
pub struct BookSchema {
    create: Arc<Validator>,
    update: Arc<Validator>,
}

impl BookSchema {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let update = serde_json::from_str::<Value>(BOOK_SCHEMA)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to parse book schema")?;

        let required = update
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| properties.keys().cloned().map(Value::String).collect::<Vec<_>>())
            .unwrap_or_default();
        let mut create = update.clone();
        if let Some(schema) = create.as_object_mut() {
            schema.insert("required".to_string(), Value::Array(required));
        }

        Ok(Self {
            create: Arc::new(compile(&create)?),
            update: Arc::new(compile(&update)?),
        })
    }

    pub fn validate_create(&self, payload: &Value) -> Result<(), ValidationErrors> {
        self.validate(payload, ValidationMode::Create)
    }

    pub fn validate_update(&self, payload: &Value) -> Result<(), ValidationErrors> {
        self.validate(payload, ValidationMode::Update)
    }

    pub fn validate(&self, payload: &Value, mode: ValidationMode) -> Result<(), ValidationErrors> {
        let validator = match mode {
            ValidationMode::Create => &self.create,
            ValidationMode::Update => &self.update,
        };
        let messages = validator
            .iter_errors(payload)
            .map(|error| describe(&error))
            .collect::<Vec<_>>();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(messages))
        }
    }
}

pub trait DependOnBookSchema: 'static + Sync + Send {
    fn book_schema(&self) -> &BookSchema;
}

fn compile(schema: &Value) -> error_stack::Result<Validator, KernelError> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .map_err(|error| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("Failed to compile book schema: {error}"))
        })
}

fn describe(error: &ValidationError) -> String {
    let path = error.instance_path.to_string();
    if path.is_empty() {
        error.to_string()
    } else {
        format!("{path}: {error}")
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::{BookSchema, ValidationMode};

    fn catcher_in_the_rye() -> Value {
        json!({
            "isbn": "9780316769488",
            "amazon_url": "https://www.amazon.com/dp/0316769487",
            "author": "J.D. Salinger",
            "language": "English",
            "pages": 224,
            "publisher": "Little, Brown and Company",
            "title": "The Catcher in the Rye",
            "year": 1951
        })
    }

    #[test]
    fn complete_book_is_valid_for_both_modes() {
        let schema = BookSchema::new().unwrap();
        assert!(schema.validate_create(&catcher_in_the_rye()).is_ok());
        assert!(schema.validate_update(&catcher_in_the_rye()).is_ok());
    }

    #[test]
    fn create_requires_every_field() {
        let schema = BookSchema::new().unwrap();
        let errors = schema.validate_create(&json!({})).unwrap_err();
        for field in [
            "isbn",
            "amazon_url",
            "author",
            "language",
            "pages",
            "publisher",
            "title",
            "year",
        ] {
            assert!(
                errors.messages().iter().any(|message| message.contains(field)),
                "no message for {field}: {errors:?}"
            );
        }
    }

    #[test]
    fn non_numeric_pages_are_rejected() {
        let schema = BookSchema::new().unwrap();
        let mut book = catcher_in_the_rye();
        book["pages"] = json!("something broke");

        let errors = schema.validate_create(&book).unwrap_err();
        assert_eq!(errors.messages().len(), 1);
        assert!(errors.messages()[0].starts_with("/pages: "));

        let errors = schema
            .validate(&json!({ "pages": " the brokw" }), ValidationMode::Update)
            .unwrap_err();
        assert_eq!(errors.messages().len(), 1);
    }

    #[test]
    fn amazon_url_must_be_a_uri() {
        let schema = BookSchema::new().unwrap();
        let mut book = catcher_in_the_rye();
        book["amazon_url"] = json!("not a url");

        let errors = schema.validate_create(&book).unwrap_err();
        assert!(errors.messages()[0].starts_with("/amazon_url: "));
    }

    #[test]
    fn update_accepts_partial_payloads() {
        let schema = BookSchema::new().unwrap();
        assert!(schema.validate_update(&json!({})).is_ok());
        assert!(schema.validate_update(&json!({ "pages": 230 })).is_ok());
        assert!(schema.validate_create(&json!({ "pages": 230 })).is_err());
    }

    #[test]
    fn pages_must_be_positive_but_year_may_not_be() {
        let schema = BookSchema::new().unwrap();
        assert!(schema.validate_update(&json!({ "pages": 0 })).is_err());
        assert!(schema.validate_update(&json!({ "year": -500 })).is_ok());
    }

    #[test]
    fn integers_must_fit_in_i32() {
        let schema = BookSchema::new().unwrap();
        assert!(schema.validate_update(&json!({ "pages": 2147483647 })).is_ok());
        assert!(schema.validate_update(&json!({ "pages": 2147483648_i64 })).is_err());
        assert!(schema.validate_update(&json!({ "year": -2147483649_i64 })).is_err());
    }

    #[test]
    fn payload_must_be_an_object() {
        let schema = BookSchema::new().unwrap();
        let errors = schema.validate_update(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.messages().len(), 1);
        assert!(!errors.messages()[0].starts_with('/'));
    }
}
