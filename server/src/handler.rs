use application::schema::{BookSchema, DependOnBookSchema};
use driver::database::{PostgresBookRepository, PostgresDatabase};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

/// Everything the book routes need from the process-wide state.
pub trait Modules:
    Clone + DependOnBookQuery + DependOnBookModifier + DependOnBookSchema
{
}

impl<T> Modules for T where
    T: Clone + DependOnBookQuery + DependOnBookModifier + DependOnBookSchema
{
}

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    schema: BookSchema,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let schema = BookSchema::new()?;
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self { pgpool, schema })
    }

    pub async fn close(&self) {
        self.pgpool.close().await;
    }
}

impl DependOnDatabaseConnection for AppModule {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self.pgpool()
    }
}

impl DependOnBookQuery for AppModule {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for AppModule {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnBookSchema for AppModule {
    fn book_schema(&self) -> &BookSchema {
        self.schema()
    }
}
