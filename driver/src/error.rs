use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    SqlX(#[from] sqlx::Error),
    #[error(transparent)]
    Env(#[from] dotenvy::Error),
    #[error("{key} is not set")]
    MissingConfig { key: &'static str },
    #[error("Invalid value `{value}` for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl DriverError {
    fn kernel_context(&self) -> KernelError {
        match self {
            DriverError::SqlX(sqlx::Error::PoolTimedOut) => KernelError::Timeout,
            DriverError::SqlX(sqlx::Error::Database(error)) if error.is_unique_violation() => {
                KernelError::Conflict
            }
            _ => KernelError::Internal,
        }
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let error = error.into();
            let context = error.kernel_context();
            Report::new(error).change_context(context)
        })
    }
}
