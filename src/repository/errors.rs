use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Dataset read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    Parse(String),

    #[error("Dataset unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => RepositoryError::Io(io),
                other => RepositoryError::Parse(format!("{other:?}")),
            }
        } else {
            RepositoryError::Parse(err.to_string())
        }
    }
}
