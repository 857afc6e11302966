use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        constraint: String,
        source: sqlx::Error,
    },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                let constraint = db_err.constraint().unwrap_or_default().to_owned();
                Self::UniqueViolation {
                    constraint,
                    source: err,
                }
            }
            other => Self::Sqlx(other),
        }
    }
}
