/// Errors from the JSON-facing entry points. Compiling a well-formed spec never fails.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Chart spec is not valid JSON: {0}")]
    InvalidSpec(#[source] serde_json::Error),

    #[error("Result rows are not a valid JSON array of objects: {0}")]
    InvalidRows(#[source] serde_json::Error),

    #[error("Could not serialize render configuration: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Unknown SQL dialect `{0}`.")]
    UnknownDialect(String),
}

impl From<Error> for String {
    fn from(error: Error) -> Self {
        error.to_string()
    }
}
