use thiserror::Error;

pub type PResult<T> = Result<T, ParsingError>;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Expected {expected} in '{input}' for {statement}")]
    GrammarMismatch {
        statement: String,
        expected: String,
        input: String,
    },
    #[error("Expected time string for {field} but received '{value}'")]
    TimeFormat {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid coordinate '{0}'")]
    CoordinateFormat(String),
    #[error("Invalid service reference '{0}'")]
    ReferenceFormat(String),
    #[error("Expected integer for {field} of {table} record {record} but received '{value}'")]
    NumericField {
        table: &'static str,
        record: usize,
        field: &'static str,
        value: String,
    },
    #[error("Malformed layout dump: {0}")]
    Structural(String),
}

impl ParsingError {
    pub(crate) fn grammar(statement: &str, expected: impl Into<String>, input: &str) -> Self {
        ParsingError::GrammarMismatch {
            statement: statement.to_string(),
            expected: expected.into(),
            input: input.to_string(),
        }
    }
}
