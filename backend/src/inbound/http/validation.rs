//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` [`Error`] whose message names
//! the offending field and whose details carry `field`, `code`, and where
//! useful the rejected `value` or array `index`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::domain::{EmailAddress, Error, Name, TextValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyValue,
    InvalidEmail,
    InvalidTimestamp,
    InvalidId,
    InvalidJson,
    InvalidType,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyValue => "empty_value",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::InvalidId => "invalid_id",
            Self::InvalidJson => "invalid_json",
            Self::InvalidType => "invalid_type",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
    index: Option<usize>,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_owned(),
            message: message.into(),
            index: None,
        }
    }

    fn at_index(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    fn with_code(self, code: ErrorCode) -> Error {
        let mut details = json!({
            "field": self.field,
            "code": code.as_str(),
        });
        if let (Some(index), Some(map)) = (self.index, details.as_object_mut()) {
            map.insert("index".to_owned(), json!(index));
        }
        Error::invalid_request(self.message).with_details(details)
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        let error = self.with_code(code);
        let mut details = error.details().cloned().unwrap_or_else(|| json!({}));
        if let Some(map) = details.as_object_mut() {
            map.insert("value".to_owned(), json!(value));
        }
        error.with_details(details)
    }
}

/// Position of the payload being validated inside a batch, if any.
///
/// Batch endpoints validate each element with its index so clients can point
/// at the failing row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Position(Option<usize>);

impl Position {
    pub(crate) const fn single() -> Self {
        Self(None)
    }

    pub(crate) const fn at(index: usize) -> Self {
        Self(Some(index))
    }

    fn prefix(self) -> String {
        match self.0 {
            Some(index) => format!("item {index}: "),
            None => String::new(),
        }
    }
}

pub(crate) fn missing_field_error(field: FieldName, position: Position) -> Error {
    let name = field.as_str();
    ValidationError::new(
        field,
        format!("{}missing required field: {name}", position.prefix()),
    )
    .at_index(position.0)
    .with_code(ErrorCode::MissingField)
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName, position: Position) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field, position))
}

pub(crate) fn parse_name(value: String, field: FieldName, position: Position) -> Result<Name, Error> {
    Name::new(value).map_err(|_| {
        let name = field.as_str();
        ValidationError::new(field, format!("{}{name} must not be empty", position.prefix()))
            .at_index(position.0)
            .with_code(ErrorCode::EmptyValue)
    })
}

pub(crate) fn parse_email(value: String, field: FieldName) -> Result<EmailAddress, Error> {
    let name = field.as_str();
    EmailAddress::new(value.as_str()).map_err(|err| match err {
        TextValidationError::Empty => {
            ValidationError::new(field, format!("{name} must not be empty"))
                .with_code(ErrorCode::EmptyValue)
        }
        TextValidationError::InvalidEmail => {
            ValidationError::new(field, format!("{name} must be a valid email address"))
                .with_value(ErrorCode::InvalidEmail, &value)
        }
    })
}

pub(crate) fn parse_rfc3339_timestamp(
    value: String,
    field: FieldName,
) -> Result<DateTime<Utc>, Error> {
    let name = field.as_str();
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            ValidationError::new(field, format!("{name} must be an RFC 3339 timestamp"))
                .with_value(ErrorCode::InvalidTimestamp, &value)
        })
}

/// Parse a numeric identifier taken from the URL path.
pub(crate) fn parse_id<T: FromStr>(value: &str, field: FieldName) -> Result<T, Error> {
    let name = field.as_str();
    value.parse::<T>().map_err(|_| {
        ValidationError::new(field, format!("{name} must be a non-negative integer"))
            .with_value(ErrorCode::InvalidId, value)
    })
}

/// Error for bodies that are not valid JSON or do not match the expected
/// shape (wrong types, wrong container).
pub(crate) fn invalid_json_error(reason: &str) -> Error {
    Error::invalid_request(format!("invalid JSON payload: {reason}")).with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
    }))
}

/// Unwrap a JSON object, rejecting any other shape.
pub(crate) fn expect_object(value: Value, position: Position) -> Result<Map<String, Value>, Error> {
    match value {
        Value::Object(object) => Ok(object),
        other => {
            let mut details = json!({"code": ErrorCode::InvalidJson.as_str()});
            if let (Some(index), Some(map)) = (position.0, details.as_object_mut()) {
                map.insert("index".to_owned(), json!(index));
            }
            let message = format!(
                "{}expected an object, found {}",
                position.prefix(),
                json_kind(&other)
            );
            Err(Error::invalid_request(message).with_details(details))
        }
    }
}

/// Read an optional field of type `T` from a JSON object.
///
/// Absent and `null` fields read as `None`. Keys other than `field` are not
/// inspected.
pub(crate) fn optional_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    field: FieldName,
    position: Position,
) -> Result<Option<T>, Error> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value::<T>(value.clone()).map(Some).map_err(|err| {
            let name = field.as_str();
            let message = format!("{}{name} has the wrong type: {err}", position.prefix());
            ValidationError::new(field, message)
                .at_index(position.0)
                .with_code(ErrorCode::InvalidType)
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
