//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path and query values arrive as raw strings and are parsed here so that
//! malformed input produces the standard JSON error body instead of the
//! framework's plain-text rejection.

use actix_web::web;
use serde_json::json;

use crate::domain::{Error, PageRequest, PageRequestError, PokemonId, PokemonValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidPokemonId,
    InvalidInteger,
    LimitOutOfRange,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPokemonId => "invalid_pokemon_id",
            Self::InvalidInteger => "invalid_integer",
            Self::LimitOutOfRange => "limit_out_of_range",
            Self::MalformedBody => "malformed_body",
        }
    }
}

fn field_error(field: &str, value: &str, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse the `{pokemon_id}` path segment.
pub(crate) fn parse_pokemon_id(raw: &str) -> Result<PokemonId, Error> {
    raw.parse::<PokemonId>().map_err(|err| {
        let message = match err {
            PokemonValidationError::NonPositiveId => "pokemon id must be a positive integer",
            PokemonValidationError::InvalidId => "pokemon id must be an integer",
        };
        field_error(
            "pokemonId",
            raw,
            ValidationCode::InvalidPokemonId,
            message.to_owned(),
        )
    })
}

fn parse_optional_u32(field: &str, raw: Option<&str>) -> Result<Option<u32>, Error> {
    raw.map(|value| {
        value.trim().parse::<u32>().map_err(|_| {
            field_error(
                field,
                value,
                ValidationCode::InvalidInteger,
                format!("{field} must be a non-negative integer"),
            )
        })
    })
    .transpose()
}

/// Parse `limit` and `offset` query values into a validated page request.
pub(crate) fn parse_page(limit: Option<&str>, offset: Option<&str>) -> Result<PageRequest, Error> {
    let limit_value = parse_optional_u32("limit", limit)?;
    let offset_value = parse_optional_u32("offset", offset)?;
    PageRequest::new(limit_value, offset_value).map_err(|err| match err {
        PageRequestError::LimitOutOfRange { limit } => field_error(
            "limit",
            &limit.to_string(),
            ValidationCode::LimitOutOfRange,
            err.to_string(),
        ),
    })
}

/// JSON extractor configuration reporting malformed bodies as
/// `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        Error::invalid_request("request body is not valid JSON for this endpoint")
            .with_details(json!({
                "code": ValidationCode::MalformedBody.as_str(),
                "reason": message,
            }))
            .into()
    })
}

#[cfg(test)]
mod tests {
    //! Path and query parsing into validated domain values.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail_code(error: &Error) -> Option<&str> {
        error
            .details()
            .and_then(|details| details.get("code"))
            .and_then(Value::as_str)
    }

    #[rstest]
    #[case("25", Some(25))]
    #[case("0", None)]
    #[case("abc", None)]
    fn pokemon_ids_are_validated(#[case] raw: &str, #[case] expected: Option<i32>) {
        let result = parse_pokemon_id(raw);
        match expected {
            Some(id) => assert_eq!(result.expect("valid id").get(), id),
            None => {
                let err = result.expect_err("invalid id");
                assert_eq!(err.code(), ErrorCode::InvalidRequest);
                assert_eq!(detail_code(&err), Some("invalid_pokemon_id"));
            }
        }
    }

    #[rstest]
    fn page_defaults_apply_when_absent() {
        let page = parse_page(None, None).expect("default page");
        assert_eq!(page, PageRequest::default());
    }

    #[rstest]
    #[case(Some("ten"), None, "invalid_integer")]
    #[case(None, Some("-1"), "invalid_integer")]
    #[case(Some("0"), None, "limit_out_of_range")]
    #[case(Some("101"), None, "limit_out_of_range")]
    fn bad_paging_is_invalid_request(
        #[case] limit: Option<&str>,
        #[case] offset: Option<&str>,
        #[case] code: &str,
    ) {
        let err = parse_page(limit, offset).expect_err("invalid page");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(detail_code(&err), Some(code));
    }
}
