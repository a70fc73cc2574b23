//! Success envelope wrapping every non-empty `2xx` body.
//!
//! ```json
//! {"status":"Success","data":{"user_id":7,"pokemon_id":25}}
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Literal `status` value carried by successful responses.
pub const SUCCESS_STATUS: &str = "Success";

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `Success`.
    #[schema(example = "Success")]
    pub status: String,
    /// Endpoint-specific payload.
    pub data: T,
}

/// Wrap `data` in a success envelope.
///
/// # Examples
/// ```
/// use pokedex_backend::inbound::http::envelope::success;
///
/// let body = serde_json::to_value(success(42)).expect("serialise");
/// assert_eq!(body["status"], "Success");
/// assert_eq!(body["data"], 42);
/// ```
pub fn success<T>(data: T) -> Envelope<T> {
    Envelope {
        status: SUCCESS_STATUS.to_owned(),
        data,
    }
}
