/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Payload for the account signup endpoint.
///
/// `image` carries the user's avatar as a base64 string; an empty string
/// means no avatar was picked (or it could not be decoded client-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub login: String,
    pub tag: String,
    pub password: String,
    pub image: String,
}
