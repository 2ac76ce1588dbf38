/*
[INPUT]:  Signup form data with base64-encoded avatar
[OUTPUT]: Created user account data
[POS]:    HTTP layer - user account endpoints
[UPDATE]: When adding new user endpoints or changing request shape
*/

use crate::http::{AssignlyClient, Result};
use crate::types::{SignupRequest, SignupResponse};
use reqwest::Method;

impl AssignlyClient {
    /// Register a new user account
    ///
    /// POST /api/users/signup
    ///
    /// The server answers 409 when the login is already taken and 404 when
    /// the account could not be added.
    pub async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse> {
        let builder = self.api_request(Method::POST, "/api/users/signup")?;
        self.send_json(builder.json(req)).await
    }
}
