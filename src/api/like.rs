//! Like Endpoint

use gloo_net::http::Request;
use percent_encoding::utf8_percent_encode;

use super::{ajax, PATH_SEGMENT};
use crate::config::LIKE_ENDPOINT;
use crate::error::{UiError, UiResult};
use crate::models::LikeResponse;

pub fn like_endpoint(project_id: &str) -> String {
    format!("{}{}", LIKE_ENDPOINT, utf8_percent_encode(project_id, PATH_SEGMENT))
}

/// `POST /api/like/<id>`; the server flips the like for the current user
pub async fn toggle_like(project_id: &str) -> UiResult<LikeResponse> {
    let resp = ajax(Request::post(&like_endpoint(project_id)))
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !resp.ok() {
        return Err(UiError::Status(resp.status()));
    }
    Ok(resp.json::<LikeResponse>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_endpoint() {
        assert_eq!(like_endpoint("42"), "/api/like/42");
        assert_eq!(like_endpoint("a/b"), "/api/like/a%2Fb");
    }
}
