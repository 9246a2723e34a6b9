//! Comment Endpoint

use gloo_net::http::Request;
use web_sys::FormData;

use super::ajax;
use crate::error::{UiError, UiResult};
use crate::models::{Comment, CommentResponse};

/// Turn the server's envelope into the created comment or a rejection
pub fn interpret_comment_response(body: CommentResponse) -> UiResult<Comment> {
    match body {
        CommentResponse { success: true, comment: Some(comment), .. } => Ok(comment),
        CommentResponse { success: true, comment: None, .. } => {
            Err(UiError::Decode("success without comment".to_string()))
        }
        CommentResponse { success: false, errors, .. } => Err(UiError::Rejected(
            errors.map(|e| e.to_string()).unwrap_or_else(|| "no details".to_string()),
        )),
    }
}

/// Post the comment form to its own `action`
pub async fn submit_comment(action: &str, form: FormData) -> UiResult<Comment> {
    let resp = ajax(Request::post(action)).body(form)?.send().await?;

    let status = resp.status();
    let ok = resp.ok();
    match resp.json::<CommentResponse>().await {
        Ok(body) => interpret_comment_response(body),
        // Validation failures come back as JSON with an error status
        Err(_) if !ok => Err(UiError::Status(status)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment() -> Comment {
        Comment {
            user_name: "Ana".to_string(),
            user_image: None,
            content: "Muito bom".to_string(),
            created_at: "02/03/2024 10:00".to_string(),
        }
    }

    #[test]
    fn test_success_yields_comment() {
        let body = CommentResponse { success: true, comment: Some(comment()), errors: None };
        assert_eq!(interpret_comment_response(body).unwrap(), comment());
    }

    #[test]
    fn test_rejection_carries_errors() {
        let body = CommentResponse {
            success: false,
            comment: None,
            errors: Some(serde_json::json!({"content": ["Campo obrigatório"]})),
        };
        match interpret_comment_response(body) {
            Err(UiError::Rejected(msg)) => assert!(msg.contains("Campo obrigatório")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_success_without_comment_is_decode_error() {
        let body = CommentResponse { success: true, comment: None, errors: None };
        assert!(matches!(interpret_comment_response(body), Err(UiError::Decode(_))));
    }
}
