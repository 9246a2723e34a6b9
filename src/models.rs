//! Frontend Models
//!
//! Data structures exchanged with the server or kept on the page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme applied through `data-theme` on `<html>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `"light"` reads as dark, including values
    /// written by other scripts.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Font Awesome icon for the toggle: the icon shows where a click leads
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

/// Like button state as displayed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u32,
}

/// `POST /api/like/<id>` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: u32,
}

impl From<LikeResponse> for LikeState {
    fn from(resp: LikeResponse) -> Self {
        Self {
            liked: resp.liked,
            count: resp.likes_count,
        }
    }
}

/// Comment as returned by the server after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user_name: String,
    #[serde(default)]
    pub user_image: Option<String>,
    pub content: String,
    pub created_at: String,
}

/// Comment form submission response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// Toast severity, doubles as the Bootstrap alert variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Bootstrap contextual class suffix (`alert-<variant>`)
    pub fn alert_variant(self) -> &'static str {
        match self {
            Severity::Error => "danger",
            other => other.as_str(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error | Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_is_lenient() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn test_error_toast_uses_danger_alert() {
        assert_eq!(Severity::Error.alert_variant(), "danger");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Success.alert_variant(), "success");
        assert_eq!(Severity::Warning.alert_variant(), "warning");
        assert_eq!(Severity::Info.alert_variant(), "info");
    }

    #[test]
    fn test_theme_toggle_icon() {
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_comment_response_without_comment() {
        let resp: CommentResponse =
            serde_json::from_str(r#"{"success": false, "errors": {"content": ["required"]}}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.comment.is_none());
        assert!(resp.errors.is_some());
    }

    #[test]
    fn test_comment_without_image() {
        let resp: CommentResponse = serde_json::from_str(
            r#"{"success": true, "comment": {"user_name": "Ana", "content": "Oi", "created_at": "01/01/2024"}}"#,
        )
        .unwrap();
        let comment = resp.comment.unwrap();
        assert_eq!(comment.user_name, "Ana");
        assert_eq!(comment.user_image, None);
    }

    #[test]
    fn test_like_response_into_state() {
        let resp: LikeResponse = serde_json::from_str(r#"{"liked": true, "likes_count": 15}"#).unwrap();
        assert_eq!(LikeState::from(resp), LikeState { liked: true, count: 15 });
    }
}
