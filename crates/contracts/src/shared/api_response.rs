use serde::{Deserialize, Serialize};

/// Envelope returned by the console services: `{ success, data, message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Service message, or `fallback` when the service sent none
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_message() {
        let resp: ApiResponse<bool> = serde_json::from_str(r#"{"success":true,"data":false}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, Some(false));
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_decode_null_data() {
        let resp: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"data":null,"message":"boom"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message_or("fallback"), "boom");
    }

    #[test]
    fn test_message_fallback() {
        let resp: ApiResponse<bool> = ApiResponse {
            success: false,
            data: None,
            message: Some("  ".into()),
        };
        assert_eq!(resp.message_or("校验失败"), "校验失败");
    }
}
