//! Echo transform: the input string rendered a few different ways.

use serde::Serialize;

/// Response body for the echo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    /// The input, unchanged.
    pub normal: String,
    /// The input in upper case.
    pub shouty: String,
    /// Number of characters (Unicode scalar values) in the input.
    pub char_count: usize,
    /// The input with its characters in reverse order.
    pub backwards: String,
}

impl EchoResponse {
    /// Build the echo response for `input`.
    pub fn from_input(input: &str) -> Self {
        Self {
            normal: input.to_owned(),
            shouty: input.to_uppercase(),
            char_count: input.chars().count(),
            backwards: input.chars().rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_input() {
        let echo = EchoResponse::from_input("Ab1");
        assert_eq!(echo.normal, "Ab1");
        assert_eq!(echo.shouty, "AB1");
        assert_eq!(echo.char_count, 3);
        assert_eq!(echo.backwards, "1bA");
    }

    #[test]
    fn test_empty_input() {
        let echo = EchoResponse::from_input("");
        assert_eq!(echo.char_count, 0);
        assert!(echo.backwards.is_empty());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let echo = EchoResponse::from_input("héllo");
        assert_eq!(echo.char_count, 5);
        assert_eq!(echo.backwards, "olléh");
        assert_eq!(echo.shouty, "HÉLLO");
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(EchoResponse::from_input("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "normal": "hi",
                "shouty": "HI",
                "charCount": 2,
                "backwards": "ih",
            })
        );
    }
}
