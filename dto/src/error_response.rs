use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of a 400 or 500 answer from the lookup route.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ErrorResponse {
    success: bool,
    error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_failure() {
        let response = ErrorResponse::new("Falta el parámetro documento".to_owned());

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(false, json["success"]);
        assert_eq!("Falta el parámetro documento", json["error"]);
    }
}
