use crate::member_record::MemberRecord;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Successful answer of the lookup route: every row matching the requested
/// document number. An unknown document number is still a success, with an
/// empty `data`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct LookupResponse {
    success: bool,
    data: Vec<MemberRecord>,
}

impl LookupResponse {
    pub fn new(success: bool, data: Vec<MemberRecord>) -> Self {
        Self { success, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member_record::tests::activo_senior_record;

    #[test]
    fn should_round_trip() {
        let response = LookupResponse::new(true, vec![activo_senior_record()]);

        let json = serde_json::to_string(&response).unwrap();
        let deserialized: LookupResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response, deserialized);
    }

    #[test]
    fn should_keep_data_empty_when_no_row_matches() {
        let response = LookupResponse::new(true, vec![]);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(true, json["success"]);
        assert_eq!(0, json["data"].as_array().unwrap().len());
    }
}
