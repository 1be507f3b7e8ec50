pub mod error_response;
pub mod lookup_response;
pub mod member_record;
pub mod parsed_member;
