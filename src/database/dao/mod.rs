use crate::database::error::DatabaseError;

pub mod client;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
