use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The member identity read from a printed QR card.
///
/// Every field is kept as the raw string found on the card, without any
/// validation: the server correlates on the document number only, and the
/// remaining fields are display material. A missing label on the card leaves
/// its field empty.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct ParsedMember {
    membership_number: String,
    full_name: String,
    document_number: String,
    birth_date: String,
    registration_date: String,
}

impl ParsedMember {
    pub fn new(
        membership_number: String,
        full_name: String,
        document_number: String,
        birth_date: String,
        registration_date: String,
    ) -> Self {
        Self {
            membership_number,
            full_name,
            document_number,
            birth_date,
            registration_date,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const DOCUMENT_NUMBER: &str = "12345678";

    pub fn jon_doe() -> ParsedMember {
        ParsedMember::new(
            "1043".to_owned(),
            "Doe Jon".to_owned(),
            DOCUMENT_NUMBER.to_owned(),
            "01/02/1980".to_owned(),
            "15/03/2015".to_owned(),
        )
    }

    pub fn jon_doe_card_payload() -> String {
        [
            "Numero Socio: 1043",
            "Apellido y Nombre: Doe Jon",
            "DNI: 12345678",
            "Fecha Nacimiento: 01/02/1980",
            "Fecha Alta: 15/03/2015",
        ]
        .join("\r\n")
    }
}
