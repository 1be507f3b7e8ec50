use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the server-side lookup: the client record joined with its
/// status and category labels.
///
/// Wire names follow the historical API, where the two joined `Descripcion`
/// columns come back as an ordered pair: state first, category second.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberRecord {
    #[serde(rename = "Descripcion")]
    descriptions: Vec<String>,
    #[serde(rename = "NumeroDocumento")]
    document_number: String,
    #[serde(rename = "IdCliente")]
    client_id: String,
    #[serde(rename = "RazonSocial")]
    full_name: String,
}

impl MemberRecord {
    pub fn new(
        descriptions: Vec<String>,
        document_number: String,
        client_id: String,
        full_name: String,
    ) -> Self {
        Self {
            descriptions,
            document_number,
            client_id,
            full_name,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.descriptions.first().map(String::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.descriptions.get(1).map(String::as_str)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn activo_senior_record() -> MemberRecord {
        MemberRecord::new(
            vec!["Activo".to_owned(), "Senior".to_owned()],
            "12345678".to_owned(),
            "1043".to_owned(),
            "Doe Jon".to_owned(),
        )
    }

    pub fn suspendido_juvenil_record() -> MemberRecord {
        MemberRecord::new(
            vec!["Suspendido".to_owned(), "Juvenil".to_owned()],
            "87654321".to_owned(),
            "2077".to_owned(),
            "Snow Jonette".to_owned(),
        )
    }
}
