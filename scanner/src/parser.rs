use dto::parsed_member::ParsedMember;

const MEMBERSHIP_NUMBER_LABEL: &str = "Numero Socio";
const FULL_NAME_LABEL: &str = "Apellido y Nombre";
const DOCUMENT_NUMBER_LABEL: &str = "DNI";
const BIRTH_DATE_LABEL: &str = "Fecha Nacimiento";
const REGISTRATION_DATE_LABEL: &str = "Fecha Alta";

/// Parse the text blob encoded in a member card QR code.
///
/// The payload is a list of CRLF-separated `Label: Value` lines. Each line is
/// split on its first colon and both halves are trimmed; labels outside the
/// known set and lines without a colon are ignored. Parsing never fails: a
/// field whose label doesn't appear stays empty.
pub fn parse_member(payload: &str) -> ParsedMember {
    let mut membership_number = String::new();
    let mut full_name = String::new();
    let mut document_number = String::new();
    let mut birth_date = String::new();
    let mut registration_date = String::new();

    for line in payload.split("\r\n") {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };

        let value = value.trim().to_owned();
        match label.trim() {
            MEMBERSHIP_NUMBER_LABEL => membership_number = value,
            FULL_NAME_LABEL => full_name = value,
            DOCUMENT_NUMBER_LABEL => document_number = value,
            BIRTH_DATE_LABEL => birth_date = value,
            REGISTRATION_DATE_LABEL => registration_date = value,
            _ => {}
        }
    }

    ParsedMember::new(
        membership_number,
        full_name,
        document_number,
        birth_date,
        registration_date,
    )
}
