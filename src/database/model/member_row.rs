use diesel::prelude::*;
use dto::member_record::MemberRecord;

/// One row of the lookup join, in the column order of the historical query:
/// the status label, the client columns, then the category label.
#[derive(Queryable, Debug)]
pub(crate) struct MemberRow {
    status: String,
    document_number: String,
    client_id: String,
    full_name: String,
    category: String,
}

impl From<MemberRow> for MemberRecord {
    fn from(value: MemberRow) -> Self {
        MemberRecord::new(
            vec![value.status, value.category],
            value.document_number,
            value.client_id,
            value.full_name,
        )
    }
}
