use super::Result;
use crate::database::model::member_row::MemberRow;
use crate::database::schema::{categoria_cliente, cliente, estado_cliente};
use diesel::prelude::*;
use dto::member_record::MemberRecord;

/// Retrieve every client whose document number matches exactly, along with
/// its status and category labels.
///
/// The join can in theory yield several rows for one document number; they
/// are all returned and callers decide what to do with the surplus.
pub fn find_by_document_number(
    connection: &mut SqliteConnection,
    document_number: &str,
) -> Result<Vec<MemberRecord>> {
    let rows = cliente::table
        .inner_join(estado_cliente::table)
        .inner_join(categoria_cliente::table)
        .filter(cliente::numero_documento.eq(document_number))
        .select((
            estado_cliente::descripcion,
            cliente::numero_documento,
            cliente::id_cliente,
            cliente::razon_social,
            categoria_cliente::descripcion,
        ))
        .load::<MemberRow>(connection)?;

    Ok(rows.into_iter().map(MemberRecord::from).collect())
}
