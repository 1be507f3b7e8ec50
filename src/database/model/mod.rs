pub(crate) mod member_row;
