/// Record identifiers are assigned by the external store on create.
pub type RecordId = i64;
