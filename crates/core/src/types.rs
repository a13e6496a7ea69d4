/// Document identifiers are opaque strings generated by the API.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document identifier.
///
/// UUID v7 is time-ordered, so sorting by id yields creation order.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::now_v7().to_string()
}
