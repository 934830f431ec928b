/// Database row types — these map directly to SQLite rows.
/// Distinct from the foras-types domain models to keep the DB layer
/// independent; tags are carried as a JSON text column.

pub struct OpportunityRow {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub kind: String,
    pub description: String,
    pub deadline: String,
    pub tags: String,
    pub salary: Option<String>,
    pub posted_at: String,
    pub contact_email: String,
    pub contact_phone: String,
}

pub struct MessageRow {
    pub id: String,
    pub opportunity_id: String,
    pub opportunity_title: String,
    pub sender_name: String,
    pub sender_email: String,
    pub content: String,
    pub created_at: String,
}

pub struct ReplyRow {
    pub id: String,
    pub message_id: String,
    pub content: String,
    pub is_from_owner: bool,
    pub created_at: String,
}
