use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS opportunities (
            id             TEXT PRIMARY KEY,
            title          TEXT NOT NULL,
            organization   TEXT NOT NULL,
            location       TEXT NOT NULL,
            kind           TEXT NOT NULL,
            description    TEXT NOT NULL,
            deadline       TEXT NOT NULL,
            tags           TEXT NOT NULL DEFAULT '[]',
            salary         TEXT,
            posted_at      TEXT NOT NULL,
            contact_email  TEXT NOT NULL,
            contact_phone  TEXT NOT NULL,
            created_at     TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_opportunities_created
            ON opportunities(created_at);

        -- opportunity_id is a weak reference: listings are never deleted
        -- and dangling ids are tolerated, so no FOREIGN KEY here.
        CREATE TABLE IF NOT EXISTS messages (
            id                 TEXT PRIMARY KEY,
            opportunity_id     TEXT NOT NULL,
            opportunity_title  TEXT NOT NULL,
            sender_name        TEXT NOT NULL,
            sender_email       TEXT NOT NULL,
            content            TEXT NOT NULL,
            created_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_created
            ON messages(created_at);

        CREATE TABLE IF NOT EXISTS replies (
            id             TEXT PRIMARY KEY,
            message_id     TEXT NOT NULL REFERENCES messages(id),
            content        TEXT NOT NULL,
            is_from_owner  INTEGER NOT NULL DEFAULT 1,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_replies_message
            ON replies(message_id, created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
