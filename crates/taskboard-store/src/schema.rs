/// SQL DDL for the taskboard database.
/// Every statement is idempotent; running it on an existing file is a no-op.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    eta TEXT NOT NULL,
    category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS config (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    theme TEXT NOT NULL DEFAULT 'Desert'
        CHECK (theme IN ('Desert', 'Oasis', 'Forest', 'Snow'))
);

CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category_id);
"#;

/// Seeds the config singleton only when it is missing.
pub const SEED_CONFIG: &str = "INSERT OR IGNORE INTO config (id, theme) VALUES (1, 'Desert')";

pub const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
PRAGMA synchronous = NORMAL;
"#;
