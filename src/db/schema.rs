//! SQL text for the joke schema
//!
//! Values are always bound as `?` parameters, never formatted into these strings.

pub const CREATE_TYPES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS types (
    id INT AUTO_INCREMENT PRIMARY KEY,
    type_name VARCHAR(255) NOT NULL UNIQUE
)
"#;

pub const CREATE_JOKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS jokes (
    id INT AUTO_INCREMENT PRIMARY KEY,
    setup TEXT NOT NULL,
    punchline TEXT NOT NULL,
    type_id INT NOT NULL,
    FOREIGN KEY (type_id) REFERENCES types(id)
)
"#;

pub const SELECT_ALL_JOKES: &str = "SELECT jokes.id, jokes.setup, jokes.punchline, jokes.type_id, types.type_name \
     FROM jokes JOIN types ON jokes.type_id = types.id";

pub const SELECT_TYPE_NAMES: &str = "SELECT type_name FROM types ORDER BY id";

pub const SELECT_TYPES: &str = "SELECT id, type_name FROM types";

pub const SELECT_TYPE_ID: &str = "SELECT id FROM types WHERE type_name = ?";

pub const INSERT_TYPE: &str = "INSERT INTO types (type_name) VALUES (?)";

pub const INSERT_JOKE: &str = "INSERT INTO jokes (type_id, setup, punchline) VALUES (?, ?, ?)";

pub const DELETE_JOKES: &str = "DELETE FROM jokes";

pub const DELETE_TYPES: &str = "DELETE FROM types";

pub const COUNT_TYPES: &str = "SELECT COUNT(*) FROM types";

pub const COUNT_JOKES: &str = "SELECT COUNT(*) FROM jokes";

pub const COUNT_JOKES_BY_TYPE: &str = r#"
SELECT t.type_name, COUNT(j.id) AS joke_count
FROM types t
LEFT JOIN jokes j ON t.id = j.type_id
GROUP BY t.id, t.type_name
ORDER BY joke_count DESC
"#;
