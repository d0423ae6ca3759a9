//! Builds the parameterized statements used by the Postgres store.

/// Table holding child profiles, inside the configured schema.
pub const PROFILE_TABLE: &str = "person";

/// Column order shared by SELECT and INSERT; matches [`crate::model::ProfileRow`].
const PROFILE_COLUMNS: [&str; 5] = ["id", "given_name", "middle_name", "family_name", "birthdate"];

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(PROFILE_TABLE))
}

fn column_list() -> String {
    PROFILE_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prepared statement text for one schema, built once per store.
#[derive(Clone, Debug)]
pub struct ProfileStatements {
    /// Single-row lookup; `$1` is the id.
    pub select_by_id: String,
    /// Five-column insert; `$1..$5` follow the column order.
    pub insert: String,
}

impl ProfileStatements {
    pub fn new(schema: &str) -> Self {
        let table = qualified_table(schema);
        let cols = column_list();
        let placeholders = (1..=PROFILE_COLUMNS.len())
            .map(|n| format!("${}", n))
            .collect::<Vec<_>>()
            .join(", ");
        ProfileStatements {
            select_by_id: format!("SELECT {} FROM {} WHERE \"id\" = $1", cols, table),
            insert: format!("INSERT INTO {} ({}) VALUES ({})", table, cols, placeholders),
        }
    }
}

pub fn create_schema_ddl(schema: &str) -> String {
    format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema))
}

pub fn create_table_ddl(schema: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" TEXT PRIMARY KEY,
            "given_name" TEXT NOT NULL,
            "middle_name" TEXT,
            "family_name" TEXT NOT NULL,
            "birthdate" TEXT NOT NULL
        )
        "#,
        qualified_table(schema)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_target_the_schema_table() {
        let stmts = ProfileStatements::new("child");
        assert_eq!(
            stmts.select_by_id,
            r#"SELECT "id", "given_name", "middle_name", "family_name", "birthdate" FROM "child"."person" WHERE "id" = $1"#
        );
        assert_eq!(
            stmts.insert,
            r#"INSERT INTO "child"."person" ("id", "given_name", "middle_name", "family_name", "birthdate") VALUES ($1, $2, $3, $4, $5)"#
        );
    }

    #[test]
    fn ddl_keeps_middle_name_nullable() {
        let ddl = create_table_ddl("kids");
        assert!(ddl.contains(r#""kids"."person""#));
        assert!(ddl.contains(r#""middle_name" TEXT,"#));
        assert_eq!(create_schema_ddl("kids"), r#"CREATE SCHEMA IF NOT EXISTS "kids""#);
    }
}
