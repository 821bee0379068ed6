//! Database writer implementation

use crate::core::{LogEntry, LogWriter, LoggerError, Result, WriteOptions};
use std::fmt;

/// SQL dialect of the underlying connection, used to select the DDL that
/// creates the log table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    MySql,
    PostgreSql,
    /// A dialect with no registered DDL; table creation is skipped.
    Other,
}

const SQLITE_DDL: &str = "\
CREATE TABLE \"{table}\" (
  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,
  \"timestamp\" DATETIME NOT NULL,
  \"priority\" INTEGER NOT NULL,
  \"name\" VARCHAR NOT NULL,
  \"message\" TEXT
);
CREATE INDEX \"idx_{table}_timestamp\" ON \"{table}\" (\"timestamp\");
";

const MYSQL_DDL: &str = "\
CREATE TABLE `{table}` (
  `id` INT NOT NULL AUTO_INCREMENT,
  `timestamp` DATETIME NOT NULL,
  `priority` INT NOT NULL,
  `name` VARCHAR(16) NOT NULL,
  `message` TEXT,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8;
CREATE INDEX `idx_{table}_timestamp` ON `{table}` (`timestamp`);
";

const POSTGRES_DDL: &str = "\
CREATE TABLE \"{table}\" (
  \"id\" SERIAL PRIMARY KEY,
  \"timestamp\" TIMESTAMP NOT NULL,
  \"priority\" INTEGER NOT NULL,
  \"name\" VARCHAR(16) NOT NULL,
  \"message\" TEXT
);
CREATE INDEX \"idx_{table}_timestamp\" ON \"{table}\" (\"timestamp\");
";

impl Dialect {
    /// DDL script for the log table, with a `{table}` placeholder. `None`
    /// when no script is registered for this dialect.
    pub fn ddl_template(&self) -> Option<&'static str> {
        match self {
            Dialect::Sqlite => Some(SQLITE_DDL),
            Dialect::MySql => Some(MYSQL_DDL),
            Dialect::PostgreSql => Some(POSTGRES_DDL),
            Dialect::Other => None,
        }
    }

    /// Quote an identifier the same way this dialect's DDL does, so the
    /// table the DDL creates is the table the INSERT hits.
    pub fn quote_identifier(&self, identifier: &str) -> String {
        match self {
            Dialect::MySql => format!("`{}`", identifier.replace('`', "``")),
            _ => format!("\"{}\"", identifier.replace('"', "\"\"")),
        }
    }
}

/// Parameter-binding syntax of the underlying connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `:column`
    Named,
    /// `$1`, `$2`, ...
    Numbered,
    /// `?`
    Question,
}

impl PlaceholderStyle {
    fn render(&self, column: &str, index: usize) -> String {
        match self {
            PlaceholderStyle::Named => format!(":{column}"),
            PlaceholderStyle::Numbered => format!("${index}"),
            PlaceholderStyle::Question => "?".to_string(),
        }
    }
}

/// A value bound to an INSERT parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

/// Capability contract for the SQL client the writer logs through.
///
/// The writer never interpolates entry values into SQL text; all entry data
/// flows through `execute_prepared` as bound parameters.
pub trait SqlConnection: Send + Sync {
    fn dialect(&self) -> Dialect;

    fn placeholder_style(&self) -> PlaceholderStyle;

    fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Execute one raw statement (DDL only).
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Prepare `sql`, bind `params` in order, and execute.
    fn execute_prepared(&mut self, sql: &str, params: &[(String, SqlValue)]) -> Result<()>;

    fn table_exists(&mut self, table: &str) -> Result<bool> {
        Ok(self.list_tables()?.iter().any(|t| t == table))
    }
}

/// Persists one entry per `write_log` call as one inserted row.
pub struct DbWriter<C: SqlConnection> {
    conn: C,
    table: String,
}

impl<C: SqlConnection> DbWriter<C> {
    /// Open the writer against a configured table.
    ///
    /// This is the writer's one-time readiness step: if the table is absent
    /// from `list_tables()`, the dialect's DDL script is rendered and its
    /// statements executed one at a time. Dialects without a registered
    /// script skip creation silently; the first insert against the missing
    /// table will fail instead.
    pub fn open(mut conn: C, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        if table.trim().is_empty() {
            return Err(LoggerError::config("DbWriter", "no log table configured"));
        }

        if !conn.table_exists(&table)? {
            Self::create_table(&mut conn, &table)?;
        }

        Ok(Self { conn, table })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn create_table(conn: &mut C, table: &str) -> Result<()> {
        let Some(template) = conn.dialect().ddl_template() else {
            return Ok(());
        };

        let script = template.replace("{table}", table);
        for statement in script.split(';') {
            let statement = statement.trim();
            if !statement.is_empty() {
                conn.execute(statement)?;
            }
        }
        Ok(())
    }
}

// The connection capability is opaque, so Debug reports the table only.
impl<C: SqlConnection> fmt::Debug for DbWriter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbWriter")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl<C: SqlConnection> LogWriter for DbWriter<C> {
    fn write_log(&mut self, entry: &LogEntry, options: &WriteOptions) -> Result<()> {
        let params = vec![
            (
                "timestamp".to_string(),
                SqlValue::Text(options.timestamp_for(entry).to_string()),
            ),
            (
                "priority".to_string(),
                SqlValue::Int(i64::from(entry.priority.value())),
            ),
            (
                "name".to_string(),
                SqlValue::Text(options.name_for(entry).to_string()),
            ),
            ("message".to_string(), SqlValue::Text(entry.message.clone())),
        ];

        let style = self.conn.placeholder_style();
        let placeholders: Vec<String> = params
            .iter()
            .enumerate()
            .map(|(i, (column, _))| style.render(column, i + 1))
            .collect();

        let sql = format!(
            "INSERT INTO {} (timestamp, priority, name, message) VALUES ({})",
            self.conn.dialect().quote_identifier(&self.table),
            placeholders.join(", ")
        );

        self.conn.execute_prepared(&sql, &params)
    }

    fn name(&self) -> &str {
        "db"
    }
}
