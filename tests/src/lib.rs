pub mod db;

pub use std_util::prelude::*;
pub use tabula_sql::Flavor;

use tabula::Session;
use tabula_sql::Serializer;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    async fn connect(&self) -> tabula::Result<Session>;

    fn flavor(&self) -> Flavor;

    /// Prefix applied to every table a test creates.
    fn table_prefix(&self) -> String {
        String::new()
    }

    async fn setup(&self) -> Fixture {
        let session = self.connect().await.unwrap();
        Fixture {
            session,
            flavor: self.flavor(),
            prefix: self.table_prefix(),
            created: vec![],
        }
    }
}

/// A connected session plus the tables a test created through it.
pub struct Fixture {
    pub session: Session,
    flavor: Flavor,
    prefix: String,
    created: Vec<String>,
}

/// Table names of the departments/users scenario.
pub struct Staff {
    pub departments: String,
    pub users: String,
}

impl Fixture {
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The prefixed name of `name`.
    pub fn table(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    pub fn quote(&self, name: &str) -> String {
        Serializer::new(self.flavor).quote_ident(name)
    }

    pub async fn exec(&mut self, sql: &str) {
        self.session
            .connection()
            .unwrap()
            .execute_batch(sql)
            .await
            .unwrap();
    }

    /// Creates `name` with an auto-generated integer `id` column followed by
    /// `columns`. Each `(column, table)` in `references` adds a foreign key to
    /// `table(id)`. Returns the prefixed table name.
    pub async fn create_table(
        &mut self,
        name: &str,
        columns: &[(&str, &str)],
        references: &[(&str, &str)],
    ) -> String {
        let table = self.table(name);

        let id = match self.flavor {
            Flavor::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", self.quote("id")),
            Flavor::Mysql => format!("{} INT AUTO_INCREMENT PRIMARY KEY", self.quote("id")),
        };

        let mut defs = vec![id];
        defs.extend(
            columns
                .iter()
                .map(|(column, ty)| format!("{} {ty}", self.quote(column))),
        );
        defs.extend(references.iter().map(|(column, referenced)| {
            format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                self.quote(column),
                self.quote(referenced),
                self.quote("id")
            )
        }));

        let drop = format!("DROP TABLE IF EXISTS {};", self.quote(&table));
        let create = format!("CREATE TABLE {} ({});", self.quote(&table), defs.join(", "));

        self.exec(&drop).await;
        self.exec(&create).await;
        self.created.push(table.clone());
        table
    }

    /// Inserts literal rows. Every value is passed to SQL as written.
    pub async fn seed<const N: usize>(
        &mut self,
        table: &str,
        columns: [&str; N],
        rows: &[[&str; N]],
    ) {
        let columns = columns
            .iter()
            .map(|column| self.quote(column))
            .collect::<Vec<_>>()
            .join(", ");

        for row in rows {
            let sql = format!(
                "INSERT INTO {} ({columns}) VALUES ({});",
                self.quote(table),
                row.join(", ")
            );
            self.exec(&sql).await;
        }
    }

    /// `departments(id, name)` with Sales, Ops and Support, and
    /// `users(id, name, dept_id -> departments, hired DATE)` with two rows.
    pub async fn staff(&mut self) -> Staff {
        let departments = self
            .create_table("departments", &[("name", "VARCHAR(50)")], &[])
            .await;
        self.seed(
            &departments,
            ["name"],
            &[["'Sales'"], ["'Ops'"], ["'Support'"]],
        )
        .await;

        let users = self
            .create_table(
                "users",
                &[("name", "VARCHAR(50)"), ("dept_id", "INT"), ("hired", "DATE")],
                &[("dept_id", departments.as_str())],
            )
            .await;
        self.seed(
            &users,
            ["name", "dept_id", "hired"],
            &[
                ["'Ada'", "1", "'2020-01-15'"],
                ["'Grace'", "2", "'2019-07-01'"],
            ],
        )
        .await;

        Staff { departments, users }
    }

    /// Drops the created tables, newest first.
    pub async fn drop_tables(&mut self) {
        while let Some(table) = self.created.pop() {
            let sql = format!("DROP TABLE IF EXISTS {};", self.quote(&table));
            self.exec(&sql).await;
        }
    }

    pub async fn teardown(mut self) {
        self.drop_tables().await;
        self.session.disconnect().await.unwrap();
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[tokio::test]
                $( #[$attrs] )*
                async fn $f() {
                    $crate::init_logging();
                    super::$f($crate::db::sqlite::SetupSqlite::new()).await;
                }
            )*
        }

        #[cfg(feature = "mysql")]
        mod mysql {
            $(
                #[tokio::test]
                $( #[$attrs] )*
                async fn $f() {
                    $crate::init_logging();
                    super::$f($crate::db::mysql::SetupMySQL::new()).await;
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
