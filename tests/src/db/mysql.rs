use tabula::Session;
use tabula_sql::Flavor;

use crate::{isolation::TestIsolation, Setup};

/// Tests share one database and keep apart through table prefixes.
pub struct SetupMySQL {
    isolation: TestIsolation,
}

impl SetupMySQL {
    pub fn new() -> Self {
        Self {
            isolation: TestIsolation::new(),
        }
    }
}

impl Default for SetupMySQL {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupMySQL {
    async fn connect(&self) -> tabula::Result<Session> {
        let url = std::env::var("TABULA_TEST_MYSQL_URL")
            .unwrap_or_else(|_| "mysql://localhost:3306/tabula_test".to_string());

        Session::connect(&url).await
    }

    fn flavor(&self) -> Flavor {
        Flavor::Mysql
    }

    fn table_prefix(&self) -> String {
        self.isolation.table_prefix()
    }
}
