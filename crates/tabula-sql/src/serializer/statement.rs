use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use tabula_core::stmt::{Delete, Filter, Insert, Select, Statement};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let limit = self.limit.map(|limit| (" LIMIT ", limit));

        if self.columns.is_empty() {
            fmt!(f, "SELECT * FROM " Ident(&self.table) filter limit);
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            fmt!(f, "SELECT " columns " FROM " Ident(&self.table) filter limit);
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.columns.is_empty() {
            match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, "INSERT INTO " Ident(&self.table) " () VALUES ()"),
                Flavor::Sqlite => fmt!(f, "INSERT INTO " Ident(&self.table) " DEFAULT VALUES"),
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(self.values.iter());

        fmt!(f, "INSERT INTO " Ident(&self.table) " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let filter = &self.filter;
        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " filter);
    }
}

impl ToSql for &Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl<A: ToSql, B: ToSql> ToSql for (A, B) {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.0 self.1);
    }
}
