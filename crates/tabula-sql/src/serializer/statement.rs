use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);

        fmt!(f, "SELECT * FROM " table_name);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let columns = Comma(self.values.columns().map(Ident));
        let values = Comma(self.values.values());

        fmt!(
            f, "INSERT INTO " table_name " (" columns ") VALUES (" values ") RETURNING *"
        );
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );
        let filter = &self.filter;

        fmt!(
            f, "UPDATE " table_name " SET " assignments " WHERE " filter " RETURNING *"
        );
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table_name " WHERE " filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Filter::Eq { column, value } => {
                let column = Ident(column);
                fmt!(f, column " = " value);
            }
        }
    }
}

/// `<column> = <placeholder>` inside a `SET` list
struct Assignment<'a>(&'a str, &'a stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(self.0);
        let value = self.1;

        fmt!(f, column " = " value);
    }
}
