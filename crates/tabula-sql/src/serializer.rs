#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod value;

use crate::stmt::Statement;

use tabula_core::{driver::SqlFlavor, Error, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: SqlFlavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Renders `stmt` as SQL text, pushing each bind value onto `params` as
    /// its placeholder is written.
    ///
    /// Identifiers are written without quoting, so every table and column
    /// name must be a plain SQL identifier.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        for ident in stmt.identifiers() {
            if !is_plain_identifier(ident) {
                return Err(Error::invalid_statement(format!(
                    "`{ident}` is not a valid identifier"
                )));
            }
        }

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        Ok(ret)
    }

    pub fn flavor(&self) -> SqlFlavor {
        self.flavor
    }
}

fn is_plain_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
