#[derive(Debug)]
pub struct Capability {
    /// SQL dialect the database speaks.
    pub flavor: SqlFlavor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlFlavor {
    /// `$n` placeholders
    Postgresql,

    /// `?n` placeholders
    Sqlite,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        flavor: SqlFlavor::Sqlite,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        flavor: SqlFlavor::Postgresql,
    };
}
