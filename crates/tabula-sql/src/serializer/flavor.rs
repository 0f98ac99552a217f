use super::Serializer;

use tabula_core::driver::SqlFlavor;

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: SqlFlavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: SqlFlavor::Postgresql,
        }
    }

    pub fn for_flavor(flavor: SqlFlavor) -> Serializer {
        Serializer { flavor }
    }
}
