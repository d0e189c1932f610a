use super::Serializer;

/// SQL dialect targeted by a [`Serializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Mysql,
    Sqlite,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }
}
