//! ID generation utilities.

use uuid::Uuid;

/// ID generator for entities.
///
/// Identifiers are assigned by the service layer at creation time, never by
/// the database.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new random UUID v4.
    #[must_use]
    pub fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_v4() {
        let id_gen = IdGenerator::new();
        let id = id_gen.generate();

        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_generate_is_unique() {
        let id_gen = IdGenerator::new();
        let id1 = id_gen.generate();
        let id2 = id_gen.generate();

        assert_ne!(id1, id2);
    }
}
