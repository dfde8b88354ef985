//! Ordered catalog of selectable creatures.

use std::collections::HashSet;

use battle_core::{BattleError, Creature, CreatureError, ErrorSeverity};

/// Built-in creature lines: (name, hp, attack, defense, speed).
const BUILTIN: [(&str, u32, u32, u32, u32); 10] = [
    ("Bulbasaur", 45, 49, 49, 45),
    ("Charmander", 39, 52, 43, 65),
    ("Squirtle", 44, 48, 65, 43),
    ("Pikachu", 35, 55, 40, 90),
    ("Eevee", 55, 55, 50, 55),
    ("Jigglypuff", 115, 45, 20, 20),
    ("Meowth", 40, 45, 35, 90),
    ("Psyduck", 50, 52, 48, 55),
    ("Geodude", 40, 80, 100, 20),
    ("Snorlax", 160, 110, 65, 30),
];

/// Errors raised when building a [`CreatureCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("creature catalog is empty")]
    Empty,

    #[error("creature '{0}' appears more than once")]
    DuplicateName(String),

    #[error("invalid creature at position {position}: {source}")]
    InvalidCreature {
        position: usize,
        #[source]
        source: CreatureError,
    },
}

impl BattleError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "CATALOG_EMPTY",
            Self::DuplicateName(_) => "CATALOG_DUPLICATE_NAME",
            Self::InvalidCreature { .. } => "CATALOG_INVALID_CREATURE",
        }
    }
}

/// Non-empty, ordered list of creatures with unique names.
///
/// Order is significant: menus list creatures by 1-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureCatalog {
    creatures: Vec<Creature>,
}

impl CreatureCatalog {
    /// Validates and wraps a list of creatures.
    ///
    /// Names are compared case-insensitively for duplicates.
    pub fn new(creatures: Vec<Creature>) -> Result<Self, CatalogError> {
        if creatures.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(creatures.len());
        for (index, creature) in creatures.iter().enumerate() {
            creature
                .validate()
                .map_err(|source| CatalogError::InvalidCreature {
                    position: index + 1,
                    source,
                })?;
            if !seen.insert(creature.name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(creature.name.clone()));
            }
        }

        Ok(Self { creatures })
    }

    /// The ten built-in creatures.
    pub fn builtin() -> Self {
        let creatures = BUILTIN
            .iter()
            .map(|&(name, hp, attack, defense, speed)| Creature {
                name: name.to_string(),
                hp,
                attack,
                defense,
                speed,
            })
            .collect();
        Self { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Always false for a catalog built through [`CreatureCatalog::new`].
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Creatures in menu order; never empty.
    pub fn as_slice(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    /// Looks up a creature by 0-based index.
    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    /// Looks up a creature by 1-based menu position.
    pub fn select(&self, position: usize) -> Option<&Creature> {
        position.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Looks up a creature by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Creature> {
        self.creatures
            .iter()
            .find(|creature| creature.name.eq_ignore_ascii_case(name))
    }
}

impl Default for CreatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a CreatureCatalog {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.creatures.iter()
    }
}
