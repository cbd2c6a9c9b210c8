//! Name generation from fixed French name lists.

use crate::algorithm::random::RandomSource;
use crate::models::Identity;

/// Common French family names
pub const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Thomas", "Petit", "Robert", "Richard", "Durand", "Dubois", "Moreau",
    "Laurent", "Simon", "Michel", "Lefebvre", "Leroy", "Roux", "David", "Bertrand", "Morel",
    "Fournier", "Girard", "Bonnet", "Dupont", "Lambert", "Fontaine", "Rousseau", "Vincent",
    "Muller", "Lefevre", "Faure", "Andre", "Mercier", "Blanc", "Guerin", "Boyer", "Garnier",
    "Chevalier", "Francois", "Legrand", "Gauthier", "Garcia", "Perrin", "Robin", "Clement",
    "Morin", "Nicolas", "Henry", "Roussel", "Mathieu", "Gautier", "Masson",
];

/// Common French given names
pub const FIRST_NAMES: &[&str] = &[
    "Camille", "Louise", "Emma", "Jade", "Alice", "Chloé", "Léa", "Manon", "Inès", "Sarah",
    "Julie", "Nathalie", "Isabelle", "Sylvie", "Catherine", "Martine", "Christine", "Monique",
    "Hélène", "Claire", "Gabriel", "Louis", "Raphaël", "Jules", "Adam", "Lucas", "Hugo",
    "Arthur", "Nathan", "Paul", "Thomas", "Nicolas", "Julien", "Pierre", "Philippe", "Michel",
    "Alain", "Patrick", "Jean", "Bernard", "Éric", "Laurent", "Olivier", "Sébastien", "Yves",
    "Françoise", "Jacqueline", "Anne", "Marie", "Lucie",
];

/// Name generator that draws names from the fixed lists.
pub struct NameGenerator;

impl NameGenerator {
    /// Draw a last name, then a first name (one draw each).
    pub fn identity<R: RandomSource + ?Sized>(rng: &mut R) -> Identity {
        let last_name = LAST_NAMES[rng.index(LAST_NAMES.len())].to_string();
        let first_name = FIRST_NAMES[rng.index(FIRST_NAMES.len())].to_string();
        Identity {
            last_name,
            first_name,
        }
    }
}
