/*!
# Telemetry DevKit - Utilitaires de test

Bibliothèque facilitant les tests du kernel et du batch avec:
- Sources aléatoires déterministes (valeurs rejouées)
- Fixtures d'assets statiques dans un répertoire temporaire
- Assertions sur le format des lignes de télémétrie
*/

pub mod sources;
pub mod fixtures;
pub mod test_utils;

pub use sources::{ConstantSource, SequenceSource};
pub use fixtures::AssetFixture;
pub use test_utils::{assert_line_format, init_test_logging};
