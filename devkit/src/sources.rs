/*!
Sources aléatoires déterministes

Remplacent `EntropySource` dans les tests pour obtenir des valeurs exactes
(bornes incluses/exclues, ordre cpu puis mémoire).
*/

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use telemetry_core::RandomSource;

/// Rejoue une séquence fixe de valeurs unitaires, en boucle
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
    draws: Arc<AtomicUsize>,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceSource needs at least one value");
        Self { values, cursor: 0, draws: Arc::new(AtomicUsize::new(0)) }
    }

    /// Compteur partagé du nombre de tirages (survit aux clones)
    pub fn draw_counter(&self) -> Arc<AtomicUsize> {
        self.draws.clone()
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        self.draws.fetch_add(1, Ordering::Relaxed);
        value
    }
}

/// Renvoie toujours la même valeur
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub f64);

impl RandomSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
