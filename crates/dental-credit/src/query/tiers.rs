/// Ordered threshold table mapping a numeric score to a tier.
///
/// Thresholds are held in descending `min_inclusive` order and scanned top
/// down; the catch-all covers everything below the lowest bound, so every
/// finite score lands in exactly one tier.
#[derive(Debug, Clone)]
pub struct TierTable<T: Copy> {
    thresholds: Vec<(f64, T)>,
    fallback: T,
}

impl<T: Copy> TierTable<T> {
    pub fn new(mut thresholds: Vec<(f64, T)>, fallback: T) -> Self {
        thresholds.sort_by(|a, b| b.0.total_cmp(&a.0));
        Self {
            thresholds,
            fallback,
        }
    }

    pub fn classify(&self, score: f64) -> T {
        self.thresholds
            .iter()
            .find(|(min_inclusive, _)| score >= *min_inclusive)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.fallback)
    }
}
