use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::NO_PRIZE_LABEL;

// Constants for frontend animation
pub const SPIN_ANIMATION_MS: u32 = 4000;
pub const RESULT_REVEAL_DELAY_MS: u32 = 4200;
pub const MIN_FULL_SPINS: u32 = 8;
pub const MAX_FULL_SPINS: u32 = 12;

/// One wheel segment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub label: String,
    pub chance: f64,
    pub color_token: String,
    pub is_win: bool,
}

impl Prize {
    /// Any label other than the "no prize" one counts as a win.
    pub fn new(label: impl Into<String>, chance: f64, color_token: impl Into<String>) -> Self {
        let label = label.into();
        let is_win = label != NO_PRIZE_LABEL;
        Self {
            label,
            chance,
            color_token: color_token.into(),
            is_win,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    InvalidChance { label: String, chance: f64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Prize catalog has no entries"),
            Self::InvalidChance { label, chance } => {
                write!(f, "Invalid chance {} for prize {}", chance, label)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, weighted list of wheel segments. Never empty.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
}

static TAQUERIA_CATALOG: Lazy<PrizeCatalog> = Lazy::new(|| PrizeCatalog {
    prizes: vec![
        Prize::new("🌮 1 Taco Gratis", 0.15, "#DC2626"),
        Prize::new("🥤 1 Refresco Gratis", 0.15, "#D97706"),
        Prize::new("💰 10% Descuento", 0.15, "#DC2626"),
        Prize::new("💰 20% Descuento", 0.15, "#D97706"),
        Prize::new(NO_PRIZE_LABEL, 0.2, "#1F1F1F"),
        Prize::new(NO_PRIZE_LABEL, 0.2, "#1F1F1F"),
    ],
});

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        if prizes.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(bad) = prizes.iter().find(|p| !p.chance.is_finite() || p.chance < 0.0) {
            return Err(CatalogError::InvalidChance {
                label: bad.label.clone(),
                chance: bad.chance,
            });
        }
        let total: f64 = prizes.iter().map(|p| p.chance).sum();
        if (total - 1.0).abs() > 1e-6 {
            log::warn!("Prize chances sum to {:.4}, expected 1.0", total);
        }
        Ok(Self { prizes })
    }

    /// The promotion's default wheel.
    pub fn taqueria() -> Self {
        TAQUERIA_CATALOG.clone()
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }
}

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self::taqueria()
    }
}

/// What the wheel landed on. Consumed once by the view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeOutcome {
    pub index: usize,
    pub label: String,
    pub color_token: String,
    pub is_win: bool,
    pub target_rotation_degrees: f64,
}

/// Picks a segment from a uniform draw in `[0, 1)` by walking the cumulative
/// chances. Rounding that leaves the draw unmatched lands on the last entry.
pub fn select_index(catalog: &PrizeCatalog, draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, prize) in catalog.prizes.iter().enumerate() {
        cumulative += prize.chance;
        if draw < cumulative {
            return index;
        }
    }
    catalog.len() - 1
}

pub fn resolve(catalog: &PrizeCatalog, draw: f64) -> PrizeOutcome {
    resolve_with_spins(catalog, draw, MIN_FULL_SPINS)
}

pub fn resolve_with_spins(catalog: &PrizeCatalog, draw: f64, spins: u32) -> PrizeOutcome {
    let index = select_index(catalog, draw);
    let prize = &catalog.prizes[index];
    PrizeOutcome {
        index,
        label: prize.label.clone(),
        color_token: prize.color_token.clone(),
        is_win: prize.is_win,
        target_rotation_degrees: resolve_rotation(index, catalog.len(), spins.max(MIN_FULL_SPINS)),
    }
}

/// Final wheel angle that brings segment `index`'s center under the fixed
/// pointer at 0°. The wheel turns, so the target is the segment center
/// mirrored.
pub fn resolve_rotation(index: usize, catalog_size: usize, spins: u32) -> f64 {
    let segment = segment_angle(catalog_size);
    let center = index as f64 * segment + segment / 2.0;
    spins as f64 * 360.0 + (360.0 - center)
}

/// Inverse of [`resolve_rotation`]: the segment under the pointer after
/// turning the wheel by `rotation` degrees.
pub fn landed_index(rotation: f64, catalog_size: usize) -> usize {
    let resting = rotation.rem_euclid(360.0);
    let under_pointer = (360.0 - resting).rem_euclid(360.0);
    let index = (under_pointer / segment_angle(catalog_size)).floor() as usize;
    index.min(catalog_size.saturating_sub(1))
}

pub fn segment_angle(catalog_size: usize) -> f64 {
    360.0 / catalog_size.max(1) as f64
}

/// A uniform draw in `[0, 1)` and a full-spin count for the animation.
pub fn draw_spin<R: Rng + ?Sized>(rng: &mut R) -> (f64, u32) {
    let draw: f64 = rng.gen();
    let spins = rng.gen_range(MIN_FULL_SPINS..=MAX_FULL_SPINS);
    (draw, spins)
}

/// Draws a prize and a spin count from `rng`.
pub fn spin<R: Rng + ?Sized>(catalog: &PrizeCatalog, rng: &mut R) -> PrizeOutcome {
    let (draw, spins) = draw_spin(rng);
    resolve_with_spins(catalog, draw, spins)
}

/// Code shown to winners to claim their prize in the restaurant.
pub fn claim_code(now: i64) -> String {
    let digits = now.unsigned_abs().to_string();
    let tail = &digits[digits.len().saturating_sub(6)..];
    format!("{}{}", crate::constants::CLAIM_CODE_PREFIX, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_taqueria_catalog() {
        let catalog = PrizeCatalog::taqueria();
        assert_eq!(catalog.len(), 6);
        let wins = catalog.prizes().iter().filter(|p| p.is_win).count();
        assert_eq!(wins, 4);
        let total: f64 = catalog.prizes().iter().map(|p| p.chance).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_validation() {
        assert_eq!(PrizeCatalog::new(vec![]), Err(CatalogError::Empty));
        let bad = PrizeCatalog::new(vec![Prize::new("Taco", -0.1, "#000")]);
        assert!(matches!(bad, Err(CatalogError::InvalidChance { .. })));
        let nan = PrizeCatalog::new(vec![Prize::new("Taco", f64::NAN, "#000")]);
        assert!(nan.is_err());
    }

    #[test]
    fn test_select_index_boundaries() {
        let catalog = PrizeCatalog::taqueria();
        assert_eq!(select_index(&catalog, 0.0), 0);
        assert_eq!(select_index(&catalog, 0.1499), 0);
        assert_eq!(select_index(&catalog, 0.15), 1);
        assert_eq!(select_index(&catalog, 0.59), 3);
        assert_eq!(select_index(&catalog, 0.61), 4);
        assert_eq!(select_index(&catalog, 0.81), 5);
        assert_eq!(select_index(&catalog, 0.999_999), 5);
    }

    #[test]
    fn test_short_catalog_falls_back_to_last_entry() {
        let catalog = PrizeCatalog::new(vec![
            Prize::new("Taco", 0.3, "#DC2626"),
            Prize::new(NO_PRIZE_LABEL, 0.3, "#1F1F1F"),
        ])
        .unwrap();
        let outcome = resolve(&catalog, 0.95);
        assert_eq!(outcome.index, 1);
        assert!(!outcome.is_win);
    }

    #[test]
    fn test_outcome_carries_prize_fields() {
        let outcome = resolve(&PrizeCatalog::taqueria(), 0.2);
        assert_eq!(outcome.index, 1);
        assert_eq!(outcome.label, "🥤 1 Refresco Gratis");
        assert_eq!(outcome.color_token, "#D97706");
        assert!(outcome.is_win);
        assert_eq!(outcome.target_rotation_degrees, 8.0 * 360.0 + 270.0);
    }

    #[test]
    fn test_rotation_formula() {
        assert_eq!(resolve_rotation(0, 6, 8), 8.0 * 360.0 + 330.0);
        assert_eq!(resolve_rotation(5, 6, 10), 10.0 * 360.0 + 30.0);
        assert_eq!(resolve_rotation(1, 4, 0), 225.0);
    }

    #[test]
    fn test_rotation_lands_on_selected_segment() {
        for size in [2, 3, 6, 8, 13] {
            for index in 0..size {
                for spins in [MIN_FULL_SPINS, 9, MAX_FULL_SPINS] {
                    let rotation = resolve_rotation(index, size, spins);
                    assert_eq!(landed_index(rotation, size), index, "size {size} index {index}");
                    assert_eq!(rotation, resolve_rotation(index, size, spins));
                }
            }
        }
    }

    #[test]
    fn test_resolve_enforces_minimum_spins() {
        let outcome = resolve_with_spins(&PrizeCatalog::taqueria(), 0.0, 1);
        assert!(outcome.target_rotation_degrees >= MIN_FULL_SPINS as f64 * 360.0);
    }

    #[test]
    fn test_spin_distribution_matches_chances() {
        let catalog = PrizeCatalog::taqueria();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 200_000;
        let mut counts = vec![0usize; catalog.len()];
        for _ in 0..draws {
            let outcome = spin(&catalog, &mut rng);
            assert!(outcome.index < catalog.len());
            let turns = (outcome.target_rotation_degrees / 360.0).floor() as u32;
            assert!((MIN_FULL_SPINS..=MAX_FULL_SPINS).contains(&turns));
            counts[outcome.index] += 1;
        }
        for (prize, count) in catalog.prizes().iter().zip(counts) {
            let observed = count as f64 / draws as f64;
            assert!(
                (observed - prize.chance).abs() < 0.01,
                "{} observed {:.4} expected {}",
                prize.label,
                observed,
                prize.chance
            );
        }
    }

    #[test]
    fn test_claim_code_uses_last_six_digits() {
        assert_eq!(claim_code(1_700_000_123_456), "TACO-123456");
        assert_eq!(claim_code(42), "TACO-42");
    }
}
