//! Scoring-function constants consumed during receptor preparation.
//!
//! The scoring function itself lives outside this crate; receptor preparation
//! only needs its proximity cutoff to decide which atoms can ever influence a
//! partition cell.

/// The interaction cutoff surface of the downstream scoring function.
pub struct ScoringFunction;

impl ScoringFunction {
    /// Maximum distance in Angstroms at which a receptor atom can influence
    /// the scoring function.
    pub const CUTOFF: f64 = 8.0;
    /// Square of [`Self::CUTOFF`], the form used by distance comparisons.
    pub const CUTOFF_SQR: f64 = Self::CUTOFF * Self::CUTOFF;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_sqr_is_the_square_of_the_cutoff() {
        assert_eq!(ScoringFunction::CUTOFF_SQR, 64.0);
    }
}
