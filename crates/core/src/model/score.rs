use std::fmt;

/// Result band used to pick the closing message of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Every question answered correctly.
    Perfect,
    /// At least 70% but not everything.
    Good,
    /// Below 70%.
    Retry,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    score: usize,
    total: usize,
}

impl FinalScore {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of correct answers; `0.0` for an empty session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }

    // Integer comparison keeps 7/10 exactly on the 70% boundary.
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        if self.total > 0 && self.score == self.total {
            ScoreTier::Perfect
        } else if self.score.saturating_mul(10) >= self.total.saturating_mul(7) && self.total > 0 {
            ScoreTier::Good
        } else {
            ScoreTier::Retry
        }
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({:.1}%)",
            self.score,
            self.total,
            self.percentage()
        )
    }
}
