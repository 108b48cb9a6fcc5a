use quiz_core::model::{FinalScore, ScoreTier};

pub const RESTART_HINT: &str =
    "You can pick another course in the sidebar and press (Re)start the quiz to play again.";

#[must_use]
pub fn tier_message(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Perfect => "Perfect, you have mastered this material!",
        ScoreTier::Good => "Very good, a little more revision and it will be perfect.",
        ScoreTier::Retry => "It is worth going over the course again and replaying the quiz.",
    }
}

/// End-of-quiz panel content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: String,
    pub tier: ScoreTier,
    pub message: &'static str,
    pub hint: &'static str,
}

#[must_use]
pub fn map_results(final_score: FinalScore) -> ResultsVm {
    let tier = final_score.tier();
    ResultsVm {
        headline: format!("Final score: {final_score}"),
        tier,
        message: tier_message(tier),
        hint: RESTART_HINT,
    }
}

impl ResultsVm {
    /// CSS modifier for the message banner.
    #[must_use]
    pub fn banner_class(&self) -> &'static str {
        match self.tier {
            ScoreTier::Perfect | ScoreTier::Good => "banner success",
            ScoreTier::Retry => "banner warning",
        }
    }
}
