use std::time::{Duration, Instant};

/// How long the answered question stays on screen before auto-advancing,
/// so the user can read the correctness markers and explanation.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2500);

/// Mutable per-quiz progress, reset at quiz start and on retry.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub current_index: usize,
    pub score: usize,
    pub selected_answer: Option<usize>,
    /// Deadline for the pending auto-advance. Present only between an answer
    /// being recorded and the advance firing; cleared on navigation so a
    /// stale timer can never mutate a discarded session.
    pub advance_at: Option<Instant>,
}

impl SessionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn answer_pending(&self) -> bool {
        self.selected_answer.is_some()
    }
}

/// Accuracy over a finished quiz, as a whole percentage.
pub fn accuracy_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Qualitative performance label shown on the summary screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Tier {
    Elite,
    Strong,
    Average,
}

impl Tier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Tier::Elite
        } else if percentage >= 50 {
            Tier::Strong
        } else {
            Tier::Average
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_blank() {
        let session = SessionState::default();
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.selected_answer, None);
        assert_eq!(session.advance_at, None);
        assert!(!session.answer_pending());
    }

    #[test]
    fn reset_clears_progress() {
        let mut session = SessionState {
            current_index: 3,
            score: 2,
            selected_answer: Some(1),
            advance_at: Some(Instant::now()),
        };

        session.reset();

        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.selected_answer, None);
        assert_eq!(session.advance_at, None);
    }

    #[test]
    fn accuracy_is_rounded_percentage() {
        assert_eq!(accuracy_percentage(4, 5), 80);
        assert_eq!(accuracy_percentage(2, 5), 40);
        assert_eq!(accuracy_percentage(5, 5), 100);
        assert_eq!(accuracy_percentage(0, 5), 0);
        assert_eq!(accuracy_percentage(1, 3), 33);
        assert_eq!(accuracy_percentage(2, 3), 67);
    }

    #[test]
    fn accuracy_of_empty_quiz_is_zero() {
        assert_eq!(accuracy_percentage(0, 0), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_percentage(100), Tier::Elite);
        assert_eq!(Tier::from_percentage(80), Tier::Elite);
        assert_eq!(Tier::from_percentage(79), Tier::Strong);
        assert_eq!(Tier::from_percentage(50), Tier::Strong);
        assert_eq!(Tier::from_percentage(49), Tier::Average);
        assert_eq!(Tier::from_percentage(0), Tier::Average);
    }

    #[test]
    fn tier_display_labels() {
        assert_eq!(Tier::Elite.to_string(), "Elite");
        assert_eq!(Tier::Strong.to_string(), "Strong");
        assert_eq!(Tier::Average.to_string(), "Average");
    }

    #[test]
    fn summary_screen_examples() {
        // 4/5 -> 80% -> Elite; 2/5 -> 40% -> Average
        assert_eq!(Tier::from_percentage(accuracy_percentage(4, 5)), Tier::Elite);
        assert_eq!(
            Tier::from_percentage(accuracy_percentage(2, 5)),
            Tier::Average
        );
    }
}
