//! Final score remarks.

/// Share of correct answers as a percentage (0.0 for an empty quiz).
pub fn percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Qualitative tier picked from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    /// Every answer correct.
    Perfect,
    /// 80% or more.
    Excellent,
    /// 50% or more.
    Fair,
    /// Anything below.
    Completed,
}

impl Remark {
    /// Only the top tier compares exactly; the others are lower bounds.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage == 100.0 {
            Remark::Perfect
        } else if percentage >= 80.0 {
            Remark::Excellent
        } else if percentage >= 50.0 {
            Remark::Fair
        } else {
            Remark::Completed
        }
    }

    pub fn for_score(score: usize, total: usize) -> Self {
        Self::from_percentage(percentage(score, total))
    }

    pub fn message(self) -> &'static str {
        match self {
            Remark::Perfect => "Perfect! Outstanding work!",
            Remark::Excellent => "Excellent result!",
            Remark::Fair => "Not bad. Time for a review!",
            Remark::Completed => "Thanks for playing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Remark::for_score(3, 3), Remark::Perfect);
        assert_eq!(Remark::for_score(4, 5), Remark::Excellent);
        assert_eq!(Remark::for_score(5, 10), Remark::Fair); // exactly 50%
        assert_eq!(Remark::for_score(2, 5), Remark::Completed);
        assert_eq!(Remark::for_score(0, 5), Remark::Completed);
    }

    #[test]
    fn test_exact_half_is_fair_for_any_size() {
        for n in 1..=20 {
            assert_eq!(Remark::for_score(n, 2 * n), Remark::Fair);
        }
    }

    #[test]
    fn test_just_below_top_is_excellent() {
        assert_eq!(Remark::for_score(9, 10), Remark::Excellent);
        assert_eq!(Remark::for_score(99, 100), Remark::Excellent);
    }

    #[test]
    fn test_percentage_of_empty_quiz() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(Remark::for_score(0, 0), Remark::Completed);
    }
}
