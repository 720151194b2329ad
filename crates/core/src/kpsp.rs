//! KPSP developmental pre-screening evaluation.
//!
//! The Kuesioner Pra Skrining Perkembangan is administered as a fixed ordered
//! list of yes/no questions chosen by age bracket. The evaluator selects the
//! nearest bracket at or below the child's age (never a future bracket),
//! checks the answer count against that bracket's question list, and scores
//! the number of "yes" answers against the standard category cutoffs.

mod questions;

use serde::{Deserialize, Serialize};

use crate::config::{GrowthConfig, KpspThresholds};
use crate::{GrowthError, GrowthResult};

/// Screening brackets (age in months) with a defined question set.
pub const BRACKETS: [u32; 16] = [3, 6, 9, 12, 15, 18, 21, 24, 30, 36, 42, 48, 54, 60, 66, 72];

/// Developmental-risk category of a completed screening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpspCategory {
    Normal,
    Suspect,
    Deviant,
}

impl KpspCategory {
    /// Indonesian display label.
    pub fn label(self) -> &'static str {
        match self {
            KpspCategory::Normal => "Perkembangan Sesuai Usia",
            KpspCategory::Suspect => "Perkembangan Meragukan",
            KpspCategory::Deviant => "Kemungkinan Penyimpangan Perkembangan",
        }
    }

    /// Follow-up recommendation shown to the caregiver.
    pub fn recommendation(self) -> &'static str {
        match self {
            KpspCategory::Normal => {
                "Perkembangan anak sesuai usia. Lanjutkan stimulasi sesuai kelompok umur."
            }
            KpspCategory::Suspect => {
                "Tingkatkan stimulasi dan ulangi skrining KPSP dalam 2 minggu."
            }
            KpspCategory::Deviant => {
                "Segera rujuk ke fasilitas kesehatan untuk pemeriksaan tumbuh kembang lebih lanjut."
            }
        }
    }

    /// Stable machine-readable code, matching the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            KpspCategory::Normal => "normal",
            KpspCategory::Suspect => "suspect",
            KpspCategory::Deviant => "deviant",
        }
    }

    /// UI colour associated with the category.
    pub fn colour(self) -> &'static str {
        match self {
            KpspCategory::Normal => "#4caf50",
            KpspCategory::Suspect => "#ff9800",
            KpspCategory::Deviant => "#f44336",
        }
    }
}

/// Outcome of scoring one answer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpspResult {
    /// Bracket whose question set was scored.
    pub bracket: u32,
    /// Count of "yes" answers.
    pub score: u32,
    pub total_questions: usize,
    pub category: KpspCategory,
}

/// Scores KPSP answer sets against the bracket question lists.
#[derive(Clone, Debug)]
pub struct KpspEvaluator {
    thresholds: KpspThresholds,
}

impl KpspEvaluator {
    /// Create an evaluator from the resolved domain configuration.
    pub fn new(config: &GrowthConfig) -> Self {
        Self {
            thresholds: *config.kpsp(),
        }
    }

    /// Select the nearest bracket at or below `age_months`.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::NoBracketForAge` for ages below the first bracket.
    pub fn bracket_for(&self, age_months: u32) -> GrowthResult<u32> {
        BRACKETS
            .iter()
            .rev()
            .find(|&&b| b <= age_months)
            .copied()
            .ok_or(GrowthError::NoBracketForAge(age_months))
    }

    /// The bracket and ordered question list appropriate for `age_months`.
    ///
    /// # Errors
    ///
    /// Same as [`KpspEvaluator::bracket_for`].
    pub fn questions_for(&self, age_months: u32) -> GrowthResult<(u32, &'static [&'static str])> {
        let bracket = self.bracket_for(age_months)?;
        // Every entry in BRACKETS has a question set.
        let questions = questions::for_bracket(bracket)
            .ok_or(GrowthError::NoBracketForAge(age_months))?;
        Ok((bracket, questions))
    }

    /// Evaluate an ordered answer set for a child of `age_months`.
    ///
    /// # Errors
    ///
    /// - `GrowthError::NoBracketForAge` if no bracket exists at or below the age.
    /// - `GrowthError::AnswerCountMismatch` if the answer count differs from the
    ///   bracket's question count.
    pub fn evaluate(&self, age_months: u32, answers: &[bool]) -> GrowthResult<KpspResult> {
        let (bracket, questions) = self.questions_for(age_months)?;

        if answers.len() != questions.len() {
            return Err(GrowthError::AnswerCountMismatch {
                bracket,
                expected: questions.len(),
                actual: answers.len(),
            });
        }

        let score = answers.iter().filter(|&&yes| yes).count() as u32;
        let category = if score >= self.thresholds.normal_min {
            KpspCategory::Normal
        } else if score >= self.thresholds.suspect_min {
            KpspCategory::Suspect
        } else {
            KpspCategory::Deviant
        };

        Ok(KpspResult {
            bracket,
            score,
            total_questions: questions.len(),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> KpspEvaluator {
        KpspEvaluator::new(&GrowthConfig::permenkes())
    }

    #[test]
    fn every_bracket_has_ten_questions() {
        let e = evaluator();
        for bracket in BRACKETS {
            let (selected, questions) = e.questions_for(bracket).expect("bracket defined");
            assert_eq!(selected, bracket);
            assert_eq!(questions.len(), 10, "bracket {bracket}");
        }
    }

    #[test]
    fn bracket_selection_never_picks_a_future_bracket() {
        let e = evaluator();
        assert_eq!(e.bracket_for(3).unwrap(), 3);
        assert_eq!(e.bracket_for(4).unwrap(), 3);
        assert_eq!(e.bracket_for(13).unwrap(), 12);
        assert_eq!(e.bracket_for(26).unwrap(), 24);
        assert_eq!(e.bracket_for(35).unwrap(), 30);
        assert_eq!(e.bracket_for(72).unwrap(), 72);
        assert_eq!(e.bracket_for(100).unwrap(), 72);
    }

    #[test]
    fn ages_below_first_bracket_are_rejected() {
        let e = evaluator();
        for age in [0, 1, 2] {
            let err = e.evaluate(age, &[true; 10]).expect_err("no bracket yet");
            assert!(matches!(err, GrowthError::NoBracketForAge(a) if a == age));
        }
    }

    #[test]
    fn answer_count_mismatch_is_rejected() {
        let e = evaluator();
        let answers = [true, false, true, true, false];
        let err = e.evaluate(12, &answers).expect_err("five answers, ten questions");
        match err {
            GrowthError::AnswerCountMismatch {
                bracket,
                expected,
                actual,
            } => {
                assert_eq!(bracket, 12);
                assert_eq!(expected, 10);
                assert_eq!(actual, 5);
            }
            other => panic!("expected AnswerCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn all_yes_is_normal() {
        let e = evaluator();
        for bracket in BRACKETS {
            let result = e.evaluate(bracket, &[true; 10]).expect("valid answer set");
            assert_eq!(result.score, 10);
            assert_eq!(result.category, KpspCategory::Normal);
        }
    }

    #[test]
    fn all_no_is_deviant() {
        let e = evaluator();
        for bracket in BRACKETS {
            let result = e.evaluate(bracket, &[false; 10]).expect("valid answer set");
            assert_eq!(result.score, 0);
            assert_eq!(result.category, KpspCategory::Deviant);
        }
    }

    #[test]
    fn category_cutoffs_at_each_score() {
        let e = evaluator();
        let expectations = [
            (10, KpspCategory::Normal),
            (9, KpspCategory::Normal),
            (8, KpspCategory::Suspect),
            (7, KpspCategory::Suspect),
            (6, KpspCategory::Deviant),
            (0, KpspCategory::Deviant),
        ];

        for (yes_count, expected) in expectations {
            let mut answers = [false; 10];
            for answer in answers.iter_mut().take(yes_count) {
                *answer = true;
            }
            let result = e.evaluate(24, &answers).expect("valid answer set");
            assert_eq!(result.score as usize, yes_count);
            assert_eq!(result.category, expected, "score {yes_count}");
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let e = evaluator();
        let answers = [true, true, false, true, true, true, true, false, true, true];
        let first = e.evaluate(18, &answers).unwrap();
        let second = e.evaluate(18, &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn suspect_result_recommends_rescreen() {
        assert!(KpspCategory::Suspect.recommendation().contains("2 minggu"));
        assert!(KpspCategory::Deviant.recommendation().contains("rujuk"));
    }
}
