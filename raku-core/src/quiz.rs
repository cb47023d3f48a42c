//! Quiz engine: per-question answer and reveal state
//!
//! Each question moves `Unanswered -> Selected -> Revealed`. Picking a
//! different choice after the reveal goes back to `Selected`, so a changed
//! answer never shows the verdict of the previous one.

use crate::error::QuizError;
use crate::types::Quiz;
use serde::Serialize;

/// Where a single question stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", content = "choice", rename_all = "snake_case")]
pub enum AnswerPhase {
    #[default]
    Unanswered,
    Selected(usize),
    Revealed(usize),
}

/// Ephemeral state of one rendered question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuizAnswerState {
    phase: AnswerPhase,
    translation_shown: bool,
}

impl QuizAnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    /// The chosen index, revealed or not
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            AnswerPhase::Unanswered => None,
            AnswerPhase::Selected(i) | AnswerPhase::Revealed(i) => Some(i),
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, AnswerPhase::Revealed(_))
    }

    /// Whether the "check answer" control is enabled
    pub fn can_reveal(&self) -> bool {
        self.selected().is_some()
    }

    /// Choose an answer; hides any verdict shown for the previous choice
    pub fn select_choice(&mut self, index: usize, choices: usize) -> Result<(), QuizError> {
        if index >= choices {
            return Err(QuizError::ChoiceOutOfRange { index, choices });
        }
        self.phase = AnswerPhase::Selected(index);
        Ok(())
    }

    /// Show the verdict. Returns `false` and changes nothing when no choice
    /// has been made.
    pub fn reveal(&mut self) -> bool {
        match self.selected() {
            Some(i) => {
                self.phase = AnswerPhase::Revealed(i);
                true
            }
            None => false,
        }
    }

    /// Verdict for the revealed choice; `None` until revealed.
    /// An answer index outside the choices is never matched.
    pub fn is_correct(&self, quiz: &Quiz) -> Option<bool> {
        match self.phase {
            AnswerPhase::Revealed(i) => Some(quiz.answer() == Some(i)),
            _ => None,
        }
    }

    pub fn translation_shown(&self) -> bool {
        self.translation_shown
    }

    pub fn toggle_translation(&mut self) {
        self.translation_shown = !self.translation_shown;
    }
}

/// Outcome shown after revealing a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    /// `answer` is the correct choice markup, when the quiz data has one
    Incorrect { answer: Option<String> },
}

/// Running tally for a story's quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuizScore {
    pub revealed: usize,
    pub correct: usize,
    pub total: usize,
}

/// Answer state for every quiz of one displayed story
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    quizzes: &'a [Quiz],
    answers: Vec<QuizAnswerState>,
}

impl<'a> QuizSession<'a> {
    pub fn new(quizzes: &'a [Quiz]) -> Self {
        Self {
            quizzes,
            answers: vec![QuizAnswerState::new(); quizzes.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn quiz(&self, quiz: usize) -> Result<&'a Quiz, QuizError> {
        self.quizzes.get(quiz).ok_or(QuizError::UnknownQuiz(quiz))
    }

    pub fn state(&self, quiz: usize) -> Result<&QuizAnswerState, QuizError> {
        self.answers.get(quiz).ok_or(QuizError::UnknownQuiz(quiz))
    }

    fn state_mut(&mut self, quiz: usize) -> Result<&mut QuizAnswerState, QuizError> {
        self.answers.get_mut(quiz).ok_or(QuizError::UnknownQuiz(quiz))
    }

    pub fn select_choice(&mut self, quiz: usize, choice: usize) -> Result<(), QuizError> {
        let choices = self.quiz(quiz)?.choices().len();
        self.state_mut(quiz)?.select_choice(choice, choices)
    }

    pub fn reveal(&mut self, quiz: usize) -> Result<bool, QuizError> {
        Ok(self.state_mut(quiz)?.reveal())
    }

    pub fn toggle_translation(&mut self, quiz: usize) -> Result<(), QuizError> {
        self.state_mut(quiz)?.toggle_translation();
        Ok(())
    }

    pub fn is_correct(&self, quiz: usize) -> Result<Option<bool>, QuizError> {
        Ok(self.state(quiz)?.is_correct(self.quiz(quiz)?))
    }

    /// Verdict for a revealed question
    pub fn verdict(&self, quiz: usize) -> Result<Option<Verdict>, QuizError> {
        let q = self.quiz(quiz)?;
        Ok(self.state(quiz)?.is_correct(q).map(|correct| {
            if correct {
                Verdict::Correct
            } else {
                Verdict::Incorrect {
                    answer: q.answer_text().map(str::to_string),
                }
            }
        }))
    }

    pub fn score(&self) -> QuizScore {
        let mut score = QuizScore {
            total: self.quizzes.len(),
            ..QuizScore::default()
        };
        for (quiz, state) in self.quizzes.iter().zip(&self.answers) {
            if let Some(correct) = state.is_correct(quiz) {
                score.revealed += 1;
                if correct {
                    score.correct += 1;
                }
            }
        }
        score
    }
}
