//! The question bank.

use crate::error::QuizError;
use crate::model::Question;

/// Ordered, in-memory collection of questions.
///
/// Positions are 0-based and shift down when a question is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_vec(self) -> Vec<Question> {
        self.questions
    }

    /// Questions matching every provided label exactly, in stored order.
    ///
    /// `None` for a label means "any". With both labels absent the whole bank
    /// is returned.
    pub fn filter(&self, category: Option<&str>, difficulty: Option<&str>) -> Vec<&Question> {
        self.filter_indexed(category, difficulty)
            .into_iter()
            .map(|(_, q)| q)
            .collect()
    }

    /// Like [`filter`](Self::filter), paired with each question's position.
    pub fn filter_indexed(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> Vec<(usize, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| category.is_none_or(|c| q.category == c))
            .filter(|(_, q)| difficulty.is_none_or(|d| q.difficulty == d))
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category.as_str()) {
                seen.push(q.category.as_str());
            }
        }
        seen
    }

    /// Append a question and return its position.
    pub fn add(&mut self, question: Question) -> usize {
        tracing::debug!(category = %question.category, "adding question");
        self.questions.push(question);
        self.questions.len() - 1
    }

    /// Replace the question at `index` wholesale.
    pub fn edit(&mut self, index: usize, question: Question) -> Result<(), QuizError> {
        let len = self.questions.len();
        let slot = self
            .questions
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })?;
        tracing::debug!(index, "replacing question");
        *slot = question;
        Ok(())
    }

    /// Remove the question at `index`.
    ///
    /// An index outside the bank is ignored and yields `None`.
    pub fn delete(&mut self, index: usize) -> Option<Question> {
        if index < self.questions.len() {
            tracing::debug!(index, "deleting question");
            Some(self.questions.remove(index))
        } else {
            None
        }
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(category: &str, difficulty: &str, text: &str) -> Question {
        Question::new(
            category,
            difficulty,
            text,
            vec!["yes".into(), "no".into()],
            "yes",
            "",
        )
    }

    fn sample_bank() -> QuestionBank {
        QuestionBank::from(vec![
            q("science", "easy", "s1"),
            q("history", "easy", "h1"),
            q("science", "hard", "s2"),
            q("history", "hard", "h2"),
        ])
    }

    fn texts(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.text.clone()).collect()
    }

    #[test]
    fn filter_without_labels_returns_everything() {
        let bank = sample_bank();
        assert_eq!(bank.filter(None, None).len(), 4);
    }

    #[test]
    fn filter_preserves_order_and_matches_exactly() {
        let bank = sample_bank();
        assert_eq!(texts(&bank.filter(Some("science"), None)), vec!["s1", "s2"]);
        assert_eq!(texts(&bank.filter(None, Some("hard"))), vec!["s2", "h2"]);
        assert_eq!(
            texts(&bank.filter(Some("history"), Some("easy"))),
            vec!["h1"]
        );
        assert!(bank.filter(Some("Science"), None).is_empty());
        assert!(bank.filter(Some("art"), None).is_empty());
    }

    #[test]
    fn add_then_get_returns_same_record() {
        let mut bank = sample_bank();
        let question = Question::new(
            "art",
            "medium",
            "Who painted the Mona Lisa?",
            vec!["Da Vinci".into(), "Monet".into()],
            "Da Vinci",
            "Painted around 1503.",
        );
        let index = bank.add(question.clone());
        assert_eq!(index, 4);
        assert_eq!(bank.get(index), Some(&question));
    }

    #[test]
    fn edit_replaces_wholesale() {
        let mut bank = sample_bank();
        let replacement = q("art", "medium", "a1");
        bank.edit(1, replacement.clone()).unwrap();
        assert_eq!(bank.get(1), Some(&replacement));
        assert_eq!(bank.len(), 4);
    }

    #[test]
    fn edit_out_of_range_errors() {
        let mut bank = sample_bank();
        let err = bank.edit(4, q("art", "easy", "x")).unwrap_err();
        assert_eq!(err, QuizError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(bank, sample_bank());
    }

    #[test]
    fn delete_in_range_shifts_down() {
        let mut bank = sample_bank();
        let removed = bank.delete(1).unwrap();
        assert_eq!(removed.text, "h1");
        assert_eq!(texts(&bank.filter(None, None)), vec!["s1", "s2", "h2"]);
    }

    #[test]
    fn delete_out_of_range_is_ignored() {
        let mut bank = sample_bank();
        assert!(bank.delete(4).is_none());
        assert!(bank.delete(usize::MAX).is_none());
        assert_eq!(bank, sample_bank());

        let mut empty = QuestionBank::new();
        assert!(empty.delete(0).is_none());
    }

    #[test]
    fn filter_indexed_reports_bank_positions() {
        let bank = sample_bank();
        let positions: Vec<usize> = bank
            .filter_indexed(None, Some("hard"))
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(sample_bank().categories(), vec!["science", "history"]);
    }
}
