//! crates/trivia_core/src/quiz.rs
//!
//! Picks the next quiz question. Selection is stateless: the caller supplies
//! the ids it has already shown and appends the returned id itself.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Question, QuestionId};

/// Result of asking for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome<'a> {
    Next(&'a Question),
    /// Every candidate has been shown, or there were none.
    Exhausted,
}

impl<'a> QuizOutcome<'a> {
    pub fn question(self) -> Option<&'a Question> {
        match self {
            QuizOutcome::Next(question) => Some(question),
            QuizOutcome::Exhausted => None,
        }
    }
}

/// True when no candidate is left that is not in `previous`.
pub fn is_exhausted(candidates: &[Question], previous: &HashSet<QuestionId>) -> bool {
    candidates.iter().all(|q| previous.contains(&q.id))
}

/// Draws a uniformly random candidate whose id is not in `previous`.
///
/// Ids in `previous` that are not candidates are ignored. The exhaustion check
/// runs first, so the draw loop always has at least one unseen question to find.
pub fn next_question<'a, R>(
    candidates: &'a [Question],
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome<'a>
where
    R: Rng + ?Sized,
{
    if is_exhausted(candidates, previous) {
        return QuizOutcome::Exhausted;
    }
    loop {
        match candidates.choose(rng) {
            Some(question) if !previous.contains(&question.id) => {
                return QuizOutcome::Next(question);
            }
            Some(_) => continue,
            None => return QuizOutcome::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn question(id: i64) -> Question {
        Question {
            id: QuestionId(id),
            text: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category: CategoryId(1),
            difficulty: 2,
        }
    }

    fn candidates(ids: &[i64]) -> Vec<Question> {
        ids.iter().copied().map(question).collect()
    }

    fn seen(ids: &[i64]) -> HashSet<QuestionId> {
        ids.iter().copied().map(QuestionId).collect()
    }

    #[test]
    fn only_unseen_question_is_always_chosen() {
        let pool = candidates(&[1, 2, 3]);
        let previous = seen(&[1, 2]);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = next_question(&pool, &previous, &mut rng).question();
            assert_eq!(picked.map(|q| q.id), Some(QuestionId(3)));
        }
    }

    #[rstest]
    #[case(&[1, 2], &[1, 2])]
    #[case(&[1, 2], &[2, 1, 7])]
    #[case(&[], &[])]
    #[case(&[], &[4])]
    fn exhausted_when_everything_was_shown(#[case] pool: &[i64], #[case] shown: &[i64]) {
        let pool = candidates(pool);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            next_question(&pool, &seen(shown), &mut rng),
            QuizOutcome::Exhausted
        );
    }

    #[test]
    fn never_repeats_a_previous_question() {
        let pool = candidates(&(1..=20).collect::<Vec<_>>());
        let previous = seen(&[1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = next_question(&pool, &previous, &mut rng)
                .question()
                .expect("unseen questions remain");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn unknown_previous_ids_are_tolerated() {
        let pool = candidates(&[10, 11]);
        let previous = seen(&[1, 2, 3, 10]);
        let mut rng = StdRng::seed_from_u64(1);
        let picked = next_question(&pool, &previous, &mut rng).question();
        assert_eq!(picked.map(|q| q.id), Some(QuestionId(11)));
    }

    #[test]
    fn playing_through_visits_each_question_once() {
        let pool = candidates(&[4, 8, 15, 16, 23, 42]);
        let mut previous = HashSet::new();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut order = Vec::new();
        while let QuizOutcome::Next(question) = next_question(&pool, &previous, &mut rng) {
            order.push(question.id);
            previous.insert(question.id);
        }
        order.sort();
        assert_eq!(order, pool.iter().map(|q| q.id).collect::<Vec<_>>());
    }

    #[test]
    fn inputs_are_not_modified() {
        let pool = candidates(&[1, 2, 3]);
        let previous = seen(&[2]);
        let mut rng = StdRng::seed_from_u64(3);
        let _ = next_question(&pool, &previous, &mut rng);
        assert_eq!(pool, candidates(&[1, 2, 3]));
        assert_eq!(previous, seen(&[2]));
    }

    #[test]
    fn draws_are_spread_over_unseen_questions() {
        let pool = candidates(&[1, 2, 3, 4]);
        let previous = seen(&[1]);
        let mut rng = StdRng::seed_from_u64(99);
        let mut hits = HashSet::new();
        for _ in 0..200 {
            if let Some(q) = next_question(&pool, &previous, &mut rng).question() {
                hits.insert(q.id);
            }
        }
        assert_eq!(hits, seen(&[2, 3, 4]));
    }
}
