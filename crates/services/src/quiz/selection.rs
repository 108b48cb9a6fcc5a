use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{CourseFilter, Question};

/// Questions matching `filter`, in a random order drawn from `rng`.
///
/// Every matching question appears exactly once; order is the only thing the
/// RNG decides.
#[must_use]
pub fn select_questions<R: Rng + ?Sized>(
    filter: &CourseFilter,
    bank: &[Question],
    rng: &mut R,
) -> Vec<Question> {
    let mut selection: Vec<Question> = bank
        .iter()
        .filter(|question| filter.matches(question.course()))
        .cloned()
        .collect();
    selection.shuffle(rng);
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::CourseId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> Vec<Question> {
        (0..12)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    vec!["a".into(), "b".into()],
                    0,
                    CourseId::number(i % 3),
                )
                .unwrap()
            })
            .collect()
    }

    fn sorted_texts(questions: &[Question]) -> Vec<String> {
        let mut texts: Vec<_> = questions.iter().map(|q| q.text().to_string()).collect();
        texts.sort();
        texts
    }

    #[test]
    fn all_keeps_every_question_once() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let selection = select_questions(&CourseFilter::All, &bank, &mut rng);
        assert_eq!(selection.len(), bank.len());
        assert_eq!(sorted_texts(&selection), sorted_texts(&bank));
    }

    #[test]
    fn course_filter_keeps_exactly_that_course() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let filter = CourseFilter::Course(CourseId::number(1));
        let selection = select_questions(&filter, &bank, &mut rng);

        let expected: Vec<_> = bank
            .iter()
            .filter(|q| q.course() == &CourseId::number(1))
            .cloned()
            .collect();
        assert_eq!(selection.len(), 4);
        assert!(selection.iter().all(|q| q.course() == &CourseId::number(1)));
        assert_eq!(sorted_texts(&selection), sorted_texts(&expected));
    }

    #[test]
    fn unknown_course_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let filter = CourseFilter::Course(CourseId::name("missing"));
        assert!(select_questions(&filter, &bank(), &mut rng).is_empty());
    }

    #[test]
    fn order_depends_on_rng() {
        let bank = bank();
        let orders: Vec<Vec<String>> = (0..8)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                select_questions(&CourseFilter::All, &bank, &mut rng)
                    .iter()
                    .map(|q| q.text().to_string())
                    .collect()
            })
            .collect();
        assert!(orders.iter().any(|order| order != &orders[0]));
    }
}
