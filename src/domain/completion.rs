//! Weighted profile-completion score.
//!
//! Required fields carry 70% of the score and optional fields 30%, with the
//! profile photo counted as one extra optional slot. A fully complete group
//! is awarded its whole weight, and a profile with every required field plus
//! at least two thirds of the optional slots is reported as 100.

const REQUIRED_WEIGHT: f64 = 70.0;
const OPTIONAL_WEIGHT: f64 = 30.0;

/// Anything whose fields can be checked for presence by name.
pub trait FieldPresence {
    fn is_filled(&self, field: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionBreakdown {
    pub required_filled: usize,
    pub required_total: usize,
    pub optional_filled: usize,
    pub optional_total: usize,
}

impl CompletionBreakdown {
    pub fn of<R: FieldPresence + ?Sized>(
        record: &R,
        required: &[&str],
        optional: &[&str],
        has_photo: bool,
    ) -> Self {
        let required_filled = required.iter().filter(|f| record.is_filled(f)).count();
        let optional_filled = optional.iter().filter(|f| record.is_filled(f)).count()
            + usize::from(has_photo);

        CompletionBreakdown {
            required_filled,
            required_total: required.len(),
            optional_filled,
            optional_total: optional.len() + 1,
        }
    }

    pub fn percentage(&self) -> u8 {
        let required_complete = self.required_filled >= self.required_total;

        if required_complete && self.optional_filled * 3 >= self.optional_total * 2 {
            return 100;
        }

        let score = group_score(self.required_filled, self.required_total, REQUIRED_WEIGHT)
            + group_score(self.optional_filled, self.optional_total, OPTIONAL_WEIGHT);

        score.round().clamp(0.0, 100.0) as u8
    }
}

fn group_score(filled: usize, total: usize, weight: f64) -> f64 {
    if filled >= total {
        weight
    } else {
        filled as f64 / total as f64 * weight
    }
}

/// Completion percentage (0-100) of `record`.
pub fn completion_percentage<R: FieldPresence + ?Sized>(
    record: &R,
    required: &[&str],
    optional: &[&str],
    has_photo: bool,
) -> u8 {
    CompletionBreakdown::of(record, required, optional, has_photo).percentage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Filled(HashSet<&'static str>);

    impl FieldPresence for Filled {
        fn is_filled(&self, field: &str) -> bool {
            self.0.contains(field)
        }
    }

    const REQUIRED: &[&str] = &["first_name", "last_name", "document_number", "phone"];
    const OPTIONAL: &[&str] = &["address", "city", "department", "birth_date", "linkedin_url"];

    fn record(fields: &[&'static str]) -> Filled {
        Filled(fields.iter().copied().collect())
    }

    #[test]
    fn all_required_and_nothing_optional_is_seventy() {
        let r = record(REQUIRED);
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, false), 70);
    }

    #[test]
    fn everything_filled_is_one_hundred() {
        let all: Vec<&'static str> = REQUIRED.iter().chain(OPTIONAL).copied().collect();
        let r = record(&all);
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, true), 100);
    }

    #[test]
    fn two_thirds_of_optional_slots_forces_one_hundred() {
        // 6 optional slots (5 fields + photo): 4 filled is exactly two thirds.
        let fields: Vec<&'static str> = REQUIRED
            .iter()
            .copied()
            .chain(["address", "city", "department"])
            .collect();
        let r = record(&fields);
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, true), 100);

        // 3 of 6 slots stays on the weighted formula: 70 + 15.
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, false), 85);
    }

    #[test]
    fn override_requires_every_required_field() {
        let fields: Vec<&'static str> = ["first_name", "last_name", "document_number"]
            .into_iter()
            .chain(OPTIONAL.iter().copied())
            .collect();
        let r = record(&fields);
        // 3/4 * 70 + 30 = 82.5
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, true), 83);
    }

    #[test]
    fn empty_record_scores_zero() {
        let r = record(&[]);
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, false), 0);
    }

    #[test]
    fn photo_alone_counts_as_one_optional_slot() {
        let r = record(&[]);
        assert_eq!(completion_percentage(&r, REQUIRED, OPTIONAL, true), 5);
    }

    #[test]
    fn scoring_is_repeatable() {
        let r = record(&["first_name", "city"]);
        let first = completion_percentage(&r, REQUIRED, OPTIONAL, true);
        let second = completion_percentage(&r, REQUIRED, OPTIONAL, true);
        assert_eq!(first, second);
    }
}
