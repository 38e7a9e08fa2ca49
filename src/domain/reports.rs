use std::collections::{BTreeSet, HashMap, HashSet};

use crate::entities::report::{
    Bucket, Distributions, FilterOptions, GraduateRecord, GraduateReport, ReportFilters, ReportSummary,
};

pub const NOT_SPECIFIED: &str = "No especificado";

/// Counts labels while remembering the order they were first seen in.
#[derive(Debug, Default)]
struct Tally {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    fn add_value(&mut self, value: Option<&str>) {
        self.add(label_for(value));
    }

    /// Buckets by descending count; the sort is stable so ties keep
    /// first-encountered order.
    fn into_buckets(self, total: u64, with_percentage: bool) -> Vec<Bucket> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .map(|(label, count)| Bucket {
                label,
                count,
                percentage: with_percentage.then(|| percentage(count, total)),
            })
            .collect()
    }
}

fn label_for(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

fn matches_text(filter: Option<&str>, value: Option<&str>) -> bool {
    let Some(wanted) = filter.map(str::trim).filter(|f| !f.is_empty()) else {
        return true;
    };
    value
        .map(|v| v.trim().to_lowercase() == wanted.to_lowercase())
        .unwrap_or(false)
}

impl ReportFilters {
    pub fn matches(&self, record: &GraduateRecord) -> bool {
        matches_text(self.institution.as_deref(), record.institution.as_deref())
            && matches_text(self.career.as_deref(), record.career.as_deref())
            && matches_text(self.city.as_deref(), record.city.as_deref())
            && matches_text(self.department.as_deref(), record.department.as_deref())
            && self
                .graduation_year
                .is_none_or(|year| record.graduation_year == Some(year))
    }
}

/// Applies `filters` and groups the remaining graduates by every report
/// dimension.
pub fn build_report(records: &[GraduateRecord], filters: &ReportFilters) -> GraduateReport {
    let filtered: Vec<&GraduateRecord> = records.iter().filter(|r| filters.matches(r)).collect();
    let total = filtered.len() as u64;

    let mut gender = Tally::default();
    let mut city = Tally::default();
    let mut year = Tally::default();
    let mut level = Tally::default();
    let mut sector = Tally::default();
    let mut skill = Tally::default();
    let mut employer = Tally::default();

    let mut with_academic = 0u64;
    let mut with_employment = 0u64;

    for record in &filtered {
        gender.add_value(record.gender.as_deref());
        city.add_value(record.city.as_deref());
        year.add_value(record.graduation_year.map(|y| y.to_string()).as_deref());
        level.add_value(record.academic_level.as_deref());
        sector.add_value(record.sector.as_deref());
        employer.add_value(record.employer.as_deref());

        // A graduate counts once per skill, whatever the spelling across jobs.
        let mut seen = HashSet::new();
        for tag in record.skills.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if seen.insert(tag.to_lowercase()) {
                skill.add(tag);
            }
        }
        if seen.is_empty() {
            skill.add(NOT_SPECIFIED);
        }

        with_academic += u64::from(record.has_academic);
        with_employment += u64::from(record.has_employment);
    }

    let city_buckets = city.into_buckets(total, true);
    let most_common_city = city_buckets
        .iter()
        .find(|b| b.label != NOT_SPECIFIED)
        .map(|b| b.label.clone());

    GraduateReport {
        filters: filters.clone(),
        summary: ReportSummary {
            total_graduates: total,
            with_academic_info: with_academic,
            with_employment_info: with_employment,
            employment_rate: percentage(with_employment, total),
            most_common_city,
        },
        distributions: Distributions {
            gender: gender.into_buckets(total, true),
            city: city_buckets,
            graduation_year: year.into_buckets(total, false),
            academic_level: level.into_buckets(total, true),
            sector: sector.into_buckets(total, true),
            skill: skill.into_buckets(total, false),
            employer: employer.into_buckets(total, false),
        },
        filter_options: filter_options(records),
    }
}

/// Distinct values across all graduates, ignoring any filter.
pub fn filter_options(records: &[GraduateRecord]) -> FilterOptions {
    fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
        values
            .flatten()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    let years: BTreeSet<i32> = records.iter().filter_map(|r| r.graduation_year).collect();

    FilterOptions {
        institutions: distinct(records.iter().map(|r| r.institution.as_deref())),
        careers: distinct(records.iter().map(|r| r.career.as_deref())),
        cities: distinct(records.iter().map(|r| r.city.as_deref())),
        departments: distinct(records.iter().map(|r| r.department.as_deref())),
        graduation_years: years.into_iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graduate(gender: Option<&str>, city: Option<&str>, institution: &str, year: Option<i32>) -> GraduateRecord {
        GraduateRecord {
            gender: gender.map(String::from),
            city: city.map(String::from),
            institution: Some(institution.to_string()),
            graduation_year: year,
            ..Default::default()
        }
    }

    fn sample() -> Vec<GraduateRecord> {
        let mut records = vec![
            graduate(Some("Femenino"), Some("Medellín"), "Universidad de Antioquia", Some(2020)),
            graduate(Some("Masculino"), Some("Bogotá"), "Universidad Nacional", Some(2021)),
            graduate(None, Some("Bogotá"), "Universidad Nacional", Some(2020)),
            graduate(Some("Femenino"), None, "Universidad de Antioquia", None),
            graduate(Some("Femenino"), Some("Medellín"), "Universidad de Antioquia", Some(2022)),
        ];
        records[0].skills = vec!["Rust".into(), "SQL".into(), "Rust".into()];
        records[0].has_employment = true;
        records[0].employer = Some("Bancolombia".into());
        records[1].skills = vec!["SQL".into()];
        records[1].has_academic = true;
        records[1].academic_level = Some("Maestría".into());
        records
    }

    fn total_count(buckets: &[Bucket]) -> u64 {
        buckets.iter().map(|b| b.count).sum()
    }

    fn filter_combinations() -> Vec<ReportFilters> {
        let mut combos = Vec::new();
        for institution in [None, Some("Universidad de Antioquia"), Some("universidad nacional")] {
            for city in [None, Some("Bogotá"), Some("Cali")] {
                for graduation_year in [None, Some(2020)] {
                    combos.push(ReportFilters {
                        institution: institution.map(String::from),
                        city: city.map(String::from),
                        graduation_year,
                        ..Default::default()
                    });
                }
            }
        }
        combos
    }

    #[test]
    fn single_valued_dimensions_sum_to_filtered_total() {
        let records = sample();
        for filters in filter_combinations() {
            let report = build_report(&records, &filters);
            let total = report.summary.total_graduates;
            let expected = records.iter().filter(|r| filters.matches(r)).count() as u64;
            assert_eq!(total, expected);

            let d = &report.distributions;
            for buckets in [&d.gender, &d.city, &d.graduation_year, &d.academic_level, &d.sector, &d.employer] {
                assert_eq!(total_count(buckets), total, "filters: {filters:?}");
            }
        }
    }

    #[test]
    fn nulls_land_in_not_specified_bucket() {
        let report = build_report(&sample(), &ReportFilters::default());
        let gender = &report.distributions.gender;

        let unspecified = gender.iter().find(|b| b.label == NOT_SPECIFIED).unwrap();
        assert_eq!(unspecified.count, 1);

        let specified: u64 = gender.iter().filter(|b| b.label != NOT_SPECIFIED).map(|b| b.count).sum();
        assert_eq!(specified + unspecified.count, 5);
        assert_eq!(gender[0].label, "Femenino");
        assert_eq!(gender[0].percentage, Some(60.0));
    }

    #[test]
    fn most_common_city_ties_break_on_first_seen() {
        let report = build_report(&sample(), &ReportFilters::default());
        // Medellín and Bogotá both appear twice; Medellín is seen first.
        assert_eq!(report.summary.most_common_city.as_deref(), Some("Medellín"));
        assert_eq!(report.distributions.city[0].label, "Medellín");
        assert_eq!(report.distributions.city[1].label, "Bogotá");
    }

    #[test]
    fn skills_counted_once_per_graduate() {
        let report = build_report(&sample(), &ReportFilters::default());
        let skills = &report.distributions.skill;
        assert_eq!(skills[0], Bucket { label: NOT_SPECIFIED.into(), count: 3, percentage: None });
        assert_eq!(skills[1], Bucket { label: "SQL".into(), count: 2, percentage: None });
        assert_eq!(skills[2], Bucket { label: "Rust".into(), count: 1, percentage: None });
    }

    #[test]
    fn filters_are_exact_but_case_insensitive() {
        let filters = ReportFilters {
            institution: Some("  universidad NACIONAL ".into()),
            ..Default::default()
        };
        let report = build_report(&sample(), &filters);
        assert_eq!(report.summary.total_graduates, 2);
        assert_eq!(report.summary.with_academic_info, 1);
        assert_eq!(report.summary.employment_rate, 0.0);

        let none = ReportFilters { city: Some("Cali".into()), ..Default::default() };
        let report = build_report(&sample(), &none);
        assert_eq!(report.summary.total_graduates, 0);
        assert!(report.summary.most_common_city.is_none());
        assert!(report.distributions.gender.is_empty());
    }

    #[test]
    fn filter_options_ignore_filters() {
        let report = build_report(&sample(), &ReportFilters { city: Some("Cali".into()), ..Default::default() });
        let options = &report.filter_options;
        assert_eq!(options.institutions, vec!["Universidad Nacional", "Universidad de Antioquia"]);
        assert_eq!(options.cities, vec!["Bogotá", "Medellín"]);
        assert_eq!(options.graduation_years, vec![2022, 2021, 2020]);
    }

    #[test]
    fn employment_rate_is_rounded_percentage() {
        let report = build_report(&sample(), &ReportFilters::default());
        assert_eq!(report.summary.with_employment_info, 1);
        assert_eq!(report.summary.employment_rate, 20.0);
    }

    #[test]
    fn skill_spellings_across_jobs_count_once() {
        let mut record = graduate(Some("Femenino"), Some("Cali"), "Universidad del Valle", Some(2019));
        record.skills = vec!["Rust".into(), " rust ".into(), "RUST".into(), "Docker".into()];

        let report = build_report(&[record], &ReportFilters::default());
        let skills = &report.distributions.skill;
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0], Bucket { label: "Rust".into(), count: 1, percentage: None });
        assert_eq!(skills[1], Bucket { label: "Docker".into(), count: 1, percentage: None });
    }
}
