use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{ExperienceCategory, ExperienceRecord, Requirement, YearsMonths};

/// Append-only list of a candidate's accepted experience, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceLedger {
    records: Vec<ExperienceRecord>,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records are trusted as already validated.
    pub fn append(&mut self, record: ExperienceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExperienceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_months(&self) -> u32 {
        self.records
            .iter()
            .map(ExperienceRecord::duration_months)
            .fold(0, u32::saturating_add)
    }

    pub fn total_as_years_months(&self) -> YearsMonths {
        YearsMonths::from_months(self.total_months())
    }

    pub fn is_satisfied(&self, requirement: &Requirement) -> bool {
        self.total_months() >= requirement.required_months()
    }

    pub fn shortfall_months(&self, requirement: &Requirement) -> u32 {
        requirement
            .required_months()
            .saturating_sub(self.total_months())
    }

    pub fn shortfall_as_years_months(&self, requirement: &Requirement) -> YearsMonths {
        YearsMonths::from_months(self.shortfall_months(requirement))
    }

    /// Totals per category tag. Informational; satisfaction uses the combined total.
    pub fn months_by_category(&self) -> BTreeMap<ExperienceCategory, u32> {
        let mut totals = BTreeMap::new();
        for record in &self.records {
            let total = totals.entry(record.category()).or_insert(0u32);
            *total = total.saturating_add(record.duration_months());
        }
        totals
    }
}
