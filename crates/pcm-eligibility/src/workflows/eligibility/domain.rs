use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label printed in place of an end date for experience that is still running.
pub const ONGOING_LABEL: &str = "現在継続中";

/// Identifier wrapper for an isolated candidate session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pollution-control discipline covered by a certification course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamCategory {
    Air,
    Water,
    NoiseVibration,
    Particulate,
    GeneralDust,
    Dioxin,
    ChiefSupervisor,
}

impl ExamCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Air => "大気関係",
            Self::Water => "水質関係",
            Self::NoiseVibration => "騒音・振動関係",
            Self::Particulate => "特定粉じん関係",
            Self::GeneralDust => "一般粉じん関係",
            Self::Dioxin => "ダイオキシン類関係",
            Self::ChiefSupervisor => "公害防止主任管理者",
        }
    }

    /// Category stamped on experience records entered while this exam is active.
    pub const fn experience_category(self) -> ExperienceCategory {
        match self {
            Self::Air | Self::Particulate | Self::GeneralDust => ExperienceCategory::Air,
            Self::Water => ExperienceCategory::Water,
            Self::NoiseVibration => ExperienceCategory::Noise,
            Self::Dioxin => ExperienceCategory::Dioxin,
            Self::ChiefSupervisor => ExperienceCategory::Other,
        }
    }
}

/// Grade of the tiered air and water exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamGrade {
    First,
    Second,
    Third,
    Fourth,
}

/// Static description of one selectable exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub category: ExamCategory,
    pub grade: Option<ExamGrade>,
}

impl ExamDefinition {
    pub fn is_first_grade(&self) -> bool {
        self.grade == Some(ExamGrade::First)
    }
}

/// Academic background, ordered from the shortest to the longest required experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    ScienceUniversity,
    ScienceJuniorCollege,
    HighSchoolOrHumanities,
    Unconditional,
}

impl EducationTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ScienceUniversity,
            Self::ScienceJuniorCollege,
            Self::HighSchoolOrHumanities,
            Self::Unconditional,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::ScienceUniversity => "A",
            Self::ScienceJuniorCollege => "B",
            Self::HighSchoolOrHumanities => "C",
            Self::Unconditional => "D",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::ScienceUniversity => 0,
            Self::ScienceJuniorCollege => 1,
            Self::HighSchoolOrHumanities => 2,
            Self::Unconditional => 3,
        }
    }
}

/// Education option as presented to candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationDefinition {
    pub tier: EducationTier,
    pub code: &'static str,
    pub name: &'static str,
}

/// Category tag carried by accepted experience records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceCategory {
    Air,
    Water,
    Noise,
    Dioxin,
    Other,
}

impl ExperienceCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Air => "大気",
            Self::Water => "水質",
            Self::Noise => "騒音",
            Self::Dioxin => "ダイオキシン",
            Self::Other => "その他",
        }
    }
}

/// Whole years and remaining months of a month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct YearsMonths {
    pub years: u32,
    pub months: u32,
}

impl YearsMonths {
    pub const fn from_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub const fn total_months(self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for YearsMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}ヶ月", self.years, self.months)
    }
}

/// Experience requirement resolved from an exam and education selection.
///
/// Built only by [`RequirementResolver`](super::evaluation::RequirementResolver);
/// a new selection produces a new value instead of mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    exam_code: String,
    exam_name: String,
    exam_category: ExamCategory,
    education_tier: EducationTier,
    education_name: String,
    required_months: u32,
    advisory_note: String,
}

impl Requirement {
    pub(crate) fn new(
        exam: &ExamDefinition,
        education: &EducationDefinition,
        required_months: u32,
        advisory_note: String,
    ) -> Self {
        Self {
            exam_code: exam.code.to_string(),
            exam_name: exam.name.to_string(),
            exam_category: exam.category,
            education_tier: education.tier,
            education_name: education.name.to_string(),
            required_months,
            advisory_note,
        }
    }

    pub fn exam_code(&self) -> &str {
        &self.exam_code
    }

    pub fn exam_name(&self) -> &str {
        &self.exam_name
    }

    pub fn exam_category(&self) -> ExamCategory {
        self.exam_category
    }

    pub fn education_tier(&self) -> EducationTier {
        self.education_tier
    }

    pub fn education_name(&self) -> &str {
        &self.education_name
    }

    pub fn required_months(&self) -> u32 {
        self.required_months
    }

    pub fn required_years(&self) -> u32 {
        self.required_months / 12
    }

    /// Empty unless the exam carries a caveat the engine does not enforce.
    pub fn advisory_note(&self) -> &str {
        &self.advisory_note
    }
}

/// Raw experience interval as typed by the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSubmission {
    pub facility_name: String,
    pub start_date: String,
    /// Either a `YYYY-MM-DD` date or one of the ongoing markers (`now`, `現在`, ...).
    #[serde(default)]
    pub end_marker: String,
    pub reporting_compliant: bool,
}

/// End of an accepted interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperienceEnd {
    Dated { date: NaiveDate },
    Ongoing { as_of: NaiveDate },
}

impl ExperienceEnd {
    pub const fn effective_date(self) -> NaiveDate {
        match self {
            Self::Dated { date } => date,
            Self::Ongoing { as_of } => as_of,
        }
    }

    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing { .. })
    }

    pub fn label(self) -> String {
        match self {
            Self::Dated { date } => date.format("%Y-%m-%d").to_string(),
            Self::Ongoing { .. } => ONGOING_LABEL.to_string(),
        }
    }
}

/// Validated experience interval. Only the validator constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceRecord {
    facility_name: String,
    start_date: NaiveDate,
    end: ExperienceEnd,
    duration_months: u32,
    category: ExperienceCategory,
}

impl ExperienceRecord {
    pub(crate) fn new(
        facility_name: String,
        start_date: NaiveDate,
        end: ExperienceEnd,
        duration_months: u32,
        category: ExperienceCategory,
    ) -> Self {
        Self {
            facility_name,
            start_date,
            end,
            duration_months,
            category,
        }
    }

    pub fn facility_name(&self) -> &str {
        &self.facility_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end(&self) -> ExperienceEnd {
        self.end
    }

    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    pub fn duration(&self) -> YearsMonths {
        YearsMonths::from_months(self.duration_months)
    }

    pub fn category(&self) -> ExperienceCategory {
        self.category
    }
}

/// Person vouching for the candidate's experience on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertifierInfo {
    pub company: String,
    pub name: String,
    pub role: String,
}
