use serde::Serialize;

use super::super::domain::{
    EducationDefinition, EducationTier, ExamCategory, ExamDefinition, ExamGrade,
};
use super::{CodeKind, RequirementError};

/// Duration schedule applied to an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleClass {
    Standard,
    Extended,
}

const STANDARD_YEARS: [u32; 4] = [3, 5, 7, 10];
const EXTENDED_YEARS: [u32; 4] = [5, 7, 9, 12];

const fn exam(
    code: &'static str,
    name: &'static str,
    category: ExamCategory,
    grade: Option<ExamGrade>,
) -> ExamDefinition {
    ExamDefinition {
        code,
        name,
        category,
        grade,
    }
}

static EXAMS: [ExamDefinition; 13] = [
    exam("1", "大気関係第1種", ExamCategory::Air, Some(ExamGrade::First)),
    exam("2", "大気関係第2種", ExamCategory::Air, Some(ExamGrade::Second)),
    exam("3", "大気関係第3種", ExamCategory::Air, Some(ExamGrade::Third)),
    exam("4", "大気関係第4種", ExamCategory::Air, Some(ExamGrade::Fourth)),
    exam("5", "水質関係第1種", ExamCategory::Water, Some(ExamGrade::First)),
    exam("6", "水質関係第2種", ExamCategory::Water, Some(ExamGrade::Second)),
    exam("7", "水質関係第3種", ExamCategory::Water, Some(ExamGrade::Third)),
    exam("8", "水質関係第4種", ExamCategory::Water, Some(ExamGrade::Fourth)),
    exam("9", "騒音・振動関係", ExamCategory::NoiseVibration, None),
    exam("10", "特定粉じん関係", ExamCategory::Particulate, None),
    exam("11", "一般粉じん関係", ExamCategory::GeneralDust, None),
    exam("12", "ダイオキシン類関係", ExamCategory::Dioxin, None),
    exam("13", "公害防止主任管理者", ExamCategory::ChiefSupervisor, None),
];

static EDUCATIONS: [EducationDefinition; 4] = [
    EducationDefinition {
        tier: EducationTier::ScienceUniversity,
        code: "A",
        name: "大学（理系：工・薬・理・農等）",
    },
    EducationDefinition {
        tier: EducationTier::ScienceJuniorCollege,
        code: "B",
        name: "短大・高専（理系）",
    },
    EducationDefinition {
        tier: EducationTier::HighSchoolOrHumanities,
        code: "C",
        name: "高校・その他文系大学など",
    },
    EducationDefinition {
        tier: EducationTier::Unconditional,
        code: "D",
        name: "その他（学歴不問）",
    },
];

const AIR_FACILITIES: &[&str] = &["ボイラー", "加熱炉", "溶解炉", "廃棄物焼却炉", "ガスタービン"];
const WATER_FACILITIES: &[&str] = &[
    "パルプ製造施設",
    "無機顔料製造施設",
    "自動式車両洗浄施設",
    "厨房施設",
];
const NOISE_FACILITIES: &[&str] = &["金属加工機械", "空気圧縮機", "送風機", "織機", "破砕機"];
const DUST_FACILITIES: &[&str] = &["堆積場", "コンベア", "破砕機", "摩砕機"];
const DIOXIN_FACILITIES: &[&str] = &["焼却炉(指定規模以上)", "製鋼用電気炉"];
const CHIEF_FACILITIES: &[&str] = &[
    "ボイラー",
    "加熱炉",
    "溶解炉",
    "廃棄物焼却炉",
    "ガスタービン",
    "パルプ製造施設",
    "無機顔料製造施設",
    "自動式車両洗浄施設",
    "厨房施設",
];

/// Read-only lookup tables backing requirement resolution.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    exams: &'static [ExamDefinition],
    educations: &'static [EducationDefinition],
}

impl RuleTable {
    pub fn standard() -> Self {
        Self {
            exams: &EXAMS,
            educations: &EDUCATIONS,
        }
    }

    pub fn exams(&self) -> &'static [ExamDefinition] {
        self.exams
    }

    pub fn educations(&self) -> &'static [EducationDefinition] {
        self.educations
    }

    pub fn exam(&self, code: &str) -> Result<&'static ExamDefinition, RequirementError> {
        let code = code.trim();
        self.exams
            .iter()
            .find(|exam| exam.code == code)
            .ok_or_else(|| RequirementError::UnknownCode {
                kind: CodeKind::Exam,
                code: code.to_string(),
            })
    }

    pub fn education(&self, code: &str) -> Result<&'static EducationDefinition, RequirementError> {
        let code = code.trim();
        self.educations
            .iter()
            .find(|education| education.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| RequirementError::UnknownCode {
                kind: CodeKind::Education,
                code: code.to_string(),
            })
    }

    pub fn schedule_years(&self, class: ScheduleClass, tier: EducationTier) -> u32 {
        let schedule = match class {
            ScheduleClass::Standard => &STANDARD_YEARS,
            ScheduleClass::Extended => &EXTENDED_YEARS,
        };
        schedule[tier.index()]
    }

    /// Typical facilities counted for an exam, used as input hints only.
    pub fn facility_examples(&self, category: ExamCategory) -> &'static [&'static str] {
        match category {
            ExamCategory::Air => AIR_FACILITIES,
            ExamCategory::Water => WATER_FACILITIES,
            ExamCategory::NoiseVibration => NOISE_FACILITIES,
            ExamCategory::Particulate | ExamCategory::GeneralDust => DUST_FACILITIES,
            ExamCategory::Dioxin => DIOXIN_FACILITIES,
            ExamCategory::ChiefSupervisor => CHIEF_FACILITIES,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Third-grade exams and the chief supervisor run on the longer schedule.
pub fn schedule_class(exam: &ExamDefinition) -> ScheduleClass {
    match (exam.category, exam.grade) {
        (ExamCategory::ChiefSupervisor, _) | (_, Some(ExamGrade::Third)) => {
            ScheduleClass::Extended
        }
        _ => ScheduleClass::Standard,
    }
}
