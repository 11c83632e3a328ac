use super::super::domain::{ExamCategory, ExamDefinition};
use super::RequirementError;

const CHIEF_SUPERVISOR_NOTE: &str = "※注意：大気と水質、それぞれの経験が必要です。";

/// First-grade exams never accept the education plus experience route.
pub(crate) fn ensure_experience_route(exam: &ExamDefinition) -> Result<(), RequirementError> {
    if exam.is_first_grade() {
        return Err(RequirementError::IneligiblePath {
            exam_name: exam.name.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn advisory_note(exam: &ExamDefinition) -> String {
    match exam.category {
        // Air and water sufficiency is not split in the ledger; the note is all we surface.
        ExamCategory::ChiefSupervisor => CHIEF_SUPERVISOR_NOTE.to_string(),
        _ => String::new(),
    }
}
