use std::io::Cursor;

use chrono::NaiveDate;
use pcm_eligibility::workflows::eligibility::{
    CandidateProfile, ExperienceCsvImporter, ExperienceValidator, ProfileError,
    RequirementResolver,
};

const EXPORT: &str = "facility,start,end,reported
送風機,2016-01-01,2021-06-01,yes
圧縮機,2021-06-02,現在,yes
破砕機,2012-01-01,2013-01-01,no
";

#[test]
fn imported_rows_feed_the_ledger_in_order() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date");
    let submissions =
        ExperienceCsvImporter::from_reader(Cursor::new(EXPORT)).expect("csv parses");
    assert_eq!(submissions.len(), 3);

    let mut profile = CandidateProfile::new();
    profile
        .resolve_requirement(&RequirementResolver::default(), "9", "C")
        .expect("requirement resolves");

    let mut rejected = Vec::new();
    for submission in submissions {
        let facility = submission.facility_name.clone();
        if let Err(err) = profile.record_experience(&ExperienceValidator, submission, today) {
            rejected.push((facility, err));
        }
    }

    assert_eq!(profile.ledger().len(), 2);
    assert_eq!(profile.ledger().total_months(), 101);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].0, "破砕機");
    assert!(matches!(rejected[0].1, ProfileError::Experience(_)));
    assert!(profile.progress().expect("requirement active").satisfied);
}
