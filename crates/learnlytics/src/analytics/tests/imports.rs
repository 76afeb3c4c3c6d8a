use crate::analytics::domain::{ContentType, Provider, Region, Role};
use crate::analytics::imports::{import_activities, ImportError};
use std::io::Cursor;

const HEADER: &str = "Date,Content Type,Provider,Region,Roles,Skills,Groups,Attributes,Learners,Completions,Hours,Active Users,Engagement Rate,Avg Rating\n";

fn import(rows: &str) -> Result<Vec<crate::analytics::records::LearningActivity>, ImportError> {
    let csv = format!("{HEADER}{rows}");
    import_activities(Cursor::new(csv.into_bytes()))
}

#[test]
fn well_formed_rows_import_with_label_normalization() {
    let activities = import(
        "2025-04-12,course,LINKEDIN  LEARNING,north america,Developer; data scientist,Python;SQL,Data Guild,Remote,120,90,150.5,110,0.62,4.3\n",
    )
    .expect("import succeeds");

    assert_eq!(activities.len(), 1);
    let activity = &activities[0];
    assert_eq!(activity.content_type, ContentType::Course);
    assert_eq!(activity.provider, Provider::LinkedinLearning);
    assert_eq!(activity.region, Region::NorthAmerica);
    assert_eq!(activity.roles, vec![Role::Developer, Role::DataScientist]);
    assert_eq!(activity.skills, vec!["Python", "SQL"]);
    assert_eq!(activity.learners, 120);
    assert_eq!(activity.completions, 90);
}

#[test]
fn rfc3339_timestamps_reduce_to_dates() {
    let activities = import(
        "2025-04-12T09:30:00Z,Video,Udemy,Europe,Designer,Figma,,,40,30,20,38,0.5,4.0\n",
    )
    .expect("import succeeds");

    assert_eq!(activities[0].date.to_string(), "2025-04-12");
    assert!(activities[0].groups.is_empty());
}

#[test]
fn unknown_provider_is_rejected_with_row_context() {
    let err = import("2025-04-12,Course,Bootleg U,Europe,Developer,Python,,,10,5,8,9,0.4,4.0\n")
        .expect_err("unknown provider rejected");

    match err {
        ImportError::UnknownLabel { row, dimension, value } => {
            assert_eq!(row, 1);
            assert_eq!(dimension, "provider");
            assert_eq!(value, "Bootleg U");
        }
        other => panic!("expected unknown label error, got {other:?}"),
    }
}

#[test]
fn unparseable_dates_are_rejected() {
    let err = import("last tuesday,Course,Udemy,Europe,Developer,Python,,,10,5,8,9,0.4,4.0\n")
        .expect_err("bad date rejected");
    assert!(matches!(err, ImportError::InvalidDate { row: 1, .. }));
}

#[test]
fn rows_without_skills_are_rejected() {
    let err = import("2025-04-12,Course,Udemy,Europe,Developer,;,,,10,5,8,9,0.4,4.0\n")
        .expect_err("missing skills rejected");
    assert!(matches!(err, ImportError::MissingSkills { row: 1 }));
}

#[test]
fn completions_are_clamped_to_learners() {
    let activities = import("2025-04-12,Course,Udemy,Europe,Developer,Python,,,10,25,8,9,0.4,4.0\n")
        .expect("import succeeds");
    assert_eq!(activities[0].completions, 10);
}

#[test]
fn zero_learner_rows_keep_their_zero_counts() {
    let activities = import("2025-04-12,Course,Udemy,Europe,Developer,Python,,,0,0,0,0,0.0,0.0\n")
        .expect("import succeeds");
    assert_eq!(activities[0].learners, 0);
    assert_eq!(activities[0].completions, 0);
    assert_eq!(activities[0].active_users, 0);
}
