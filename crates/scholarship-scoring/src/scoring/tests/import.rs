use super::common::*;
use crate::scoring::domain::{ApplicationId, BaccalaureateMention};
use crate::scoring::import::{ApplicantImporter, ImportError};
use crate::scoring::repository::{
    ApplicantRepository, InMemoryApplicantRepository, RepositoryError,
};

const HEADER: &str = "application_id,full_name,email,average_grade,baccalaureate_mention,family_income,number_of_dependents,has_disability,motivation_letter\n";

#[test]
fn imports_rows_with_optional_cells() {
    let csv = format!(
        "{HEADER}app-1,Awa Diallo,awa@example.org,15.5,bien,1500000.00,3,yes,\"{}\"\napp-2,Moussa Kane,,,,,,,\n",
        letter(1200)
    );

    let applicants = ApplicantImporter::from_reader(csv.as_bytes()).expect("csv parses");

    assert_eq!(applicants.len(), 2);
    let first = &applicants[0].record;
    assert_eq!(first.average_grade, Some(15.5));
    assert_eq!(first.baccalaureate_mention, Some(BaccalaureateMention::Bien));
    assert_eq!(first.family_income, Some(1_500_000));
    assert_eq!(first.number_of_dependents, Some(3));
    assert!(first.has_disability);
    assert_eq!(first.letter().map(|text| text.len()), Some(1200));

    let second = &applicants[1];
    assert_eq!(second.application_id, ApplicationId("app-2".to_string()));
    assert_eq!(second.record.average_grade, None);
    assert_eq!(second.record.family_income, None);
    assert!(!second.record.has_disability);
    assert!(!second.record.is_complete());
}

#[test]
fn accepts_decimal_comma_grades() {
    let csv = format!("{HEADER}app-1,,,\"12,75\",assez_bien,,,,text\n");

    let applicants = ApplicantImporter::from_reader(csv.as_bytes()).expect("csv parses");

    assert_eq!(applicants[0].record.average_grade, Some(12.75));
}

#[test]
fn reports_line_of_invalid_row() {
    let csv = format!("{HEADER}app-1,,,14,,,,,ok\napp-2,,,14,excellent,,,,ok\n");

    match ApplicantImporter::from_reader(csv.as_bytes()) {
        Err(ImportError::InvalidRow { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("excellent"));
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn rejects_fractional_income() {
    let csv = format!("{HEADER}app-1,,,14,,1200.50,,,ok\n");

    assert!(matches!(
        ApplicantImporter::from_reader(csv.as_bytes()),
        Err(ImportError::InvalidRow { .. })
    ));
}

#[test]
fn load_into_stores_every_row() {
    let repository = InMemoryApplicantRepository::new();
    let csv = format!("{HEADER}app-1,,,14,,,,,ok\napp-2,,,11,,,,,ok\n");

    let count = ApplicantImporter::load_into(&repository, csv.as_bytes()).expect("import");

    assert_eq!(count, 2);
    assert_eq!(repository.len(), 2);
}

#[test]
fn load_into_rejects_duplicate_rows_before_storing() {
    let repository = InMemoryApplicantRepository::new();
    let csv = format!("{HEADER}app-1,,,14,,,,,ok\napp-2,,,12,,,,,ok\napp-1,,,11,,,,,ok\n");

    match ApplicantImporter::load_into(&repository, csv.as_bytes()) {
        Err(ImportError::InvalidRow { line, reason }) => {
            assert_eq!(line, 4);
            assert!(reason.contains("app-1"));
        }
        other => panic!("expected duplicate row error, got {other:?}"),
    }
    assert!(repository.is_empty());
}

#[test]
fn load_into_rejects_ids_already_stored() {
    let repository = InMemoryApplicantRepository::new();
    repository
        .insert(applicant("2", strong_record()))
        .expect("insert succeeds");
    let csv = format!("{HEADER}app-1,,,14,,,,,ok\napp-2,,,11,,,,,ok\n");

    assert!(matches!(
        ApplicantImporter::load_into(&repository, csv.as_bytes()),
        Err(ImportError::Repository(RepositoryError::Conflict))
    ));
    assert_eq!(repository.len(), 1);
    assert!(repository
        .fetch(&ApplicationId("app-1".to_string()))
        .expect("fetch succeeds")
        .is_none());
}
