//! Integration tests for the record store, persistence, and teaching module

use student_portal::core::models::{Campus, StudentRecord, Teacher};
use student_portal::core::persistence::{CatalogFile, StudentFile};
use student_portal::core::store::{RecordStore, SortKey};
use student_portal::core::teaching::Catalog;
use student_portal::core::PortalError;
use tempfile::TempDir;

fn student(first: &str, last: &str, campus: Campus) -> StudentRecord {
    StudentRecord::new(
        first.to_string(),
        last.to_string(),
        format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        campus,
        None,
    )
}

#[test]
fn test_sort_search_delete_scenario() {
    let mut store = RecordStore::new();
    store.insert(student("Ayhan", "Habib", Campus::Christchurch));
    store.insert(student("Roshni", "Khan", Campus::Auckland));
    store.insert(student("Ahmed", "Gala", Campus::Wellington));

    let names: Vec<&str> = store
        .sort_by(SortKey::FirstName)
        .iter()
        .map(|s| s.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ahmed", "Ayhan", "Roshni"]);

    let roshni = store
        .search_sorted(SortKey::FirstName, "Roshni")
        .expect("Roshni should be found");
    assert_eq!(roshni.last_name, "Khan");

    let ahmed_id = store.search_exact(SortKey::FirstName, "Ahmed")[0]
        .id()
        .to_string();
    assert_eq!(store.delete(&ahmed_id), 1);
    assert!(store.search_exact(SortKey::FirstName, "Ahmed").is_empty());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_invalid_field_is_reported() {
    let err = "email".parse::<SortKey>().unwrap_err();
    assert!(matches!(err, PortalError::InvalidField(_)));
    assert!(err.to_string().contains("email"));
}

#[test]
fn test_generated_id_collision_is_rejected_by_insert_unique() {
    let mut store = RecordStore::new();
    store
        .insert_unique(student("Roshni", "Khan", Campus::Auckland))
        .unwrap();

    let err = store
        .insert_unique(student("Roshan", "Khanna", Campus::Wellington))
        .unwrap_err();
    assert!(matches!(err, PortalError::DuplicateId(_)));

    let explicit = StudentRecord::new(
        "Roshan".to_string(),
        "Khanna".to_string(),
        "roshan@example.com".to_string(),
        Campus::Wellington,
        Some("RosKha-2".to_string()),
    );
    store.insert_unique(explicit).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_reads_plain_student_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    std::fs::write(
        &path,
        r#"[{"first_name": "Ayhan", "last_name": "Habib", "email": "ayhan@example.com", "campus": "Christchurch", "id": "AyhHab2024"},
            {"first_name": "Roshni", "last_name": "Khan", "email": "roshni@example.com", "campus": "Auckland", "id": "RosKha2024", "enrolled_courses": ["CS102"]}]"#,
    )
    .unwrap();

    let mut store = StudentFile::new(&path).load().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        store.get("RosKha2024").unwrap().enrolled_courses,
        vec!["CS102"]
    );
    assert_eq!(
        store.search_sorted(SortKey::Id, "AyhHab2024").map(|s| s.campus),
        Some(Campus::Christchurch)
    );
}

#[test]
fn test_enrollment_survives_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let students = StudentFile::new(dir.path().join("students.json"));
    let catalog_file = CatalogFile::new(dir.path().join("catalog.json"));

    let mut catalog = catalog_file.load().unwrap();
    catalog.add_teacher(Teacher::new("Hassan Raza Butt".to_string()));
    catalog.assign_teacher("CHE104", "Hassan Raza Butt").unwrap();
    catalog_file.save(&catalog).unwrap();

    let mut store = students.load().unwrap();
    store.insert(StudentRecord::new(
        "Ayhan".to_string(),
        "Habib".to_string(),
        "ayhan@example.com".to_string(),
        Campus::Christchurch,
        Some("AyhHab2024".to_string()),
    ));
    catalog.enroll(&mut store, "AyhHab2024", "CHE104").unwrap();
    students.save(&store).unwrap();

    let store = students.load().unwrap();
    let catalog: Catalog = catalog_file.load().unwrap();
    let announcements = catalog.notify_teachers(&store, "Lab coats required");

    assert_eq!(announcements.len(), 1);
    assert_eq!(announcements[0].teacher, "Hassan Raza Butt");
    assert_eq!(announcements[0].notifications[0].student_id, "AyhHab2024");
}

#[test]
fn test_save_failure_leaves_store_intact() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes the write fail
    let blocked = dir.path().join("students.json");
    std::fs::create_dir(&blocked).unwrap();

    let mut store = RecordStore::new();
    store.insert(student("Ayhan", "Habib", Campus::Christchurch));
    store.insert(student("Ahmed", "Gala", Campus::Wellington));
    store.sort_by(SortKey::FirstName);
    let before = store.clone();

    let err = StudentFile::new(&blocked).save(&store).unwrap_err();
    assert!(matches!(err, PortalError::Io { .. }));
    assert_eq!(store, before);
}

#[test]
fn test_student_file_accepts_lowercase_campus() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    std::fs::write(
        &path,
        r#"[{"first_name": "Ahmed", "last_name": "Gala", "email": "ahmed@example.com", "campus": "auckland", "id": "AhmGal2024"}]"#,
    )
    .unwrap();

    let store = StudentFile::new(&path).load().unwrap();
    assert_eq!(store.get("AhmGal2024").map(|s| s.campus), Some(Campus::Auckland));
}
