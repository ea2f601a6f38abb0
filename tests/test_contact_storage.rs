//! Contact file persistence: round trips and on-disk format.

use contact_book::models::Contact;
use contact_book::repositories::{ContactRepository, JsonContactRepository};
use contact_book::storage::{load_records, save_records};
use std::fs;
use tempfile::tempdir;

fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Alice", "13800138000").with_email("alice@example.com"),
        Contact::new("张三", "13829899843"),
        Contact {
            name: "No Phone".to_string(),
            phone: None,
            email: None,
            created_at: "2024-01-02T03:04:05.000006".to_string(),
        },
    ]
}

#[test]
fn test_save_then_load_is_identity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts_data.json");
    let contacts = sample_contacts();

    save_records(&path, &contacts).unwrap();
    let loaded: Vec<Contact> = load_records(&path).unwrap();

    assert_eq!(loaded, contacts);
}

#[test]
fn test_empty_list_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts_data.json");

    save_records::<Contact>(&path, &[]).unwrap();
    let loaded: Vec<Contact> = load_records(&path).unwrap();

    assert!(loaded.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
}

#[test]
fn test_file_is_array_of_contact_objects() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts_data.json");

    save_records(&path, &sample_contacts()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["name"], "Alice");
    assert_eq!(first["phone"], "13800138000");
    assert_eq!(first["email"], "alice@example.com");
    assert!(first["created_at"].is_string());
}

#[test]
fn test_reads_records_written_by_hand() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts_data.json");
    fs::write(
        &path,
        r#"[{"name": "Bob", "phone": "15638299090", "email": null, "created_at": "2024-06-01T10:00:00.123456"}]"#,
    )
    .unwrap();

    let loaded: Vec<Contact> = load_records(&path).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Bob");
    assert_eq!(loaded[0].created_at, "2024-06-01T10:00:00.123456");
}

#[test]
fn test_null_created_at_loads_with_load_time() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts_data.json");
    fs::write(
        &path,
        r#"[{"name":"Bob","phone":"15638299090","email":null,"created_at":null}]"#,
    )
    .unwrap();

    let loaded: Vec<Contact> = load_records(&path).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].phone.as_deref(), Some("15638299090"));
    assert!(!loaded[0].created_at.is_empty());
}

#[tokio::test]
async fn test_repository_round_trip() {
    let dir = tempdir().unwrap();
    let repo = JsonContactRepository::new(dir.path().join("data").join("contacts_data.json"));
    let contacts = sample_contacts();

    repo.save_all(contacts.clone()).await.unwrap();

    assert_eq!(repo.load_all().await.unwrap(), contacts);
}
