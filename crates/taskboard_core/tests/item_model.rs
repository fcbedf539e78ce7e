use taskboard_core::{ItemStatus, WorkItem};
use uuid::Uuid;

#[test]
fn work_item_new_sets_defaults() {
    let item = WorkItem::new("Build API", "REST endpoints", 3);

    assert!(!item.id.is_nil());
    assert_eq!(item.title, "Build API");
    assert_eq!(item.description, "REST endpoints");
    assert_eq!(item.people_count, 3);
    assert_eq!(item.status, ItemStatus::Active);
}

#[test]
fn generated_ids_are_distinct() {
    let a = WorkItem::new("A item", "first one", 1);
    let b = WorkItem::new("A item", "first one", 1);
    assert_ne!(a.id, b.id);
}

#[test]
fn work_item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut item = WorkItem::with_id(id, "Ship", "Cut the release", 2);
    item.status = ItemStatus::Finished;

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Ship");
    assert_eq!(json["description"], "Cut the release");
    assert_eq!(json["people_count"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: WorkItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn unknown_status_fails_to_deserialize() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Ship",
        "description": "Cut the release",
        "people_count": 2,
        "status": "archived"
    });

    assert!(serde_json::from_value::<WorkItem>(value).is_err());
}

#[test]
fn status_display_matches_wire_name() {
    for status in ItemStatus::ALL {
        assert_eq!(status.to_string(), status.as_str());
        assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
    }
}
