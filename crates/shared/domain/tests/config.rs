use ehub_domain::config::{AppConfig, ChatConfig, ExamsConfig, RoomConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let room = RoomConfig::default();
    assert_eq!(room.title, "Phòng của Vũ");

    let chat = ChatConfig::default();
    assert_eq!(chat.capacity, 500);
    assert!(chat.seed_history);

    let exams = ExamsConfig::default();
    assert_eq!(exams.page_size, 3);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "room": { "title": "Phòng 101" },
        "chat": { "capacity": 50, "seed_history": false },
        "exams": { "page_size": 2 }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.room.title, "Phòng 101");
    assert_eq!(cfg.chat.capacity, 50);
    assert!(!cfg.chat.seed_history);
    assert_eq!(cfg.exams.page_size, 2);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let raw = json!({ "chat": { "capacity": 10 } });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.chat.capacity, 10);
    assert!(cfg.chat.seed_history);
    assert_eq!(cfg.room.title, "Phòng của Vũ");
}
