use ehub_domain::constants::{AUTH, CHAT, EXAMS, STUDY_ROOM};
use ehub_domain::modules::ModuleSet;

#[test]
fn constants_match_module_strings() {
    assert_eq!(AUTH, "auth");
    assert_eq!(CHAT, "chat");
    assert_eq!(EXAMS, "exams");
    assert_eq!(STUDY_ROOM, "study-room");
}

#[test]
fn module_set_parses_names() {
    assert_eq!(ModuleSet::from("auth"), ModuleSet::AUTH);
    assert_eq!(ModuleSet::from("study-room"), ModuleSet::STUDY_ROOM);
    assert_eq!(ModuleSet::from("*"), ModuleSet::ALL);
    assert_eq!(ModuleSet::from("unknown"), ModuleSet::empty());
}

#[test]
fn module_set_serializes_as_bits() {
    let set = ModuleSet::AUTH | ModuleSet::CHAT;
    let raw = serde_json::to_string(&set).expect("serialize");
    assert_eq!(raw, "3");

    let back: ModuleSet = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, set);
}
