use ehub::domain::config::AppConfig;
use ehub::features;
use ehub_chat::Role;

#[test]
fn init_seeds_the_chat_transcript() {
    let config = AppConfig::default();
    let session = ehub::init(&config);

    let chat = session.chat();
    let chat = chat.read();
    assert_eq!(chat.len(), 10);
    assert_eq!(chat.title(), "Phòng của Vũ");
}

#[test]
fn init_without_seed_history_starts_empty() {
    let mut config = AppConfig::default();
    config.chat.seed_history = false;

    let session = ehub::init(&config);
    assert!(session.chat().read().is_empty());
}

#[test]
fn session_clones_share_state() {
    let session = ehub::init(&AppConfig::default());
    let other = session.clone();

    session
        .chat()
        .write()
        .send("Vũ", Role::Host, "Mọi người vào đủ chưa?")
        .expect("non-empty message");

    assert_eq!(other.chat().read().len(), 11);
}

#[test]
fn call_session_takes_the_room_title() {
    let session = ehub::init(&AppConfig::default());
    assert_eq!(session.call().read().title(), "Phòng của Vũ");
    assert!(session.call().read().is_live());
}

#[test]
fn enabled_features_are_listed() {
    assert_eq!(features::ENABLED, &["auth", "chat", "exams", "study-room"]);
    assert!(features::is_enabled("auth"));
    assert!(!features::is_enabled("billing"));
}

#[test]
fn enabled_set_covers_every_slice() {
    use ehub::domain::modules::ModuleSet;

    assert_eq!(features::enabled_set(), ModuleSet::ALL);
}
