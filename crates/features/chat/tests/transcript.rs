use ehub_chat::{ChatError, ChatRoom, Role};
use ehub_kernel::SAFE_ALPHABET;

#[test]
fn seed_history_matches_the_room_opening() {
    let room = ChatRoom::with_seed_history("Phòng của Vũ", 500);

    assert_eq!(room.len(), 10);
    let messages = room.messages();
    assert_eq!(messages[0].from, "Tran Van Bao Thang");
    assert_eq!(messages[0].body, "Hello world");
    assert_eq!(messages[0].sent_at, "08:20:00");
    assert_eq!(messages[9].body, "It's at 10 AM in the main conference room.");
    assert_eq!(messages[3].role, Role::Manager);
}

#[test]
fn send_appends_in_arrival_order() {
    let mut room = ChatRoom::with_seed_history("Phòng của Vũ", 500);

    let id = room.send("Vu Vu", Role::Host, "When is the meeting?").expect("non-empty body").id.clone();

    assert_eq!(room.len(), 11);
    let last = &room.messages()[10];
    assert_eq!(last.id, id);
    assert_eq!(last.from, "Vu Vu");
    assert_eq!(last.role, Role::Host);
}

#[test]
fn empty_body_is_rejected() {
    let mut room = ChatRoom::new("Phòng của Vũ", 500);

    let err = room.send("Vu Vu", Role::Host, "").unwrap_err();
    assert_eq!(err, ChatError::EmptyMessage);
    assert_eq!(err.to_string(), "Vui lòng nhập tin nhắn trước khi gửi đi");
    assert!(room.is_empty());
}

#[test]
fn message_ids_use_the_safe_alphabet() {
    let mut room = ChatRoom::new("Phòng của Vũ", 500);
    let message = room.send("Vu Vu", Role::Host, "hi").expect("non-empty body");

    assert_eq!(message.id.len(), 12);
    for ch in message.id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in message id: {ch}");
    }
}

#[test]
fn capacity_bound_drops_the_oldest_message() {
    let mut room = ChatRoom::new("Phòng của Vũ", 3);
    for body in ["one", "two", "three", "four"] {
        room.send("Vu Vu", Role::Host, body).expect("non-empty body");
    }

    assert_eq!(room.len(), 3);
    let bodies: Vec<&str> = room.messages().iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, ["two", "three", "four"]);
}

#[test]
fn zero_capacity_means_unbounded() {
    let mut room = ChatRoom::new("Phòng của Vũ", 0);
    for i in 0..100 {
        room.send("Vu Vu", Role::Host, format!("message {i}")).expect("non-empty body");
    }
    assert_eq!(room.len(), 100);
}

#[test]
fn role_parses_from_display_name() {
    assert_eq!("Host".parse::<Role>(), Ok(Role::Host));
    assert_eq!("Joiner".parse::<Role>(), Ok(Role::Joiner));
    assert!("Ghost".parse::<Role>().is_err());
}
