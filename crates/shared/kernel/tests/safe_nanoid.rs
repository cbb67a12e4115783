use ehub_kernel::{SAFE_ALPHABET, safe_nanoid};
use std::collections::HashSet;

// Chat message IDs use the default 12-character form.
#[test]
fn default_form_fits_chat_message_ids() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "unexpected character in {id}");
}

#[test]
fn ambiguous_characters_never_appear() {
    for _ in 0..50 {
        let id = safe_nanoid!();
        for ch in ['I', 'O', 'l', '0', '1'] {
            assert!(!id.contains(ch), "ambiguous {ch:?} in {id}");
        }
    }
}

#[test]
fn repeated_draws_do_not_collide() {
    let ids: HashSet<String> = (0..1000).map(|_| safe_nanoid!()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn custom_length() {
    assert_eq!(safe_nanoid!(20).len(), 20);
}
