use super::*;
use crate::util::storage::MemoryStore;

fn message(content: &str) -> ChatMessage {
    ChatMessage::user(content.to_owned(), "2026-01-01T00:00:00Z".to_owned())
}

#[test]
fn recent_returns_tail_in_order() {
    let messages: Vec<_> = (0..5).map(|i| message(&format!("m{i}"))).collect();
    let tail = recent(&messages, 2);
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[0].content, "m3");
    assert_eq!(tail[1].content, "m4");
}

#[test]
fn recent_returns_everything_under_limit() {
    let messages = vec![message("only")];
    assert_eq!(recent(&messages, 20).len(), 1);
}

#[test]
fn load_history_missing_key_is_empty() {
    assert!(load_history(&MemoryStore::default(), "am_chat_history").unwrap().is_empty());
}

#[test]
fn load_history_rejects_incompatible_shape() {
    let store = MemoryStore::default();
    store.set_item("am_chat_history", r#"{"messages": []}"#).unwrap();
    assert!(matches!(load_history(&store, "am_chat_history"), Err(ChatError::CorruptHistory(_))));
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    let messages = vec![message("a"), ChatMessage::assistant("b".to_owned(), None, "t".to_owned())];
    save_history(&store, "am_chat_history", &messages, 20).unwrap();
    assert_eq!(load_history(&store, "am_chat_history").unwrap(), messages);
}

#[test]
fn save_history_truncates_to_limit() {
    let store = MemoryStore::default();
    let messages: Vec<_> = (0..25).map(|i| message(&format!("m{i}"))).collect();
    save_history(&store, "am_chat_history", &messages, 20).unwrap();
    let loaded = load_history(&store, "am_chat_history").unwrap();
    assert_eq!(loaded.len(), 20);
    assert_eq!(loaded[0].content, "m5");
}
