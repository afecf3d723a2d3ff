use super::*;

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get_item("am_chat_history").unwrap(), None);
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::default();
    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn platform_store_is_usable_off_browser() {
    let store = platform_store();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
}
