use super::*;
use crate::web::MemoryStore;
use camwatch_shared::{Role, User};

fn session() -> Session {
    Session {
        token: "tok-abc123".to_string(),
        user: User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
        },
    }
}

#[test]
fn persisted_session_is_reconstructed_without_network() {
    let store = MemoryStore::default();
    persist_session(&store, &session());

    let restored = load_session(&store).expect("session should be restorable");
    assert_eq!(restored, session());
    // The token is stored raw, not JSON-wrapped.
    assert_eq!(store.get("token").as_deref(), Some("tok-abc123"));
}

#[test]
fn missing_token_means_no_session() {
    let store = MemoryStore::default();
    persist_session(&store, &session());
    store.remove("token");
    assert!(load_session(&store).is_none());
}

#[test]
fn undecodable_user_means_no_session() {
    let store = MemoryStore::default();
    store.set("token", "tok-abc123");
    store.set("user", "{not json");
    assert!(load_session(&store).is_none());
}

#[test]
fn clear_session_removes_both_keys() {
    let store = MemoryStore::default();
    persist_session(&store, &session());
    clear_session(&store);
    assert!(store.get("token").is_none());
    assert!(store.get("user").is_none());
    assert!(load_session(&store).is_none());
}
