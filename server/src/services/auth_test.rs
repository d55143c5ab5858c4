use super::*;
use crate::store::MemStore;

// Minimum bcrypt cost keeps the hashing fast under test.
const TEST_COST: u32 = 4;

fn signer() -> TokenSigner {
    TokenSigner::new("test-secret")
}

#[tokio::test]
async fn register_then_authenticate_succeeds() {
    let store = MemStore::default();
    register(&store, TEST_COST, "Ana", "ana@x.com", "Secret123").await.unwrap();

    let (token, user) = authenticate(&store, &signer(), "ana@x.com", "Secret123").await.unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");

    let claims = signer().verify(&token).unwrap();
    assert_eq!(claims.name, "Ana");
    let stored = store.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(claims.user_id, stored.id);
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let store = MemStore::default();
    for (name, email, password) in [("", "ana@x.com", "Secret123"), ("Ana", "", "Secret123"), ("Ana", "ana@x.com", "")] {
        let err = register(&store, TEST_COST, name, email, password).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation));
    }
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_email_conflicts_and_keeps_one_record() {
    let store = MemStore::default();
    register(&store, TEST_COST, "Ana", "ana@x.com", "Secret123").await.unwrap();

    let err = register(&store, TEST_COST, "Ana Again", "ana@x.com", "Other456").await.unwrap_err();
    assert!(matches!(err, AuthError::Conflict));

    let users = store.load_all().await.unwrap();
    assert_eq!(users.iter().filter(|u| u.email == "ana@x.com").count(), 1);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let store = MemStore::default();
    register(&store, TEST_COST, "Ana", "ana@x.com", "Secret123").await.unwrap();

    let err = authenticate(&store, &signer(), "ana@x.com", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::Unauthorized));
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let store = MemStore::default();
    let err = authenticate(&store, &signer(), "ghost@x.com", "Secret123").await.unwrap_err();
    assert!(matches!(err, AuthError::NotFound));
}

#[tokio::test]
async fn authenticate_rejects_empty_fields() {
    let store = MemStore::default();
    let err = authenticate(&store, &signer(), "", "Secret123").await.unwrap_err();
    assert!(matches!(err, AuthError::Validation));
    let err = authenticate(&store, &signer(), "ana@x.com", "").await.unwrap_err();
    assert!(matches!(err, AuthError::Validation));
}

#[tokio::test]
async fn stored_record_never_keeps_the_plain_password() {
    let store = MemStore::default();
    register(&store, TEST_COST, "Ana", "ana@x.com", "Secret123").await.unwrap();

    let user = store.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "Secret123");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn authenticate_leaves_the_store_untouched() {
    let store = MemStore::default();
    register(&store, TEST_COST, "Ana", "ana@x.com", "Secret123").await.unwrap();
    let before = store.load_all().await.unwrap();

    let _ = authenticate(&store, &signer(), "ana@x.com", "Secret123").await.unwrap();
    assert_eq!(store.load_all().await.unwrap(), before);
}
