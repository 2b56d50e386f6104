//! Contract tests for the in-memory contact store, exercised through the
//! `ContactStore` trait object the way the service consumes it.

use contacts_api::error::ContactApiError;
use contacts_api::models::Contact;
use contacts_api::repositories::{ContactStore, MemoryContactStore};
use std::sync::Arc;

fn sample(id: &str, first_name: &str) -> Contact {
    Contact {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: "tester@example.com".to_string(),
        street_address: "1 Test St".to_string(),
        city: "Testville".to_string(),
        country: "Testland".to_string(),
    }
}

#[tokio::test]
async fn test_store_is_usable_as_trait_object() {
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::new());

    let created = store.create(sample("t1", "Trait")).await.unwrap();
    assert_eq!(created.id, "t1");
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_by_id_never_errors_on_missing() {
    let store = MemoryContactStore::new();
    assert_eq!(store.get_by_id("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_update_replaces_record_wholesale() {
    let store = MemoryContactStore::new();
    store.create(sample("1", "Before")).await.unwrap();

    let mut replacement = sample("1", "After");
    replacement.city = "Elsewhere".to_string();
    store.update(replacement).await.unwrap();

    let stored = store.get_by_id("1").await.unwrap().unwrap();
    assert_eq!(stored.first_name, "After");
    assert_eq!(stored.city, "Elsewhere");
}

#[tokio::test]
async fn test_update_keeps_insertion_order_slot() {
    let store = MemoryContactStore::new();
    store.create(sample("a", "A")).await.unwrap();
    store.create(sample("b", "B")).await.unwrap();

    store.update(sample("a", "A2")).await.unwrap();

    let ids: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_delete_frees_the_id_for_reuse() {
    let store = MemoryContactStore::new();
    store.create(sample("1", "First")).await.unwrap();
    assert!(store.delete("1").await.unwrap());

    // The id can be taken again once the record is gone
    let recreated = store.create(sample("1", "Second")).await.unwrap();
    assert_eq!(recreated.first_name, "Second");
}

#[tokio::test]
async fn test_conflict_does_not_disturb_order() {
    let store = MemoryContactStore::new();
    store.create(sample("1", "One")).await.unwrap();
    store.create(sample("2", "Two")).await.unwrap();

    let err = store.create(sample("1", "Dup")).await.unwrap_err();
    assert!(matches!(err, ContactApiError::Conflict(_)));

    let contacts = store.list_all().await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].first_name, "One");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_creates_all_land() {
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create(sample("", &format!("Contact{}", i))).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Every create got a distinct generated id
    let contacts = store.list_all().await.unwrap();
    assert_eq!(contacts.len(), 32);
}
