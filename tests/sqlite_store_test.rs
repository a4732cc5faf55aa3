//! Store and workflow tests against an in-memory SQLite database.

use std::sync::Arc;
use std::time::Duration;

use name_catalog::models::NewName;
use name_catalog::store::{DatabaseConfig, NameStore, SqliteNameStore};
use name_catalog::{CatalogError, SearchWorkflow};

async fn memory_store() -> SqliteNameStore {
    let config = DatabaseConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: Duration::from_secs(5),
    };
    SqliteNameStore::connect(&config)
        .await
        .expect("in-memory store")
}

fn sample(name: &str, origin: &str) -> NewName {
    NewName {
        name: name.to_string(),
        meaning: None,
        origin: Some(origin.to_string()),
        reason: None,
    }
}

#[tokio::test]
async fn substring_search_is_case_insensitive_and_sorted() {
    let store = memory_store().await;
    for name in ["Carla", "alice", "Alina", "Bruno", "MALIK"] {
        store.insert(&sample(name, "Test")).await.unwrap();
    }

    let matches = store.find_by_name_substring("ALI").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alina", "MALIK", "alice"]);
    assert!(matches.iter().all(|r| r.search_count == 0));

    assert!(store.find_by_name_substring("zz").await.unwrap().is_empty());
}

#[tokio::test]
async fn registered_alice_is_found_with_zero_searches() {
    let store = memory_store().await;
    let record = store
        .insert(&NewName::new("Alice", "Noble", "Hebrew", "family tradition"))
        .await
        .unwrap();
    assert_eq!(record.search_count, 0);
    assert_eq!(record.meaning.as_deref(), Some("Noble"));

    let matches = store.find_by_name_substring("ali").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Alice");
    assert_eq!(matches[0].search_count, 0);
}

#[tokio::test]
async fn case_variant_duplicate_is_rejected_and_store_unchanged() {
    let store = memory_store().await;
    store.insert(&sample("Bruno", "Germanic")).await.unwrap();

    let err = store.insert(&sample("bruno", "Other")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate { ref name } if name == "bruno"));

    assert_eq!(store.count_all().await.unwrap(), 1);
    let matches = store.find_by_name_substring("bruno").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Bruno");
    assert_eq!(matches[0].origin.as_deref(), Some("Germanic"));
}

#[tokio::test]
async fn second_page_of_fifteen_records_holds_the_last_five() {
    let store = memory_store().await;
    for i in 1..=15 {
        store
            .insert(&sample(&format!("Name{i:02}"), "Test"))
            .await
            .unwrap();
    }

    let page = store.list_filtered("", "", 2, 10).await.unwrap();
    assert_eq!(page.total_count, 15);
    assert_eq!(page.page_count, 2);
    assert_eq!(page.page_index, 2);
    let names: Vec<&str> = page.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Name11", "Name12", "Name13", "Name14", "Name15"]);
}

#[tokio::test]
async fn out_of_range_pages_clamp_into_the_valid_range() {
    let store = memory_store().await;
    for i in 1..=15 {
        store
            .insert(&sample(&format!("Name{i:02}"), "Test"))
            .await
            .unwrap();
    }

    let beyond = store.list_filtered("", "", 99, 10).await.unwrap();
    assert_eq!(beyond.page_index, 2);
    assert_eq!(beyond.records.len(), 5);

    let before = store.list_filtered("", "", 0, 10).await.unwrap();
    assert_eq!(before.page_index, 1);
    assert_eq!(before.records.len(), 10);
}

#[tokio::test]
async fn filters_are_and_combined_and_case_insensitive() {
    let store = memory_store().await;
    store.insert(&sample("Alice", "Hebrew")).await.unwrap();
    store.insert(&sample("Alina", "Slavic")).await.unwrap();
    store.insert(&sample("Daniel", "Hebrew")).await.unwrap();

    let page = store.list_filtered("ali", "heb", 1, 10).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.records[0].name, "Alice");

    let all = store.list_filtered("", "HEBREW", 1, 10).await.unwrap();
    assert_eq!(all.total_count, 2);
}

#[tokio::test]
async fn blank_origin_filter_keeps_records_without_an_origin() {
    let store = memory_store().await;
    store.insert(&sample("Alice", "Hebrew")).await.unwrap();
    store
        .insert(&NewName {
            name: "Origa".to_string(),
            meaning: None,
            origin: None,
            reason: None,
        })
        .await
        .unwrap();

    let page = store.list_filtered("", "", 1, 10).await.unwrap();
    assert_eq!(page.total_count, 2);
}

#[tokio::test]
async fn like_metacharacters_in_filters_match_literally() {
    let store = memory_store().await;
    store.insert(&sample("100% Cotton", "Test")).await.unwrap();
    store.insert(&sample("1000 Cotton", "Test")).await.unwrap();

    let matches = store.find_by_name_substring("0%").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "100% Cotton");
}

#[tokio::test]
async fn identical_list_calls_are_idempotent() {
    let store = memory_store().await;
    for name in ["Alice", "Bruno", "Clara"] {
        store.insert(&sample(name, "Test")).await.unwrap();
    }

    let first = store.list_filtered("a", "", 1, 2).await.unwrap();
    let second = store.list_filtered("a", "", 1, 2).await.unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.total_count, second.total_count);
    assert_eq!(first.page_count, second.page_count);
}

#[tokio::test]
async fn workflow_increments_once_per_run() {
    let store: Arc<dyn NameStore> = Arc::new(memory_store().await);
    store
        .insert(&NewName::new("Alice", "Noble", "Hebrew", "family tradition"))
        .await
        .unwrap();
    let workflow = SearchWorkflow::new(store.clone());

    let first = workflow.run("ali").await.unwrap();
    assert_eq!(first.records.len(), 1);
    assert_eq!(first.records[0].search_count, 1);
    assert!(first.failed_ids.is_empty());

    let second = workflow.run("ali").await.unwrap();
    assert_eq!(second.records[0].search_count, 2);

    let persisted = store.find_by_name_substring("alice").await.unwrap();
    assert_eq!(persisted[0].search_count, 2);
}

#[tokio::test]
async fn leaderboard_orders_by_count_then_id() {
    let store = memory_store().await;
    let alice = store.insert(&sample("Alice", "Hebrew")).await.unwrap();
    let bruno = store.insert(&sample("Bruno", "Germanic")).await.unwrap();
    let clara = store.insert(&sample("Clara", "Latin")).await.unwrap();

    store.set_search_count(bruno.id, 5).await.unwrap();
    store.set_search_count(clara.id, 5).await.unwrap();

    let top = store.top_by_search_count(2).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, bruno.id);
    assert_eq!(top[1].id, clara.id);

    let all = store.top_by_search_count(10).await.unwrap();
    assert_eq!(all.last().unwrap().id, alice.id);
}

#[tokio::test]
async fn origin_counts_group_and_skip_missing_origins() {
    let store = memory_store().await;
    store.insert(&sample("Alice", "Hebrew")).await.unwrap();
    store.insert(&sample("Daniel", "Hebrew")).await.unwrap();
    store.insert(&sample("Clara", "Latin")).await.unwrap();
    store
        .insert(&NewName {
            name: "Origa".to_string(),
            meaning: None,
            origin: None,
            reason: None,
        })
        .await
        .unwrap();

    let counts = store.count_by_origin().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].origin, "Hebrew");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].origin, "Latin");
    assert_eq!(counts[1].count, 1);
}

#[tokio::test]
async fn set_search_count_rejects_unknown_ids_and_negative_values() {
    let store = memory_store().await;
    let record = store.insert(&sample("Alice", "Hebrew")).await.unwrap();

    let err = store.set_search_count(9999, 1).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { id: 9999 }));

    let err = store.set_search_count(record.id, -1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));

    let matches = store.find_by_name_substring("alice").await.unwrap();
    assert_eq!(matches[0].search_count, 0);
}
