use crate::tests::{new_commentary, new_match};
use crate::{InMemoryMatchStore, MatchStore, StoreError};

use sportz_core::ScoreUpdate;

#[tokio::test]
async fn given_inserted_matches_when_listed_then_newest_first() {
    let store = InMemoryMatchStore::new();
    let first = store.insert_match(new_match("A", "B")).await.unwrap();
    let second = store.insert_match(new_match("C", "D")).await.unwrap();
    let third = store.insert_match(new_match("E", "F")).await.unwrap();

    let listed = store.list_matches(10).await.unwrap();

    let ids: Vec<i64> = listed.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn given_more_matches_than_limit_when_listed_then_truncated() {
    let store = InMemoryMatchStore::new();
    for i in 0..5 {
        store
            .insert_match(new_match(&format!("H{i}"), &format!("A{i}")))
            .await
            .unwrap();
    }

    assert_eq!(store.list_matches(2).await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_inserted_match_when_found_then_ids_are_sequential_from_one() {
    let store = InMemoryMatchStore::new();

    let created = store.insert_match(new_match("A", "B")).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(store.find_match(1).await.unwrap(), Some(created));
    assert_eq!(store.find_match(2).await.unwrap(), None);
}

#[tokio::test]
async fn given_existing_match_when_score_updated_then_scores_change() {
    let store = InMemoryMatchStore::new();
    let created = store.insert_match(new_match("A", "B")).await.unwrap();

    let updated = store
        .update_score(
            created.id,
            ScoreUpdate {
                home_score: 2,
                away_score: 1,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!((updated.home_score, updated.away_score), (2, 1));
}

#[tokio::test]
async fn given_unknown_match_when_score_updated_then_none() {
    let store = InMemoryMatchStore::new();

    let updated = store
        .update_score(
            99,
            ScoreUpdate {
                home_score: 1,
                away_score: 0,
            },
        )
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn given_unknown_match_when_commentary_inserted_then_match_not_found() {
    let store = InMemoryMatchStore::new();

    let result = store.insert_commentary(5, new_commentary(1, "Kick off")).await;

    assert!(matches!(
        result,
        Err(StoreError::MatchNotFound { match_id: 5, .. })
    ));
}

#[tokio::test]
async fn given_commentary_on_two_matches_when_listed_then_scoped_and_newest_first() {
    let store = InMemoryMatchStore::new();
    let first = store.insert_match(new_match("A", "B")).await.unwrap();
    let second = store.insert_match(new_match("C", "D")).await.unwrap();

    store
        .insert_commentary(first.id, new_commentary(1, "Kick off"))
        .await
        .unwrap();
    store
        .insert_commentary(second.id, new_commentary(3, "Elsewhere"))
        .await
        .unwrap();
    store
        .insert_commentary(first.id, new_commentary(12, "Goal"))
        .await
        .unwrap();

    let listed = store.list_commentary(first.id, 10).await.unwrap();

    let texts: Vec<&str> = listed.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["Goal", "Kick off"]);
    assert!(listed.iter().all(|c| c.match_id == first.id));
}

#[tokio::test]
async fn given_match_without_commentary_when_listed_then_empty() {
    let store = InMemoryMatchStore::new();
    let created = store.insert_match(new_match("A", "B")).await.unwrap();

    assert!(store.list_commentary(created.id, 10).await.unwrap().is_empty());
}
