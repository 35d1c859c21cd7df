use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::repositories::{LinkRepository, StoreError};
use tinylink::infrastructure::persistence::PgLinkRepository;
use tokio::task::JoinSet;

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(NewLink::new("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::new("dup001", "https://first.example.com"))
        .await
        .unwrap();
    let result = repo
        .create(NewLink::new("dup001", "https://second.example.com"))
        .await;

    assert_eq!(result, Err(StoreError::DuplicateCode("dup001".to_string())));

    let stored = repo.find_by_code("dup001").await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://first.example.com");
}

#[sqlx::test]
async fn test_codes_are_case_sensitive(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::new("abcdef", "https://lower.example.com"))
        .await
        .unwrap();
    repo.create(NewLink::new("ABCDEF", "https://upper.example.com"))
        .await
        .unwrap();

    let upper = repo.find_by_code("ABCDEF").await.unwrap().unwrap();
    assert_eq!(upper.target_url, "https://upper.example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("nope99").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    sqlx::query(
        "INSERT INTO links (code, target_url, created_at) VALUES
            ('old001', 'https://example.com/1', NOW() - INTERVAL '2 hours'),
            ('mid001', 'https://example.com/2', NOW() - INTERVAL '1 hour'),
            ('new001', 'https://example.com/3', NOW())",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));
    let codes: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.code)
        .collect();

    assert_eq!(codes, vec!["new001", "mid001", "old001"]);
}

#[sqlx::test]
async fn test_delete_by_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(NewLink::new("del001", "https://example.com"))
        .await
        .unwrap();

    let deleted = repo.delete_by_code("del001").await.unwrap();
    assert_eq!(deleted.map(|l| l.code), Some("del001".to_string()));

    assert!(repo.find_by_code("del001").await.unwrap().is_none());
    assert!(repo.delete_by_code("del001").await.unwrap().is_none());
    assert!(repo.increment_click("del001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_increment_click(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(NewLink::new("clk001", "https://example.com"))
        .await
        .unwrap();

    let target = repo.increment_click("clk001").await.unwrap();
    assert_eq!(target.as_deref(), Some("https://example.com"));

    let link = repo.find_by_code("clk001").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 1);
    assert!(link.last_clicked.is_some());
}

#[sqlx::test]
async fn test_concurrent_increments(pool: PgPool) {
    const CLICKS: i64 = 50;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    repo.create(NewLink::new("race01", "https://example.com"))
        .await
        .unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..CLICKS {
        let repo = repo.clone();
        tasks.spawn(async move { repo.increment_click("race01").await });
    }
    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().unwrap().is_some());
    }

    let link = repo.find_by_code("race01").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, CLICKS);
}
