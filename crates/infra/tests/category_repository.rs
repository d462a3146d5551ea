use domainkit_categories::{CATEGORY_KIND, Category, CategoryRepository, CreateCategory};
use domainkit_core::{DomainError, DomainResult, Entity, NotFoundError, Repository, Uuid};
use domainkit_infra::repository::InMemoryCategoryRepository;
use proptest::prelude::*;

fn category(name: &str) -> Category {
    Category::create(CreateCategory {
        name: name.to_string(),
        ..CreateCategory::default()
    })
    .unwrap()
}

fn names(items: &[Category]) -> Vec<&str> {
    items.iter().map(Category::name).collect()
}

/// Application-style use case that only sees the contract.
async fn rename(
    repo: &mut dyn CategoryRepository,
    id: &Uuid,
    name: &str,
) -> DomainResult<Category> {
    let mut category = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| NotFoundError::new(id, repo.entity_kind()))?;
    category.change_name(name)?;
    repo.update(category.clone()).await?;
    Ok(category)
}

#[tokio::test]
async fn insert_then_find_round_trip() {
    domainkit_observability::tracing::init_for_tests();

    let mut repo = InMemoryCategoryRepository::new();
    let movie = category("Movie");
    repo.insert(movie.clone()).await;

    let found = repo.find_by_id(movie.entity_id()).await.unwrap();
    assert!(found.equals(Some(&movie)));
    assert_eq!(names(&repo.find_all().await), vec!["Movie"]);
}

#[tokio::test]
async fn update_keeps_position_through_boxed_contract() {
    domainkit_observability::tracing::init_for_tests();

    let mut repo: Box<dyn CategoryRepository> = Box::new(InMemoryCategoryRepository::new());
    let a = category("a");
    let b = category("b");
    let c = category("c");
    repo.bulk_insert(vec![a.clone(), b.clone(), c.clone()]).await;

    let renamed = rename(repo.as_mut(), b.entity_id(), "b2").await.unwrap();
    assert!(renamed.equals(Some(&b)));

    let all = repo.find_all().await;
    assert_eq!(names(&all), vec!["a", "b2", "c"]);
    assert!(all[1].equals(Some(&b)));
}

#[tokio::test]
async fn invalid_rename_leaves_store_untouched() {
    let mut repo = InMemoryCategoryRepository::new();
    let movie = category("Movie");
    repo.insert(movie.clone()).await;

    let err = rename(&mut repo, movie.entity_id(), "").await.unwrap_err();

    match err {
        DomainError::EntityValidation(e) => {
            assert_eq!(
                e.errors().get("name"),
                Some(&["name should not be empty".to_string()][..])
            );
        }
        other => panic!("Expected EntityValidation error, got {other:?}"),
    }
    assert_eq!(names(repo.items()), vec!["Movie"]);
}

#[tokio::test]
async fn missing_category_is_reported_with_kind() {
    let mut repo = InMemoryCategoryRepository::new();
    let id = Uuid::generate();

    let err = rename(&mut repo, &id, "x").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Entity Category not found using ID {id}")
    );

    let err = repo.delete(&id).await.unwrap_err();
    assert_eq!(err, NotFoundError::new(&id, CATEGORY_KIND));
    assert!(repo.find_by_id(&id).await.is_none());
}

#[tokio::test]
async fn delete_then_reinsert_appends_at_end() {
    let mut repo = InMemoryCategoryRepository::new();
    let a = category("a");
    let b = category("b");
    repo.bulk_insert(vec![a.clone(), b.clone()]).await;

    repo.delete(a.entity_id()).await.unwrap();
    repo.insert(a.clone()).await;

    assert_eq!(names(repo.items()), vec!["b", "a"]);
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: Bulk insert into an empty store preserves the given order.
    #[test]
    fn bulk_insert_preserves_order(input in prop::collection::vec("[a-z]{1,12}", 0..16)) {
        let stored = block_on(async {
            let mut repo = InMemoryCategoryRepository::new();
            let categories: Vec<Category> = input.iter().map(|n| category(n)).collect();
            repo.bulk_insert(categories).await;
            repo.find_all().await
        });

        prop_assert_eq!(names(&stored), input.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Property: Deleting one entry removes exactly that entry.
    #[test]
    fn delete_removes_exactly_one(
        input in prop::collection::vec("[a-z]{1,12}", 1..16),
        pick in any::<prop::sample::Index>()
    ) {
        let victim = pick.index(input.len());
        let stored = block_on(async {
            let mut repo = InMemoryCategoryRepository::new();
            let categories: Vec<Category> = input.iter().map(|n| category(n)).collect();
            let id = categories[victim].entity_id().clone();
            repo.bulk_insert(categories).await;
            repo.delete(&id).await.unwrap();
            repo.find_all().await
        });

        let mut expected: Vec<&str> = input.iter().map(String::as_str).collect();
        expected.remove(victim);
        prop_assert_eq!(names(&stored), expected);
    }
}
