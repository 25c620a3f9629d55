//! Command-layer tests against a mocked `ProductRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use catalog_client::{ClientError, ClientResult, ProductPage, ProductRepository};
use catalog_core::{Money, PageRequest, Product, ProductDraft, ProductId};
use catalog_dashboard::commands;
use catalog_dashboard::config::DashboardConfig;
use catalog_dashboard::error::ErrorCode;
use catalog_dashboard::state::CatalogState;
use catalog_dashboard::storage::MemoryStore;
use catalog_dashboard::Dashboard;

mock! {
    pub Repo {}

    #[async_trait]
    impl ProductRepository for Repo {
        async fn fetch_products(&self, page: Option<PageRequest>) -> ClientResult<ProductPage>;
        async fn get_product_by_id(&self, id: &ProductId) -> ClientResult<Product>;
        async fn create_product(&self, product: &Product) -> ClientResult<Product>;
        async fn update_product(&self, id: &ProductId, product: &Product) -> ClientResult<Product>;
        async fn delete_product(&self, id: &ProductId) -> ClientResult<()>;
        async fn get_categories(&self) -> ClientResult<Vec<String>>;
    }
}

fn catalog(count: usize) -> ProductPage {
    let products: Vec<Product> = (1..=count)
        .map(|i| {
            Product::named(format!("Product {}", i))
                .with_id(i as i64)
                .with_price(Money::from_cents(i as i64 * 500))
                .with_category(if i % 2 == 0 { "Home" } else { "Office" })
                .with_rating(4.0)
        })
        .collect();
    ProductPage {
        total_count: products.len(),
        products,
    }
}

fn valid_draft() -> ProductDraft {
    ProductDraft {
        name: "  Standing Desk ".to_string(),
        description: String::new(),
        price: 199.0,
        category: "Office".to_string(),
        rating: 4.5,
    }
}

fn server_error() -> ClientError {
    ClientError::Http {
        status: 500,
        message: "internal".to_string(),
    }
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn test_load_products_fills_first_page() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_products()
        .withf(|page| page.is_none())
        .times(1)
        .returning(|_| Ok(catalog(12)));

    let state = CatalogState::new(10);
    let view = commands::load_products(&repo, &state).await.unwrap();

    assert!(!view.loading);
    assert_eq!(view.total_products, 12);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.products.len(), 10);
    assert!(view.last_loaded_at.is_some());
}

#[tokio::test]
async fn test_load_failure_keeps_previous_products() {
    let mut repo = MockRepo::new();
    let mut calls = 0;
    repo.expect_fetch_products().times(2).returning(move |_| {
        calls += 1;
        if calls == 1 {
            Ok(catalog(3))
        } else {
            Err(ClientError::Timeout)
        }
    });

    let state = CatalogState::new(10);
    commands::load_products(&repo, &state).await.unwrap();

    let err = commands::load_products(&repo, &state).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NetworkError);
    assert_eq!(err.message, "Failed to fetch products");

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.total_products, 3);
}

#[tokio::test]
async fn test_refresh_tolerates_category_failure() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_products().returning(|_| Ok(catalog(2)));
    repo.expect_get_categories()
        .times(1)
        .returning(|| Err(ClientError::Network("reset".into())));

    let state = CatalogState::new(10);
    let view = commands::refresh(&repo, &state).await.unwrap();

    assert_eq!(view.total_products, 2);
    assert!(view.categories.is_empty());
}

#[tokio::test]
async fn test_load_categories() {
    let mut repo = MockRepo::new();
    repo.expect_get_categories()
        .returning(|| Ok(vec!["Home".into(), "Office".into(), "Home".into()]));

    let state = CatalogState::new(10);
    let categories = commands::load_categories(&repo, &state).await.unwrap();

    assert_eq!(categories, vec!["Home", "Office"]);
    assert_eq!(state.view().categories, vec!["Home", "Office"]);
}

#[tokio::test]
async fn test_view_product_not_found() {
    let mut repo = MockRepo::new();
    repo.expect_get_product_by_id()
        .withf(|id| id.as_str() == "42")
        .returning(|_| Err(ClientError::not_found("Product 42")));

    let err = commands::view_product(&repo, &ProductId::from(42))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_find_loaded_product_uses_store() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_products().returning(|_| Ok(catalog(3)));
    repo.expect_get_product_by_id().never();

    let state = CatalogState::new(10);
    commands::load_products(&repo, &state).await.unwrap();

    let product = commands::find_loaded_product(&state, &ProductId::from("2")).unwrap();
    assert_eq!(product.name, "Product 2");

    let err = commands::find_loaded_product(&state, &ProductId::from(9)).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.message, "Product not found: 9");
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_invalid_draft_never_reaches_network() {
    let mut repo = MockRepo::new();
    repo.expect_create_product().never();
    repo.expect_update_product().never();
    repo.expect_fetch_products().never();

    let state = CatalogState::new(10);
    let draft = ProductDraft {
        price: 0.0,
        ..valid_draft()
    };

    let err = commands::create_product(&repo, &state, &draft)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);

    let err = commands::update_product(&repo, &state, Some(&ProductId::from(1)), &draft)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
}

#[tokio::test]
async fn test_missing_id_never_reaches_network() {
    let mut repo = MockRepo::new();
    repo.expect_update_product().never();
    repo.expect_delete_product().never();
    repo.expect_fetch_products().never();

    let state = CatalogState::new(10);

    let err = commands::update_product(&repo, &state, None, &valid_draft())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingId);
    assert_eq!(err.message, "Cannot update a product without a valid ID");

    let blank = ProductId::from("  ");
    let err = commands::delete_product(&repo, &state, Some(&blank))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingId);
    assert_eq!(err.message, "Cannot delete a product without a valid ID");
}

#[tokio::test]
async fn test_create_refetches_catalog() {
    let mut repo = MockRepo::new();
    repo.expect_create_product()
        .withf(|p| p.name == "Standing Desk" && p.id.is_none() && p.description.is_none())
        .times(1)
        .returning(|p| Ok(p.clone().with_id(13)));
    repo.expect_fetch_products()
        .times(1)
        .returning(|_| Ok(catalog(13)));

    let state = CatalogState::new(10);
    let created = commands::create_product(&repo, &state, &valid_draft())
        .await
        .unwrap();

    assert_eq!(created.id, Some(ProductId::from(13)));
    assert_eq!(created.price.map(|p| p.value()), Some(199.0));
    assert_eq!(state.view().total_products, 13);
}

#[tokio::test]
async fn test_update_sends_id_and_refetches() {
    let mut repo = MockRepo::new();
    repo.expect_update_product()
        .withf(|id, p| id.as_str() == "1" && p.name == "Standing Desk")
        .times(1)
        .returning(|id, p| Ok(p.clone().with_id(id.clone())));
    repo.expect_fetch_products()
        .times(1)
        .returning(|_| Ok(catalog(3)));

    let state = CatalogState::new(10);
    let updated = commands::update_product(&repo, &state, Some(&ProductId::from(1)), &valid_draft())
        .await
        .unwrap();

    assert_eq!(updated.id, Some(ProductId::from(1)));
    assert_eq!(state.view().total_products, 3);
}

#[tokio::test]
async fn test_failed_update_is_generic_and_skips_refetch() {
    let mut repo = MockRepo::new();
    repo.expect_update_product()
        .times(1)
        .returning(|_, _| Err(server_error()));
    repo.expect_fetch_products().never();

    let state = CatalogState::new(10);
    let err = commands::update_product(&repo, &state, Some(&ProductId::from(1)), &valid_draft())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NetworkError);
    assert_eq!(err.message, "Failed to update product");
}

#[tokio::test]
async fn test_delete_refetches_catalog() {
    let mut repo = MockRepo::new();
    repo.expect_delete_product()
        .withf(|id| id.as_str() == "2")
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_fetch_products()
        .times(1)
        .returning(|_| Ok(catalog(1)));

    let state = CatalogState::new(10);
    commands::delete_product(&repo, &state, Some(&ProductId::from(2)))
        .await
        .unwrap();

    assert_eq!(state.view().total_products, 1);
}

#[tokio::test]
async fn test_mutation_survives_failed_refetch() {
    let mut repo = MockRepo::new();
    repo.expect_delete_product().returning(|_| Ok(()));
    repo.expect_fetch_products()
        .times(1)
        .returning(|_| Err(server_error()));

    let state = CatalogState::new(10);
    commands::delete_product(&repo, &state, Some(&ProductId::from(2)))
        .await
        .unwrap();

    assert!(!state.view().loading);
}

// =============================================================================
// Dashboard wiring
// =============================================================================

#[tokio::test]
async fn test_dashboard_refresh_with_mock_parts() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_products().returning(|_| Ok(catalog(25)));
    repo.expect_get_categories()
        .returning(|| Ok(vec!["Office".into(), "Home".into()]));

    let mut config = DashboardConfig::default();
    config.catalog.page_size = 20;

    let dashboard = Dashboard::with_parts(config, Arc::new(repo), Arc::new(MemoryStore::new()));
    let view = dashboard.refresh().await.unwrap();

    assert_eq!(view.page_size, 20);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.categories, vec!["Office", "Home"]);

    let view = commands::set_page(&dashboard.catalog, 2);
    assert_eq!(view.products.len(), 5);

    dashboard
        .favorites
        .toggle(&ProductId::from(25))
        .unwrap();
    let favorites = commands::favorite_products(&dashboard.catalog, &dashboard.favorites);
    assert_eq!(favorites[0].name, "Product 25");
}
