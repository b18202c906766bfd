//! Async wrapper tests (requires the `async` feature).

mod common;

use storefront_sdk::{AsyncStorefront, ListScreen};

#[tokio::test]
async fn fetch_catalog_async() {
    let sdk = AsyncStorefront::builder()
        .transport(common::sample_transport())
        .build()
        .await
        .unwrap();

    let items = sdk.fetch_catalog().await.unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn fetch_detail_async() {
    let sdk = AsyncStorefront::from_sdk(common::sdk_with(common::sample_transport()));

    let detail = sdk.fetch_detail(2).await.unwrap();
    assert_eq!(detail.id, 2);
    assert!(!detail.discount);
}

#[tokio::test]
async fn screen_publish_after_await() {
    let sdk = AsyncStorefront::from_sdk(common::sdk_with(common::sample_transport()));
    let mut screen = ListScreen::new();

    assert!(screen.begin());
    assert!(screen.items().is_empty());
    screen.publish(sdk.fetch_catalog().await);
    assert_eq!(screen.items().len(), 3);
}
