use std::env;
use std::process::ExitCode;

use storefront_sdk::presentation::{row_key, PriceTone};
use storefront_sdk::{AsyncStorefront, DetailScreen, ListScreen, Navigator};
use tracing_subscriber::EnvFilter;

fn tone_marker(tone: PriceTone) -> &'static str {
    match tone {
        PriceTone::Discounted => " (sale)",
        PriceTone::Regular => "",
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sdk = match AsyncStorefront::builder().build().await {
        Ok(sdk) => sdk,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize storefront SDK");
            return ExitCode::FAILURE;
        }
    };

    let mut nav = Navigator::new();
    let mut list = ListScreen::new();
    println!("== {} ==", nav.current().header());
    if list.begin() {
        list.publish(sdk.fetch_catalog().await);
    }
    if let Some(failure) = list.state().failure() {
        eprintln!("Could not load products: {}", failure.message);
        return ExitCode::FAILURE;
    }
    for item in list.items() {
        println!(
            "[{}] {} {}{}",
            row_key(item),
            item.title,
            item.price_label(),
            tone_marker(item.price_tone())
        );
    }

    let wanted = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .or_else(|| list.items().first().map(|item| item.id));
    let Some(route) = wanted.and_then(|id| list.select(id)) else {
        eprintln!("No product to open");
        return ExitCode::FAILURE;
    };
    nav.push(route);

    let mut detail = DetailScreen::from_route(nav.current());
    println!();
    println!("== {} ==", nav.current().header());
    if detail.begin() {
        detail.publish(sdk.fetch_detail(detail.item_id()).await);
    }
    match detail.detail() {
        Some(product) => {
            println!(
                "{}{}",
                product.price_label(),
                tone_marker(product.price_tone())
            );
            println!("Description: {}", product.description);
            println!("Category: {}", product.category);
            println!("Image: {}", product.image_url);
            detail.add_to_cart();
        }
        None => {
            let reason = detail
                .state()
                .failure()
                .map(|f| f.message.clone())
                .unwrap_or_default();
            eprintln!("Could not load product {}: {}", detail.item_id(), reason);
            return ExitCode::FAILURE;
        }
    }

    nav.back();
    ExitCode::SUCCESS
}
