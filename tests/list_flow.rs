//! End-to-end list browsing scenarios over the public API, driven against a
//! fake paged backend.

use std::sync::Mutex;
use std::time::Duration;

use backoffice::{
    Collection, ListController, ListQuery, ListSource, PageRequest, Product, Result,
    ScrollMetrics, ScrollTrigger, SearchKind,
};

/// In-memory stand-in for the product service: filters by `searchName` and
/// slices the result into pages, like the real list endpoint.
struct FakeBackend {
    products: Mutex<Vec<Product>>,
}

impl FakeBackend {
    fn with_products(count: i64) -> Self {
        let products = (1..=count)
            .map(|id| Product {
                id,
                name: if id % 5 == 0 {
                    format!("Lamp {id}")
                } else {
                    format!("Desk {id}")
                },
                price: 1000 * id,
                stock_quantity: 10,
                thumbnail_path: None,
            })
            .collect();
        Self {
            products: Mutex::new(products),
        }
    }

    fn delete(&self, id: i64) {
        self.products.lock().unwrap().retain(|p| p.id != id);
    }
}

impl ListSource for FakeBackend {
    type Item = Product;

    async fn fetch_page(&self, query: &ListQuery, page: PageRequest) -> Result<Vec<Product>> {
        let products = self.products.lock().unwrap();
        let filtered: Vec<Product> = products
            .iter()
            .filter(|p| query.search_name().is_none_or(|name| p.name.contains(name)))
            .cloned()
            .collect();
        let start = (page.number * page.size) as usize;
        Ok(filtered
            .into_iter()
            .skip(start)
            .take(page.size as usize)
            .collect())
    }
}

fn near_bottom() -> ScrollMetrics {
    ScrollMetrics {
        viewport_height: 800.0,
        scroll_top: 1150.0,
        content_height: 2000.0,
    }
}

/// Scroll the whole unfiltered list into view, then narrow it with a search,
/// then invalidate after a delete. The controller pages through cleanly and
/// the trigger falls silent once the backend runs out of rows.
#[tokio::test]
async fn test_browse_search_and_invalidate() {
    let backend = FakeBackend::with_products(40);
    let query = ListQuery::unfiltered(Collection::Product.default_sort());
    let mut controller = ListController::new(backend, query);
    // Zero interval disables throttling so the scenario is deterministic.
    let mut trigger = ScrollTrigger::with(100.0, Duration::ZERO);

    controller.start().await;
    assert_eq!(controller.items().len(), 15);
    assert!(!controller.state().is_last_page);

    // Keep scrolling to the bottom until the trigger stops asking.
    while trigger.should_fetch(near_bottom(), controller.state()) {
        controller.fetch_next().await;
    }
    assert_eq!(controller.items().len(), 40);
    assert!(controller.state().is_last_page);

    // Narrow the list to lamps only; the controller restarts at page 0.
    let lamp_query = ListQuery::filtered(
        SearchKind::All,
        "Lamp",
        Collection::Product.default_sort(),
    );
    controller.set_query(lamp_query).await;
    assert_eq!(controller.items().len(), 8);
    assert!(controller.items().iter().all(|p| p.name.starts_with("Lamp")));
    assert_eq!(controller.state().next_page, 1);

    // A collaborator deletes a lamp and signals invalidation.
    controller.source().delete(5);
    controller.invalidate().await;
    assert_eq!(controller.items().len(), 7);
    assert!(controller.items().iter().all(|p| p.id != 5));
}

/// A search with no matches leaves an empty, terminal list; resubmitting the
/// empty search restores the full listing from page 0.
#[tokio::test]
async fn test_no_match_search_then_recover() {
    let backend = FakeBackend::with_products(20);
    let query = ListQuery::unfiltered(Collection::Product.default_sort());
    let mut controller = ListController::new(backend, query.clone());

    controller.start().await;
    assert_eq!(controller.items().len(), 15);

    let no_match = ListQuery::filtered(
        SearchKind::All,
        "Chandelier",
        Collection::Product.default_sort(),
    );
    controller.set_query(no_match).await;
    assert!(controller.items().is_empty());
    assert!(controller.state().is_last_page);

    let mut trigger = ScrollTrigger::with(100.0, Duration::ZERO);
    assert!(
        !trigger.should_fetch(near_bottom(), controller.state()),
        "terminal empty list must not keep fetching"
    );

    controller.set_query(query).await;
    assert_eq!(controller.items().len(), 15);
    assert_eq!(controller.state().next_page, 1);
}
