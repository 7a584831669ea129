//! Demo driver: builds a few catalog items, subscribes a console handler,
//! and places a book order and a periodical subscription order.

use std::sync::{Arc, RwLock};

use bookshop::lifecycle::{setup_tracing, OrderDesk};
use bookshop::model::{Cadence, CatalogItem, Periodical, PrintItem};
use tracing::info;

/// Renders an item's catalog line through its shared handle.
fn catalog_line<T: CatalogItem>(
    item: &Arc<RwLock<T>>,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(item
        .read()
        .map_err(|_| "catalog item unavailable")?
        .display())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    info!("Starting bookshop demo");

    let desk = OrderDesk::new();
    desk.book_orders.subscribe(|event| {
        println!("Order {} was placed!", event.order_id);
    });

    let rose = Arc::new(RwLock::new(PrintItem::new(
        "978-3-16-148410-0",
        "De naam van de roos",
        "Uitgeverij X",
        20.0,
    )?));
    let nineteen_eighty_four = Arc::new(RwLock::new(PrintItem::new(
        "978-1-4028-9462-6",
        "1984",
        "Uitgeverij Y",
        15.0,
    )?));
    let science_today = Arc::new(RwLock::new(Periodical::new(
        "123-4-567-89012-3",
        "Wetenschap Vandaag",
        "Uitgeverij Z",
        8.0,
        Cadence::Monthly,
    )?));
    let tech_now = Arc::new(RwLock::new(Periodical::new(
        "234-5-678-90123-4",
        "Technologie Nu",
        "Uitgeverij A",
        10.0,
        Cadence::Weekly,
    )?));

    println!("{}", catalog_line(&nineteen_eighty_four)?);
    println!("{}", catalog_line(&science_today)?);
    println!("{}", catalog_line(&tech_now)?);

    let book_order = desk.new_order(Arc::clone(&rose), 3, None);
    let receipt = book_order.place(&desk.book_orders)?;
    println!(
        "Ordered: ISBN {}, quantity: {}, total price: €{}",
        receipt.isbn, receipt.quantity, receipt.total_price
    );

    let subscription = desk.new_order(science_today, 1, Some(Cadence::Monthly));
    subscription.place(&desk.periodical_orders)?;

    info!("Demo finished");
    Ok(())
}
