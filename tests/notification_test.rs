use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use bookshop::lifecycle::OrderDesk;
use bookshop::model::{Cadence, Periodical, PrintItem};

/// A handler on the book hub never fires for a periodical placement, and
/// vice versa. Each hub only ever announces its own variant.
#[test]
fn hubs_are_isolated_per_item_variant() {
    let desk = OrderDesk::new();

    let book_notifications = Arc::new(AtomicUsize::new(0));
    let periodical_notifications = Arc::new(AtomicUsize::new(0));
    {
        let counter = Arc::clone(&book_notifications);
        desk.book_orders.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&periodical_notifications);
        desk.periodical_orders.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }

    let magazine = Arc::new(RwLock::new(
        Periodical::new("m", "Mag", "P", 8.0, Cadence::Monthly).unwrap(),
    ));
    let subscription = desk.new_order(magazine, 1, Some(Cadence::Monthly));
    subscription.place(&desk.periodical_orders).unwrap();

    assert_eq!(book_notifications.load(Ordering::SeqCst), 0);
    assert_eq!(periodical_notifications.load(Ordering::SeqCst), 1);

    let book = Arc::new(RwLock::new(PrintItem::new("b", "Book", "P", 20.0).unwrap()));
    let order = desk.new_order(book, 2, None);
    order.place(&desk.book_orders).unwrap();

    assert_eq!(book_notifications.load(Ordering::SeqCst), 1);
    assert_eq!(periodical_notifications.load(Ordering::SeqCst), 1);
}

/// Placement succeeds with nobody listening.
#[test]
fn placement_with_zero_handlers_is_not_an_error() {
    let desk = OrderDesk::new();
    let book = Arc::new(RwLock::new(PrintItem::new("b", "Book", "P", 20.0).unwrap()));

    let order = desk.new_order(book, 1, None);
    let receipt = order.place(&desk.book_orders).unwrap();
    assert_eq!(receipt.total_price, 20.0);
}

/// Handlers fire during the `place` call itself, before it returns: the
/// handler observes the event strictly before the receipt exists.
#[test]
fn dispatch_completes_before_place_returns() {
    let desk = OrderDesk::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    desk.book_orders.subscribe(move |event| {
        assert_eq!(event.order_id, 1);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let book = Arc::new(RwLock::new(PrintItem::new("b", "Book", "P", 20.0).unwrap()));
    let order = desk.new_order(book, 1, None);

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    let receipt = order.place(&desk.book_orders).unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(receipt.quantity, 1);
}

/// Unsubscribing is the reverse of subscribing: the dropped handler stops
/// firing while the remaining one keeps going.
#[test]
fn unsubscribed_handlers_stop_firing() {
    let desk = OrderDesk::new();
    let kept_count = Arc::new(AtomicUsize::new(0));
    let dropped_count = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&kept_count);
    desk.book_orders.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let counter = Arc::clone(&dropped_count);
    let token = desk.book_orders.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let book = Arc::new(RwLock::new(PrintItem::new("b", "Book", "P", 20.0).unwrap()));
    let order = desk.new_order(book, 1, None);

    order.place(&desk.book_orders).unwrap();
    assert!(desk.book_orders.unsubscribe(token));
    order.place(&desk.book_orders).unwrap();

    assert_eq!(kept_count.load(Ordering::SeqCst), 2);
    assert_eq!(dropped_count.load(Ordering::SeqCst), 1);
}
