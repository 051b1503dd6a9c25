mod context;

pub mod bookings;
pub mod details;
pub mod logout;
pub mod navbar;

pub use context::HandlerContext;

use anyhow::Result;
use hotel_storage::LocalBookingStore;
use hotel_web::{BookingListController, BookingPageEvent, MemoryDocument, NotificationCenter, PageOutcome};

type BookingPage = BookingListController<LocalBookingStore, MemoryDocument>;

/// Run the bookings page's ready handler, failing when it redirects to login.
fn signed_in_page(ctx: &HandlerContext) -> Result<BookingPage> {
    let mut page = ctx.booking_page();
    if let PageOutcome::Redirected(url) = page.handle(BookingPageEvent::Ready) {
        let reason = page
            .document()
            .alerts()
            .last()
            .cloned()
            .unwrap_or_else(|| "Not signed in".to_string());
        anyhow::bail!("{} (redirected to {})", reason, url);
    }
    Ok(page)
}

fn report_notifications(notifications: &NotificationCenter) {
    for notification in notifications.active() {
        eprintln!("Warning: {}", notification.message);
    }
}
