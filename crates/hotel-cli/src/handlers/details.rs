use anyhow::Result;
use hotel_types::BookingId;

use super::{signed_in_page, HandlerContext};

pub fn handle(ctx: &HandlerContext, id: &BookingId) -> Result<()> {
    let mut page = signed_in_page(ctx)?;

    let Some(detail) = page.show_details(id) else {
        let reason = page
            .notifications()
            .active()
            .last()
            .map(|n| n.message.clone())
            .unwrap_or_else(|| "Booking not found".to_string());
        anyhow::bail!("{}: {}", reason, id);
    };

    let html = page.document().content("detailsBody").unwrap_or_default();
    ctx.render(&detail, html)
}
