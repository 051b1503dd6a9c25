use anyhow::Result;
use hotel_types::FilterMode;
use hotel_web::BookingPageEvent;
use std::fmt::Write;

use super::{report_notifications, signed_in_page, HandlerContext};

const STAT_IDS: [&str; 3] = ["totalBookings", "activeBookings", "totalSpent"];

pub fn handle(ctx: &HandlerContext, filter: FilterMode) -> Result<()> {
    let mut page = signed_in_page(ctx)?;
    page.handle(BookingPageEvent::FilterChanged(filter));
    report_notifications(page.notifications());

    let doc = page.document();
    let mut html = String::new();
    writeln!(html, r#"<ul class="booking-stats">"#)?;
    for id in STAT_IDS {
        writeln!(
            html,
            r#"  <li id="{}">{}</li>"#,
            id,
            hotel_web::escape_html(doc.content(id).unwrap_or_default())
        )?;
    }
    writeln!(html, "</ul>")?;
    writeln!(html, r#"<div id="bookingsContainer">"#)?;
    html.push_str(doc.content("bookingsContainer").unwrap_or_default());
    writeln!(html, "</div>")?;

    ctx.render(&page.page_view_model(), html)
}
