use anyhow::Result;
use hotel_web::NavbarEvent;

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext, path: &str) -> Result<()> {
    let mut navbar = ctx.navbar(path);
    navbar.handle(NavbarEvent::Ready);

    let menu = navbar.user_menu();
    let html = navbar.document().content("userMenuItem").unwrap_or_default();
    ctx.render(&menu, html)
}
