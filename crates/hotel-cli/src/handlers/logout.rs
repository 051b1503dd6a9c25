use anyhow::Result;
use hotel_web::{NavbarEvent, PageOutcome};
use serde::Serialize;

use super::HandlerContext;

#[derive(Debug, Serialize)]
struct LogoutViewModel {
    was_signed_in: bool,
    redirect: String,
}

/// Sign out from the home page; running the command is the confirmation.
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let was_signed_in = ctx.session().is_authenticated();

    let mut navbar = ctx.navbar("/index.html");
    navbar.document_mut().answer_confirm(true);
    let PageOutcome::Redirected(redirect) = navbar.handle(NavbarEvent::LogoutRequested) else {
        anyhow::bail!("Logout was not confirmed");
    };

    ctx.save()?;

    let message = if was_signed_in {
        format!("Signed out. Redirecting to {}\n", redirect)
    } else {
        format!("No active session. Redirecting to {}\n", redirect)
    };
    ctx.render(
        &LogoutViewModel {
            was_signed_in,
            redirect,
        },
        message,
    )
}
