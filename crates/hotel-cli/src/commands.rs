use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = HandlerContext::open(&cli)?;

    match cli.command {
        Commands::Bookings { filter } => handlers::bookings::handle(&ctx, filter),
        Commands::Details { id } => handlers::details::handle(&ctx, &id),
        Commands::Navbar { path } => handlers::navbar::handle(&ctx, &path),
        Commands::Logout => handlers::logout::handle(&ctx),
    }
}
