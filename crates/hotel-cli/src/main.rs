use clap::Parser;
use hotel::{run, Cli};

fn main() {
    // Reset SIGPIPE so piping into `head` does not panic on a closed stdout
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    hotel::logging::init(cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
