use clap::Parser;
use ducklett::{Cli, run};
use ducklett_types::ValidationError;

/// Exit status for a rejected date/time
const EXIT_INVALID_INPUT: i32 = 2;

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping `status` to `head`)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = if e.downcast_ref::<ValidationError>().is_some() {
            EXIT_INVALID_INPUT
        } else {
            1
        };
        std::process::exit(code);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
