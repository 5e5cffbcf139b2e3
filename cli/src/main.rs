use crate::command::Command;

mod command;

fn main() {
    tracing_subscriber::fmt::init();
    let args = std::env::args().skip(1);
    let command = match Command::parse(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to parse command: {e}");
            std::process::exit(1);
        }
    };
    match command.run() {
        Ok(_) => {}
        Err(e) => {
            std::process::exit(report(&e));
        }
    }
}

/// Print the failure (unless the user cancelled) and pick the exit code.
fn report(error: &eyre::Report) -> i32 {
    match error.downcast_ref::<edspawn_core::Error>() {
        Some(e) if e.is_cancelled() => e.exit_code(),
        Some(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
        None => {
            eprintln!("error: {error}");
            1
        }
    }
}
