//! smscr command-line interface.

use smscrc::{init_tracing, parse_args, run, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!("Run `smscr help` for usage.");
            }
            std::process::exit(err.exit_code());
        }
    };

    std::process::exit(run(command));
}
