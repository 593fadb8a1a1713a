use std::{env, process};

use order_form::{
    cli::{run_cli, run_cli_in, CliMode},
    init,
};

fn main() {
    init();

    let script = env::args().skip(1).any(|arg| arg == "--script");
    let result = if script {
        run_cli_in(CliMode::Script)
    } else {
        run_cli()
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
