use std::io;
use std::path::Path;

use log::error;
use number_stats::runner::run_and_report;

fn main() {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    if let Err(err) = run_and_report(&mut input, &mut out, Path::new(".")) {
        error!("{}", err);
    }
}
