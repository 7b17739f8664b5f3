//! bpk - branchpack binary entry point

use branchpack::cli;
use branchpack::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
