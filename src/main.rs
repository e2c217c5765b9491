use std::process::exit;

use dotenv::dotenv;

fn main() {
    dotenv().ok();

    if let Err(e) = contact_book::cli::run_app() {
        eprintln!("{}", e);
        exit(1);
    }
}
