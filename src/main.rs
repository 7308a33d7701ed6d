use contact_book::prelude::run_app;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
