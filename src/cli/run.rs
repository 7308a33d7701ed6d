use crate::{
    logging::{Verbosity, init_logging},
    prelude::{
        AppError, ContactStore, ContactUi, TerminalView,
        command::Cli,
        storage::{StorageMedium, parse_storage_type},
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::io;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let medium = StorageMedium::from(&cli.storage_choice)?;
    let storage = parse_storage_type(medium, &cli.storage_path)?;

    info!(
        medium = medium.is_which(),
        path = %cli.storage_path,
        "Current storage choice"
    );

    let store = ContactStore::load(storage)?;

    let stdin = io::stdin();
    let mut view = TerminalView::new(stdin.lock(), io::stdout());
    view.banner()?;

    let mut ui = ContactUi::new(store, view)?;
    ui.run()
}
