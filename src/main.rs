mod cli;

use crate::cli::Cli;
use crate::cli::app::{App, init_logging};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app = App::new(cli);
    app.run()
}
