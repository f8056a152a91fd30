use clap::{Parser, Subcommand};

mod db;
mod purchase;

#[derive(Debug, Parser)]
#[command(name = "lapak-app", about = "Lapak CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Purchase(purchase::PurchaseCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Purchase(command) => purchase::run(command).await,
        }
    }
}
