use clap::{Args, Subcommand};

mod show;

#[derive(Debug, Args)]
pub(crate) struct PurchaseCommand {
    #[command(subcommand)]
    command: PurchaseSubcommand,
}

#[derive(Debug, Subcommand)]
enum PurchaseSubcommand {
    /// Print a purchase header and its line items
    Show(show::ShowPurchaseArgs),
}

pub(crate) async fn run(command: PurchaseCommand) -> Result<(), String> {
    match command.command {
        PurchaseSubcommand::Show(args) => show::run(args).await,
    }
}
