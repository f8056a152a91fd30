use clap::Args;
use lapak_app::{
    database::{self, Db},
    domain::purchases::{OrderLedger, PgOrderLedger, models::PurchaseId},
};

#[derive(Debug, Args)]
pub(crate) struct ShowPurchaseArgs {
    /// Purchase id
    purchase_id: PurchaseId,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ShowPurchaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let ledger = PgOrderLedger::new(Db::new(pool));

    let purchase = ledger
        .get_purchase(args.purchase_id)
        .await
        .map_err(|error| format!("failed to load purchase {}: {error}", args.purchase_id))?;

    let items = ledger
        .get_purchase_line_items(args.purchase_id)
        .await
        .map_err(|error| format!("failed to load line items: {error}"))?;

    println!("purchase_id: {}", purchase.id);
    println!("total_price: {}", purchase.total_price);
    println!("total_transfer: {}", purchase.total_transfer);
    println!("sender_name: {}", purchase.sender.name);
    println!(
        "sender_contact: {} {}",
        purchase.sender.contact_type, purchase.sender.contact_detail
    );
    println!("created_at: {}", purchase.created_at);
    println!(
        "paid_at: {}",
        purchase
            .paid_at
            .map_or_else(|| "unpaid".to_string(), |value| value.to_string())
    );

    for item in items {
        println!();
        println!("product_id: {}", item.product_id);
        println!("qty: {}", item.qty);
    }

    Ok(())
}
