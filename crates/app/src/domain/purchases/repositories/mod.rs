//! Purchase Repositories

mod line_items;
mod purchases;

pub(crate) use line_items::PgLineItemsRepository;
pub(crate) use purchases::PgPurchasesRepository;
