//! Purchase Line Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        products::models::ProductId,
        purchases::{
            data::NewPurchaseLineItem,
            models::{LineItemId, PurchaseId, PurchaseLineItem},
        },
    },
};

const CREATE_LINE_ITEMS_SQL: &str = include_str!("../sql/create_line_items.sql");
const GET_LINE_ITEMS_SQL: &str = include_str!("../sql/get_line_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLineItemsRepository;

impl PgLineItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert every line of a purchase with a single statement.
    pub(crate) async fn create_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseId,
        items: &[NewPurchaseLineItem],
    ) -> Result<Vec<PurchaseLineItem>, sqlx::Error> {
        let product_ids: Vec<i64> = items.iter().map(|item| item.product_id.into_i64()).collect();

        let quantities = items
            .iter()
            .map(|item| amount_to_i64(item.qty, "qty"))
            .collect::<Result<Vec<i64>, _>>()?;

        query_as::<Postgres, PurchaseLineItem>(CREATE_LINE_ITEMS_SQL)
            .bind(purchase.into_i64())
            .bind(product_ids)
            .bind(quantities)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseId,
    ) -> Result<Vec<PurchaseLineItem>, sqlx::Error> {
        query_as::<Postgres, PurchaseLineItem>(GET_LINE_ITEMS_SQL)
            .bind(purchase.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseLineItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: LineItemId::from_i64(row.try_get("id")?),
            purchase_id: PurchaseId::from_i64(row.try_get("purchase_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            qty: try_get_amount(row, "qty")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
