//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::products::models::{
        FileId, ProductId, ProductSummary, ProductWithSeller, SellerId, SellerPayout,
    },
};

const GET_PRODUCTS_BY_IDS_SQL: &str = include_str!("sql/get_products_by_ids.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch every listed product with its seller in one round trip, ordered by id.
    pub(crate) async fn get_products_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductId],
    ) -> Result<Vec<ProductWithSeller>, sqlx::Error> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = products.iter().map(|id| id.into_i64()).collect();

        query_as::<Postgres, ProductWithSeller>(GET_PRODUCTS_BY_IDS_SQL)
            .bind(ids)
            .fetch_all(&mut **tx)
            .await
    }

    /// Take `qty` units out of stock, returning 0 when the product has fewer left.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        qty: u64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(product.into_i64())
            .bind(amount_to_i64(qty, "qty")?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductWithSeller {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let product = ProductSummary {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            qty: try_get_amount(row, "qty")?,
            price: try_get_amount(row, "price")?,
            sku: row.try_get("sku")?,
            file_id: FileId::from_i64(row.try_get("file_id")?),
            file_uri: row.try_get("file_uri")?,
            file_thumbnail_uri: row.try_get("file_thumbnail_uri")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        };

        let seller = SellerPayout {
            seller_id: SellerId::from_i64(row.try_get("seller_id")?),
            bank_account_name: row.try_get("bank_account_name")?,
            bank_account_holder: row.try_get("bank_account_holder")?,
            bank_account_number: row.try_get("bank_account_number")?,
        };

        Ok(Self { product, seller })
    }
}
