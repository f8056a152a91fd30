//! Purchases Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::purchases::{
        data::NewPurchaseRecord,
        models::{ContactType, Purchase, PurchaseId, Sender},
    },
};

const CREATE_PURCHASE_SQL: &str = include_str!("../sql/create_purchase.sql");
const GET_PURCHASE_SQL: &str = include_str!("../sql/get_purchase.sql");
const MARK_PURCHASE_PAID_SQL: &str = include_str!("../sql/mark_purchase_paid.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPurchasesRepository;

impl PgPurchasesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: &NewPurchaseRecord,
    ) -> Result<Purchase, sqlx::Error> {
        let total_transfer = i32::try_from(purchase.total_transfer).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "total_transfer".to_string(),
                source: Box::new(e),
            }
        })?;

        query_as::<Postgres, Purchase>(CREATE_PURCHASE_SQL)
            .bind(amount_to_i64(purchase.total_price, "total_price")?)
            .bind(total_transfer)
            .bind(&purchase.sender.name)
            .bind(purchase.sender.contact_type.as_str())
            .bind(&purchase.sender.contact_detail)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseId,
    ) -> Result<Purchase, sqlx::Error> {
        query_as::<Postgres, Purchase>(GET_PURCHASE_SQL)
            .bind(purchase.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Stamp `paid_at` on an unpaid purchase. Returns 0 when it is missing or already paid.
    pub(crate) async fn mark_paid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseId,
        paid_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_PURCHASE_PAID_SQL)
            .bind(purchase.into_i64())
            .bind(SqlxTimestamp::from(paid_at))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Purchase {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_transfer_i32: i32 = row.try_get("total_transfer")?;

        let total_transfer =
            u32::try_from(total_transfer_i32).map_err(|e| sqlx::Error::ColumnDecode {
                index: "total_transfer".to_string(),
                source: Box::new(e),
            })?;

        let contact_type = row
            .try_get::<String, _>("sender_contact_type")?
            .parse::<ContactType>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "sender_contact_type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: PurchaseId::from_i64(row.try_get("id")?),
            total_price: try_get_amount(row, "total_price")?,
            total_transfer,
            sender: Sender {
                name: row.try_get("sender_name")?,
                contact_type,
                contact_detail: row.try_get("sender_contact_detail")?,
            },
            paid_at: row
                .try_get::<Option<SqlxTimestamp>, _>("paid_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
