//! Order ledger.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::{
            models::{ProductId, ProductWithSeller},
            repository::PgProductsRepository,
        },
        purchases::{
            data::{NewPurchaseLineItem, NewPurchaseRecord},
            errors::PurchasesServiceError,
            models::{Purchase, PurchaseId, PurchaseLineItem},
            repositories::{PgLineItemsRepository, PgPurchasesRepository},
        },
    },
};

/// Transactional persistence for purchases and their line items.
#[automock]
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Batch-read products joined with their seller's payout details.
    async fn get_products_by_ids(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<ProductWithSeller>, PurchasesServiceError>;

    /// Insert a purchase header and all of its lines in one transaction.
    async fn create_purchase(
        &self,
        purchase: NewPurchaseRecord,
        items: Vec<NewPurchaseLineItem>,
    ) -> Result<Purchase, PurchasesServiceError>;

    /// Retrieve a single purchase.
    async fn get_purchase(&self, purchase: PurchaseId) -> Result<Purchase, PurchasesServiceError>;

    /// Retrieve every line of a purchase.
    async fn get_purchase_line_items(
        &self,
        purchase: PurchaseId,
    ) -> Result<Vec<PurchaseLineItem>, PurchasesServiceError>;

    /// Set `paid_at` and take each line's quantity out of stock, all or nothing.
    async fn mark_paid_and_decrement_stock(
        &self,
        purchase: PurchaseId,
        items: &[PurchaseLineItem],
    ) -> Result<(), PurchasesServiceError>;
}

#[derive(Debug, Clone)]
pub struct PgOrderLedger {
    db: Db,
    purchases_repository: PgPurchasesRepository,
    items_repository: PgLineItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgOrderLedger {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            purchases_repository: PgPurchasesRepository::new(),
            items_repository: PgLineItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl OrderLedger for PgOrderLedger {
    async fn get_products_by_ids(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<ProductWithSeller>, PurchasesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .products_repository
            .get_products_by_ids(&mut tx, products)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn create_purchase(
        &self,
        purchase: NewPurchaseRecord,
        items: Vec<NewPurchaseLineItem>,
    ) -> Result<Purchase, PurchasesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .purchases_repository
            .create_purchase(&mut tx, &purchase)
            .await?;

        self.items_repository
            .create_line_items(&mut tx, created.id, &items)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_purchase(&self, purchase: PurchaseId) -> Result<Purchase, PurchasesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let purchase = self
            .purchases_repository
            .get_purchase(&mut tx, purchase)
            .await?;

        tx.commit().await?;

        Ok(purchase)
    }

    async fn get_purchase_line_items(
        &self,
        purchase: PurchaseId,
    ) -> Result<Vec<PurchaseLineItem>, PurchasesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let items = self
            .items_repository
            .get_line_items(&mut tx, purchase)
            .await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn mark_paid_and_decrement_stock(
        &self,
        purchase: PurchaseId,
        items: &[PurchaseLineItem],
    ) -> Result<(), PurchasesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .purchases_repository
            .mark_paid(&mut tx, purchase, Timestamp::now())
            .await?;

        if rows_affected == 0 {
            // Either the purchase vanished or a concurrent payment won the race.
            let existing = self
                .purchases_repository
                .get_purchase(&mut tx, purchase)
                .await?;

            return Err(if existing.is_paid() {
                PurchasesServiceError::AlreadyPaid
            } else {
                PurchasesServiceError::NotFound
            });
        }

        for item in items {
            let rows_affected = self
                .products_repository
                .decrement_stock(&mut tx, item.product_id, item.qty)
                .await?;

            if rows_affected == 0 {
                return Err(PurchasesServiceError::InsufficientStock {
                    product: item.product_id,
                });
            }
        }

        tx.commit().await?;

        Ok(())
    }
}
