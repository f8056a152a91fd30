//! Purchases service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{Span, info, warn};

use crate::{
    database::Db,
    domain::{
        products::models::{FileId, ProductId, ProductWithSeller},
        purchases::{
            data::{NewPayment, NewPurchase, NewPurchaseLineItem, NewPurchaseRecord},
            errors::PurchasesServiceError,
            ledger::{OrderLedger, PgOrderLedger},
            models::{PurchaseId, PurchaseReceipt},
            obligations::PaymentObligations,
        },
    },
};

/// Checkout and payment reconciliation over an [`OrderLedger`].
#[derive(Debug, Clone)]
pub struct PurchaseEngine<L> {
    ledger: L,
}

/// Purchase engine backed by `PostgreSQL`.
pub type PgPurchasesService = PurchaseEngine<PgOrderLedger>;

impl<L: OrderLedger> PurchaseEngine<L> {
    #[must_use]
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }
}

impl PgPurchasesService {
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self::new(PgOrderLedger::new(db))
    }
}

#[async_trait]
impl<L: OrderLedger> PurchasesService for PurchaseEngine<L> {
    #[tracing::instrument(
        name = "purchases.service.create_purchase",
        skip(self, purchase),
        fields(
            item_count = purchase.items.len(),
            purchase_id = tracing::field::Empty,
            total_price = tracing::field::Empty,
            total_transfer = tracing::field::Empty
        ),
        err
    )]
    async fn create_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<PurchaseReceipt, PurchasesServiceError> {
        let NewPurchase { items, sender } = purchase;

        let mut product_ids = Vec::with_capacity(items.len());
        let mut requested: FxHashMap<ProductId, u64> = FxHashMap::default();

        for item in &items {
            let product_id = item.product_id.parse::<ProductId>().map_err(|source| {
                PurchasesServiceError::InvalidIdentifier {
                    entity: "product",
                    value: item.product_id.clone(),
                    source,
                }
            })?;

            if item.qty == 0 {
                return Err(PurchasesServiceError::InvalidQuantity);
            }

            product_ids.push(product_id);

            // Repeated product ids keep the last quantity seen.
            requested.insert(product_id, u64::from(item.qty));
        }

        let products = self.ledger.get_products_by_ids(&product_ids).await?;

        if products.is_empty() {
            return Err(PurchasesServiceError::NoMatchingProducts);
        }

        let mut obligations = PaymentObligations::default();
        let mut purchased_items = Vec::with_capacity(products.len());
        let mut line_items = Vec::with_capacity(products.len());
        let mut matched = FxHashSet::default();

        for ProductWithSeller { product, seller } in products {
            let Some(&qty) = requested.get(&product.id) else {
                continue;
            };

            if !matched.insert(product.id) {
                continue;
            }

            if qty > product.qty {
                return Err(PurchasesServiceError::InsufficientStock {
                    product: product.id,
                });
            }

            obligations.add(&seller, product.price, qty)?;

            line_items.push(NewPurchaseLineItem {
                product_id: product.id,
                qty,
            });

            purchased_items.push(product);
        }

        if obligations.is_empty() {
            return Err(PurchasesServiceError::NoMatchingProducts);
        }

        for product_id in requested.keys().filter(|id| !matched.contains(*id)) {
            warn!(%product_id, "requested product not in catalog, dropping it from the purchase");
        }

        let total_price = obligations.total_price();
        let total_transfer = obligations.transfer_count()?;

        let created = self
            .ledger
            .create_purchase(
                NewPurchaseRecord {
                    total_price,
                    total_transfer,
                    sender,
                },
                line_items,
            )
            .await?;

        let span = Span::current();

        span.record("purchase_id", tracing::field::display(created.id));
        span.record("total_price", total_price);
        span.record("total_transfer", total_transfer);

        info!(purchase_id = %created.id, total_price, total_transfer, "created purchase");

        Ok(PurchaseReceipt {
            purchase_id: created.id,
            purchased_items,
            total_price: created.total_price,
            payment_details: obligations.into_details(),
        })
    }

    #[tracing::instrument(
        name = "purchases.service.create_payment",
        skip(self, payment),
        fields(
            purchase_id = %purchase,
            proof_count = payment.file_ids.len(),
            total_transfer = tracing::field::Empty
        ),
        err
    )]
    async fn create_payment(
        &self,
        purchase: PurchaseId,
        payment: NewPayment,
    ) -> Result<(), PurchasesServiceError> {
        let file_ids = payment
            .file_ids
            .iter()
            .map(|value| {
                value.parse::<FileId>().map_err(|source| {
                    PurchasesServiceError::InvalidIdentifier {
                        entity: "file",
                        value: value.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let record = self.ledger.get_purchase(purchase).await?;
        let line_items = self.ledger.get_purchase_line_items(purchase).await?;

        Span::current().record("total_transfer", record.total_transfer);

        if u32::try_from(file_ids.len()).ok() != Some(record.total_transfer) {
            return Err(PurchasesServiceError::MissingPayment {
                expected: record.total_transfer,
                received: file_ids.len(),
            });
        }

        if record.is_paid() {
            return Err(PurchasesServiceError::AlreadyPaid);
        }

        self.ledger
            .mark_paid_and_decrement_stock(purchase, &line_items)
            .await?;

        info!(
            purchase_id = %purchase,
            line_count = line_items.len(),
            "received payment"
        );

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PurchasesService: Send + Sync {
    /// Validate stock, split the cart into per-seller payment obligations and
    /// record the purchase with its line items.
    async fn create_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<PurchaseReceipt, PurchasesServiceError>;

    /// Reconcile one proof of payment per seller owed, then mark the purchase
    /// paid and release its stock.
    async fn create_payment(
        &self,
        purchase: PurchaseId,
        payment: NewPayment,
    ) -> Result<(), PurchasesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::{
            products::models::{ProductSummary, SellerId, SellerPayout},
            purchases::{
                ErrorKind,
                data::NewPurchaseItem,
                ledger::MockOrderLedger,
                models::{ContactType, LineItemId, Purchase, PurchaseLineItem, Sender},
            },
        },
        test::{TestContext, helpers},
    };

    use super::*;

    fn sender() -> Sender {
        Sender {
            name: "Siti Rahma".to_string(),
            contact_type: ContactType::Phone,
            contact_detail: "+628123456789".to_string(),
        }
    }

    fn item(product_id: &str, qty: u32) -> NewPurchaseItem {
        NewPurchaseItem {
            product_id: product_id.to_string(),
            qty,
        }
    }

    fn catalog_row(product: i64, seller: i64, price: u64, stock: u64) -> ProductWithSeller {
        ProductWithSeller {
            product: ProductSummary {
                id: ProductId::from_i64(product),
                name: format!("Product {product}"),
                category: "Food".to_string(),
                qty: stock,
                price,
                sku: format!("SKU-{product}"),
                file_id: FileId::from_i64(product),
                file_uri: format!("https://files.example.com/{product}.png"),
                file_thumbnail_uri: format!("https://files.example.com/{product}_thumb.png"),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            },
            seller: SellerPayout {
                seller_id: SellerId::from_i64(seller),
                bank_account_name: format!("Bank {seller}"),
                bank_account_holder: format!("Holder {seller}"),
                bank_account_number: format!("{seller}0000"),
            },
        }
    }

    fn stored_purchase(id: i64, total_transfer: u32, paid: bool) -> Purchase {
        Purchase {
            id: PurchaseId::from_i64(id),
            total_price: 1_000,
            total_transfer,
            sender: sender(),
            paid_at: paid.then_some(Timestamp::UNIX_EPOCH),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn stored_line(purchase: i64, product: i64, qty: u64) -> PurchaseLineItem {
        PurchaseLineItem {
            id: LineItemId::from_i64(product),
            purchase_id: PurchaseId::from_i64(purchase),
            product_id: ProductId::from_i64(product),
            qty,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    /// Ledger response that echoes the header back under the given id.
    fn created_purchase(
        id: i64,
    ) -> impl Fn(NewPurchaseRecord, Vec<NewPurchaseLineItem>) -> Result<Purchase, PurchasesServiceError>
    + Send
    + 'static {
        move |header, _| {
            Ok(Purchase {
                id: PurchaseId::from_i64(id),
                total_price: header.total_price,
                total_transfer: header.total_transfer,
                sender: header.sender,
                paid_at: None,
                created_at: Timestamp::UNIX_EPOCH,
            })
        }
    }

    #[tokio::test]
    async fn single_seller_cart_matches_worked_example() -> TestResult {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_products_by_ids()
            .once()
            .withf(|ids| *ids == [ProductId::from_i64(1)])
            .returning(|_| Ok(vec![catalog_row(1, 11, 500, 10)]));

        ledger
            .expect_create_purchase()
            .once()
            .withf(|header, items| {
                header.total_price == 1_000
                    && header.total_transfer == 1
                    && header.sender == sender()
                    && *items
                        == [NewPurchaseLineItem {
                            product_id: ProductId::from_i64(1),
                            qty: 2,
                        }]
            })
            .returning(created_purchase(77));

        let receipt = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 2)],
                sender: sender(),
            })
            .await?;

        assert_eq!(receipt.purchase_id, PurchaseId::from_i64(77));
        assert_eq!(receipt.total_price, 1_000);
        assert_eq!(receipt.purchased_items.len(), 1);
        assert_eq!(receipt.payment_details.len(), 1);

        let detail = receipt.payment_details.first().ok_or("missing detail")?;

        assert_eq!(detail.seller_id, SellerId::from_i64(11));
        assert_eq!(detail.total_price, 1_000);
        assert_eq!(detail.bank_account_number, "110000");

        Ok(())
    }

    #[tokio::test]
    async fn multi_seller_cart_owes_one_transfer_per_seller() -> TestResult {
        let mut ledger = MockOrderLedger::new();

        ledger.expect_get_products_by_ids().once().returning(|_| {
            Ok(vec![
                catalog_row(1, 20, 100, 5),
                catalog_row(2, 10, 300, 5),
                catalog_row(3, 20, 50, 5),
            ])
        });

        ledger
            .expect_create_purchase()
            .once()
            .withf(|header, items| {
                header.total_transfer == 2 && header.total_price == 200 + 300 + 150 && items.len() == 3
            })
            .returning(created_purchase(5));

        let receipt = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 2), item("2", 1), item("3", 3)],
                sender: sender(),
            })
            .await?;

        let details: Vec<(i64, u64)> = receipt
            .payment_details
            .iter()
            .map(|detail| (detail.seller_id.into_i64(), detail.total_price))
            .collect();

        assert_eq!(details, vec![(10, 300), (20, 350)]);
        assert_eq!(
            receipt.total_price,
            receipt.payment_details.iter().map(|d| d.total_price).sum::<u64>()
        );

        let purchased: Vec<i64> = receipt
            .purchased_items
            .iter()
            .map(|p| p.id.into_i64())
            .collect();

        assert_eq!(purchased, vec![1, 2, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_product_uses_last_quantity() -> TestResult {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_products_by_ids()
            .once()
            .returning(|_| Ok(vec![catalog_row(4, 1, 100, 10)]));

        ledger
            .expect_create_purchase()
            .once()
            .withf(|header, items| {
                header.total_price == 700
                    && *items
                        == [NewPurchaseLineItem {
                            product_id: ProductId::from_i64(4),
                            qty: 7,
                        }]
            })
            .returning(created_purchase(1));

        let receipt = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("4", 2), item("4", 7)],
                sender: sender(),
            })
            .await?;

        assert_eq!(receipt.total_price, 700);
        assert_eq!(receipt.purchased_items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_products_are_dropped_from_the_order() -> TestResult {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_products_by_ids()
            .once()
            .returning(|_| Ok(vec![catalog_row(1, 1, 100, 10)]));

        ledger
            .expect_create_purchase()
            .once()
            .withf(|header, items| header.total_price == 100 && items.len() == 1)
            .returning(created_purchase(9));

        let receipt = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 1), item("999", 4)],
                sender: sender(),
            })
            .await?;

        assert_eq!(receipt.purchased_items.len(), 1);
        assert_eq!(receipt.total_price, 100);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_product_id_is_rejected_before_the_catalog_lookup() {
        let mut ledger = MockOrderLedger::new();

        ledger.expect_get_products_by_ids().never();
        ledger.expect_create_purchase().never();

        let result = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 1), item("abc", 1)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(
                result,
                Err(PurchasesServiceError::InvalidIdentifier { entity: "product", .. })
            ),
            "expected InvalidIdentifier, got {result:?}"
        );
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let mut ledger = MockOrderLedger::new();

        ledger.expect_get_products_by_ids().never();
        ledger.expect_create_purchase().never();

        let result = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 0)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn no_matching_products_is_an_invalid_request() {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_products_by_ids()
            .once()
            .returning(|_| Ok(Vec::new()));
        ledger.expect_create_purchase().never();

        let result = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("41", 1), item("42", 1)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::NoMatchingProducts)),
            "expected NoMatchingProducts, got {result:?}"
        );
        assert_eq!(
            result.err().map(|error| error.kind()),
            Some(ErrorKind::InvalidRequest)
        );
    }

    #[tokio::test]
    async fn quantity_above_stock_aborts_without_persisting() {
        let mut ledger = MockOrderLedger::new();

        ledger.expect_get_products_by_ids().once().returning(|_| {
            Ok(vec![catalog_row(1, 1, 100, 10), catalog_row(2, 2, 100, 1)])
        });
        ledger.expect_create_purchase().never();

        let result = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 1), item("2", 2)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(
                result,
                Err(PurchasesServiceError::InsufficientStock { product }) if product == ProductId::from_i64(2)
            ),
            "expected InsufficientStock, got {result:?}"
        );
    }

    #[tokio::test]
    async fn ledger_errors_propagate_unchanged() {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_products_by_ids()
            .once()
            .returning(|_| Err(PurchasesServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let result = PurchaseEngine::new(ledger)
            .create_purchase(NewPurchase {
                items: vec![item("1", 1)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::Sql(_))),
            "expected Sql, got {result:?}"
        );
    }

    #[tokio::test]
    async fn payment_with_one_proof_per_seller_marks_paid() -> TestResult {
        let mut ledger = MockOrderLedger::new();
        let purchase = PurchaseId::from_i64(3);

        ledger
            .expect_get_purchase()
            .once()
            .withf(move |id| *id == purchase)
            .returning(|_| Ok(stored_purchase(3, 2, false)));

        ledger
            .expect_get_purchase_line_items()
            .once()
            .returning(|_| Ok(vec![stored_line(3, 1, 2), stored_line(3, 2, 1)]));

        ledger
            .expect_mark_paid_and_decrement_stock()
            .once()
            .withf(move |id, items| *id == purchase && items.len() == 2)
            .returning(|_, _| Ok(()));

        PurchaseEngine::new(ledger)
            .create_payment(
                purchase,
                NewPayment {
                    file_ids: vec!["10".to_string(), "11".to_string()],
                },
            )
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn payment_with_wrong_proof_count_is_rejected() {
        for proofs in [vec!["10"], vec!["10", "11", "12"]] {
            let mut ledger = MockOrderLedger::new();

            ledger
                .expect_get_purchase()
                .once()
                .returning(|_| Ok(stored_purchase(3, 2, false)));
            ledger
                .expect_get_purchase_line_items()
                .once()
                .returning(|_| Ok(vec![stored_line(3, 1, 1)]));
            ledger.expect_mark_paid_and_decrement_stock().never();

            let received = proofs.len();

            let result = PurchaseEngine::new(ledger)
                .create_payment(
                    PurchaseId::from_i64(3),
                    NewPayment {
                        file_ids: proofs.into_iter().map(str::to_string).collect(),
                    },
                )
                .await;

            assert!(
                matches!(
                    result,
                    Err(PurchasesServiceError::MissingPayment { expected: 2, received: r }) if r == received
                ),
                "expected MissingPayment, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn payment_with_malformed_file_id_is_rejected_before_loading() {
        let mut ledger = MockOrderLedger::new();

        ledger.expect_get_purchase().never();
        ledger.expect_get_purchase_line_items().never();
        ledger.expect_mark_paid_and_decrement_stock().never();

        let result = PurchaseEngine::new(ledger)
            .create_payment(
                PurchaseId::from_i64(1),
                NewPayment {
                    file_ids: vec!["file-one".to_string()],
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(PurchasesServiceError::InvalidIdentifier { entity: "file", .. })
            ),
            "expected InvalidIdentifier, got {result:?}"
        );
    }

    #[tokio::test]
    async fn payment_for_unknown_purchase_is_not_found() {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_purchase()
            .once()
            .returning(|_| Err(PurchasesServiceError::NotFound));
        ledger.expect_get_purchase_line_items().never();
        ledger.expect_mark_paid_and_decrement_stock().never();

        let result = PurchaseEngine::new(ledger)
            .create_payment(
                PurchaseId::from_i64(8),
                NewPayment {
                    file_ids: vec!["1".to_string()],
                },
            )
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn payment_for_paid_purchase_is_a_conflict() {
        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_get_purchase()
            .once()
            .returning(|_| Ok(stored_purchase(3, 1, true)));
        ledger
            .expect_get_purchase_line_items()
            .once()
            .returning(|_| Ok(vec![stored_line(3, 1, 1)]));
        ledger.expect_mark_paid_and_decrement_stock().never();

        let result = PurchaseEngine::new(ledger)
            .create_payment(
                PurchaseId::from_i64(3),
                NewPayment {
                    file_ids: vec!["1".to_string()],
                },
            )
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::AlreadyPaid)),
            "expected AlreadyPaid, got {result:?}"
        );
    }

    #[tokio::test]
    async fn two_seller_purchase_round_trip_against_postgres() -> TestResult {
        let ctx = TestContext::new().await;
        let seller_a = helpers::create_seller(ctx.db.pool(), "Toko Makmur").await?;
        let seller_b = helpers::create_seller(ctx.db.pool(), "Toko Jaya").await?;
        let rice = helpers::create_product(ctx.db.pool(), seller_a, 500, 10).await?;
        let tea = helpers::create_product(ctx.db.pool(), seller_b, 200, 6).await?;

        let receipt = ctx
            .purchases
            .create_purchase(NewPurchase {
                items: vec![item(&rice.to_string(), 2), item(&tea.to_string(), 3)],
                sender: sender(),
            })
            .await?;

        assert_eq!(receipt.total_price, 1_600);
        assert_eq!(receipt.payment_details.len(), 2);

        let stored = ctx.ledger.get_purchase(receipt.purchase_id).await?;

        assert_eq!(stored.total_transfer, 2);
        assert_eq!(stored.total_price, 1_600);

        let short = ctx
            .purchases
            .create_payment(
                receipt.purchase_id,
                NewPayment {
                    file_ids: vec!["1".to_string()],
                },
            )
            .await;

        assert!(
            matches!(short, Err(PurchasesServiceError::MissingPayment { .. })),
            "expected MissingPayment, got {short:?}"
        );
        assert!(!ctx.ledger.get_purchase(receipt.purchase_id).await?.is_paid());
        assert_eq!(helpers::product_qty(ctx.db.pool(), rice).await?, 10);
        assert_eq!(helpers::product_qty(ctx.db.pool(), tea).await?, 6);

        ctx.purchases
            .create_payment(
                receipt.purchase_id,
                NewPayment {
                    file_ids: vec!["1".to_string(), "2".to_string()],
                },
            )
            .await?;

        assert!(ctx.ledger.get_purchase(receipt.purchase_id).await?.is_paid());
        assert_eq!(helpers::product_qty(ctx.db.pool(), rice).await?, 8);
        assert_eq!(helpers::product_qty(ctx.db.pool(), tea).await?, 3);

        let again = ctx
            .purchases
            .create_payment(
                receipt.purchase_id,
                NewPayment {
                    file_ids: vec!["1".to_string(), "2".to_string()],
                },
            )
            .await;

        assert!(
            matches!(again, Err(PurchasesServiceError::AlreadyPaid)),
            "expected AlreadyPaid, got {again:?}"
        );
        assert_eq!(helpers::product_qty(ctx.db.pool(), rice).await?, 8);
        assert_eq!(helpers::product_qty(ctx.db.pool(), tea).await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn insufficient_stock_writes_nothing_against_postgres() -> TestResult {
        let ctx = TestContext::new().await;
        let seller = helpers::create_seller(ctx.db.pool(), "Toko Kecil").await?;
        let product = helpers::create_product(ctx.db.pool(), seller, 500, 1).await?;

        let result = ctx
            .purchases
            .create_purchase(NewPurchase {
                items: vec![item(&product.to_string(), 2)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::InsufficientStock { .. })),
            "expected InsufficientStock, got {result:?}"
        );
        assert_eq!(helpers::count_purchases(ctx.db.pool()).await?, 0);
        assert_eq!(helpers::count_line_items(ctx.db.pool()).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_products_write_nothing_against_postgres() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .purchases
            .create_purchase(NewPurchase {
                items: vec![item("501", 1), item("502", 1)],
                sender: sender(),
            })
            .await;

        assert!(
            matches!(result, Err(PurchasesServiceError::NoMatchingProducts)),
            "expected NoMatchingProducts, got {result:?}"
        );
        assert_eq!(helpers::count_purchases(ctx.db.pool()).await?, 0);

        Ok(())
    }
}
