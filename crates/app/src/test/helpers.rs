//! Test Helpers
//!
//! Catalog fixtures are written with raw SQL; the catalog is read-only to the
//! purchase engine so there is no service to create them through.

use sqlx::PgPool;

use crate::domain::products::models::{FileId, ProductId, SellerId};

pub(crate) async fn create_seller(pool: &PgPool, name: &str) -> Result<SellerId, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO sellers (name, bank_account_name, bank_account_holder, bank_account_number)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind(format!("Bank {name}"))
    .bind(name)
    .bind("1234567890")
    .fetch_one(pool)
    .await?;

    Ok(SellerId::from_i64(id))
}

pub(crate) async fn create_file(pool: &PgPool) -> Result<FileId, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO files (uri, thumbnail_uri)
         VALUES ('https://files.lapak.test/image.png', 'https://files.lapak.test/image_thumb.png')
         RETURNING id",
    )
    .fetch_one(pool)
    .await?;

    Ok(FileId::from_i64(id))
}

pub(crate) async fn create_product(
    pool: &PgPool,
    seller: SellerId,
    price: i64,
    qty: i64,
) -> Result<ProductId, sqlx::Error> {
    let file = create_file(pool).await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO products (seller_id, file_id, name, category, sku, qty, price)
         VALUES ($1, $2, 'Test Product', 'Groceries', 'SKU-TEST', $3, $4)
         RETURNING id",
    )
    .bind(seller.into_i64())
    .bind(file.into_i64())
    .bind(qty)
    .bind(price)
    .fetch_one(pool)
    .await?;

    Ok(ProductId::from_i64(id))
}

pub(crate) async fn product_qty(pool: &PgPool, product: ProductId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT qty FROM products WHERE id = $1")
        .bind(product.into_i64())
        .fetch_one(pool)
        .await
}

pub(crate) async fn set_product_qty(
    pool: &PgPool,
    product: ProductId,
    qty: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET qty = $2 WHERE id = $1")
        .bind(product.into_i64())
        .bind(qty)
        .execute(pool)
        .await?;

    Ok(())
}

pub(crate) async fn count_purchases(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
        .fetch_one(pool)
        .await
}

pub(crate) async fn count_line_items(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM pivot_purchase_products")
        .fetch_one(pool)
        .await
}
