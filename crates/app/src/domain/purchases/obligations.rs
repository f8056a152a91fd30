//! Per-seller payment obligations.

use std::collections::BTreeMap;

use crate::domain::{
    products::models::{SellerId, SellerPayout},
    purchases::{errors::PurchasesServiceError, models::PaymentDetail},
};

/// Running per-seller subtotals for a cart, keyed by seller so that the
/// resulting [`PaymentDetail`] list comes out in ascending seller order.
#[derive(Debug, Clone, Default)]
pub(crate) struct PaymentObligations {
    by_seller: BTreeMap<SellerId, PaymentDetail>,
    total_price: u64,
}

impl PaymentObligations {
    /// Add `unit_price × qty` to the seller's subtotal and the grand total.
    pub(crate) fn add(
        &mut self,
        seller: &SellerPayout,
        unit_price: u64,
        qty: u64,
    ) -> Result<u64, PurchasesServiceError> {
        let extended = unit_price
            .checked_mul(qty)
            .ok_or(PurchasesServiceError::AmountOutOfRange)?;

        self.total_price = self
            .total_price
            .checked_add(extended)
            .ok_or(PurchasesServiceError::AmountOutOfRange)?;

        let detail = self
            .by_seller
            .entry(seller.seller_id)
            .or_insert_with(|| PaymentDetail {
                seller_id: seller.seller_id,
                bank_account_name: seller.bank_account_name.clone(),
                bank_account_holder: seller.bank_account_holder.clone(),
                bank_account_number: seller.bank_account_number.clone(),
                total_price: 0,
            });

        // Bounded by the grand total checked above.
        detail.total_price += extended;

        Ok(extended)
    }

    pub(crate) fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Number of proofs of payment the buyer owes: one per distinct seller.
    pub(crate) fn transfer_count(&self) -> Result<u32, PurchasesServiceError> {
        Ok(u32::try_from(self.by_seller.len())?)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_seller.is_empty()
    }

    pub(crate) fn into_details(self) -> Vec<PaymentDetail> {
        self.by_seller.into_values().collect()
    }
}
