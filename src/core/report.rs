//! Summary counts for the admin dashboard and the account page.

use crate::{
    entities::{
        Order, Product, RechargeRequest, RefundRequest, RequestStatus, order, recharge_request,
        refund_request,
    },
    errors::Result,
};
use sea_orm::{PaginatorTrait, prelude::*};

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Total products in the catalog
    pub product_count: u64,
    /// Total orders, paid and pending
    pub order_count: u64,
    /// Recharge requests awaiting approval
    pub pending_recharges: u64,
    /// Refund requests awaiting approval
    pub pending_refunds: u64,
}

/// Gathers the admin dashboard counts.
pub async fn dashboard_summary(db: &DatabaseConnection) -> Result<DashboardSummary> {
    Ok(DashboardSummary {
        product_count: Product::find().count(db).await?,
        order_count: Order::find().count(db).await?,
        pending_recharges: RechargeRequest::find()
            .filter(recharge_request::Column::Status.eq(RequestStatus::Pending))
            .count(db)
            .await?,
        pending_refunds: RefundRequest::find()
            .filter(refund_request::Column::Status.eq(RequestStatus::Pending))
            .count(db)
            .await?,
    })
}

/// Counts a user's orders for the account page.
pub async fn order_count_for_user(db: &DatabaseConnection, user_id: i64) -> Result<u64> {
    Order::find()
        .filter(order::Column::UserId.eq(user_id))
        .count(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{cart, ledger};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_dashboard_summary() -> Result<()> {
        let (db, notifier, cfg) = setup_ledger().await?;
        let alice = identity_of(&create_user_with_balance(&db, "alice", 1000).await?);
        let admin = admin_identity(&db).await?;
        let product = create_test_product(&db, "Mug", 300).await?;

        cart::add_to_cart(&db, &alice, product.id).await?;
        ledger::checkout(&db, &alice).await?;

        let approved = ledger::submit_recharge_request(&db, &notifier, &cfg, &alice, 100).await?;
        ledger::approve_recharge(&db, &notifier, &cfg, &admin, approved.id).await?;
        ledger::submit_recharge_request(&db, &notifier, &cfg, &alice, 200).await?;
        ledger::submit_refund_request(&db, &notifier, &cfg, &alice, 50).await?;

        let summary = dashboard_summary(&db).await?;
        assert_eq!(summary.product_count, 1);
        assert_eq!(summary.order_count, 1);
        assert_eq!(summary.pending_recharges, 1); // the approved one no longer counts
        assert_eq!(summary.pending_refunds, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_order_count_for_user() -> Result<()> {
        let (db, notifier, cfg) = setup_ledger().await?;
        let alice = identity_of(&create_test_user(&db, "alice").await?);
        let bob = identity_of(&create_test_user(&db, "bob").await?);
        let product = create_test_product(&db, "Mug", 300).await?;

        ledger::request_manual_purchase(&db, &notifier, &cfg, &alice, product.id, None, None)
            .await?;

        assert_eq!(order_count_for_user(&db, alice.user_id).await?, 1);
        assert_eq!(order_count_for_user(&db, bob.user_id).await?, 0);

        Ok(())
    }
}
