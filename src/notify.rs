//! Best-effort notification dispatch.
//!
//! Notifications are strictly fire-and-forget: they are sent after the
//! ledger's database transaction commits, an unconfigured recipient is a
//! valid no-op, and a failing backend is logged and swallowed. A notification
//! failure must never surface to the end user or roll back a mutation.

use crate::config::shop::ShopConfig;
use crate::entities::ProductModel;
use crate::errors::Result;
use tracing::{info, warn};

/// A text notification backend.
///
/// The production shop would wire this to SMTP; the default implementation
/// just logs the message, which is also how the original operator runs it.
pub trait Notifier {
    /// Delivers a text notification to `to`. The return value is consumed
    /// only by [`send_best_effort`], which logs and swallows failures.
    fn notify(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Notifier that logs messages instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to, subject, %body, "notification (log only)");
        Ok(())
    }
}

/// Sends a notification without letting failure reach the caller.
/// `to = None` means no recipient is configured and is a silent no-op.
pub async fn send_best_effort<N: Notifier>(
    notifier: &N,
    to: Option<&str>,
    subject: &str,
    body: &str,
) {
    let Some(addr) = to else { return };
    if let Err(e) = notifier.notify(addr, subject, body).await {
        warn!(to = addr, subject, "notification failed: {e}");
    }
}

/// Notifies admin and customer that a recharge request was submitted.
pub async fn recharge_requested<N: Notifier>(
    notifier: &N,
    cfg: &ShopConfig,
    username: &str,
    amount: i64,
) {
    let shop = &cfg.shop_name;
    send_best_effort(
        notifier,
        cfg.admin_email.as_deref(),
        &format!("[{shop}] Recharge request"),
        &format!("[{shop}] New recharge request\n\nUser: {username}\nAmount: {amount}\n"),
    )
    .await;
    send_best_effort(
        notifier,
        cfg.customer_email.as_deref(),
        &format!("[{shop}] Recharge request received"),
        &format!(
            "[{shop}] Your recharge request has been received.\n\n\
             Requested amount: {amount}\n\
             Your balance will be credited once an admin approves it."
        ),
    )
    .await;
}

/// Notifies admin and customer that a refund request was submitted.
pub async fn refund_requested<N: Notifier>(
    notifier: &N,
    cfg: &ShopConfig,
    username: &str,
    amount: i64,
) {
    let shop = &cfg.shop_name;
    send_best_effort(
        notifier,
        cfg.admin_email.as_deref(),
        &format!("[{shop}] Refund request"),
        &format!("[{shop}] New refund request\n\nUser: {username}\nAmount: {amount}\n"),
    )
    .await;
    send_best_effort(
        notifier,
        cfg.customer_email.as_deref(),
        &format!("[{shop}] Refund request received"),
        &format!(
            "[{shop}] Your refund request has been received.\n\n\
             Requested amount: {amount}\n\
             An admin will review it shortly."
        ),
    )
    .await;
}

/// Notifies the customer that a recharge was approved and credited.
pub async fn recharge_approved<N: Notifier>(notifier: &N, cfg: &ShopConfig, amount: i64) {
    let shop = &cfg.shop_name;
    send_best_effort(
        notifier,
        cfg.customer_email.as_deref(),
        &format!("[{shop}] Recharge approved"),
        &format!(
            "[{shop}] Your recharge has been approved.\n\n\
             Credited amount: {amount}\n\
             Thank you for shopping with us."
        ),
    )
    .await;
}

/// Notifies the customer that a refund was approved and paid out.
pub async fn refund_approved<N: Notifier>(notifier: &N, cfg: &ShopConfig, amount: i64) {
    let shop = &cfg.shop_name;
    send_best_effort(
        notifier,
        cfg.customer_email.as_deref(),
        &format!("[{shop}] Refund approved"),
        &format!("[{shop}] Your refund has been approved.\n\nRefunded amount: {amount}\n"),
    )
    .await;
}

/// Notifies admin and customer that a manual purchase request arrived.
pub async fn purchase_requested<N: Notifier>(
    notifier: &N,
    cfg: &ShopConfig,
    product: &ProductModel,
    buyer: &str,
    phone: Option<&str>,
    receipt: Option<&str>,
) {
    let shop = &cfg.shop_name;
    let phone = phone.unwrap_or("-");
    send_best_effort(
        notifier,
        cfg.admin_email.as_deref(),
        &format!("[{shop}] New purchase request"),
        &format!(
            "[{shop}] A new purchase request has arrived.\n\n\
             Product: {}\nPrice: {}\nBuyer: {buyer}\nPhone: {phone}\nReceipt file: {}\n",
            product.name,
            product.price,
            receipt.unwrap_or("none"),
        ),
    )
    .await;
    send_best_effort(
        notifier,
        cfg.customer_email.as_deref(),
        &format!("[{shop}] Purchase request received"),
        &format!(
            "[{shop}] Your purchase request has been received.\n\n\
             Product: {}\nPrice: {}\nPhone: {phone}\n\n\
             The operator will contact you after review.",
            product.name, product.price,
        ),
    )
    .await;
}
