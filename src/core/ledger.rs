//! Balance & order ledger - Owns every balance-affecting state transition.
//!
//! All recharge/refund workflows and the checkout debit run through this
//! module. Each operation applies its balance mutation, its request status
//! update, and its paired audit transaction row as one database transaction,
//! so a crash can never leave the balance changed without an audit record or
//! vice versa. The pending-check on approvals happens inside that same
//! transaction, which makes double approval a no-op even across racing
//! admins. Notifications go out only after commit and are best-effort.

use crate::{
    config::shop::ShopConfig,
    core::account::Identity,
    entities::{
        CartItem, Order, OrderStatus, Product, RechargeRequest, RefundRequest, RequestStatus,
        Transaction, TransactionKind, TransactionStatus, User, cart_item, order,
        recharge_request, refund_request, transaction, user,
    },
    errors::{Error, Result},
    notify::{self, Notifier},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Outcome of a refund approval.
///
/// A refund that no longer fits the user's balance is a recoverable business
/// condition, not an error: the request transitions to its terminal `Failed`
/// state and the caller informs the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefundDecision {
    /// Balance was debited and the request approved
    Approved(refund_request::Model),
    /// Balance no longer covered the amount; the request is now failed
    InsufficientBalance(refund_request::Model),
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// The paid orders created, one per cart entry
    pub order_ids: Vec<i64>,
    /// Total amount debited from the balance
    pub total: i64,
    /// Balance remaining after the debit
    pub balance: i64,
}

/// Loads a user row or errors with `UserNotFound`.
async fn load_user<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<user::Model> {
    User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })
}

/// Atomically adds `delta` to a user's balance at the database level
/// (`balance = balance + delta`), avoiding read-modify-write races.
/// Callers are responsible for checking, inside the same transaction, that
/// the result cannot go negative.
async fn adjust_balance<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    delta: i64,
) -> Result<user::Model> {
    use sea_orm::sea_query::Expr;

    load_user(db, user_id).await?;

    User::update_many()
        .col_expr(
            user::Column::Balance,
            Expr::col(user::Column::Balance).add(delta),
        )
        .filter(user::Column::Id.eq(user_id))
        .exec(db)
        .await?;

    load_user(db, user_id).await
}

/// Appends one row to the audit trail. Rows are never updated afterwards.
async fn record_transaction<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    kind: TransactionKind,
    amount: i64,
    description: &str,
    status: TransactionStatus,
) -> Result<transaction::Model> {
    let row = transaction::ActiveModel {
        user_id: Set(user_id),
        kind: Set(kind),
        amount: Set(amount),
        description: Set(description.to_string()),
        status: Set(status),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}

/// Submits a recharge request for admin approval.
///
/// Creates the pending request and its paired pending audit row in one
/// transaction. The balance is untouched until [`approve_recharge`].
pub async fn submit_recharge_request<N: Notifier>(
    db: &DatabaseConnection,
    notifier: &N,
    cfg: &ShopConfig,
    user: &Identity,
    amount: i64,
) -> Result<recharge_request::Model> {
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let txn = db.begin().await?;

    let request = recharge_request::ActiveModel {
        user_id: Set(user.user_id),
        amount: Set(amount),
        status: Set(RequestStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let request = request.insert(&txn).await?;

    record_transaction(
        &txn,
        user.user_id,
        TransactionKind::RechargeRequest,
        amount,
        "Recharge requested",
        TransactionStatus::Pending,
    )
    .await?;

    txn.commit().await?;

    notify::recharge_requested(notifier, cfg, &user.username, amount).await;
    Ok(request)
}

/// Submits a refund request for admin approval.
///
/// The amount is checked against the live balance at submission time; it is
/// re-checked at approval time because intervening spends may have drained
/// the balance since.
pub async fn submit_refund_request<N: Notifier>(
    db: &DatabaseConnection,
    notifier: &N,
    cfg: &ShopConfig,
    user: &Identity,
    amount: i64,
) -> Result<refund_request::Model> {
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let account = load_user(db, user.user_id).await?;
    if amount > account.balance {
        return Err(Error::Validation {
            message: format!(
                "Refund amount {amount} exceeds current balance {}",
                account.balance
            ),
        });
    }

    let txn = db.begin().await?;

    let request = refund_request::ActiveModel {
        user_id: Set(user.user_id),
        amount: Set(amount),
        status: Set(RequestStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let request = request.insert(&txn).await?;

    record_transaction(
        &txn,
        user.user_id,
        TransactionKind::RefundRequest,
        amount,
        "Refund requested",
        TransactionStatus::Pending,
    )
    .await?;

    txn.commit().await?;

    notify::refund_requested(notifier, cfg, &user.username, amount).await;
    Ok(request)
}

/// Approves a pending recharge request, crediting the user's balance.
///
/// This is the only path that increases a balance. The pending-check, the
/// credit, the status update, and the audit row are one atomic unit; a
/// request that already left the pending state yields `AlreadyProcessed`
/// with no state change.
pub async fn approve_recharge<N: Notifier>(
    db: &DatabaseConnection,
    notifier: &N,
    cfg: &ShopConfig,
    admin: &Identity,
    request_id: i64,
) -> Result<recharge_request::Model> {
    admin.require_admin()?;

    let txn = db.begin().await?;

    let request = RechargeRequest::find_by_id(request_id)
        .one(&txn)
        .await?
        .ok_or(Error::RequestNotFound { id: request_id })?;
    if request.status != RequestStatus::Pending {
        return Err(Error::AlreadyProcessed { id: request_id });
    }

    let (user_id, amount) = (request.user_id, request.amount);

    adjust_balance(&txn, user_id, amount).await?;

    let mut active: recharge_request::ActiveModel = request.into();
    active.status = Set(RequestStatus::Approved);
    let request = active.update(&txn).await?;

    record_transaction(
        &txn,
        user_id,
        TransactionKind::Recharge,
        amount,
        "Recharge approved",
        TransactionStatus::Completed,
    )
    .await?;

    txn.commit().await?;

    notify::recharge_approved(notifier, cfg, amount).await;
    Ok(request)
}

/// Approves a pending refund request, debiting the user's balance.
///
/// The live balance is re-checked inside the transaction: if it no longer
/// covers the amount, the request transitions to its terminal `Failed` state,
/// a failed audit row is appended, and the balance stays untouched - a
/// recoverable [`RefundDecision::InsufficientBalance`] outcome rather than an
/// error.
pub async fn approve_refund<N: Notifier>(
    db: &DatabaseConnection,
    notifier: &N,
    cfg: &ShopConfig,
    admin: &Identity,
    request_id: i64,
) -> Result<RefundDecision> {
    admin.require_admin()?;

    let txn = db.begin().await?;

    let request = RefundRequest::find_by_id(request_id)
        .one(&txn)
        .await?
        .ok_or(Error::RequestNotFound { id: request_id })?;
    if request.status != RequestStatus::Pending {
        return Err(Error::AlreadyProcessed { id: request_id });
    }

    let (user_id, amount) = (request.user_id, request.amount);
    let account = load_user(&txn, user_id).await?;

    if account.balance < amount {
        let mut active: refund_request::ActiveModel = request.into();
        active.status = Set(RequestStatus::Failed);
        let request = active.update(&txn).await?;

        record_transaction(
            &txn,
            user_id,
            TransactionKind::Refund,
            amount,
            "Refund failed (insufficient balance)",
            TransactionStatus::Failed,
        )
        .await?;

        txn.commit().await?;
        return Ok(RefundDecision::InsufficientBalance(request));
    }

    adjust_balance(&txn, user_id, -amount).await?;

    let mut active: refund_request::ActiveModel = request.into();
    active.status = Set(RequestStatus::Approved);
    let request = active.update(&txn).await?;

    record_transaction(
        &txn,
        user_id,
        TransactionKind::Refund,
        amount,
        "Refund approved",
        TransactionStatus::Completed,
    )
    .await?;

    txn.commit().await?;

    notify::refund_approved(notifier, cfg, amount).await;
    Ok(RefundDecision::Approved(request))
}

/// Checks out the user's cart against their balance.
///
/// Reads the cart at call time inside the transaction. On success, creates
/// one paid order per cart entry, appends a single purchase audit row for the
/// total, debits the balance, and clears the cart - all atomically. An empty
/// cart or an insufficient balance returns early with no state change so the
/// caller can redirect the user to the recharge flow.
pub async fn checkout(db: &DatabaseConnection, user: &Identity) -> Result<CheckoutReceipt> {
    let txn = db.begin().await?;

    let lines: Vec<(cart_item::Model, Option<crate::entities::ProductModel>)> =
        CartItem::find()
            .filter(cart_item::Column::UserId.eq(user.user_id))
            .find_also_related(Product)
            .all(&txn)
            .await?;
    let lines: Vec<_> = lines
        .into_iter()
        .filter_map(|(entry, product)| product.map(|p| (entry, p)))
        .collect();

    if lines.is_empty() {
        return Err(Error::EmptyCart);
    }

    let total: i64 = lines.iter().map(|(_, product)| product.price).sum();
    let account = load_user(&txn, user.user_id).await?;
    if account.balance < total {
        return Err(Error::InsufficientBalance {
            balance: account.balance,
            required: total,
        });
    }

    let now = chrono::Utc::now();
    let mut order_ids = Vec::with_capacity(lines.len());
    for (_, product) in &lines {
        let order = order::ActiveModel {
            user_id: Set(user.user_id),
            product_id: Set(product.id),
            phone: Set(None),
            receipt: Set(None),
            status: Set(OrderStatus::Paid),
            created_at: Set(now),
            ..Default::default()
        };
        order_ids.push(order.insert(&txn).await?.id);
    }

    record_transaction(
        &txn,
        user.user_id,
        TransactionKind::Purchase,
        total,
        &format!("{} items purchased from cart", lines.len()),
        TransactionStatus::Completed,
    )
    .await?;

    let account = adjust_balance(&txn, user.user_id, -total).await?;

    CartItem::delete_many()
        .filter(cart_item::Column::UserId.eq(user.user_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(CheckoutReceipt {
        order_ids,
        total,
        balance: account.balance,
    })
}

/// Files a manual purchase request for out-of-band payment.
///
/// Always succeeds for an existing product: no balance check, no balance
/// change, no audit row. The order stays `Pending`; no approval transition
/// exists for it in this system - settlement happens entirely outside the
/// ledger by operator action.
pub async fn request_manual_purchase<N: Notifier>(
    db: &DatabaseConnection,
    notifier: &N,
    cfg: &ShopConfig,
    user: &Identity,
    product_id: i64,
    phone: Option<String>,
    receipt: Option<String>,
) -> Result<order::Model> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let order = order::ActiveModel {
        user_id: Set(user.user_id),
        product_id: Set(product_id),
        phone: Set(phone.clone()),
        receipt: Set(receipt.clone()),
        status: Set(OrderStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let order = order.insert(db).await?;

    notify::purchase_requested(
        notifier,
        cfg,
        &product,
        &user.username,
        phone.as_deref(),
        receipt.as_deref(),
    )
    .await;
    Ok(order)
}

/// Retrieves a user's audit trail, newest first.
pub async fn list_transactions(
    db: &DatabaseConnection,
    user: &Identity,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(transaction::Column::UserId.eq(user.user_id))
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's recharge requests, newest first.
pub async fn list_recharge_requests(
    db: &DatabaseConnection,
    user: &Identity,
) -> Result<Vec<recharge_request::Model>> {
    RechargeRequest::find()
        .filter(recharge_request::Column::UserId.eq(user.user_id))
        .order_by_desc(recharge_request::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's refund requests, newest first.
pub async fn list_refund_requests(
    db: &DatabaseConnection,
    user: &Identity,
) -> Result<Vec<refund_request::Model>> {
    RefundRequest::find()
        .filter(refund_request::Column::UserId.eq(user.user_id))
        .order_by_desc(refund_request::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all recharge requests with their requesting users, newest
/// first, for the admin approval console.
pub async fn list_all_recharge_requests(
    db: &DatabaseConnection,
    admin: &Identity,
) -> Result<Vec<(recharge_request::Model, Option<user::Model>)>> {
    admin.require_admin()?;
    RechargeRequest::find()
        .find_also_related(User)
        .order_by_desc(recharge_request::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all refund requests with their requesting users, newest first,
/// for the admin approval console.
pub async fn list_all_refund_requests(
    db: &DatabaseConnection,
    admin: &Identity,
) -> Result<Vec<(refund_request::Model, Option<user::Model>)>> {
    admin.require_admin()?;
    RefundRequest::find()
        .find_also_related(User)
        .order_by_desc(refund_request::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's orders joined with their products, newest first.
pub async fn list_orders(
    db: &DatabaseConnection,
    user: &Identity,
) -> Result<Vec<(order::Model, Option<crate::entities::ProductModel>)>> {
    Order::find()
        .filter(order::Column::UserId.eq(user.user_id))
        .find_also_related(Product)
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one of the user's orders by id, for the order confirmation
/// view. Scoped to the owning user.
pub async fn get_order(
    db: &DatabaseConnection,
    user: &Identity,
    order_id: i64,
) -> Result<(order::Model, Option<crate::entities::ProductModel>)> {
    Order::find_by_id(order_id)
        .filter(order::Column::UserId.eq(user.user_id))
        .find_also_related(Product)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })
}
