//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod cart_item;
pub mod order;
pub mod product;
pub mod recharge_request;
pub mod refund_request;
pub mod transaction;
pub mod user;
pub mod wishlist_item;

// Re-export specific types to avoid conflicts
pub use cart_item::{Column as CartItemColumn, Entity as CartItem, Model as CartItemModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel, OrderStatus};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use recharge_request::{
    Column as RechargeRequestColumn, Entity as RechargeRequest, Model as RechargeRequestModel,
    RequestStatus,
};
pub use refund_request::{
    Column as RefundRequestColumn, Entity as RefundRequest, Model as RefundRequestModel,
};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
    TransactionKind, TransactionStatus,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use wishlist_item::{
    Column as WishlistItemColumn, Entity as WishlistItem, Model as WishlistItemModel,
};
