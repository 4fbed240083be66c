//! Core data models
//!
//! All persisted models carry camelCase serde renames so that they serialize
//! exactly into the JSON exchange format (`subCategoryId`, `parentId`,
//! `isDefault`, ...).

pub mod category;
pub mod ids;
pub mod pending;
pub mod source;
pub mod subcategory;
pub mod transaction;

pub use category::Category;
pub use ids::{PendingId, SourceId, SubCategoryId, TransactionId};
pub use pending::PendingTransaction;
pub use source::{SourceType, SpendingSource};
pub use subcategory::SubCategory;
pub use transaction::{Transaction, TransactionType};
