//! Typed wrappers over the Digiseller resource endpoints.
//!
//! Each wrapper borrows the client and exposes one call per remote
//! operation: it builds a parameter map from typed inputs, invokes the
//! dispatcher and maps the JSON payload into flat, immutable records.
//! List endpoints that are server-paginated loop page-by-page until the
//! requested limit is reached or the server reports no further pages.

mod dialogs;
mod operations;
mod products;
mod statistics;

pub use dialogs::{Dialog, DialogState, DialogStatus, Dialogs, Message};
pub use operations::{
    AllowType, CodeFilter, Currency, Operation, OperationListParams, OperationType, Operations,
};
pub use products::{Category, CategoryListParams, Product, ProductListParams, Products};
pub use statistics::{
    AgentSalesListParams, ReturnFilter, Sale, SalesListParams, SalesSummary, Statistics,
};

use serde::{Deserialize, Deserializer};

/// Maximum page size accepted by paginated list endpoints.
pub const PAGE_SIZE_CEILING: u64 = 200;

/// Deserializes an integer (or boolean) flag into a `bool`.
///
/// Several endpoints encode booleans as `0`/`1`; newer ones send real
/// booleans. Both are accepted.
pub(crate) fn int_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// Deserializes a possibly-`null` array into an empty vector.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
