//! Product catalog resource.
//!
//! Covers the public catalog endpoints: the category tree and the product
//! listing of a category. Categories form a strictly nested tree, modeled
//! as a plain recursive value type.

use serde::Deserialize;

use crate::client::{ApiError, DigisellerClient, HttpMethod, Params};
use crate::config::SellerId;
use crate::resources::null_as_empty;

/// Default catalog display language.
const DEFAULT_LANG: &str = "ru-RU";

/// Default currency for displayed prices.
const DEFAULT_CURRENCY: &str = "RUR";

/// A catalog category with its nested subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// The category id.
    pub id: i64,

    /// The category name in the requested language.
    pub name: String,

    /// Number of products in the category.
    pub products_count: i64,

    /// Nested subcategories; empty for leaf categories.
    #[serde(rename = "sub", default, deserialize_with = "null_as_empty")]
    pub subcategories: Vec<Category>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// The product id.
    pub id: i64,

    /// The product name in the requested language.
    pub name: String,

    /// Price in the requested currency.
    pub price: Option<f64>,

    /// Currency of the price.
    pub currency: Option<String>,

    /// Short description.
    pub info: Option<String>,

    /// Number of recorded sales.
    pub sales: Option<i64>,

    /// Number of items in stock, when the product tracks stock.
    pub in_stock: Option<i64>,
}

/// Parameters for listing categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    /// Seller whose catalog to read; defaults to the session seller.
    pub seller_id: Option<SellerId>,
    /// Root category id; 0 lists the whole tree.
    pub category_id: i64,
    /// Display language (`ru-RU` or `en-US`); defaults to `ru-RU`.
    pub lang: Option<String>,
}

/// Parameters for listing the products of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListParams {
    /// Seller whose catalog to read; defaults to the session seller.
    pub seller_id: Option<SellerId>,
    /// Category id; 0 lists products from every category.
    pub category_id: i64,
    /// Page number, starting at 1.
    pub page: u32,
    /// Number of products per page.
    pub rows: u32,
    /// Sort order accepted by the endpoint (e.g. `name`, `price`).
    pub order: Option<String>,
    /// Currency for displayed prices; defaults to `RUR`.
    pub currency: Option<String>,
    /// Display language (`ru-RU` or `en-US`); defaults to `ru-RU`.
    pub lang: Option<String>,
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            seller_id: None,
            category_id: 0,
            page: 1,
            rows: 20,
            order: None,
            currency: None,
            lang: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    #[serde(rename = "product", default)]
    products: Vec<Product>,
}

/// Resource wrapper for the product catalog.
///
/// Obtained via [`DigisellerClient::products`].
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a DigisellerClient,
}

impl<'a> Products<'a> {
    pub(crate) const fn new(client: &'a DigisellerClient) -> Self {
        Self { client }
    }

    /// Lists categories and their nested subcategories.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn categories(&self, params: &CategoryListParams) -> Result<Vec<Category>, ApiError> {
        let seller_id = params
            .seller_id
            .unwrap_or_else(|| self.client.config().seller_id());

        let query = Params::new()
            .set("seller_id", seller_id.get())
            .set("category_id", params.category_id)
            .set("lang", params.lang.as_deref().unwrap_or(DEFAULT_LANG));

        let response = self
            .client
            .request(HttpMethod::Get, "categories", query)
            .await?;
        let envelope: CategoriesEnvelope = response.json()?;
        Ok(envelope.categories)
    }

    /// Lists one page of products from a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn list(&self, params: &ProductListParams) -> Result<Vec<Product>, ApiError> {
        let seller_id = params
            .seller_id
            .unwrap_or_else(|| self.client.config().seller_id());

        let query = Params::new()
            .set("seller_id", seller_id.get())
            .set("category_id", params.category_id)
            .set("page", params.page)
            .set("rows", params.rows)
            .set("order", params.order.as_deref())
            .set(
                "currency",
                params.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
            )
            .set("lang", params.lang.as_deref().unwrap_or(DEFAULT_LANG));

        let response = self
            .client
            .request(HttpMethod::Get, "shop/products", query)
            .await?;
        let envelope: ProductsEnvelope = response.json()?;
        Ok(envelope.products)
    }
}
