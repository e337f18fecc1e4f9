//! Sales statistics resource.
//!
//! Covers the latest-sales aggregate endpoint and the detailed sales
//! reports, both for the seller's own products and for sales made as an
//! agent of another seller.

use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;

use crate::client::{ApiError, DigisellerClient, HttpMethod, Params};

/// Datetime format accepted by the sales report endpoints.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default start of the reporting window, early enough to cover everything.
const EARLIEST_START: &str = "2000-01-01 00:00:00";

/// Refund handling in sales reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnFilter {
    /// Include refunded sales.
    #[default]
    Include,
    /// Exclude refunded sales.
    Exclude,
    /// Only refunded sales.
    Only,
}

impl ReturnFilter {
    /// Returns the wire code of the filter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Include => 0,
            Self::Exclude => 1,
            Self::Only => 2,
        }
    }
}

/// A single sale from a detailed sales report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sale {
    /// The invoice id of the sale.
    pub invoice_id: Option<i64>,

    /// The sold product's id.
    pub product_id: Option<i64>,

    /// The sold product's name.
    pub product_name: Option<String>,

    /// When the sale was paid.
    pub date_pay: Option<NaiveDateTime>,

    /// The buyer's email address.
    pub email: Option<String>,

    /// Amount paid.
    pub amount: Option<f64>,

    /// Currency of the amount.
    pub currency: Option<String>,

    /// Payment provider the sale was routed through.
    #[serde(rename = "method_pay")]
    pub aggregator: Option<String>,

    /// Partner id, when the sale came through an agent.
    pub partner_id: Option<i64>,
}

/// A per-product aggregate from the latest-sales endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesSummary {
    /// The product id.
    pub id: Option<i64>,

    /// The product name.
    pub name: Option<String>,

    /// Number of sales counted.
    pub cnt_sell: Option<i64>,

    /// Current price of the product.
    pub price: Option<f64>,

    /// Currency of the price.
    pub currency: Option<String>,
}

/// Parameters for a detailed sales report.
///
/// Dates default to a window from 2000-01-01 to now, matching the server's
/// expectations for "everything".
#[derive(Debug, Clone, PartialEq)]
pub struct SalesListParams {
    /// Restrict the report to these product ids.
    pub product_ids: Option<Vec<i64>>,
    /// Start of the reporting window.
    pub date_start: Option<NaiveDateTime>,
    /// End of the reporting window.
    pub date_finish: Option<NaiveDateTime>,
    /// Refund handling.
    pub returned: ReturnFilter,
    /// Page number, starting at 1.
    pub page: u32,
    /// Number of sales per page.
    pub rows: u32,
}

impl Default for SalesListParams {
    fn default() -> Self {
        Self {
            product_ids: None,
            date_start: None,
            date_finish: None,
            returned: ReturnFilter::Include,
            page: 1,
            rows: 10,
        }
    }
}

/// Parameters for a sales report in the agent role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentSalesListParams {
    /// Restrict the report to one partner seller.
    pub partner_id: Option<i64>,
    /// The common sales report parameters.
    pub sales: SalesListParams,
}

#[derive(Debug, Deserialize)]
struct SalesEnvelope {
    #[serde(default)]
    rows: Vec<Sale>,
}

#[derive(Debug, Deserialize)]
struct LastSalesEnvelope {
    #[serde(default)]
    sales: Vec<LastSaleEntry>,
}

#[derive(Debug, Deserialize)]
struct LastSaleEntry {
    product: SalesSummary,
}

/// Resource wrapper for sales statistics.
///
/// Obtained via [`DigisellerClient::statistics`].
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    client: &'a DigisellerClient,
}

impl<'a> Statistics<'a> {
    pub(crate) const fn new(client: &'a DigisellerClient) -> Self {
        Self { client }
    }

    /// Lists the latest sales as per-product aggregates.
    ///
    /// `group` collapses the result by product; `top` bounds how many
    /// aggregates the server returns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn latest_sales(
        &self,
        group: bool,
        top: u32,
    ) -> Result<Vec<SalesSummary>, ApiError> {
        let query = Params::new()
            .set("seller_id", self.client.config().seller_id().get())
            .set("group", group)
            .set("top", top);

        let response = self
            .client
            .request(HttpMethod::Get, "seller-last-sales", query)
            .await?;
        let envelope: LastSalesEnvelope = response.json()?;
        Ok(envelope
            .sales
            .into_iter()
            .map(|entry| entry.product)
            .collect())
    }

    /// Fetches one page of the detailed sales report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn sales(&self, params: &SalesListParams) -> Result<Vec<Sale>, ApiError> {
        let body = Self::report_body(params);
        let response = self
            .client
            .request(HttpMethod::Post, "seller-sells/v2", body)
            .await?;
        let envelope: SalesEnvelope = response.json()?;
        Ok(envelope.rows)
    }

    /// Fetches one page of the sales report in the agent role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn agent_sales(&self, params: &AgentSalesListParams) -> Result<Vec<Sale>, ApiError> {
        let body = Self::report_body(&params.sales).set("id_partner", params.partner_id);
        let response = self
            .client
            .request(HttpMethod::Post, "agent-sales/v2", body)
            .await?;
        let envelope: SalesEnvelope = response.json()?;
        Ok(envelope.rows)
    }

    fn report_body(params: &SalesListParams) -> Params {
        let start = params.date_start.map_or_else(
            || EARLIEST_START.to_string(),
            |date| date.format(DATE_FORMAT).to_string(),
        );
        let finish = params
            .date_finish
            .unwrap_or_else(|| Utc::now().naive_utc())
            .format(DATE_FORMAT)
            .to_string();

        Params::new()
            .set("product_ids", params.product_ids.clone())
            .set("date_start", start)
            .set("date_finish", finish)
            .set("returned", params.returned.code())
            .set("page", params.page)
            .set("rows", params.rows)
    }
}
