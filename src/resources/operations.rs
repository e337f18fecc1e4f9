//! Account operations (ledger) resource.
//!
//! An operation is a financial ledger entry on the seller's account:
//! a sale, a refund, a funds transfer, a commission and so on. The wrapper
//! covers the `sellers/account/receipts` endpoint with its filter set.

use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;

use crate::client::{ApiError, DigisellerClient, HttpMethod, Params};

/// Datetime format accepted by the receipts endpoint.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Default start of the reporting window, early enough to cover everything.
const EARLIEST_START: &str = "2000-01-01T00:00";

/// WebMoney purse currencies used by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Ruble purse.
    Wmr,
    /// Dollar purse.
    Wmz,
    /// Euro purse.
    Wme,
}

impl Currency {
    /// Returns the wire value of the currency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wmr => "WMR",
            Self::Wmz => "WMZ",
            Self::Wme => "WME",
        }
    }
}

/// Kinds of ledger entries the receipts endpoint can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Agent reward accruals.
    AgentAccruals,
    /// Product sales.
    ProductSales,
    /// Added funds.
    AddFunds,
    /// Exchange responses.
    ExchangeResponse,
    /// Exchange requests.
    ExchangeRequest,
    /// Refunds to buyers.
    Refund,
    /// Goods advertising charges.
    AdvGoods,
    /// External commissions.
    ExternalCommissions,
    /// Hard disk rent charges.
    HardDiskRent,
    /// Extra partner space charges.
    ExtraPartnerSpace,
    /// Gift certificate operations.
    GiftCertificates,
    /// Transfers to a wallet.
    TransferToWallet,
}

impl OperationType {
    /// Returns the wire value of the operation type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgentAccruals => "agent_accurals",
            Self::ProductSales => "product_sales",
            Self::AddFunds => "add_funds",
            Self::ExchangeResponse => "exchange_response",
            Self::ExchangeRequest => "exchange_request",
            Self::Refund => "refund",
            Self::AdvGoods => "adv_goods",
            Self::ExternalCommissions => "external_commissions",
            Self::HardDiskRent => "hard_disk_rent",
            Self::ExtraPartnerSpace => "extra_partner_space",
            Self::GiftCertificates => "gift_certificates",
            Self::TransferToWallet => "transfer_to_wallet",
        }
    }
}

/// Filter on operations awaiting a code check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFilter {
    /// Only operations waiting for a code check.
    OnlyWaitingCheckCode,
    /// Hide operations waiting for a code check.
    HideWaitingCodeCheck,
}

impl CodeFilter {
    /// Returns the wire value of the filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlyWaitingCheckCode => "only_waiting_check_code",
            Self::HideWaitingCodeCheck => "hide_waiting_code_check",
        }
    }
}

/// Filter on blocked (not yet allowed) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowType {
    /// Exclude blocked operations.
    Exclude,
    /// Only blocked operations.
    Only,
}

impl AllowType {
    /// Returns the wire value of the filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Only => "only",
        }
    }
}

/// A financial ledger entry on the seller's account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    /// The ledger entry id.
    pub id: i64,

    /// The kind of operation, as reported by the server.
    #[serde(rename = "type")]
    pub operation_type: Option<String>,

    /// When the operation was recorded.
    pub date: Option<NaiveDateTime>,

    /// Signed amount of the operation.
    pub amount: Option<f64>,

    /// Currency of the amount.
    pub currency: Option<String>,

    /// Payment provider the operation was routed through.
    pub aggregator: Option<String>,

    /// Buyer email, for sale operations.
    pub email: Option<String>,

    /// Product id, for sale operations.
    pub product_id: Option<i64>,

    /// Product name, for sale operations.
    pub product_name: Option<String>,

    /// Invoice id, for sale operations.
    pub invoice_id: Option<i64>,
}

/// Parameters for listing account operations.
///
/// Dates default to a window from 2000-01-01 to now, matching the server's
/// expectations for "everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationListParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Number of operations per page.
    pub count: u32,
    /// Restrict to one purse currency.
    pub currency: Option<Currency>,
    /// Restrict to one operation type.
    pub operation_type: Option<OperationType>,
    /// Filter on code-check state.
    pub code_filter: Option<CodeFilter>,
    /// Filter on blocked operations.
    pub allow_type: Option<AllowType>,
    /// Start of the reporting window.
    pub date_start: Option<NaiveDateTime>,
    /// End of the reporting window.
    pub date_finish: Option<NaiveDateTime>,
}

impl Default for OperationListParams {
    fn default() -> Self {
        Self {
            page: 1,
            count: 10,
            currency: None,
            operation_type: None,
            code_filter: None,
            allow_type: None,
            date_start: None,
            date_finish: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReceiptsEnvelope {
    content: ReceiptsContent,
}

#[derive(Debug, Deserialize)]
struct ReceiptsContent {
    #[serde(default)]
    items: Vec<Operation>,
}

/// Resource wrapper for account operations.
///
/// Obtained via [`DigisellerClient::operations`].
#[derive(Debug, Clone, Copy)]
pub struct Operations<'a> {
    client: &'a DigisellerClient,
}

impl<'a> Operations<'a> {
    pub(crate) const fn new(client: &'a DigisellerClient) -> Self {
        Self { client }
    }

    /// Lists one page of account operations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn list(&self, params: &OperationListParams) -> Result<Vec<Operation>, ApiError> {
        let start = params.date_start.map_or_else(
            || EARLIEST_START.to_string(),
            |date| date.format(DATE_FORMAT).to_string(),
        );
        let finish = params
            .date_finish
            .unwrap_or_else(|| Utc::now().naive_utc())
            .format(DATE_FORMAT)
            .to_string();

        let query = Params::new()
            .set("page", params.page)
            .set("count", params.count)
            .set("currency", params.currency.map(Currency::as_str))
            .set("type", params.operation_type.map(OperationType::as_str))
            .set("codeFilter", params.code_filter.map(CodeFilter::as_str))
            .set("allowType", params.allow_type.map(AllowType::as_str))
            .set("start", start)
            .set("finish", finish);

        let response = self
            .client
            .request(HttpMethod::Get, "sellers/account/receipts", query)
            .await?;
        let envelope: ReceiptsEnvelope = response.json()?;
        Ok(envelope.content.items)
    }
}
