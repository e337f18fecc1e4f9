//! Dialogs (support chats) resource.
//!
//! A dialog is a support conversation thread tied to an order. The wrapper
//! covers listing dialogs with server-side pagination, reading and changing
//! a dialog's open/closed state, and the (permanently unsupported) message
//! retrieval endpoint.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::client::{
    ApiError, DigisellerClient, HttpMethod, Params, UnsupportedOperationError,
};
use crate::resources::{int_flag, PAGE_SIZE_CEILING};

/// The open/closed state of a dialog.
///
/// Wire values are integer codes; anything the server may add later maps to
/// [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum DialogState {
    /// State code not recognized by this client.
    Unknown,
    /// The dialog is closed.
    Closed,
    /// The dialog was opened by the seller.
    OpenBySeller,
    /// The dialog was opened by an administrator.
    OpenByAdmin,
}

impl From<i64> for DialogState {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Closed,
            1 => Self::OpenBySeller,
            2 => Self::OpenByAdmin,
            _ => Self::Unknown,
        }
    }
}

/// A support conversation thread tied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dialog {
    /// The order id the dialog belongs to.
    #[serde(rename = "id_i")]
    pub order_id: i64,

    /// The buyer's email address.
    pub email: String,

    /// The name of the purchased product.
    #[serde(rename = "product")]
    pub product_name: String,

    /// When the last message was written.
    pub last_date: NaiveDateTime,

    /// Total number of messages in the dialog.
    #[serde(rename = "cnt_msg")]
    pub messages_count: u32,

    /// Number of unread messages.
    #[serde(rename = "cnt_new")]
    pub new_messages_count: u32,
}

/// The state of a dialog together with whether the seller may change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DialogStatus {
    /// The current dialog state.
    #[serde(rename = "chat_state")]
    pub state: DialogState,

    /// Whether the seller is allowed to change the state.
    #[serde(deserialize_with = "int_flag")]
    pub may_change: bool,
}

/// A single message inside a dialog.
///
/// Message retrieval is not available with API-key authentication (see
/// [`Dialogs::messages`]); the record mirrors the shape documented for the
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// The message id.
    pub id: i64,

    /// The message text; absent for deleted messages.
    #[serde(rename = "message")]
    pub text: Option<String>,

    /// Whether the message was deleted.
    #[serde(deserialize_with = "int_flag")]
    pub deleted: bool,

    /// When the message was written.
    pub date_written: NaiveDateTime,

    /// When the message was seen by the other party.
    pub date_seen: NaiveDateTime,
}

/// One page of the dialog list endpoint.
#[derive(Debug, Deserialize)]
struct ChatsPage {
    pages: u64,
    #[serde(default)]
    chats: Vec<Dialog>,
}

/// Resource wrapper for dialog operations.
///
/// Obtained via [`DigisellerClient::dialogs`].
#[derive(Debug, Clone, Copy)]
pub struct Dialogs<'a> {
    client: &'a DigisellerClient,
}

impl<'a> Dialogs<'a> {
    pub(crate) const fn new(client: &'a DigisellerClient) -> Self {
        Self { client }
    }

    /// Lists dialogs, newest first.
    ///
    /// Pages through `debates/v2/chats` until `limit` dialogs have been
    /// collected or the server reports no further pages. The per-request
    /// page size is capped at 200 regardless of the limit. `None` collects
    /// every dialog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Dialog>, ApiError> {
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let pagesize = limit.map_or(PAGE_SIZE_CEILING, |requested| {
            (requested as u64).min(PAGE_SIZE_CEILING)
        });

        let mut dialogs = Vec::new();
        let mut page: u64 = 1;
        loop {
            let params = Params::new()
                .set("filter_new", 0)
                .set("email", None::<&str>)
                .set("id_ids", None::<Vec<i64>>)
                .set("pagesize", pagesize)
                .set("page", page);

            let response = self
                .client
                .request(HttpMethod::Get, "debates/v2/chats", params)
                .await?;
            let body: ChatsPage = response.json()?;

            for dialog in body.chats {
                if limit.is_some_and(|requested| dialogs.len() >= requested) {
                    break;
                }
                dialogs.push(dialog);
            }

            let done = limit.is_some_and(|requested| dialogs.len() >= requested);
            if done || page >= body.pages {
                break;
            }
            page += 1;
        }

        Ok(dialogs)
    }

    /// Reads the state of the dialog attached to `order_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or decoding
    /// failure.
    pub async fn status(&self, order_id: i64) -> Result<DialogStatus, ApiError> {
        let params = Params::new().set("id_i", order_id);
        let response = self
            .client
            .request(HttpMethod::Get, "debates/v2/chat-state", params)
            .await?;
        Ok(response.json()?)
    }

    /// Closes or reopens the dialog attached to `order_id`.
    ///
    /// Soft-fail semantics: returns `true` when the server answered
    /// HTTP 200 and `false` for any other status, without raising.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only for authentication and network-level
    /// failures.
    pub async fn change_status(&self, order_id: i64, closed: bool) -> Result<bool, ApiError> {
        let params = Params::new()
            .set("id_i", order_id)
            .set("chat_state", if closed { 0 } else { 1 });

        let response = self
            .client
            .request_unchecked(HttpMethod::Post, "debates/v2/chat-state", params)
            .await?;

        if response.code != 200 {
            tracing::warn!(
                order_id,
                status = response.code,
                "dialog state change rejected"
            );
        }
        Ok(response.code == 200)
    }

    /// Retrieves the messages of a dialog.
    ///
    /// Permanently unsupported: the messages endpoint rejects API-key
    /// authentication, so this call signals [`ApiError::Unsupported`]
    /// without issuing a request.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Unsupported`].
    pub async fn messages(
        &self,
        _order_id: i64,
        _limit: Option<usize>,
    ) -> Result<Vec<Message>, ApiError> {
        Err(UnsupportedOperationError {
            operation: "dialog message retrieval",
        }
        .into())
    }
}
