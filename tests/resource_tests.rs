//! Integration tests for the resource wrappers.
//!
//! These tests verify pagination behavior, JSON-to-record mapping and the
//! permanently unsupported message endpoint.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use digiseller_api::{
    AgentSalesListParams, ApiError, ApiKey, Currency, DialogState, DigisellerClient,
    DigisellerConfig, OperationListParams, OperationType, SalesListParams, SellerId,
};

fn create_test_client(server: &MockServer) -> DigisellerClient {
    let config = DigisellerConfig::builder()
        .seller_id(SellerId::new(123).unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap();
    DigisellerClient::new(config)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/apilogin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .mount(server)
        .await;
}

fn chat(order_id: i64, email: &str) -> serde_json::Value {
    json!({
        "id_i": order_id,
        "email": email,
        "product": "Gift Card",
        "last_date": "2024-03-01T18:22:05",
        "cnt_msg": 3,
        "cnt_new": 1
    })
}

// ============================================================================
// Dialog pagination
// ============================================================================

#[tokio::test]
async fn test_dialog_list_pages_until_server_reports_no_more() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 2,
            "chats": [chat(1, "a@example.com"), chat(2, "b@example.com")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 2,
            "chats": [chat(3, "c@example.com")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let dialogs = client.dialogs().list(None).await.unwrap();

    assert_eq!(dialogs.len(), 3);
    assert_eq!(dialogs[0].order_id, 1);
    assert_eq!(dialogs[0].email, "a@example.com");
    assert_eq!(dialogs[0].product_name, "Gift Card");
    assert_eq!(dialogs[0].messages_count, 3);
    assert_eq!(dialogs[0].new_messages_count, 1);
    assert_eq!(dialogs[2].order_id, 3);
}

#[tokio::test]
async fn test_dialog_list_stops_at_limit() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // The server reports five pages, but a limit of 3 is satisfied by the
    // first page; no further page request may be issued.
    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .and(query_param("page", "1"))
        .and(query_param("pagesize", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 5,
            "chats": [chat(1, "a@x.com"), chat(2, "b@x.com"), chat(3, "c@x.com")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pages": 5, "chats": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let dialogs = client.dialogs().list(Some(3)).await.unwrap();
    assert_eq!(dialogs.len(), 3);
}

#[tokio::test]
async fn test_dialog_list_truncates_overfull_page() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 1,
            "chats": [chat(1, "a@x.com"), chat(2, "b@x.com"), chat(3, "c@x.com")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let dialogs = client.dialogs().list(Some(2)).await.unwrap();
    assert_eq!(dialogs.len(), 2);
}

#[tokio::test]
async fn test_dialog_list_clamps_page_size_to_ceiling() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // A limit above the ceiling must still request at most 200 per page
    Mock::given(method("GET"))
        .and(path("/debates/v2/chats"))
        .and(query_param("pagesize", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pages": 1, "chats": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let dialogs = client.dialogs().list(Some(500)).await.unwrap();
    assert!(dialogs.is_empty());
}

#[tokio::test]
async fn test_dialog_list_with_zero_limit_issues_no_requests() {
    let server = MockServer::start().await;

    let client = create_test_client(&server);
    let dialogs = client.dialogs().list(Some(0)).await.unwrap();

    assert!(dialogs.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Dialog state
// ============================================================================

#[tokio::test]
async fn test_dialog_status_maps_state_codes() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/debates/v2/chat-state"))
        .and(query_param("id_i", "42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"chat_state": 2, "may_change": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let status = client.dialogs().status(42).await.unwrap();

    assert_eq!(status.state, DialogState::OpenByAdmin);
    assert!(!status.may_change);
}

#[tokio::test]
async fn test_dialog_messages_signal_unsupported_without_any_request() {
    let server = MockServer::start().await;

    let client = create_test_client(&server);
    let result = client.dialogs().messages(42, Some(20)).await;

    match result {
        Err(ApiError::Unsupported(error)) => {
            assert!(error.to_string().contains("not supported"));
        }
        other => panic!("expected UnsupportedOperationError, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_categories_map_nested_subcategory_trees() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "category": [
                {
                    "id": 1,
                    "name": "Games",
                    "products_count": 12,
                    "sub": [
                        {"id": 2, "name": "Keys", "products_count": 8, "sub": null}
                    ]
                },
                {"id": 3, "name": "Software", "products_count": 4}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let categories = client
        .products()
        .categories(&Default::default())
        .await
        .unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].subcategories.len(), 1);
    assert_eq!(categories[0].subcategories[0].name, "Keys");
    assert!(categories[0].subcategories[0].subcategories.is_empty());
    assert!(categories[1].subcategories.is_empty());
}

#[tokio::test]
async fn test_product_list_maps_two_items_field_for_field() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/shop/products"))
        .and(query_param("currency", "RUR"))
        .and(query_param("rows", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": [
                {"id": 10, "name": "Alpha", "price": 1.5, "currency": "RUR", "sales": 3},
                {"id": 20, "name": "Beta", "price": 2.5, "currency": "RUR", "sales": 7}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let products = client.products().list(&Default::default()).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 10);
    assert_eq!(products[0].name, "Alpha");
    assert_eq!(products[0].price, Some(1.5));
    assert_eq!(products[0].sales, Some(3));
    assert_eq!(products[1].id, 20);
    assert_eq!(products[1].name, "Beta");
    assert_eq!(products[1].price, Some(2.5));
    assert_eq!(products[1].sales, Some(7));
}

// ============================================================================
// Operations
// ============================================================================

#[tokio::test]
async fn test_operations_list_unwraps_nested_items_and_coerces_enums() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/sellers/account/receipts"))
        .and(query_param("page", "1"))
        .and(query_param("count", "10"))
        .and(query_param("currency", "WMZ"))
        .and(query_param("type", "product_sales"))
        .and(query_param("start", "2024-01-15T08:30"))
        .and(query_param("finish", "2024-02-15T08:30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {
                "items": [
                    {"id": 1, "type": "product_sales", "amount": 10.0, "currency": "WMZ"},
                    {"id": 2, "type": "refund", "amount": -10.0, "currency": "WMZ"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let window_start = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let window_finish = NaiveDate::from_ymd_opt(2024, 2, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let params = OperationListParams {
        currency: Some(Currency::Wmz),
        operation_type: Some(OperationType::ProductSales),
        date_start: Some(window_start),
        date_finish: Some(window_finish),
        ..Default::default()
    };

    let client = create_test_client(&server);
    let operations = client.operations().list(&params).await.unwrap();

    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].amount, Some(10.0));
    assert_eq!(operations[1].operation_type.as_deref(), Some("refund"));
}

#[tokio::test]
async fn test_operations_list_defaults_start_to_full_window() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/sellers/account/receipts"))
        .and(query_param("start", "2000-01-01T00:00"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": {"items": []}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let operations = client
        .operations()
        .list(&OperationListParams::default())
        .await
        .unwrap();
    assert!(operations.is_empty());
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_latest_sales_map_product_entries() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/seller-last-sales"))
        .and(query_param("seller_id", "123"))
        .and(query_param("group", "true"))
        .and(query_param("top", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sales": [
                {"product": {"id": 1, "name": "Alpha", "cnt_sell": 4, "price": 1.0, "currency": "RUR"}},
                {"product": {"id": 2, "name": "Beta", "cnt_sell": 2, "price": 2.0, "currency": "RUR"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let summaries = client.statistics().latest_sales(true, 5).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name.as_deref(), Some("Alpha"));
    assert_eq!(summaries[0].cnt_sell, Some(4));
    assert_eq!(summaries[1].id, Some(2));
}

#[tokio::test]
async fn test_sales_report_maps_rows() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/seller-sells/v2"))
        .and(body_partial_json(json!({"product_ids": [42, 43]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [
                {
                    "invoice_id": 700,
                    "product_id": 42,
                    "product_name": "License",
                    "date_pay": "2024-04-05T11:30:00",
                    "email": "buyer@example.com",
                    "amount": 9.99,
                    "currency": "USD",
                    "method_pay": "card"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SalesListParams {
        product_ids: Some(vec![42, 43]),
        ..Default::default()
    };

    let client = create_test_client(&server);
    let sales = client.statistics().sales(&params).await.unwrap();

    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].invoice_id, Some(700));
    assert_eq!(sales[0].aggregator.as_deref(), Some("card"));
    assert_eq!(sales[0].amount, Some(9.99));
}

#[tokio::test]
async fn test_agent_sales_report_includes_partner_id() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/agent-sales/v2"))
        .and(body_partial_json(json!({"id_partner": 555})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = AgentSalesListParams {
        partner_id: Some(555),
        sales: SalesListParams::default(),
    };

    let client = create_test_client(&server);
    let sales = client.statistics().agent_sales(&params).await.unwrap();
    assert!(sales.is_empty());
}
