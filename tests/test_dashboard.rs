mod common;

use collarboard::application::dashboard::Dashboard;
use collarboard::domain::values::form_field::FormField;
use collarboard::infrastructure::charts::text_canvas::TextCanvas;
use collarboard::infrastructure::storage::memory::MemoryKeyStore;
use common::{aapl_request, Call, Reply, StubPricingService};
use serde_json::json;
use std::sync::Arc;

fn setup(stub: &Arc<StubPricingService>) -> Dashboard<TextCanvas> {
    Dashboard::with_form(
        stub.clone(),
        Arc::new(MemoryKeyStore::default()),
        TextCanvas::default(),
        aapl_request(),
    )
}

#[tokio::test]
async fn test_round_trip_aapl_collar() {
    let stub = StubPricingService::new();
    let mut dash = setup(&stub);
    dash.calculate().await;

    assert!(dash.error().is_none());
    let view = dash.result_view().unwrap();
    assert_eq!(view.kpi_values(), vec!["$5.20", "$3005.20", "$-1994.80"]);
    assert_eq!(view.rows[2].cells[0].1, "$217.90");
    assert_eq!(view.rows[2].cells[1].1, "222.15 (delayed)");

    let chart = dash.payoff_chart().unwrap();
    assert_eq!(chart.xs(), vec![150.0, 200.0, 250.0, 300.0]);
    assert_eq!(chart.ys(), vec![-2000.0, -2000.0, 3000.0, 3000.0]);
    assert_eq!(chart.title, "AAPL Collar Payoff");

    let drawn = dash.chart().current().unwrap();
    assert_eq!(drawn.lines()[0], "AAPL Collar Payoff");

    assert_eq!(stub.calls(), vec![Call::Collar(aapl_request())]);
}

#[tokio::test]
async fn test_chart_order_ignores_response_order() {
    let stub = StubPricingService::new();
    stub.set_collar(Reply::Json(json!({
        "payoff_prices": [250, 300, 150, 200],
        "payoff_values": [3000, 3000, -2000, -2000]
    })));
    let mut dash = setup(&stub);
    dash.calculate().await;

    let chart = dash.payoff_chart().unwrap();
    assert_eq!(chart.xs(), vec![150.0, 200.0, 250.0, 300.0]);
    assert_eq!(chart.ys(), vec![-2000.0, -2000.0, 3000.0, 3000.0]);
}

#[tokio::test]
async fn test_calculation_failure_clears_tiles() {
    let stub = StubPricingService::new();
    let mut dash = setup(&stub);
    dash.calculate().await;
    assert!(dash.result_view().is_some());

    stub.set_collar(Reply::Status(500));
    dash.calculate().await;

    assert!(dash.result_view().is_none());
    assert!(dash.chart().current().is_none());
    let err = dash.error().unwrap();
    assert!(!err.is_empty());
    assert!(err.contains("500"));
    assert!(!dash.is_loading());
}

#[tokio::test]
async fn test_ticker_change_clears_before_fetch() {
    let stub = StubPricingService::new();
    let mut dash = setup(&stub);
    dash.calculate().await;
    dash.set_credential("key");
    stub.set_premium(Reply::Status(403));
    dash.load_premium().await;
    assert!(dash.premium().error().is_some());

    dash.begin_ticker_change("MSFT");

    assert!(dash.result().is_none());
    assert!(dash.error().is_none());
    assert!(dash.premium().error().is_none());
    assert!(dash.premium().result().is_none());
    assert!(dash.chart().current().is_none());
    assert_eq!(dash.form().request().ticker, "MSFT");
    // Nothing fetched yet for the new ticker.
    assert!(!stub.calls().contains(&Call::Expirations("MSFT".into())));

    dash.load_expirations().await;
    assert_eq!(stub.calls().last(), Some(&Call::Expirations("MSFT".into())));
}

#[tokio::test]
async fn test_expirations_select_first() {
    let stub = StubPricingService::new();
    stub.set_expirations(Reply::Json(json!({"expirations": ["2026-01-16", "2026-02-20"]})));
    let mut dash = setup(&stub);

    dash.edit(FormField::Ticker, "NVDA").await.unwrap();

    assert_eq!(dash.form().expirations().len(), 2);
    assert_eq!(dash.form().request().expiration, "2026-01-16");
    assert!(!dash.is_loading_expirations());
}

#[tokio::test]
async fn test_empty_expirations_keep_selection() {
    let stub = StubPricingService::new();
    stub.set_expirations(Reply::Json(json!([])));
    let mut dash = setup(&stub);
    dash.change_ticker("ZZZZ").await;

    assert!(dash.form().expirations().is_empty());
    assert_eq!(dash.form().request().expiration, "2025-10-17");
    assert!(dash.error().is_none());
}

#[tokio::test]
async fn test_expirations_failure_is_displayed() {
    let stub = StubPricingService::new();
    let mut dash = setup(&stub);
    dash.change_ticker("AAPL").await;
    assert_eq!(dash.form().expirations().len(), 3);

    stub.set_expirations(Reply::Status(502));
    dash.change_ticker("MSFT").await;

    assert_eq!(dash.error(), Some("HTTP 502: stub failure"));
    assert_eq!(dash.form().expirations().len(), 3);
    assert_eq!(dash.form().request().expiration, "2025-10-17");
    assert!(!dash.is_loading_expirations());
}

#[tokio::test]
async fn test_field_edits_flow_into_request() {
    let stub = StubPricingService::new();
    let mut dash = setup(&stub);
    dash.edit(FormField::Shares, "300").await.unwrap();
    dash.edit(FormField::PutStrike, "175.5").await.unwrap();
    assert!(dash.edit(FormField::CallStrike, "lots").await.is_err());
    dash.calculate().await;

    match &stub.calls()[0] {
        Call::Collar(req) => {
            assert_eq!(req.shares, 300);
            assert_eq!(req.put_strike, 175.5);
            assert_eq!(req.call_strike, 250.0);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_shape_mismatch_is_displayed() {
    let stub = StubPricingService::new();
    stub.set_collar(Reply::Json(json!({"net_premium": 1.0, "payoff_prices": ["lots"]})));
    let mut dash = setup(&stub);
    dash.calculate().await;

    assert!(dash.result().is_none());
    assert!(dash.error().unwrap().starts_with("Unexpected response shape"));
}

#[tokio::test]
async fn test_string_payoff_arrays_render() {
    let stub = StubPricingService::new();
    let mut body = common::aapl_result_json();
    body["payoff_prices"] = json!(["300", "150", "250", "200"]);
    body["payoff_values"] = json!(["3000", "-2000", "3000", "-2000"]);
    stub.set_collar(Reply::Json(body));
    let mut dash = setup(&stub);
    dash.calculate().await;

    assert!(dash.error().is_none());
    let chart = dash.payoff_chart().unwrap();
    assert_eq!(chart.xs(), vec![150.0, 200.0, 250.0, 300.0]);
    assert_eq!(chart.ys(), vec![-2000.0, -2000.0, 3000.0, 3000.0]);
    assert_eq!(dash.result_view().unwrap().kpi_values(), vec!["$5.20", "$3005.20", "$-1994.80"]);
}

#[tokio::test]
async fn test_null_payoff_and_text_spot_render() {
    let stub = StubPricingService::new();
    let mut body = common::aapl_result_json();
    body["payoff_prices"] = json!(null);
    body["spot_price"] = json!("n/a");
    stub.set_collar(Reply::Json(body));
    let mut dash = setup(&stub);
    dash.calculate().await;

    assert!(dash.error().is_none());
    let view = dash.result_view().unwrap();
    assert_eq!(view.rows[2].cells[1].1, "n/a (delayed)");
    assert!(dash.payoff_chart().unwrap().points.is_empty());
    assert_eq!(dash.chart().current().unwrap().lines().last().unwrap(), "  (no payoff data)");
}
