mod common;

use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use swiftcafe::infrastructure::database::entities::{booking, food_order};

use common::{assert_redirect, json, text, TestApp, SLOT};

#[tokio::test]
async fn book_pay_order_and_settle_the_bill() {
    let mut app = TestApp::new().await;

    let resp = app.book("2024-06-01", SLOT, "3").await;
    assert_redirect(&resp, "/booking_payment");

    // Same table again, from another browser
    let mut other = app.new_browser();
    let resp = other.book("2024-06-01", SLOT, "3").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(text(resp).await.contains("already booked"));

    let resp = app.get("/booking_payment").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = json(resp).await;
    assert_eq!(view["payment_type"], "booking");
    assert_eq!(view["total_price"], 500);
    assert_eq!(view["customer_name"], "Asha");
    assert!(view["upi_uri"].as_str().unwrap().contains("am=500"));
    assert!(view["qr_link"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let resp = app.post_form("/booking_payment", &[]).await;
    assert_redirect(&resp, "/menu");

    for _ in 0..2 {
        let resp = app
            .post_form(
                "/menu",
                &[("action", "add"), ("item_name", "Coke"), ("item_price", "50")],
            )
            .await;
        assert_redirect(&resp, "/menu");
    }

    let cart = json(app.get("/menu").await).await;
    let orders = cart["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["item_name"], "Coke");
    assert_eq!(orders[0]["quantity"], 2);
    assert_eq!(cart["total"], 100);

    let bill = json(app.get("/food_payment").await).await;
    assert_eq!(bill["payment_type"], "food");
    assert_eq!(bill["total_price"], 100);
    assert_eq!(bill["food_orders"].as_array().unwrap().len(), 1);

    let resp = app.post_form("/food_payment", &[]).await;
    assert_redirect(&resp, "/order_success");

    let cart = json(app.get("/menu").await).await;
    let line = &cart["orders"][0];
    assert_eq!(line["paid"], true);
    assert_eq!(line["quantity"], 2);
    assert_eq!(line["item_price"], 50);

    // Nothing left to pay
    let bill = json(app.get("/food_payment").await).await;
    assert_eq!(bill["total_price"], 0);
}

#[tokio::test]
async fn availability_excludes_booked_tables_and_full_slots() {
    let mut app = TestApp::new().await;

    let all = json(app.get("/booking").await).await;
    assert_eq!(all["tables"], json!([1, 2, 3, 4, 5]));
    assert_eq!(all["time_slots"].as_array().unwrap().len(), 6);

    app.book("2024-06-01", SLOT, "3").await;
    let uri = format!(
        "/booking?date=2024-06-01&time={}",
        urlencoding::encode(SLOT)
    );
    let view = json(app.get(&uri).await).await;
    assert_eq!(view["tables"], json!([1, 2, 4, 5]));
    assert!(view["time_slots"]
        .as_array()
        .unwrap()
        .contains(&json!(SLOT)));

    for table in ["1", "2", "4", "5"] {
        let resp = app.new_browser().book("2024-06-01", SLOT, table).await;
        assert_redirect(&resp, "/booking_payment");
    }
    let view = json(app.get("/booking?date=2024-06-01").await).await;
    let slots = view["time_slots"].as_array().unwrap();
    assert_eq!(slots.len(), 5);
    assert!(!slots.contains(&json!(SLOT)));

    // Other dates are untouched
    let view = json(app.get("/booking?date=2024-06-02").await).await;
    assert_eq!(view["time_slots"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn invalid_booking_input_is_a_bad_request() {
    let mut app = TestApp::new().await;

    let resp = app.book("2024-06-01", SLOT, "9").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(text(resp).await.contains("Invalid table number"));

    let resp = app.book("06/01/2024", SLOT, "1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.book("2024-06-01", "Midnight", "1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.get("/booking?date=not-a-date").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_quantity_controls() {
    let mut app = TestApp::new().await;
    app.book("2024-06-01", SLOT, "1").await;

    app.post_form(
        "/menu",
        &[("action", "add"), ("item_name", "Nachos"), ("item_price", "120")],
    )
    .await;
    let cart = json(app.get("/menu").await).await;
    let id = cart["orders"][0]["id"].as_i64().unwrap().to_string();

    app.post_form("/menu", &[("action", "increase"), ("order_id", &id)])
        .await;
    let cart = json(app.get("/menu").await).await;
    assert_eq!(cart["orders"][0]["quantity"], 2);
    assert_eq!(cart["total"], 240);

    app.post_form("/menu", &[("action", "decrease"), ("order_id", &id)])
        .await;
    app.post_form("/menu", &[("action", "decrease"), ("order_id", &id)])
        .await;
    let cart = json(app.get("/menu").await).await;
    assert!(cart["orders"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"], 0);

    // Unknown actions are ignored
    let resp = app.post_form("/menu", &[("action", "refund")]).await;
    assert_redirect(&resp, "/menu");
}

#[tokio::test]
async fn cart_actions_cannot_touch_another_booking() {
    let mut first = TestApp::new().await;
    first.book("2024-06-01", SLOT, "1").await;
    first
        .post_form(
            "/menu",
            &[("action", "add"), ("item_name", "Coke"), ("item_price", "50")],
        )
        .await;
    let cart = json(first.get("/menu").await).await;
    let id = cart["orders"][0]["id"].as_i64().unwrap().to_string();

    let mut second = first.new_browser();
    second.book("2024-06-01", SLOT, "2").await;
    second
        .post_form("/menu", &[("action", "delete"), ("order_id", &id)])
        .await;

    let cart = json(first.get("/menu").await).await;
    assert_eq!(cart["orders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_bill_is_not_confirmed() {
    let mut app = TestApp::new().await;
    app.book("2024-06-01", SLOT, "4").await;

    let resp = app.post_form("/food_payment", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["total_price"], 0);
}

#[tokio::test]
async fn reordering_after_payment_bills_only_new_units() {
    let mut app = TestApp::new().await;
    app.book("2024-06-01", SLOT, "2").await;
    app.post_form("/booking_payment", &[]).await;

    for _ in 0..2 {
        app.post_form("/menu", &[("action", "add"), ("item_name", "Coke")])
            .await;
    }
    let resp = app.post_form("/food_payment", &[]).await;
    assert_redirect(&resp, "/order_success");

    app.post_form("/menu", &[("action", "add"), ("item_name", "Coke")])
        .await;

    let cart = json(app.get("/menu").await).await;
    assert_eq!(cart["orders"][0]["quantity"], 3);
    assert_eq!(cart["orders"][0]["paid_quantity"], 2);
    assert_eq!(cart["total"], 150);

    let bill = json(app.get("/food_payment").await).await;
    assert_eq!(bill["total_price"], 50);
    assert!(bill["upi_uri"].as_str().unwrap().contains("am=50&"));

    let dash = app.state.dashboard.load("Cafe Admin").await;
    assert_eq!(dash.stats.food_revenue, 100);

    let resp = app.post_form("/food_payment", &[]).await;
    assert_redirect(&resp, "/order_success");
    let dash = app.state.dashboard.load("Cafe Admin").await;
    assert_eq!(dash.stats.food_revenue, 150);
}

#[tokio::test]
async fn cart_prices_come_from_the_menu() {
    let mut app = TestApp::new().await;
    app.book("2024-06-01", SLOT, "5").await;

    for _ in 0..2 {
        app.post_form(
            "/menu",
            &[
                ("action", "add"),
                ("item_name", "Coke"),
                ("item_price", "9223372036854775807"),
            ],
        )
        .await;
    }
    let resp = app
        .post_form(
            "/menu",
            &[("action", "add"), ("item_name", "Sushi"), ("item_price", "1")],
        )
        .await;
    assert_redirect(&resp, "/menu");

    let cart = json(app.get("/menu").await).await;
    let orders = cart["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["item_price"], 50);
    assert_eq!(cart["total"], 100);

    let bill = json(app.get("/food_payment").await).await;
    assert_eq!(bill["total_price"], 100);
}

#[tokio::test]
async fn failed_cart_update_still_returns_to_menu() {
    let mut app = TestApp::new().await;
    app.book("2024-06-01", SLOT, "1").await;
    let booking_id = json(app.get("/menu").await).await["booking_id"]
        .as_i64()
        .unwrap() as i32;

    booking::Entity::delete_by_id(booking_id)
        .exec(&app.db)
        .await
        .unwrap();

    let resp = app
        .post_form("/menu", &[("action", "add"), ("item_name", "Coke")])
        .await;
    assert_redirect(&resp, "/menu");
    assert_eq!(food_order::Entity::find().count(&app.db).await.unwrap(), 0);
}
