mod common;

use axum::http::StatusCode;

use common::{assert_redirect, json, test_config, TestApp, SLOT};

async fn seeded_admin() -> TestApp {
    let app = TestApp::new().await;
    let created = app
        .state
        .accounts
        .ensure_admin(&test_config().admin.seed())
        .await
        .unwrap();
    assert!(created);
    app
}

#[tokio::test]
async fn default_admin_is_created_once() {
    let app = seeded_admin().await;
    let again = app
        .state
        .accounts
        .ensure_admin(&test_config().admin.seed())
        .await
        .unwrap();
    assert!(!again);
}

#[tokio::test]
async fn dashboard_aggregates_bookings_orders_and_feedback() {
    let mut admin = seeded_admin().await;

    let mut guest = admin.new_browser();
    guest.book("2024-06-01", SLOT, "2").await;
    guest.post_form("/booking_payment", &[]).await;
    for (item, price) in [("Coke", "50"), ("Coke", "50"), ("Nachos", "120")] {
        guest
            .post_form(
                "/menu",
                &[("action", "add"), ("item_name", item), ("item_price", price)],
            )
            .await;
    }
    guest.post_form("/food_payment", &[]).await;
    guest
        .post_form(
            "/feedback",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("message", "Lovely pizza"),
            ],
        )
        .await;

    let resp = admin.login("admin@swiftcafe.local", "admin123").await;
    assert_eq!(json(resp).await["role"], "admin");

    let resp = admin.get("/admin").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let dash = json(resp).await;

    assert_eq!(dash["admin_name"], "Cafe Admin");
    let stats = &dash["stats"];
    assert_eq!(stats["total_customers"], 0);
    assert_eq!(stats["total_bookings"], 1);
    assert_eq!(stats["booking_revenue"], 500);
    assert_eq!(stats["total_food_orders"], 2);
    assert_eq!(stats["food_revenue"], 220);
    assert_eq!(stats["total_revenue"], 720);

    assert_eq!(dash["bookings"][0]["status"], "paid");
    assert_eq!(dash["food_orders"].as_array().unwrap().len(), 2);
    assert_eq!(dash["food_orders"][0]["customer_name"], "Asha");
    assert_eq!(dash["top_items"][0]["item_name"], "Coke");
    assert_eq!(dash["top_items"][0]["total_quantity"], 2);
    assert_eq!(dash["recent_feedback"][0]["message"], "Lovely pizza");
}

#[tokio::test]
async fn customers_cannot_open_the_dashboard() {
    let mut app = seeded_admin().await;
    app.register("asha_k", "asha@example.com", "secret1").await;
    app.login("asha@example.com", "secret1").await;

    let resp = app.get("/admin").await;
    assert_redirect(&resp, "/login");
}

#[tokio::test]
async fn history_shows_paid_bookings_and_orders_by_email() {
    let mut app = TestApp::new().await;
    app.register("asha_k", "asha@example.com", "secret1").await;
    app.login("asha@example.com", "secret1").await;

    app.book("2024-06-01", SLOT, "1").await;
    app.post_form(
        "/menu",
        &[("action", "add"), ("item_name", "Coke"), ("item_price", "50")],
    )
    .await;

    // Unpaid bookings are not listed
    let view = json(app.get("/my_bookings").await).await;
    assert!(view["bookings"].as_array().unwrap().is_empty());

    app.post_form("/booking_payment", &[]).await;
    let view = json(app.get("/my_bookings").await).await;
    assert_eq!(view["bookings"].as_array().unwrap().len(), 1);
    assert_eq!(view["bookings"][0]["table_no"], 1);

    let view = json(app.get("/my_orders").await).await;
    let orders = view["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["item_name"], "Coke");
    assert_eq!(orders[0]["total_amount"], 50);
    assert_eq!(orders[0]["table_no"], 1);
}

#[tokio::test]
async fn feedback_and_contact_forms() {
    let mut app = TestApp::new().await;

    let resp = app
        .post_form("/feedback", &[("name", "Asha"), ("email", ""), ("message", "Hi")])
        .await;
    assert_eq!(json(resp).await["error"], "All fields are required.");

    let resp = app
        .post_form(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("subject", "Party"),
                ("message", "Can we book the whole cafe?"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json(resp).await["success"],
        "Your message has been sent successfully!"
    );

    let resp = app.post_form("/contact", &[("name", "Asha")]).await;
    assert_eq!(json(resp).await["error"], "All fields are required!");
}

#[tokio::test]
async fn health_reports_database() {
    let mut app = TestApp::new().await;
    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}
