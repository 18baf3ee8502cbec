//! HTTP-level tests for the entity CRUD routes, the response envelope and
//! paginated search.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json, seed_chain};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Company CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_crud_round_trip(pool: PgPool) {
    let id = create(
        build_test_app(pool.clone()),
        "/company",
        json!({"name": "Harvest Co", "address": "2 Barn Ln", "administrator": "Kim", "phone": "555"}),
    )
    .await;

    let response = get(build_test_app(pool.clone()), &format!("/company/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], 200);
    assert_eq!(json["message"], "success");
    assert_eq!(
        json["data"],
        json!({"id": id, "name": "Harvest Co", "address": "2 Barn Ln", "administrator": "Kim", "phone": "555"})
    );

    let response = put_json(
        build_test_app(pool.clone()),
        "/company",
        json!({"id": id, "name": "Harvest Co", "address": "9 Silo St"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_null());

    // Update is a full replace: omitted fields are cleared.
    let json = body_json(get(build_test_app(pool.clone()), &format!("/company/{id}")).await).await;
    assert_eq!(json["data"]["address"], "9 Silo St");
    assert_eq!(json["data"]["administrator"], "");

    let response = delete(build_test_app(pool.clone()), &format!("/company/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), &format!("/company/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_record_returns_404_envelope(pool: PgPool) {
    let response = get(build_test_app(pool), "/salePlace/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Sale place with id 424242 not found");
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_missing_return_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool.clone()),
        "/productionPlace",
        json!({"id": 999, "address": "Nowhere", "administrator": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool), "/productionPlace/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_failure_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/company",
        json!({"name": "", "address": "somewhere"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["message"].as_str().unwrap().contains("Company name is required"));

    let response = post_json(
        build_test_app(pool),
        "/product",
        json!({"name": "Pear", "type": "fruit", "unitPrice": -1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_input_returns_400_envelope(pool: PgPool) {
    // Missing required field.
    let response = post_json(build_test_app(pool.clone()), "/salePlace", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);

    // Non-numeric id segment.
    let response = get(build_test_app(pool), "/company/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_types_and_search(pool: PgPool) {
    for (name, kind) in [("Apple", "fruit"), ("Green Apple", "fruit"), ("Wheat", "grain")] {
        create(
            build_test_app(pool.clone()),
            "/product",
            json!({"name": name, "type": kind}),
        )
        .await;
    }

    let json = body_json(get(build_test_app(pool.clone()), "/product/types").await).await;
    assert_eq!(json["data"], json!(["fruit", "grain"]));

    let json =
        body_json(get(build_test_app(pool.clone()), "/product/search?name=Apple").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(build_test_app(pool.clone()), "/product/search?type=grain").await).await;
    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Wheat");
    assert_eq!(records[0]["type"], "grain");
    assert!(records[0]["unitPrice"].is_null());

    // Blank filters match everything.
    let json = body_json(get(build_test_app(pool), "/product/search?name=&type=").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Listing and pagination
// ---------------------------------------------------------------------------

async fn seed_places(pool: &PgPool) {
    for i in 1..=7 {
        let administrator = if i % 2 == 0 { "Even Admin" } else { "Odd Admin" };
        create(
            build_test_app(pool.clone()),
            "/salePlace",
            json!({"address": format!("Stall {i}"), "administrator": administrator}),
        )
        .await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_in_id_order(pool: PgPool) {
    seed_places(&pool).await;

    let json = body_json(get(build_test_app(pool), "/salePlace/list").await).await;
    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 7);
    let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_cover_every_filtered_record(pool: PgPool) {
    seed_places(&pool).await;

    let mut seen = 0;
    let mut total = None;
    for page in 1..=3 {
        let response = post_json(
            build_test_app(pool.clone()),
            "/salePlace/page",
            json!({"page": page, "pageSize": 2, "administrator": "Odd"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let data = body_json(response).await["data"].clone();
        assert_eq!(data["page"], page);
        assert_eq!(data["pageSize"], 2);
        seen += data["records"].as_array().unwrap().len();
        total.get_or_insert(data["totalCount"].as_i64().unwrap());
    }

    // Stalls 1, 3, 5, 7.
    assert_eq!(total, Some(4));
    assert_eq!(seen, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_clamps_non_positive_values(pool: PgPool) {
    seed_places(&pool).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/salePlace/page",
        json!({"page": 0, "pageSize": -5}),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["page"], 1);
    assert_eq!(data["pageSize"], 10);
    assert_eq!(data["totalCount"], 7);
    assert_eq!(data["records"].as_array().unwrap().len(), 7);

    // A page past the end is empty but keeps the total.
    let response = post_json(
        build_test_app(pool),
        "/salePlace/page",
        json!({"page": 5, "size": 3}),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["totalCount"], 7);
    assert!(data["records"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Every entity group
// ---------------------------------------------------------------------------

/// Id that no seeded record reaches.
const MISSING_ID: i64 = 987_654;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_group_round_trips_and_rejects_missing_ids(pool: PgPool) {
    let chain = seed_chain(&pool).await;
    let sale_place = create(
        build_test_app(pool.clone()),
        "/salePlace",
        json!({"address": "Market Hall", "administrator": "Ng", "phone": "555-0400"}),
    )
    .await;

    let groups = [
        (
            "/company",
            "Company",
            json!({"name": "Valley Haulage", "address": "4 Dock St", "administrator": "Cho", "phone": "555-0300"}),
        ),
        (
            "/product",
            "Product",
            json!({"name": "Sweet Corn", "type": "vegetable", "image": "corn.png", "description": "Yellow", "unitPrice": 1.25}),
        ),
        (
            "/productionPlace",
            "Production place",
            json!({"address": "South Paddock", "administrator": "Diaz", "phone": "555-0500"}),
        ),
        (
            "/productionInfo",
            "Production info",
            json!({
                "productId": chain.product,
                "productionPlaceId": chain.place,
                "seedSource": "Heirloom",
                "description": "Second sowing",
                "plantingDate": "2024-04-02",
                "harvestDate": "2024-08-20"
            }),
        ),
        (
            "/logistics",
            "Logistics",
            json!({
                "productionInfoId": chain.production,
                "companyId": chain.company,
                "startLocation": "South Paddock",
                "destination": "Harbor Depot",
                "startTime": "2024-08-21T06:30:00Z"
            }),
        ),
        (
            "/salePlace",
            "Sale place",
            json!({"address": "Corner Store", "administrator": "Ito", "phone": "555-0600"}),
        ),
        (
            "/saleInfo",
            "Sale info",
            json!({
                "logisticsId": chain.logistics,
                "salePlaceId": sale_place,
                "description": "Morning stall",
                "saleTime": "2024-07-20T10:00:00Z"
            }),
        ),
    ];

    for (uri, label, input) in groups {
        let id = create(build_test_app(pool.clone()), uri, input.clone()).await;

        let response = get(build_test_app(pool.clone()), &format!("{uri}/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK, "get {uri}/{id}");
        let data = body_json(response).await["data"].clone();
        assert_eq!(data["id"], id, "{uri} id");
        for (key, value) in input.as_object().unwrap() {
            assert_eq!(&data[key], value, "{uri} field {key}");
        }

        let mut update = input.clone();
        update["id"] = json!(MISSING_ID);
        let response = put_json(build_test_app(pool.clone()), uri, update).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "update missing {uri}");
        assert_eq!(
            body_json(response).await["message"],
            format!("{label} with id {MISSING_ID} not found")
        );

        let response = delete(build_test_app(pool.clone()), &format!("{uri}/{MISSING_ID}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "delete missing {uri}");
        assert_eq!(body_json(response).await["code"], 404);
    }
}

// ---------------------------------------------------------------------------
// Date filters
// ---------------------------------------------------------------------------

async fn page_total(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::OK, "page {uri}");
    body_json(response).await["data"]["totalCount"]
        .as_i64()
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_date_filters_are_ignored(pool: PgPool) {
    let chain = seed_chain(&pool).await;
    let sale_place = create(
        build_test_app(pool.clone()),
        "/salePlace",
        json!({"address": "Market Hall", "administrator": "Ng", "phone": "555-0400"}),
    )
    .await;
    create(
        build_test_app(pool.clone()),
        "/saleInfo",
        json!({"logisticsId": chain.logistics, "salePlaceId": sale_place, "saleTime": "2024-07-20T10:00:00Z"}),
    )
    .await;

    let logistics_all = page_total(&pool, "/logistics/page", json!({"page": 1, "pageSize": 10})).await;
    assert_eq!(logistics_all, 1);
    let blank = page_total(
        &pool,
        "/logistics/page",
        json!({"page": 1, "pageSize": 10, "startTime": ""}),
    )
    .await;
    assert_eq!(blank, logistics_all);

    let sales_all = page_total(&pool, "/saleInfo/page", json!({"page": 1, "pageSize": 10})).await;
    assert_eq!(sales_all, 1);
    let blank = page_total(
        &pool,
        "/saleInfo/page",
        json!({"page": 1, "pageSize": 10, "saleDate": ""}),
    )
    .await;
    assert_eq!(blank, sales_all);

    // A real day still filters.
    let same_day = page_total(&pool, "/logistics/page", json!({"startTime": "2024-07-16"})).await;
    assert_eq!(same_day, 1);
    let other_day = page_total(&pool, "/saleInfo/page", json!({"saleDate": "2024-07-21"})).await;
    assert_eq!(other_day, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_id_filter_matches_everything(pool: PgPool) {
    seed_places(&pool).await;

    let total = page_total(&pool, "/salePlace/page", json!({"id": 0})).await;
    assert_eq!(total, 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_date_filter_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/saleInfo/page",
        json!({"saleDate": "next tuesday"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}
