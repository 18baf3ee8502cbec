//! Repository-level integration tests against a real PostgreSQL database.

use agritrace_core::pagination::Pagination;
use agritrace_db::models::company::{CompanyFilter, CreateCompany, UpdateCompany};
use agritrace_db::models::logistics::{CreateLogistics, LogisticsFilter};
use agritrace_db::models::product::{CreateProduct, ProductFilter};
use agritrace_db::models::production_info::CreateProductionInfo;
use agritrace_db::models::production_place::CreateProductionPlace;
use agritrace_db::models::sale_info::{CreateSaleInfo, SaleInfoFilter};
use agritrace_db::models::sale_place::CreateSalePlace;
use agritrace_db::models::user::NewUser;
use agritrace_db::repositories::{
    CompanyRepo, LogisticsRepo, ProductRepo, ProductionInfoRepo, ProductionPlaceRepo,
    SaleInfoRepo, SalePlaceRepo, UserRepo,
};
use chrono::{NaiveDate, TimeZone, Utc};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn company(name: &str) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        address: "12 Harbour Road".to_string(),
        administrator: "Li Wei".to_string(),
        phone: "555-0101".to_string(),
    }
}

fn product(name: &str, product_type: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        product_type: product_type.to_string(),
        image: String::new(),
        description: "Fresh".to_string(),
        unit_price: Some(3.5),
    }
}

/// Product -> place -> production -> company -> logistics -> sale place -> sale.
struct Chain {
    product_id: i64,
    production_info_id: i64,
    company_id: i64,
    logistics_id: i64,
    sale_info_id: i64,
}

async fn seed_chain(pool: &PgPool) -> Chain {
    let product_id = ProductRepo::create(pool, &product("Jasmine Rice", "grain"))
        .await
        .unwrap();
    let place_id = ProductionPlaceRepo::create(
        pool,
        &CreateProductionPlace {
            address: "North Field 3".to_string(),
            administrator: "Zhang Min".to_string(),
            phone: "555-0202".to_string(),
        },
    )
    .await
    .unwrap();
    let production_info_id = ProductionInfoRepo::create(
        pool,
        &CreateProductionInfo {
            product_id,
            production_place_id: place_id,
            seed_source: "Hybrid 9".to_string(),
            description: String::new(),
            planting_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            harvest_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        },
    )
    .await
    .unwrap();
    let company_id = CompanyRepo::create(pool, &company("Swift Freight")).await.unwrap();
    let logistics_id = LogisticsRepo::create(
        pool,
        &CreateLogistics {
            production_info_id,
            company_id,
            start_location: "North Field 3".to_string(),
            destination: "City Market".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 7, 16, 8, 0, 0).unwrap(),
            end_time: None,
        },
    )
    .await
    .unwrap();
    let sale_place_id = SalePlaceRepo::create(
        pool,
        &CreateSalePlace {
            address: "City Market Stall 7".to_string(),
            administrator: "Chen Jie".to_string(),
            phone: String::new(),
        },
    )
    .await
    .unwrap();
    let sale_info_id = SaleInfoRepo::create(
        pool,
        &CreateSaleInfo {
            logistics_id,
            sale_place_id,
            description: "Morning batch".to_string(),
            sale_time: Utc.with_ymd_and_hms(2024, 7, 18, 9, 30, 0).unwrap(),
        },
    )
    .await
    .unwrap();

    Chain {
        product_id,
        production_info_id,
        company_id,
        logistics_id,
        sale_info_id,
    }
}

// ---------------------------------------------------------------------------
// Generic CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find_returns_input(pool: PgPool) {
    let input = company("Green Valley Co");
    let id = CompanyRepo::create(&pool, &input).await.unwrap();

    let found = CompanyRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.name, input.name);
    assert_eq!(found.address, input.address);
    assert_eq!(found.administrator, input.administrator);
    assert_eq!(found.phone, input.phone);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(CompanyRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(!CompanyRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_overwrites_every_field(pool: PgPool) {
    let id = CompanyRepo::create(&pool, &company("Before")).await.unwrap();
    let update = UpdateCompany {
        id,
        name: "After".to_string(),
        address: "1 New Street".to_string(),
        administrator: String::new(),
        phone: String::new(),
    };

    assert!(CompanyRepo::replace(&pool, &update).await.unwrap());

    let found = CompanyRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.name, "After");
    assert_eq!(found.address, "1 New Street");
    assert_eq!(found.administrator, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_missing_returns_false(pool: PgPool) {
    let update = UpdateCompany {
        id: 424_242,
        name: "Ghost".to_string(),
        address: "Nowhere".to_string(),
        administrator: String::new(),
        phone: String::new(),
    };
    assert!(!CompanyRepo::replace(&pool, &update).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let id = CompanyRepo::create(&pool, &company("Short Lived")).await.unwrap();

    assert!(CompanyRepo::delete(&pool, id).await.unwrap());
    assert!(CompanyRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(!CompanyRepo::delete(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_orders_by_id(pool: PgPool) {
    let first = CompanyRepo::create(&pool, &company("Zeta Freight")).await.unwrap();
    let second = CompanyRepo::create(&pool, &company("Alpha Freight")).await.unwrap();

    let ids: Vec<_> = CompanyRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_optional_price_round_trips_as_none(pool: PgPool) {
    let mut input = product("Kale", "vegetable");
    input.unit_price = None;
    let id = ProductRepo::create(&pool, &input).await.unwrap();

    let found = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(found.unit_price, None);
}

// ---------------------------------------------------------------------------
// Filtering and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_total_matches_filtered_list(pool: PgPool) {
    for i in 0..7 {
        CompanyRepo::create(&pool, &company(&format!("Farm Co {i}"))).await.unwrap();
    }
    CompanyRepo::create(&pool, &company("Unrelated Ltd")).await.unwrap();

    let filter = CompanyFilter {
        name: Some("Farm".to_string()),
        ..Default::default()
    };
    let listed = CompanyRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 7);

    let mut seen = 0;
    for page in 1..=3 {
        let (records, total) = CompanyRepo::page(&pool, &filter, Pagination::new(Some(page), Some(3)))
            .await
            .unwrap();
        assert_eq!(total, 7);
        seen += records.len();
    }
    assert_eq!(seen, 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_wildcards_match_literally(pool: PgPool) {
    CompanyRepo::create(&pool, &company("100% Organic")).await.unwrap();
    CompanyRepo::create(&pool, &company("100 Acres")).await.unwrap();

    let filter = CompanyFilter {
        name: Some("100%".to_string()),
        ..Default::default()
    };
    let listed = CompanyRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "100% Organic");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_type_is_exact_match(pool: PgPool) {
    ProductRepo::create(&pool, &product("Rice", "grain")).await.unwrap();
    ProductRepo::create(&pool, &product("Wheat", "grain")).await.unwrap();
    ProductRepo::create(&pool, &product("Grainy Mustard", "condiment")).await.unwrap();

    let filter = ProductFilter {
        name: None,
        product_type: Some("grain".to_string()),
    };
    let listed = ProductRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 2);

    let types = ProductRepo::types(&pool).await.unwrap();
    assert_eq!(types, vec!["condiment".to_string(), "grain".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logistics_filters_by_start_day_and_delivery(pool: PgPool) {
    let chain = seed_chain(&pool).await;

    let on_day = LogisticsFilter {
        start_date: NaiveDate::from_ymd_opt(2024, 7, 16),
        ..Default::default()
    };
    assert_eq!(LogisticsRepo::list(&pool, &on_day).await.unwrap().len(), 1);

    let other_day = LogisticsFilter {
        start_date: NaiveDate::from_ymd_opt(2024, 7, 17),
        ..Default::default()
    };
    assert!(LogisticsRepo::list(&pool, &other_day).await.unwrap().is_empty());

    let in_transit = LogisticsFilter {
        delivered: Some(false),
        ..Default::default()
    };
    let listed = LogisticsRepo::list(&pool, &in_transit).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, chain.logistics_id);
}

// ---------------------------------------------------------------------------
// Detail views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_views_denormalize_related_rows(pool: PgPool) {
    let chain = seed_chain(&pool).await;

    let production = ProductionInfoRepo::find_by_id(&pool, chain.production_info_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(production.product_name, "Jasmine Rice");
    assert_eq!(production.place_address, "North Field 3");
    assert_eq!(production.place_administrator, "Zhang Min");

    let logistics = LogisticsRepo::find_by_id(&pool, chain.logistics_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(logistics.product_name, "Jasmine Rice");
    assert_eq!(logistics.company_name, "Swift Freight");
    assert_eq!(logistics.company_phone, "555-0101");

    let sale = SaleInfoRepo::find_by_id(&pool, chain.sale_info_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sale.product_name, "Jasmine Rice");
    assert_eq!(sale.sale_place_address, "City Market Stall 7");
    assert_eq!(sale.destination, "City Market");

    // Listing uses the same projection as the single lookup.
    let listed = SaleInfoRepo::list(&pool, &SaleInfoFilter::default()).await.unwrap();
    assert_eq!(listed, vec![sale]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_related_rows_leaves_empty_fields(pool: PgPool) {
    let chain = seed_chain(&pool).await;

    assert!(CompanyRepo::delete(&pool, chain.company_id).await.unwrap());
    assert!(ProductRepo::delete(&pool, chain.product_id).await.unwrap());

    let logistics = LogisticsRepo::find_by_id(&pool, chain.logistics_id)
        .await
        .unwrap()
        .expect("logistics row survives deletion of its company");
    assert_eq!(logistics.company_name, "");
    assert_eq!(logistics.company_administrator, "");
    assert_eq!(logistics.product_name, "");

    let sale = SaleInfoRepo::find_by_id(&pool, chain.sale_info_id)
        .await
        .unwrap()
        .expect("sale row survives deletion of its product");
    assert_eq!(sale.product_name, "");
    assert_eq!(sale.destination, "City Market");

    // Orphans still count toward pagination.
    let (records, total) =
        LogisticsRepo::page(&pool, &LogisticsFilter::default(), Pagination::default())
            .await
            .unwrap();
    assert_eq!(total, 1);
    assert_eq!(records.len(), 1);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_username_lookup_and_uniqueness(pool: PgPool) {
    let id = UserRepo::create(
        &pool,
        &NewUser {
            username: "farmer".to_string(),
            password_hash: "hash-1".to_string(),
        },
    )
    .await
    .unwrap();

    let user = UserRepo::find_by_username(&pool, "farmer").await.unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.password_hash, "hash-1");
    assert!(user.sex.is_none());

    assert!(UserRepo::username_taken(&pool, "farmer", None).await.unwrap());
    assert!(!UserRepo::username_taken(&pool, "farmer", Some(id)).await.unwrap());
    assert!(!UserRepo::username_taken(&pool, "nobody", None).await.unwrap());

    assert!(UserRepo::update_password(&pool, id, "hash-2").await.unwrap());
    let user = UserRepo::find_credentials(&pool, id).await.unwrap().unwrap();
    assert_eq!(user.password_hash, "hash-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_constraint(pool: PgPool) {
    let input = NewUser {
        username: "dup".to_string(),
        password_hash: "h".to_string(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}
