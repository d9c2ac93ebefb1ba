//! HTTP-level tests for the add-forms, flash messages, and list pages.

mod common;

use axum::http::StatusCode;
use common::{assert_redirect_home, body_text, get, post_form, register_and_login};

const EMAIL: &str = "jean%40ferme.fr";
const PASSWORD: &str = "secret";

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

#[tokio::test]
async fn adding_a_crop_flashes_success_once() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    let response = post_form(app.clone(), "/crops", "name=Wheat&type=Cereal", Some(&cookie)).await;
    assert_redirect_home(&response);

    let html = body_text(get(app.clone(), "/", Some(&cookie)).await).await;
    assert!(html.contains("Culture ajoutée avec succès !"));

    let html = body_text(get(app, "/", Some(&cookie)).await).await;
    assert!(!html.contains("Culture ajoutée avec succès !"));
}

#[tokio::test]
async fn added_crop_appears_in_list() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    post_form(app.clone(), "/crops", "name=Wheat&type=Cereal", Some(&cookie)).await;

    let response = get(app, "/crops", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<li>Wheat (Cereal)</li>"));
    assert!(!html.contains("Aucune culture enregistrée."));
}

#[tokio::test]
async fn crop_with_blank_type_is_rejected_with_echo() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    let response = post_form(app.clone(), "/crops", "name=Wheat&type=+++", Some(&cookie)).await;
    assert_redirect_home(&response);

    let html = body_text(get(app.clone(), "/", Some(&cookie)).await).await;
    assert!(html.contains("Veuillez remplir tous les champs."));
    assert!(html.contains("value=\"Wheat\""));

    let html = body_text(get(app, "/crops", Some(&cookie)).await).await;
    assert!(html.contains("Aucune culture enregistrée."));
}

// ---------------------------------------------------------------------------
// Livestock and equipment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn livestock_missing_name_flashes_error() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    let response = post_form(app.clone(), "/livestock", "type=Vache", Some(&cookie)).await;
    assert_redirect_home(&response);

    let html = body_text(get(app, "/", Some(&cookie)).await).await;
    assert!(html.contains("Veuillez remplir tous les champs."));
    assert!(html.contains("value=\"Vache\""));
}

#[tokio::test]
async fn livestock_and_equipment_are_listed() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    post_form(app.clone(), "/livestock", "type=Vache&name=Marguerite", Some(&cookie)).await;
    let html = body_text(get(app.clone(), "/", Some(&cookie)).await).await;
    assert!(html.contains("Animal ajouté avec succès !"));

    post_form(app.clone(), "/equipment", "name=Tracteur&type=John+Deere", Some(&cookie)).await;
    let html = body_text(get(app.clone(), "/", Some(&cookie)).await).await;
    assert!(html.contains("Équipement ajouté avec succès !"));

    let html = body_text(get(app.clone(), "/livestock", Some(&cookie)).await).await;
    assert!(html.contains("<li>Vache : Marguerite</li>"));

    let html = body_text(get(app, "/equipment", Some(&cookie)).await).await;
    assert!(html.contains("<li>Tracteur (John Deere)</li>"));
}

#[tokio::test]
async fn list_pages_escape_user_text() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    post_form(
        app.clone(),
        "/livestock",
        "type=Vache&name=%3Cscript%3Ex%3C%2Fscript%3E",
        Some(&cookie),
    )
    .await;

    let html = body_text(get(app, "/livestock", Some(&cookie)).await).await;
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>x</script>"));
}

// ---------------------------------------------------------------------------
// Finance
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_amount_flashes_error_with_type_echoed() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    let response = post_form(app.clone(), "/finance", "type=income&amount=abc", Some(&cookie)).await;
    assert_redirect_home(&response);

    let html = body_text(get(app.clone(), "/", Some(&cookie)).await).await;
    assert!(html.contains("Veuillez remplir tous les champs correctement."));
    assert!(html.contains("value=\"income\""));

    let html = body_text(get(app, "/", Some(&cookie)).await).await;
    assert!(!html.contains("Veuillez remplir tous les champs correctement."));
}

#[tokio::test]
async fn finance_page_sums_income_and_expenses() {
    let app = common::build_test_app();
    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;

    for form in [
        "type=income&amount=1500",
        "type=income&amount=250.50",
        "type=expense&amount=400",
    ] {
        let response = post_form(app.clone(), "/finance", form, Some(&cookie)).await;
        assert_redirect_home(&response);
    }

    let response = get(app, "/finance", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("1750.50 €"), "revenue");
    assert!(html.contains("400.00 €"), "expenses");
    assert!(html.contains("1350.50 €"), "profit");
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[tokio::test]
async fn protected_pages_redirect_anonymous_visitors() {
    let app = common::build_test_app();
    for uri in ["/crops", "/livestock", "/equipment", "/finance"] {
        let response = get(app.clone(), uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers().get("location").unwrap(), "/", "{uri}");
    }
}

#[tokio::test]
async fn add_forms_accept_anonymous_submissions() {
    let app = common::build_test_app();

    let response = post_form(app.clone(), "/crops", "name=Orge&type=Cereal", None).await;
    assert_redirect_home(&response);

    let cookie = register_and_login(&app, EMAIL, PASSWORD).await;
    let html = body_text(get(app, "/crops", Some(&cookie)).await).await;
    assert!(html.contains("<li>Orge (Cereal)</li>"));
}
