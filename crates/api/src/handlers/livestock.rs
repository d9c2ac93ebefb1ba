//! Handlers for livestock.

use agri_core::forms::present;
use agri_core::types::RecordId;
use agri_db::models::animal::CreateAnimal;
use agri_db::repositories::LivestockRepo;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::MISSING_FIELDS_MESSAGE;
use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::session::{Flash, FlashModule, Session};
use crate::state::AppState;
use crate::views::lists::livestock_page;

#[derive(Debug, Deserialize)]
pub struct AnimalForm {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

/// GET /livestock
pub async fn list_livestock(_user: CurrentUser, State(state): State<AppState>) -> Html<String> {
    let animals = LivestockRepo::list(&state.pool).await;
    Html(livestock_page(&animals))
}

/// POST /livestock
///
/// Requires `type` and `name`. One form submission records one animal.
pub async fn create_animal(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AnimalForm>,
) -> AppResult<Redirect> {
    let (Some(kind), Some(name)) = (present(form.kind.as_deref()), present(form.name.as_deref()))
    else {
        session
            .set_flash(Flash::error(
                FlashModule::Livestock,
                MISSING_FIELDS_MESSAGE,
                [("type", form.kind.as_deref()), ("name", form.name.as_deref())],
            ))
            .await;
        return Ok(Redirect::to("/"));
    };

    let input = CreateAnimal {
        id: RecordId::now_v7(),
        kind: kind.to_string(),
        name: name.to_string(),
        breed: None,
        age: None,
        health_status: None,
        head_count: 1,
    };
    let animal = LivestockRepo::create(&state.pool, &input).await?;
    tracing::info!(animal_id = %animal.id, kind = %animal.kind, "Animal added");

    session
        .set_flash(Flash::success(FlashModule::Livestock, "Animal ajouté avec succès !"))
        .await;
    Ok(Redirect::to("/"))
}
