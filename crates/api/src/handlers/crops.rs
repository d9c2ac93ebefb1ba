//! Handlers for crops.

use agri_core::forms::present;
use agri_core::types::RecordId;
use agri_db::models::crop::CreateCrop;
use agri_db::repositories::CropRepo;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::MISSING_FIELDS_MESSAGE;
use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::session::{Flash, FlashModule, Session};
use crate::state::AppState;
use crate::views::lists::crops_page;

#[derive(Debug, Deserialize)]
pub struct CropForm {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /crops
pub async fn list_crops(_user: CurrentUser, State(state): State<AppState>) -> Html<String> {
    let crops = CropRepo::list(&state.pool).await;
    Html(crops_page(&crops))
}

/// POST /crops
///
/// Requires `name` and `type`. Always redirects to `/` with a flash.
pub async fn create_crop(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CropForm>,
) -> AppResult<Redirect> {
    let name = present(form.name.as_deref());
    let kind = present(form.kind.as_deref());

    let (Some(name), Some(kind)) = (name, kind) else {
        session
            .set_flash(Flash::error(
                FlashModule::Crops,
                MISSING_FIELDS_MESSAGE,
                [("name", form.name.as_deref()), ("type", form.kind.as_deref())],
            ))
            .await;
        return Ok(Redirect::to("/"));
    };

    let input = CreateCrop {
        id: RecordId::now_v7(),
        name: name.to_string(),
        kind: kind.to_string(),
        variety: String::new(),
        area: 0.0,
        yield_amount: 0.0,
    };
    let crop = CropRepo::create(&state.pool, &input).await?;
    tracing::info!(crop_id = %crop.id, name = %crop.name, "Crop added");

    session
        .set_flash(Flash::success(FlashModule::Crops, "Culture ajoutée avec succès !"))
        .await;
    Ok(Redirect::to("/"))
}
