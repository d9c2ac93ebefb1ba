//! Handlers for farm equipment.

use agri_core::forms::present;
use agri_core::types::RecordId;
use agri_db::models::equipment::{CreateEquipment, EquipmentStatus};
use agri_db::repositories::EquipmentRepo;
use agri_db::DbError;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::MISSING_FIELDS_MESSAGE;
use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::session::{Flash, FlashModule, Session};
use crate::state::AppState;
use crate::views::lists::equipment_page;

/// Shown when the generated id collides with a stored machine.
pub const DUPLICATE_EQUIPMENT_MESSAGE: &str = "Équipement déjà existant avec cet ID.";

#[derive(Debug, Deserialize)]
pub struct EquipmentForm {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /equipment
pub async fn list_equipment(_user: CurrentUser, State(state): State<AppState>) -> Html<String> {
    let equipment = EquipmentRepo::list(&state.pool).await;
    Html(equipment_page(&equipment))
}

/// POST /equipment
///
/// Requires `name` and `type`. New machines start `available` with zero
/// usage hours and an empty maintenance schedule.
pub async fn create_equipment(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<EquipmentForm>,
) -> AppResult<Redirect> {
    let echoed = [("name", form.name.as_deref()), ("type", form.kind.as_deref())];

    let (Some(name), Some(kind)) = (present(form.name.as_deref()), present(form.kind.as_deref()))
    else {
        session
            .set_flash(Flash::error(FlashModule::Equipment, MISSING_FIELDS_MESSAGE, echoed))
            .await;
        return Ok(Redirect::to("/"));
    };

    let input = CreateEquipment {
        id: RecordId::now_v7(),
        name: name.to_string(),
        kind: kind.to_string(),
        status: EquipmentStatus::Available,
    };

    let flash = match EquipmentRepo::create(&state.pool, &input).await {
        Ok(equipment) => {
            tracing::info!(equipment_id = %equipment.id, name = %equipment.name, "Equipment added");
            Flash::success(FlashModule::Equipment, "Équipement ajouté avec succès !")
        }
        Err(DbError::Duplicate { id, .. }) => {
            tracing::warn!(equipment_id = %id, "Equipment id already taken");
            Flash::error(FlashModule::Equipment, DUPLICATE_EQUIPMENT_MESSAGE, echoed)
        }
        Err(e) => return Err(e.into()),
    };

    session.set_flash(flash).await;
    Ok(Redirect::to("/"))
}
