//! Handlers for finance records.

use agri_core::forms::{parse_amount, present};
use agri_core::types::RecordId;
use agri_db::models::finance::CreateFinanceRecord;
use agri_db::repositories::FinanceRepo;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::session::{Flash, FlashModule, Session};
use crate::state::AppState;
use crate::views::finance::finance_page;

/// Shown when `type` is blank or `amount` is not a finite number.
pub const INVALID_FINANCE_MESSAGE: &str = "Veuillez remplir tous les champs correctement.";

#[derive(Debug, Deserialize)]
pub struct FinanceForm {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<String>,
}

/// GET /finance
///
/// Revenue, expenses and profit over every recorded operation.
pub async fn finance_summary(_user: CurrentUser, State(state): State<AppState>) -> Html<String> {
    let summary = FinanceRepo::summary(&state.pool).await;
    Html(finance_page(&summary))
}

/// POST /finance
pub async fn create_finance_record(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<FinanceForm>,
) -> AppResult<Redirect> {
    let kind = present(form.kind.as_deref());
    let amount = match present(form.amount.as_deref()).map(parse_amount) {
        Some(Ok(amount)) => Some(amount),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "Rejected finance amount");
            None
        }
        None => None,
    };

    let (Some(kind), Some(amount)) = (kind, amount) else {
        session
            .set_flash(Flash::error(
                FlashModule::Finance,
                INVALID_FINANCE_MESSAGE,
                [("type", form.kind.as_deref()), ("amount", form.amount.as_deref())],
            ))
            .await;
        return Ok(Redirect::to("/"));
    };

    let input = CreateFinanceRecord {
        id: RecordId::now_v7(),
        kind: kind.to_string(),
        amount,
        description: None,
    };
    let record = FinanceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        record_id = %record.id,
        kind = %record.kind,
        amount = record.amount,
        "Finance record added"
    );

    session
        .set_flash(Flash::success(
            FlashModule::Finance,
            "Opération financière ajoutée avec succès !",
        ))
        .await;
    Ok(Redirect::to("/"))
}
