//! Allowed category names, for presentation only.
//!
//! The file is read on every request so it can be edited without a restart.
//! The ledger never validates categories against it.

use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn get(State(state): State<ServerState>) -> Result<Json<serde_json::Value>, ServerError> {
    let raw = tokio::fs::read_to_string(&state.categories_path)
        .await
        .map_err(|err| {
            ServerError::Categories(format!("{}: {err}", state.categories_path.display()))
        })?;
    let document = serde_json::from_str(&raw).map_err(|err| {
        ServerError::Categories(format!("{}: {err}", state.categories_path.display()))
    })?;
    Ok(Json(document))
}
