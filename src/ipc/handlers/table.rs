use crate::grading::{DraftEdit, GradingTable, NewParticipant, ToastQueue, COLUMNS};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::store::SqliteStore;
use serde_json::json;
use tracing::info;

fn parse_drafts(raw: &serde_json::Value) -> Result<Vec<DraftEdit>, String> {
    if !raw.is_array() {
        return Err("draftValues must be an array".to_string());
    }
    serde_json::from_value(raw.clone()).map_err(|e| format!("invalid draftValues: {e}"))
}

fn handle_table_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let training_id = match req.params.get("trainingId").and_then(|v| v.as_str()) {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => return err(&req.id, "bad_params", "missing trainingId", None),
    };

    let mut table = GradingTable::new(training_id.clone());
    table.load(&SqliteStore::new(conn, &training_id));
    info!(%training_id, rows = table.participants().len(), "table opened");

    let result = json!({
        "trainingId": training_id,
        "participants": table.participants(),
        "columns": COLUMNS,
        "error": table.error(),
    });
    state.table = Some(table);
    ok(&req.id, result)
}

fn handle_table_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(table) = state.table.as_ref() else {
        return err(&req.id, "no_table", "open a table first", None);
    };
    ok(
        &req.id,
        json!({
            "trainingId": table.parent_id(),
            "participants": table.participants(),
            "draftValues": table.draft_values(),
            "error": table.error(),
        }),
    )
}

fn handle_table_columns(_state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "columns": COLUMNS }))
}

fn handle_table_stage_drafts(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(table) = state.table.as_mut() else {
        return err(&req.id, "no_table", "open a table first", None);
    };
    let Some(raw) = req.params.get("draftValues") else {
        return err(&req.id, "bad_params", "missing draftValues[]", None);
    };
    let drafts = match parse_drafts(raw) {
        Ok(v) => v,
        Err(message) => return err(&req.id, "bad_params", message, None),
    };

    let staged = drafts.len();
    table.stage_drafts(drafts);
    ok(&req.id, json!({ "staged": staged }))
}

fn handle_table_commit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(table) = state.table.as_mut() else {
        return err(&req.id, "no_table", "open a table first", None);
    };

    let drafts = match req.params.get("draftValues") {
        None | Some(serde_json::Value::Null) => None,
        Some(raw) => match parse_drafts(raw) {
            Ok(v) => Some(v),
            Err(message) => return err(&req.id, "bad_params", message, None),
        },
    };

    let training_id = table.parent_id().to_string();
    let mut sink = SqliteStore::new(conn, &training_id);
    let mut toasts = ToastQueue::default();
    let outcome = table.commit(drafts, &mut sink, &mut toasts);

    match outcome {
        Ok(ack) => ok(
            &req.id,
            json!({
                "saved": ack.saved,
                "savedAt": ack.saved_at,
                "participants": table.participants(),
                "toasts": toasts.drain(),
            }),
        ),
        Err(e) => err(
            &req.id,
            "save_failed",
            e.to_string(),
            Some(json!({
                "participants": table.participants(),
                "toasts": toasts.drain(),
            })),
        ),
    }
}

fn handle_table_add_participant(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(table) = state.table.as_mut() else {
        return err(&req.id, "no_table", "open a table first", None);
    };
    let new_row: NewParticipant = match serde_json::from_value(req.params.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("invalid participant: {e}"),
                None,
            )
        }
    };

    let participant = new_row.into_participant();
    if !table.add_participant(participant.clone()) {
        return err(
            &req.id,
            "duplicate_participant",
            "participant already in table",
            Some(json!({ "participantId": participant.id })),
        );
    }
    ok(&req.id, json!({ "participant": participant }))
}

fn handle_table_close(state: &mut AppState, req: &Request) -> serde_json::Value {
    let closed = state.table.take().is_some();
    ok(&req.id, json!({ "closed": closed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "table.open" => Some(handle_table_open(state, req)),
        "table.get" => Some(handle_table_get(state, req)),
        "table.columns" => Some(handle_table_columns(state, req)),
        "table.stageDrafts" => Some(handle_table_stage_drafts(state, req)),
        "table.commit" => Some(handle_table_commit(state, req)),
        "table.addParticipant" => Some(handle_table_add_participant(state, req)),
        "table.close" => Some(handle_table_close(state, req)),
        _ => None,
    }
}
