//! Add-employee form handlers.

use flux::StateStore;
use tracing::{info, warn};

use super::AdminContext;
use super::page_handlers;
use crate::form::EmployeeForm;
use crate::model::Employee;
use crate::request::UpdateEmployeeFieldReq;

const CREATE_FAILED: &str = "Failed to create employee";

/// Handle `employees/form/open`.
pub fn handle_open(store: &StateStore) {
    store.set(EmployeeForm::PATH, EmployeeForm::empty());
}

/// Handle `employees/form/update`. Editing a field clears its error.
pub fn handle_update(req: &UpdateEmployeeFieldReq, store: &StateStore) {
    let updated = store.update::<EmployeeForm, _>(EmployeeForm::PATH, |f| {
        f.set(req.field, req.value.clone())
    });
    if !updated {
        warn!(field = req.field.key(), "employee form is not open");
    }
}

/// Handle `employees/form/submit`.
///
/// Validation failures stay on the form and nothing is sent. On success the
/// employee list is re-fetched and the form closes.
pub async fn handle_submit(store: &StateStore, ctx: &AdminContext) {
    let Some(mut form) = store.get_as::<EmployeeForm>(EmployeeForm::PATH) else {
        warn!("employee submit without an open form");
        return;
    };
    if form.busy {
        return;
    }
    form.error = None;
    if !form.check() {
        store.set(EmployeeForm::PATH, form);
        return;
    }

    form.busy = true;
    store.set(EmployeeForm::PATH, form.clone());

    match ctx.api.post_json("/employee/create", &form.fields).await {
        Ok(()) => {
            info!(email = %form.fields.email, "employee created");
            page_handlers::load_collection::<Employee>(store, ctx).await;
            store.remove(EmployeeForm::PATH);
        }
        Err(e) => {
            warn!(error = %e, "create employee failed");
            let message = e.user_message(CREATE_FAILED);
            store.update::<EmployeeForm, _>(EmployeeForm::PATH, |f| {
                f.busy = false;
                f.error = Some(message);
            });
        }
    }
}

/// Handle `employees/form/close`.
pub fn handle_close(store: &StateStore) {
    store.remove(EmployeeForm::PATH);
}
