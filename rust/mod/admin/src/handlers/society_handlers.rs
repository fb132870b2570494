//! Society page and form handlers.

use flux::StateStore;
use tracing::{info, warn};

use super::AdminContext;
use super::helpers::{apply_if_mounted, current_mount};
use crate::form::{SocietyForm, SocietyFormMode};
use crate::model::Society;
use crate::page::Page;
use crate::request::UpdateSocietyFieldReq;
use crate::state::SocietyPage;

pub(super) fn mount(mount: u64, store: &StateStore) {
    store.remove(SocietyForm::PATH);
    store.set(SocietyPage::PATH, SocietyPage::mounted(mount));
}

/// Handle `society/load`.
///
/// No society yet (404 or an empty body) opens the registration form. A
/// failed fetch shows the error and the registration form.
pub async fn handle_load(store: &StateStore, ctx: &AdminContext) {
    let Some(mount) = current_mount::<SocietyPage>(store, SocietyPage::PATH) else {
        return;
    };
    apply_if_mounted::<SocietyPage, _>(store, SocietyPage::PATH, mount, |s| s.loading = true);

    let result = ctx.api.get_optional::<Society>(Page::Society.endpoint()).await;
    let show_form = matches!(result, Ok(None) | Err(_));
    let landed = apply_if_mounted::<SocietyPage, _>(store, SocietyPage::PATH, mount, |s| {
        match result {
            Ok(society) => s.finish_load(society),
            Err(e) => {
                warn!(error = %e, "society load failed");
                s.fail_load(Page::Society.load_error());
            }
        }
    });
    if !landed {
        return;
    }
    if show_form {
        store.set(SocietyForm::PATH, SocietyForm::register());
    } else {
        store.remove(SocietyForm::PATH);
    }
}

/// Handle `society/form/open`.
pub fn handle_open(store: &StateStore) {
    let society = store
        .get_as::<SocietyPage>(SocietyPage::PATH)
        .and_then(|p| p.society);
    let form = match society {
        Some(s) => SocietyForm::edit(&s),
        None => SocietyForm::register(),
    };
    store.set(SocietyForm::PATH, form);
}

/// Handle `society/form/update`.
pub fn handle_update(req: &UpdateSocietyFieldReq, store: &StateStore) {
    store.update::<SocietyForm, _>(SocietyForm::PATH, |f| f.set(req.field, req.value.clone()));
}

/// Handle `society/form/submit`.
pub async fn handle_submit(store: &StateStore, ctx: &AdminContext) {
    let Some(mut form) = store.get_as::<SocietyForm>(SocietyForm::PATH) else {
        warn!("society submit without an open form");
        return;
    };
    if form.busy {
        return;
    }
    if !form.check() {
        store.set(SocietyForm::PATH, form);
        return;
    }

    form.busy = true;
    form.error = None;
    store.set(SocietyForm::PATH, form.clone());

    let result = match &form.mode {
        SocietyFormMode::Register => ctx.api.post_json("/society/add", &form.fields).await,
        SocietyFormMode::Edit { society_id } => {
            let endpoint = ctx.config.society_update.path(society_id);
            ctx.api.patch_json(&endpoint, &form.fields).await
        }
    };

    match result {
        Ok(()) => {
            info!(name = %form.fields.name, "society saved");
            store.remove(SocietyForm::PATH);
            handle_load(store, ctx).await;
        }
        Err(e) => {
            warn!(error = %e, "society submit failed");
            let message = e.user_message(form.failure_message());
            store.update::<SocietyForm, _>(SocietyForm::PATH, |f| {
                f.busy = false;
                f.error = Some(message);
            });
        }
    }
}

/// Handle `society/form/cancel`.
pub fn handle_cancel(store: &StateStore) {
    store.remove(SocietyForm::PATH);
}
