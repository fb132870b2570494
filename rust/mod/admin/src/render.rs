//! Plain-text rendering of dashboard state.
//!
//! Every screen reads its state from the store and turns it into lines.
//! List rows print as `title / subtitle / meta`, detail panes as
//! `Label: value` pairs, and empty panes use the page's own wording.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::collection::{CollectionState, EmptyState, FlagFilter, Record};
use crate::form::{EmployeeField, EmployeeForm, FormTab, SocietyField, SocietyForm};
use crate::model::residence::non_blank;
use crate::model::{ApprovedUser, Availability, Employee, Guest, PendingApproval, Vehicle};
use crate::state::{
    AuthState, DASHBOARD_CARDS, HOME_DESCRIPTION, HOME_TITLE, NavState, SocietyPage,
};

const NOT_PROVIDED: &str = "Not provided";
const NO_ADDRESS: &str = "No address provided";

/// One line of a list pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub meta: String,
    pub badge: Option<String>,
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.title, self.subtitle, self.meta)?;
        if let Some(badge) = &self.badge {
            write!(f, " [{badge}]")?;
        }
        Ok(())
    }
}

/// How a record shows up in its list and detail panes.
pub trait RecordView: Record {
    fn row(&self) -> ListRow;

    /// `(label, value)` pairs of the detail pane, in display order.
    fn details(&self) -> Vec<(&'static str, String)>;
}

// ============================================================================
// Record views
// ============================================================================

impl RecordView for PendingApproval {
    fn row(&self) -> ListRow {
        ListRow {
            id: self.resident_id.clone(),
            title: self.full_name(),
            subtitle: self.residence.short_address().unwrap_or(NO_ADDRESS).to_string(),
            meta: self.cnic.clone(),
            badge: Some("Pending".to_string()),
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Email", self.email.clone()),
            ("Phone", or_not_provided(Some(&self.phone))),
            ("CNIC", or_not_provided(Some(&self.cnic))),
            ("Address", address_or_default(&self.residence.full_address())),
            ("Residence Type", or_not_provided(self.residence.residence_type.as_deref())),
        ]
    }
}

impl RecordView for Employee {
    fn row(&self) -> ListRow {
        ListRow {
            id: self.employee_id.clone(),
            title: self.full_name(),
            subtitle: self.internal_role.clone(),
            meta: self.email.clone(),
            badge: None,
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Email", self.email.clone()),
            ("Phone", or_not_provided(self.phone.as_deref())),
            ("CNIC", or_not_provided(self.cnic.as_deref())),
            ("Role", self.internal_role.clone()),
            ("Department", or_not_provided(self.department.as_deref())),
            ("Shift", or_not_provided(self.shift.as_deref())),
            (
                "Joining Date",
                self.joining_date
                    .as_deref()
                    .map(|d| format_date(d, true))
                    .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            ),
        ]
    }
}

impl RecordView for Guest {
    fn row(&self) -> ListRow {
        let subtitle = match self.residence_info() {
            Availability::Available(r) => {
                let line = non_blank(&r.address_line1).unwrap_or("No address");
                match non_blank(&r.block) {
                    Some(block) => format!("{line}, {block}"),
                    None => line.to_string(),
                }
            }
            Availability::Unavailable { capability } => capability.to_string(),
        };
        ListRow {
            id: self.guest_id.clone(),
            title: self.guest_name.clone(),
            subtitle,
            meta: format!("ETA: {}", format_date(&self.eta, false)),
            badge: Some(availability_text(&self.visit_status(), |s| s.label().to_string())),
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let vehicle = self.guest_vehicle.as_ref();
        vec![
            ("Name", self.guest_name.clone()),
            ("Phone", or_not_provided(self.guest_phone_number.as_deref())),
            ("Expected Time of Arrival", format_date(&self.eta, false)),
            (
                "Verification Status",
                availability_text(&self.visit_status(), |s| s.label().to_string()),
            ),
            (
                "Address",
                availability_text(&self.residence_info(), |r| address_or_default(&r.full_address())),
            ),
            (
                "Vehicle",
                or_not_provided(vehicle.and_then(|v| v.vehicle_model.as_deref())),
            ),
            ("License Plate", or_not_provided(self.license_plate())),
        ]
    }
}

impl RecordView for ApprovedUser {
    fn row(&self) -> ListRow {
        ListRow {
            id: self.resident_id.clone(),
            title: self.full_name(),
            subtitle: self.email.clone(),
            meta: self.residence.short_address().unwrap_or(NO_ADDRESS).to_string(),
            badge: None,
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Email", self.email.clone()),
            ("Phone", or_not_provided(self.phone.as_deref())),
            ("CNIC", or_not_provided(self.cnic.as_deref())),
            ("Address", address_or_default(&self.residence.full_address())),
            ("Guests", availability_text(&self.guest_history(), |g| g.len().to_string())),
            ("Vehicles", availability_text(&self.vehicle_history(), |v| v.len().to_string())),
        ]
    }
}

impl RecordView for Vehicle {
    fn row(&self) -> ListRow {
        ListRow {
            id: self.id.clone(),
            title: self.display_name(),
            subtitle: self.license_plate.clone(),
            meta: match &self.last_entry {
                Some(at) => format!("Last entry: {}", format_date(at, false)),
                None => "No entry records".to_string(),
            },
            badge: None,
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Vehicle", self.display_name()),
            ("License Plate", self.license_plate.clone()),
            ("Color", self.color.clone()),
            ("Owner", self.user_name.clone().unwrap_or_else(|| self.user_id.clone())),
            (
                "Last Entry",
                self.last_entry
                    .as_deref()
                    .map(|d| format_date(d, false))
                    .unwrap_or_else(|| "Not recorded".to_string()),
            ),
            (
                "Last Exit",
                self.last_exit
                    .as_deref()
                    .map(|d| format_date(d, false))
                    .unwrap_or_else(|| "Not recorded".to_string()),
            ),
            ("Owner Details", availability_text(&self.owner(), |o| o.email.clone())),
            ("Entry History", availability_text(&self.entries(), |e| e.len().to_string())),
        ]
    }
}

// ============================================================================
// Screens
// ============================================================================

/// A collection page: header, banner, list pane and detail pane.
pub fn collection<T: RecordView>(state: &CollectionState<T>) -> String {
    let page = T::PAGE;
    let mut out = vec![page.title().to_string(), page.description().to_string()];
    if let Some(error) = &state.error {
        out.push(format!("! {error}"));
    }
    if !state.query.trim().is_empty() {
        out.push(format!("Search: {}", state.query));
    }
    for flag in T::FLAGS {
        if state.flag_on(*flag) {
            out.push(format!("Filter: {}", flag.label()));
        }
    }
    out.push(String::new());

    if state.loading {
        out.push("Loading...".to_string());
        return out.join("\n");
    }

    let flagged = state.flag_on(FlagFilter::VerifiedOnly);
    match state.list_empty_state() {
        Some(EmptyState::NoMatches) => out.push(format!("No results for \"{}\"", state.query.trim())),
        Some(_) => out.push(page.empty_message(flagged).to_string()),
        None => {
            for item in state.filtered() {
                let marker = if state.selected.as_deref() == Some(item.record_id()) { ">" } else { " " };
                out.push(format!("{marker} {}", item.row()));
            }
        }
    }

    out.push(String::new());
    match (state.selected_item(), state.detail_empty_state()) {
        (Some(item), _) => out.extend(detail_lines(item)),
        (None, Some(EmptyState::NothingSelected)) => out.push(page.select_prompt().to_string()),
        (None, _) => out.push(page.empty_message(flagged).to_string()),
    }
    out.join("\n")
}

/// `Label: value` lines of one record.
pub fn detail_lines<T: RecordView>(item: &T) -> Vec<String> {
    item.details()
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect()
}

/// The society page plus its form when one is open.
pub fn society(page: &SocietyPage, form: Option<&SocietyForm>) -> String {
    let p = crate::page::Page::Society;
    let mut out = vec![p.title().to_string(), p.description().to_string()];
    if let Some(error) = &page.error {
        out.push(format!("! {error}"));
    }
    out.push(String::new());
    if page.loading {
        out.push("Loading...".to_string());
    } else {
        match &page.society {
            Some(s) => {
                out.push(s.name.clone());
                out.push(s.formatted_address());
            }
            None => out.push(p.empty_message(false).to_string()),
        }
    }
    if let Some(form) = form {
        out.push(String::new());
        out.push(society_form(form));
    }
    out.join("\n")
}

pub fn society_form(form: &SocietyForm) -> String {
    let mut out = vec![form.title().to_string()];
    if let Some(error) = &form.error {
        out.push(format!("! {error}"));
    }
    for field in SocietyField::ALL {
        let value = society_field_value(form, field);
        out.push(field_line(field.key(), value, form.errors.get(&field).map(String::as_str)));
    }
    out.join("\n")
}

fn society_field_value(form: &SocietyForm, field: SocietyField) -> &str {
    let f = &form.fields;
    match field {
        SocietyField::Name => &f.name,
        SocietyField::Address => &f.address,
        SocietyField::City => &f.city,
        SocietyField::State => &f.state,
        SocietyField::PostalCode => &f.postal_code,
    }
}

pub fn employee_form(form: &EmployeeForm) -> String {
    let mut out = vec!["Add New Employee".to_string()];
    if let Some(error) = &form.error {
        out.push(format!("! {error}"));
    }
    for tab in [FormTab::Personal, FormTab::Employment] {
        let marker = if form.tab == tab { "*" } else { " " };
        out.push(format!("{marker} {tab:?}"));
        for field in EmployeeField::ALL.into_iter().filter(|f| f.tab() == tab) {
            let value = if field == EmployeeField::Password && !form.fields.password.is_empty() {
                "******"
            } else {
                form.fields.get(field)
            };
            out.push(format!("  {}", field_line(field.key(), value, form.error_for(field))));
        }
    }
    if form.busy {
        out.push("Creating...".to_string());
    }
    out.join("\n")
}

fn field_line(key: &str, value: &str, error: Option<&str>) -> String {
    match error {
        Some(e) => format!("{key}: {value}  ({e})"),
        None => format!("{key}: {value}"),
    }
}

/// Sidebar, with the active item marked.
pub fn nav(state: &NavState) -> String {
    if !state.sidebar_open {
        return String::new();
    }
    state
        .items
        .iter()
        .map(|item| {
            let marker = if state.is_active(item) { ">" } else { " " };
            format!("{marker} {}", item.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dashboard home with its shortcut cards.
pub fn home() -> String {
    let mut out = vec![HOME_TITLE.to_string(), HOME_DESCRIPTION.to_string(), String::new()];
    for card in DASHBOARD_CARDS {
        out.push(format!("{} - {} ({})", card.title, card.description, card.route));
    }
    out.join("\n")
}

/// Who is signed in, or why nobody is.
pub fn auth(state: &AuthState) -> String {
    match (&state.user, &state.error) {
        (_, Some(error)) => format!("! {error}"),
        (Some(user), None) if state.is_authenticated() => {
            let name = user.name.as_deref().unwrap_or("Admin User");
            let role = user.role.as_deref().unwrap_or("admin");
            format!("Signed in as {name} ({role})")
        }
        _ => "Not signed in".to_string(),
    }
}

// ============================================================================
// Values
// ============================================================================

/// Human date for a backend timestamp. Unparseable input is shown as sent.
pub fn format_date(raw: &str, date_only: bool) -> String {
    let fmt = if date_only { "%b %-d, %Y" } else { "%b %-d, %Y %H:%M" };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(fmt).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(fmt).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

pub fn availability_text<T>(value: &Availability<T>, show: impl FnOnce(&T) -> String) -> String {
    match value {
        Availability::Available(v) => show(v),
        Availability::Unavailable { capability } => capability.to_string(),
    }
}

fn or_not_provided(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

fn address_or_default(address: &str) -> String {
    if address.is_empty() { NO_ADDRESS.to_string() } else { address.to_string() }
}
