use leptos::prelude::*;

use crate::core::checkout::{MAX_SEATS, WorkspacePatch, parse_seat_count};
use crate::core::validation::FieldErrors;
use crate::core::CheckoutSession;
use crate::ui::common::{CheckboxField, FormField, field_error};

/// Workspace name, seat count and billing contact
#[component]
pub fn WorkspaceStep(
    session: RwSignal<CheckoutSession>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let patch = move |field: &'static str, patch: WorkspacePatch| {
        session.update(|s| s.update_workspace(patch));
        errors.update(|e| e.clear(field));
    };

    view! {
        <div class="space-y-5">
            <FormField
                label="Workspace name"
                name="workspace-name"
                autocomplete="organization"
                placeholder="Acme Analytics"
                value=Signal::derive(move || session.with(|s| s.workspace.workspace_name.clone()))
                on_input=Callback::new(move |v: String| {
                    patch("workspace_name", WorkspacePatch { workspace_name: Some(v), ..Default::default() })
                })
                error=field_error(errors, "workspace_name")
            />
            <FormField
                label="Seats"
                name="seat-count"
                inputmode="numeric"
                value=Signal::derive(move || session.with(|s| s.workspace.seat_count.to_string()))
                on_input=Callback::new(move |v: String| {
                    let previous = session.with_untracked(|s| s.workspace.seat_count);
                    let seats = parse_seat_count(&v, previous);
                    patch("seat_count", WorkspacePatch { seat_count: Some(seats), ..Default::default() })
                })
                error=field_error(errors, "seat_count")
            />
            <p class="text-xs text-theme-tertiary -mt-3">
                {format!("Between 1 and {MAX_SEATS} seats. You can change this later.")}
            </p>
            <FormField
                label="Billing email"
                name="billing-email"
                input_type="email"
                autocomplete="email"
                placeholder="billing@company.com"
                value=Signal::derive(move || session.with(|s| s.workspace.billing_email.clone()))
                on_input=Callback::new(move |v: String| {
                    patch("billing_email", WorkspacePatch { billing_email: Some(v), ..Default::default() })
                })
                error=field_error(errors, "billing_email")
            />
            <CheckboxField
                label="Send me a reminder before renewal"
                checked=Signal::derive(move || session.with(|s| s.workspace.reminder))
                on_change=Callback::new(move |v| {
                    session.update(|s| s.update_workspace(WorkspacePatch { reminder: Some(v), ..Default::default() }))
                })
            />
        </div>
    }
}
