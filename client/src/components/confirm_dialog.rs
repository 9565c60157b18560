//! Delete confirmation dialog.
//!
//! Shown while the engine holds a pending delete, whether it was requested
//! from the list or from a map popup. Cancel leaves the landmark untouched.

use leptos::prelude::*;

use crate::state::atlas::AtlasHandle;
use crate::state::page::PendingDelete;

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let page = handle.view();

    let on_cancel = move |_| {
        handle.with_mut(|atlas| atlas.cancel_delete());
    };
    let on_confirm = move |_| {
        if let Some(Some(id)) = handle.with_mut(|atlas| atlas.confirm_delete()) {
            leptos::logging::log!("landmark {id} deleted");
        }
    };

    view! {
        <Show when=move || page.with(|p| p.confirm.is_some())>
            <div class="confirm-backdrop">
                <div class="confirm-dialog" role="alertdialog" aria-modal="true">
                    <p>{move || page.with(|p| p.confirm.as_ref().map(PendingDelete::prompt).unwrap_or_default())}</p>
                    <div class="confirm-dialog__actions">
                        <button type="button" on:click=on_cancel>"Cancel"</button>
                        <button type="button" class="confirm-dialog__danger" on:click=on_confirm>"Delete"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
