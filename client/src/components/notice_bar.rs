//! Transient success and error messages next to the form.

#[cfg(test)]
#[path = "notice_bar_test.rs"]
mod notice_bar_test;

use leptos::prelude::*;

use landmarks::form::{FormController, NoticeKind};

use crate::util::browser::{after_ms, now_ms};

/// CSS class list for a notice.
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

/// ARIA role for a notice; errors interrupt, successes wait.
pub fn notice_role(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "status",
        NoticeKind::Error => "alert",
    }
}

/// Drop the form's notice once `ttl_ms` has passed. A newer notice raised in
/// the meantime survives, since it has not expired yet.
pub fn schedule_notice_clear(form: RwSignal<FormController>, ttl_ms: u64) {
    after_ms(ttl_ms, move || {
        form.update(|f| {
            f.clear_expired(now_ms());
        });
    });
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let form = expect_context::<RwSignal<FormController>>();

    move || {
        form.with(|f| f.visible_notice(now_ms()).cloned()).map(|notice| {
            view! {
                <div class=notice_class(notice.kind) role=notice_role(notice.kind) data-code=notice.code>
                    {notice.text}
                </div>
            }
        })
    }
}
