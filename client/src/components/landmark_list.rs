//! Landmark list panel.
//!
//! The whole list re-renders from the [`PageView`] snapshot whenever the
//! engine revision moves; rows carry only the landmark id into their handlers.

use leptos::prelude::*;

use landmarks::render::{ListEntry, entry_dom_id};

use crate::state::atlas::AtlasHandle;
use crate::state::page::PageView;
use crate::util::browser::scroll_into_view_by_id;

#[component]
pub fn LandmarkList() -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let page = handle.view();

    view! {
        <section class="landmark-list">
            <h2>{move || page.with(PageView::list_heading)}</h2>
            <Show
                when=move || page.with(|p| !p.entries.is_empty())
                fallback=|| view! { <p class="landmark-list__empty">"No landmarks yet. Pick a spot and add one."</p> }
            >
                <ul>
                    {move || {
                        page.get()
                            .entries
                            .into_iter()
                            .map(|entry| view! { <LandmarkItem entry=entry/> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn LandmarkItem(entry: ListEntry) -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let id = entry.id;
    let clickable = entry.is_clickable();

    let on_select = move |_| {
        if clickable && handle.with_mut(|atlas| atlas.select(id)) == Some(true) {
            scroll_into_view_by_id(&entry_dom_id(id));
        }
    };
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.with_mut(|atlas| atlas.toggle_visibility(id));
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.with_mut(|atlas| atlas.request_delete(id));
    };

    let thumb = entry.image_src.clone().map(|src| {
        let alt = entry.title.clone();
        view! { <img class="landmark-item__thumb" src=src alt=alt/> }
    });

    view! {
        <li id=entry.dom_id() class=entry.class_name() on:click=on_select aria-disabled=(!clickable).to_string()>
            {thumb}
            <div class="landmark-item__body">
                <h3>{entry.title.clone()}</h3>
                <p>{entry.description.clone()}</p>
            </div>
            <div class="landmark-item__actions">
                <button type="button" on:click=on_toggle>{entry.toggle_label()}</button>
                <button type="button" class="landmark-item__delete" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
