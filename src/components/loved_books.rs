//! Mount point for the loved-books widget.
//!
//! The widget is delivered separately and attaches itself to the element with
//! id [`LOVED_BOOKS_MOUNT_ID`]; nothing flows between it and the dashboard.

use leptos::prelude::*;

pub const LOVED_BOOKS_MOUNT_ID: &str = "loved-books";

#[component]
pub fn LovedBooksMount() -> impl IntoView {
    view! {
        <section class="loved-books">
            <div class="loved-books__body" id=LOVED_BOOKS_MOUNT_ID></div>
        </section>
    }
}
