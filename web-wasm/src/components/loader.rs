//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loader(loading: Signal<bool>) -> impl IntoView {
    view! {
        <div id="loader" class="loader" class:hidden=move || !loading.get()>
            <div class="spinner" />
        </div>
    }
}
