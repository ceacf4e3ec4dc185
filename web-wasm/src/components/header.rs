//! ヘッダーコンポーネント（テーマ切替付き）

use leptos::prelude::*;
use recipe_finder_common::Theme;

#[component]
pub fn Header<F>(theme: ReadSignal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"Recipe Finder"</h1>
            <button
                id="theme-toggle"
                class="btn btn-secondary"
                on:click=move |_| on_toggle_theme(())
            >
                {move || theme.get().toggle_label()}
            </button>
        </header>
    }
}
