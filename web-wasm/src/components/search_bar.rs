//! 検索バーコンポーネント（オートコンプリート付き）

use leptos::prelude::*;
use recipe_finder_common::Suggestions;
use web_sys::KeyboardEvent;

#[component]
pub fn SearchBar<FI, FS, FP>(
    term: ReadSignal<String>,
    suggestions: ReadSignal<Suggestions>,
    on_input: FI,
    on_search: FS,
    on_pick: FP,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FP: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="search-bar">
            <div class="search-input-wrapper">
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search for a recipe..."
                    autocomplete="off"
                    prop:value=move || term.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                    on:keypress={
                        let on_search = on_search.clone();
                        move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                on_search(());
                            }
                        }
                    }
                />
                <ul
                    id="autocomplete-list"
                    class="autocomplete-list"
                    class:hidden=move || suggestions.get().is_hidden()
                >
                    {move || {
                        suggestions
                            .get()
                            .items
                            .into_iter()
                            .map(|name| {
                                let on_pick = on_pick.clone();
                                let picked = name.clone();
                                view! { <li on:click=move |_| on_pick(picked.clone())>{name}</li> }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <button
                id="search-btn"
                class="btn btn-primary"
                on:click=move |_| on_search(())
            >
                "Search"
            </button>
        </div>
    }
}
