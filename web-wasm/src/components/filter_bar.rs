//! 絞込みセレクトボックス（カテゴリ・地域・材料）

use leptos::prelude::*;
use recipe_finder_common::{FilterRegistry, ListField};

#[component]
pub fn FilterBar<F>(registry: ReadSignal<FilterRegistry>, on_change: F) -> impl IntoView
where
    F: Fn(ListField, String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="filters">
            {ListField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <FilterSelect field=field registry=registry on_change=on_change.clone() />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FilterSelect<F>(field: ListField, registry: ReadSignal<FilterRegistry>, on_change: F) -> impl IntoView
where
    F: Fn(ListField, String) + 'static + Clone + Send + Sync,
{
    let id = match field {
        ListField::Category => "category-filter",
        ListField::Area => "area-filter",
        ListField::Ingredient => "ingredient-filter",
    };

    view! {
        <select id=id on:change=move |ev| on_change(field, event_target_value(&ev))>
            <option value="">{field.any_label()}</option>
            // 受信順のまま並べる
            {move || {
                registry
                    .get()
                    .values(field)
                    .iter()
                    .map(|value| view! { <option value=value.clone()>{value.clone()}</option> })
                    .collect_view()
            }}
        </select>
    }
}
