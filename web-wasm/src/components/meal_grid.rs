//! 検索結果グリッドコンポーネント

use leptos::prelude::*;
use recipe_finder_common::{MealSummary, ResultsView};

#[component]
pub fn MealGrid<F>(results: ReadSignal<ResultsView>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <h2 id="result-heading">{move || results.get().heading}</h2>
        <div
            id="error-container"
            class="error-container"
            class:hidden=move || results.get().error.is_none()
        >
            {move || results.get().error.unwrap_or_default()}
        </div>
        <div id="meals" class="meals">
            <For
                each=move || results.get().cards.into_iter().enumerate()
                key=|(index, meal)| (*index, meal.id.clone())
                children=move |(_, meal)| {
                    view! { <MealCard meal=meal on_select=on_select.clone() /> }
                }
            />
        </div>
    }
}

#[component]
fn MealCard<F>(meal: MealSummary, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let id = meal.id.clone();

    view! {
        <div class="meal" data-meal-id=meal.id.clone() on:click=move |_| on_select(id.clone())>
            <img src=meal.thumbnail_url.clone() alt=meal.name.clone() loading="lazy" />
            <div class="meal-info">
                <h3>{meal.name.clone()}</h3>
                {meal.category.map(|category| view! { <div class="meal-category">{category}</div> })}
            </div>
        </div>
    }
}
