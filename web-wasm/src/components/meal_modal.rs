//! レシピ詳細モーダル

use leptos::prelude::*;
use recipe_finder_common::DetailView;

#[component]
pub fn MealModal<FC, FF>(
    detail: ReadSignal<Option<DetailView>>,
    on_close: FC,
    on_toggle_favorite: FF,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FF: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="meal-modal" class="modal" class:hidden=move || detail.get().is_none()>
            <div class="modal-content">
                <button id="modal-close" class="modal-close" on:click=move |_| on_close(())>
                    "×"
                </button>
                {move || {
                    let on_toggle_favorite = on_toggle_favorite.clone();
                    detail.get().map(|d| {
                        let lines = d.ingredient_lines();
                        let meal = d.meal;
                        view! {
                            <div class="meal-details-content" data-meal-id=meal.id.clone()>
                                <h2>{meal.name.clone()}</h2>
                                <img src=meal.thumbnail_url.clone() alt=meal.name.clone() loading="lazy" />
                                <div class="meal-details-category">
                                    <span>{meal.category.clone()}</span>
                                </div>
                                <div class="meal-details-instructions">
                                    <h3>"Instructions"</h3>
                                    <p>{meal.instructions.clone()}</p>
                                </div>
                                <ul class="ingredients-list">
                                    {lines
                                        .into_iter()
                                        .map(|line| view! { <li>{line}</li> })
                                        .collect_view()}
                                </ul>
                                {meal.video_url.clone().map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="youtube-link"
                                        >
                                            "Watch Video"
                                        </a>
                                    }
                                })}
                                <button
                                    class="favorite-btn"
                                    on:click=move |_| on_toggle_favorite(())
                                >
                                    {d.favorite_label.as_str()}
                                </button>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
