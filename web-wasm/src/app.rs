//! メインアプリケーションコンポーネント
//!
//! ブラウザのイベントを共通ライブラリの操作に結びつける。
//! 状態は signal と StoredValue に持ち、モジュールのグローバルは使わない。

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};
use recipe_finder_common::{
    load_detail, load_field, validate_query, DetailRequests, DetailView, Error, FilterRegistry,
    FilterSelection, ListField, Operation, ResultsView, ScrollMetrics, SearchSession, Suggestions,
    Theme,
};

use crate::api::catalog_client;
use crate::components::{
    filter_bar::FilterBar,
    header::Header,
    loader::Loader,
    meal_grid::MealGrid,
    meal_modal::MealModal,
    search_bar::SearchBar,
};
use crate::config::load_config;
use crate::storage::favorites_store;

/// 現在のスクロール位置
fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    let document_height = f64::from(window.document()?.body()?.offset_height());
    Some(ScrollMetrics {
        viewport_height,
        scroll_y,
        document_height,
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(load_config());

    // アプリケーション状態
    let (term, set_term) = signal(String::new());
    let (filters, set_filters) = signal(FilterSelection::default());
    let (registry, set_registry) = signal(FilterRegistry::default());
    let (results, set_results) = signal(ResultsView::default());
    let (suggestions, set_suggestions) = signal(Suggestions::default());
    let (detail, set_detail) = signal(None::<DetailView>);
    let (theme, set_theme) = signal(Theme::default());
    let session = StoredValue::new(config.with_value(SearchSession::new));
    let detail_requests = StoredValue::new(DetailRequests::default());

    // フィルタ候補: 3つを個別に読み込み、届いた順に反映する
    for field in ListField::ALL {
        spawn_local(async move {
            let client = config.with_value(catalog_client);
            let values = load_field(&client, field).await;
            set_registry.update(|r| r.set_values(field, values));
        });
    }

    // テーマ: body の dark クラスを切り替える
    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        if let Some(body) = document().body() {
            if let Err(e) = body.class_list().toggle_with_force("dark", dark) {
                error!("theme toggle failed: {:?}", e);
            }
        }
    });

    // 失敗の表示。メッセージを出したら今の結果のスクロール追加も打ち切る
    let report_failure = move |e: Error, operation: Operation| {
        let shown = set_results
            .try_update(|r| r.show_failure(&e, operation))
            .unwrap_or(false);
        if shown {
            session.update_value(SearchSession::clear_display);
        }
    };

    // 検索ハンドラ
    let run_search = move || {
        let term_value = term.get_untracked();
        let selection = filters.get_untracked();
        set_suggestions.update(Suggestions::hide);

        let query = match validate_query(&term_value, &selection) {
            Ok(query) => query.to_string(),
            Err(e) => {
                report_failure(e, Operation::Search);
                return;
            }
        };

        set_results.update(ResultsView::start_loading);
        spawn_local(async move {
            let client = config.with_value(catalog_client);
            let outcome = match client.search_by_name(&query).await {
                Ok(meals) => session
                    .try_update_value(|s| s.begin(meals, selection))
                    .unwrap_or_else(|| Ok(Vec::new())),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(first_batch) => set_results.update(|r| r.show_results(first_batch)),
                Err(e) => report_failure(e, Operation::Search),
            }
        });
    };

    // 無限スクロール（間引きなし。残りが無ければ何もしない）
    let _scroll_listener = window_event_listener(ev::scroll, move |_| {
        let Some(metrics) = scroll_metrics() else {
            return;
        };
        let batch = session
            .try_update_value(|s| s.on_scroll(metrics))
            .unwrap_or_default();
        if !batch.is_empty() {
            debug!("scroll: appending {} meals", batch.len());
            set_results.update(|r| r.append(batch));
        }
    });

    // 入力ハンドラ（オートコンプリート）
    let on_input = move |value: String| {
        let limit = config.with_value(|c| c.suggestion_limit);
        let items = session.with_value(|s| Suggestions::for_input(s.results(), &value, limit));
        set_term.set(value);
        set_suggestions.set(items);
    };

    // 候補選択ハンドラ
    let on_pick = move |name: String| {
        set_term.set(name);
        run_search();
    };

    let on_filter_change = move |field: ListField, value: String| {
        set_filters.update(|f| f.set(field, &value));
    };

    // 詳細表示ハンドラ（最後に開いたものだけ反映）
    let on_select_meal = move |id: String| {
        let Some(ticket) = detail_requests.try_update_value(|r| r.begin()) else {
            return;
        };
        set_results.update(ResultsView::start_loading);

        spawn_local(async move {
            let client = config.with_value(catalog_client);
            let result = load_detail(&client, &id).await;

            if !detail_requests.with_value(|r| r.is_current(ticket)) {
                debug!("stale detail response for {} ignored", id);
                return;
            }

            match result {
                Ok(meal) => {
                    let view = DetailView::new(meal, &config.with_value(favorites_store));
                    set_results.update(ResultsView::stop_loading);
                    set_detail.set(Some(view));
                }
                Err(e) => report_failure(e, Operation::Detail),
            }
        });
    };

    // お気に入り切替ハンドラ
    let on_toggle_favorite = move |_: ()| {
        let favorites = config.with_value(favorites_store);
        set_detail.update(|d| {
            if let Some(view) = d {
                if let Err(e) = view.toggle_favorite(&favorites) {
                    error!("favorite toggle failed for {}: {}", view.meal.id, e);
                }
            }
        });
    };

    let on_close_modal = move |_: ()| set_detail.set(None);

    let on_toggle_theme = move |_: ()| set_theme.update(|t| *t = t.toggled());

    view! {
        <div class="container">
            <Header theme=theme on_toggle_theme=on_toggle_theme />

            <SearchBar
                term=term
                suggestions=suggestions
                on_input=on_input
                on_search=move |_: ()| run_search()
                on_pick=on_pick
            />

            <FilterBar registry=registry on_change=on_filter_change />

            <Loader loading=Signal::derive(move || results.get().loading) />

            <MealGrid results=results on_select=on_select_meal />

            <MealModal
                detail=detail
                on_close=on_close_modal
                on_toggle_favorite=on_toggle_favorite
            />
        </div>
    }
}
