//! Search Dialog Component
//!
//! Owns the debounce and loading timers, the in-flight request and focus.
//! `DialogState` decides what each event means.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::config;
use crate::context::use_app;
use crate::dom;
use crate::search::{
    highlight, AbortHandle, DialogState, InputOutcome, KeyOutcome, NavKey, Phase, ResultKind,
    SearchQuery, SearchResult, Slot, Supersede,
};
use crate::services;

const INPUT_ID: &str = "search-input";

fn item_id(index: usize) -> String {
    format!("search-item-{index}")
}

fn kind_label(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Project => "Project",
        ResultKind::Task => "Task",
    }
}

/// What the result area renders, minus the selection
#[derive(Debug, Clone, PartialEq)]
struct Listing {
    phase: Phase,
    show_spinner: bool,
    query: String,
    items: Vec<SearchResult>,
    error: Option<String>,
}

impl Listing {
    fn of(state: &DialogState) -> Self {
        Self {
            phase: state.phase,
            show_spinner: state.show_spinner,
            query: state.query.trim().to_string(),
            items: state.visible_items().to_vec(),
            error: state.error.clone(),
        }
    }
}

#[component]
pub fn SearchDialog() -> impl IntoView {
    let ctx = use_app();
    let cfg = config::current();
    let debounce_ms = cfg.search_debounce_ms;
    let spinner_delay_ms = cfg.loading_indicator_delay_ms;
    let min_query_len = cfg.min_query_len;

    let state = RwSignal::new(DialogState::default());
    let tickets = StoredValue::new(Supersede::new());

    // Timers and abort handles cancel themselves when dropped from their slot
    let debounce = StoredValue::new_local(Slot::<Timeout>::default());
    let spinner = StoredValue::new_local(Slot::<Timeout>::default());
    let search_abort = StoredValue::new_local(Slot::<AbortHandle>::default());
    let recent_abort = StoredValue::new_local(Slot::<AbortHandle>::default());

    let cancel_search = move || {
        debounce.update_value(Slot::clear);
        spinner.update_value(Slot::clear);
        search_abort.update_value(Slot::clear);
    };

    let load_recent = move || {
        let ticket = tickets.with_value(Supersede::issue);
        state.update(|s| s.begin_recent(ticket));
        let handle = AbortHandle::new();
        let signal = handle.as_ref().map(AbortHandle::signal);
        recent_abort.update_value(|slot| match handle {
            Some(h) => slot.replace(h),
            None => slot.clear(),
        });
        spawn_local(async move {
            let outcome = services::load_recent(signal).await;
            state.update(|s| {
                s.recent_loaded(ticket, outcome);
            });
        });
    };

    let run_search = move || {
        let ticket = tickets.with_value(Supersede::issue);
        let query = state.with_untracked(|s| SearchQuery::parse(&s.query));
        state.update(|s| s.begin_search(ticket));

        let timer = Timeout::new(spinner_delay_ms, move || {
            state.update(|s| s.loading_delay_elapsed(ticket));
        });
        spinner.update_value(|slot| slot.replace(timer));

        let handle = AbortHandle::new();
        let signal = handle.as_ref().map(AbortHandle::signal);
        search_abort.update_value(|slot| match handle {
            Some(h) => slot.replace(h),
            None => slot.clear(),
        });

        spawn_local(async move {
            let outcome = services::search_all(&query, signal).await;
            if let Err(e) = &outcome {
                if !e.is_aborted() {
                    log::warn!("search {:?} failed: {e}", query.raw());
                }
            }
            let applied = state.try_update(|s| s.finish(ticket, outcome)).unwrap_or(false);
            if applied {
                spinner.update_value(Slot::clear);
                search_abort.update_value(Slot::clear);
            }
        });
    };

    // Open and close follow the context flag
    Effect::new(move |_| {
        if ctx.search_open.get() {
            state.update(DialogState::open);
            load_recent();
            dom::after_frame(|| dom::focus_and_reveal(INPUT_ID));
        } else {
            cancel_search();
            recent_abort.update_value(Slot::clear);
            state.update(DialogState::close);
        }
    });

    let close = move || ctx.search_open.set(false);

    let activate = move |result: SearchResult| {
        ctx.navigate(&result.href());
        close();
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        cancel_search();
        match state.try_update(|s| s.input(&text)) {
            Some(InputOutcome::Debounce) => {
                let timer = Timeout::new(debounce_ms, run_search);
                debounce.update_value(|slot| slot.replace(timer));
            }
            Some(InputOutcome::ShowRecent) => load_recent(),
            None => {}
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else { return };
        ev.prevent_default();
        ev.stop_propagation();
        let from_input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .is_some();
        let outcome = state
            .try_update(|s| s.key(key, from_input))
            .unwrap_or(KeyOutcome::Ignored);
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::FocusInput => dom::after_frame(|| dom::focus_and_reveal(INPUT_ID)),
            KeyOutcome::FocusItem(index) => dom::after_frame(move || dom::focus_and_reveal(&item_id(index))),
            KeyOutcome::Activate(result) => activate(result),
            KeyOutcome::Close => close(),
        }
    };

    let render_item = move |index: usize, result: SearchResult, query: &SearchQuery| {
        let title = highlight(&result.title, query)
            .into_iter()
            .map(|seg| {
                if seg.highlighted {
                    view! { <mark>{seg.text}</mark> }.into_any()
                } else {
                    view! { <span>{seg.text}</span> }.into_any()
                }
            })
            .collect_view();
        let subtitle = result.subtitle.clone();
        let target = result.clone();
        view! {
            <li
                id=item_id(index)
                class="search-item"
                class:selected=move || state.with(|s| s.selected == Some(index))
                role="option"
                tabindex="-1"
                on:mouseenter=move |_| {
                    if state.with_untracked(|s| s.selected != Some(index)) {
                        state.update(|s| s.hover(index));
                    }
                }
                on:click=move |_| activate(target.clone())
            >
                <span class="kind">{kind_label(result.kind)}</span>
                <span class="title">{title}</span>
                {subtitle.map(|s| view! { <span class="subtitle">{s}</span> })}
            </li>
        }
    };

    let render_list = move |items: Vec<SearchResult>, query: SearchQuery| {
        view! {
            <ul class="search-results" role="listbox">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(i, r)| render_item(i, r, &query))
                    .collect_view()}
            </ul>
        }
    };

    // Selection moves restyle items in place; only content changes rebuild
    let listing = Memo::new(move |_| state.with(Listing::of));

    let body = move || {
        let l = listing.get();
        let query = SearchQuery::parse(&l.query);
        match l.phase {
            Phase::Closed => ().into_any(),
            Phase::Idle if l.items.is_empty() => {
                view! { <p class="search-hint">"No recent items"</p> }.into_any()
            }
            Phase::Idle => view! {
                <div>
                    <h3 class="search-section">"Recent"</h3>
                    {render_list(l.items, query)}
                </div>
            }
            .into_any(),
            Phase::Loading if l.show_spinner => {
                view! { <p class="search-loading">"Searching…"</p> }.into_any()
            }
            Phase::Loading | Phase::Results => render_list(l.items, query).into_any(),
            Phase::NoResults if l.query.chars().count() < min_query_len => {
                view! { <p class="search-hint">"Keep typing to search"</p> }.into_any()
            }
            Phase::NoResults => view! {
                <p class="search-empty">"No results for \"" {l.query} "\""</p>
            }
            .into_any(),
            Phase::Error => view! {
                <p class="search-error">{l.error.unwrap_or_default()}</p>
            }
            .into_any(),
        }
    };

    view! {
        <Show when=move || ctx.search_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal search-dialog"
                    role="dialog"
                    aria-label="Search"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <input
                        id=INPUT_ID
                        type="search"
                        placeholder="Search projects and tasks…"
                        autocomplete="off"
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=on_input
                    />
                    {body}
                </div>
            </div>
        </Show>
    }
}
