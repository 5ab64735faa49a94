use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::directory::{
    query, DirectoryAction, DirectoryState, Debouncer, Facets, FilterUpdate, HttpRecordSource,
    LoadController, LoadState, PartnerRecord, QueryConfig, SortKey, ViewMode, SEARCH_DEBOUNCE_MS,
};

/// Search text waiting out the debounce window, and the timer that will commit it.
type PendingSearch = Debouncer<String, Timeout>;

fn drop_pending(pending: &mut PendingSearch) {
    if pending.is_pending() {
        debug!("Dropping uncommitted search");
    }
    pending.cancel();
}

#[function_component(PartnerDirectory)]
pub fn partner_directory() -> Html {
    let state = use_reducer(DirectoryState::default);
    let pending = use_mut_ref(PendingSearch::default);
    let search_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |url: &&'static str| {
                let controller = LoadController::new(HttpRecordSource::new(*url));
                let token = controller.token();
                spawn_local(controller.run(move |action| dispatcher.dispatch(action)));
                move || token.cancel()
            },
            config::records_url(),
        );
    }

    {
        let pending = pending.clone();
        use_effect_with_deps(move |_| move || drop_pending(&mut pending.borrow_mut()), ());
    }

    let on_search = {
        let pending = pending.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let arm = {
                let pending = pending.clone();
                let dispatcher = dispatcher.clone();
                move |ticket| {
                    Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                        let committed = pending.borrow_mut().fire(ticket);
                        if let Some(search) = committed {
                            dispatcher.dispatch(DirectoryAction::CommitSearch(search));
                        }
                    })
                }
            };
            pending.borrow_mut().schedule(input.value(), arm);
        })
    };

    let on_location = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(DirectoryAction::SetFilter(FilterUpdate::Location(select.value())));
        })
    };

    let on_industry = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(DirectoryAction::SetFilter(FilterUpdate::Industry(select.value())));
        })
    };

    let on_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SortKey>() {
                Ok(key) => dispatcher.dispatch(DirectoryAction::SetFilter(FilterUpdate::SortBy(key))),
                Err(err) => warn!("Ignoring sort selection: {}", err),
            }
        })
    };

    let on_toggle_view = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DirectoryAction::ToggleView))
    };

    let on_reset = {
        let pending = pending.clone();
        let dispatcher = state.dispatcher();
        let search_ref = search_ref.clone();
        Callback::from(move |_: MouseEvent| {
            drop_pending(&mut pending.borrow_mut());
            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            dispatcher.dispatch(DirectoryAction::Reset);
        })
    };

    let facets = use_memo(
        |records: &Rc<Vec<PartnerRecord>>| Facets::from_records(records),
        state.records.clone(),
    );
    let results = use_memo(
        |(records, config): &(Rc<Vec<PartnerRecord>>, QueryConfig)| {
            query(records, config).into_iter().cloned().collect::<Vec<_>>()
        },
        (state.records.clone(), state.config.clone()),
    );

    let config = &state.config;
    let body = if let Some(error) = state.error() {
        html! { <div class="directory-message error">{format!("Failed to load partners. {}", error)}</div> }
    } else if state.is_loading() || state.load == LoadState::Idle {
        html! { <div class="directory-loading"><div class="spinner"></div></div> }
    } else if results.is_empty() {
        html! { <div class="directory-message">{"No partners match your filters."}</div> }
    } else {
        match config.view {
            ViewMode::Cards => html! {
                <div class={classes!("partner-grid", config.view.as_str())}>
                    { for results.iter().map(partner_card) }
                </div>
            },
            ViewMode::Table => html! {
                <>
                    <div class="partner-table-wrap">
                        <table class="partner-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Industry"}</th>
                                    <th>{"Location"}</th>
                                    <th>{"Members"}</th>
                                    <th>{"Rating"}</th>
                                    <th>{"Contact"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for results.iter().map(partner_row) }
                            </tbody>
                        </table>
                    </div>
                    <div class="partner-list">
                        { for results.iter().map(partner_compact) }
                    </div>
                </>
            },
        }
    };

    html! {
        <section class="partner-directory">
            <div class="directory-header">
                <div class="directory-intro">
                    <h3>{"Partner Gyms & "}<span class="accent">{"Studios"}</span></h3>
                    <p>{"Browse and filter nearby gyms, studios and fitness partners. Use the controls to search, filter and switch views."}</p>
                </div>
                <div class="directory-controls">
                    <input
                        type="search"
                        ref={search_ref}
                        class="directory-search"
                        aria-label="Search gyms"
                        placeholder="Search name or industry..."
                        oninput={on_search}
                    />
                    <select onchange={on_location} aria-label="Filter by location">
                        { for facets.locations.iter().map(|location| html! {
                            <option value={location.clone()} selected={*location == config.location}>{location}</option>
                        }) }
                    </select>
                    <select onchange={on_industry} aria-label="Filter by industry">
                        { for facets.industries.iter().map(|industry| html! {
                            <option value={industry.clone()} selected={*industry == config.industry}>{industry}</option>
                        }) }
                    </select>
                    <select onchange={on_sort} aria-label="Sort partners">
                        { for SortKey::OPTIONS.into_iter().map(|key| html! {
                            <option value={key.as_str()} selected={key == config.sort_by}>{key.label()}</option>
                        }) }
                    </select>
                    <button
                        class="directory-button"
                        title="Toggle view"
                        aria-pressed={(config.view == ViewMode::Table).to_string()}
                        onclick={on_toggle_view}
                    >
                        {match config.view { ViewMode::Cards => "Table", ViewMode::Table => "Cards" }}
                    </button>
                    <button class="directory-button reset" aria-label="Reset filters" onclick={on_reset}>
                        {"Reset"}
                    </button>
                </div>
            </div>
            {body}
            <style>
                {r#"
                    .partner-directory {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        color: #fff;
                    }
                    .directory-header {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .directory-intro h3 {
                        font-size: 2.5rem;
                        font-weight: 800;
                        margin: 0;
                    }
                    .directory-intro p {
                        color: #9ca3af;
                        max-width: 36rem;
                    }
                    .directory-controls {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .directory-controls input,
                    .directory-controls select,
                    .directory-button {
                        background: #111827;
                        border: 1px solid #374151;
                        border-radius: 9999px;
                        color: #fff;
                        padding: 0.5rem 0.9rem;
                        font-size: 0.9rem;
                    }
                    .directory-search {
                        min-width: 16rem;
                    }
                    .directory-button {
                        cursor: pointer;
                        white-space: nowrap;
                    }
                    .directory-button.reset {
                        border-color: #dc2626;
                        color: #f87171;
                    }
                    .directory-loading {
                        display: flex;
                        justify-content: center;
                        padding: 5rem 0;
                    }
                    .spinner {
                        width: 40px;
                        height: 40px;
                        border: 4px solid #1f2937;
                        border-top-color: #dc2626;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .directory-message {
                        text-align: center;
                        padding: 2rem 0;
                        color: #9ca3af;
                    }
                    .directory-message.error {
                        color: #f87171;
                    }
                    .partner-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .partner-card,
                    .partner-compact {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #111827, #1f2937, #111827);
                        border: 1px solid #374151;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        animation: card-in 0.45s ease;
                    }
                    @keyframes card-in {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .partner-top {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .partner-top h4 {
                        margin: 0;
                        font-size: 1.2rem;
                    }
                    .partner-meta,
                    .partner-members {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .partner-rating {
                        color: #ef4444;
                        font-weight: 700;
                        text-align: right;
                    }
                    .partner-contact {
                        display: flex;
                        justify-content: space-between;
                        gap: 0.75rem;
                        margin-top: 0.75rem;
                        color: #d1d5db;
                        font-size: 0.85rem;
                        overflow: hidden;
                    }
                    .partner-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .partner-actions a {
                        flex: 1;
                        text-align: center;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid #374151;
                        color: #fff;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .partner-actions a.visit {
                        background: #dc2626;
                        border-color: #dc2626;
                    }
                    .partner-table-wrap {
                        overflow-x: auto;
                        border: 1px solid #374151;
                        border-radius: 0.5rem;
                    }
                    .partner-table {
                        width: 100%;
                        border-collapse: collapse;
                    }
                    .partner-table th {
                        background: #111827;
                        color: #d1d5db;
                        text-align: left;
                        padding: 0.75rem 1.5rem;
                        font-size: 0.9rem;
                    }
                    .partner-table td {
                        padding: 1rem 1.5rem;
                        border-top: 1px solid #1f2937;
                        color: #d1d5db;
                        font-size: 0.9rem;
                    }
                    .partner-table tr:hover td {
                        background: #111827;
                    }
                    .partner-table td.rating {
                        color: #ef4444;
                        font-weight: 600;
                    }
                    .partner-list {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .directory-intro h3 {
                            font-size: 1.75rem;
                        }
                        .directory-search {
                            min-width: 100%;
                        }
                        .partner-table-wrap {
                            display: none;
                        }
                        .partner-list {
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn partner_actions(partner: &PartnerRecord) -> Html {
    html! {
        <div class="partner-actions">
            <a class="visit" href={partner.website.clone()} target="_blank" rel="noopener noreferrer">{"Visit"}</a>
            <a href={partner.mailto()}>{"Contact"}</a>
        </div>
    }
}

fn partner_card(partner: &PartnerRecord) -> Html {
    let title_id = format!("gym-{}-title", partner.id);
    html! {
        <div class="partner-card" key={partner.id.to_string()} role="article" aria-labelledby={title_id.clone()}>
            <div>
                <div class="partner-top">
                    <div>
                        <h4 id={title_id}>{&partner.name}</h4>
                        <p class="partner-meta">{format!("{} • {}", partner.industry, partner.location)}</p>
                    </div>
                    <div class="partner-rating">
                        {partner.rating_label()}
                        <div class="partner-members">{format!("{} members", partner.members_label())}</div>
                    </div>
                </div>
                <div class="partner-contact">
                    <span>{&partner.email}</span>
                    <span>{&partner.phone}</span>
                </div>
            </div>
            {partner_actions(partner)}
        </div>
    }
}

fn partner_row(partner: &PartnerRecord) -> Html {
    html! {
        <tr key={partner.id.to_string()}>
            <td>{&partner.name}</td>
            <td>{&partner.industry}</td>
            <td>{&partner.location}</td>
            <td>{partner.members_label()}</td>
            <td class="rating">{partner.rating_label()}</td>
            <td>{format!("{} • {}", partner.email, partner.phone)}</td>
        </tr>
    }
}

fn partner_compact(partner: &PartnerRecord) -> Html {
    html! {
        <div class="partner-compact" key={partner.id.to_string()}>
            <div class="partner-top">
                <div>
                    <h4>{&partner.name}</h4>
                    <p class="partner-meta">{format!("{} • {}", partner.industry, partner.location)}</p>
                </div>
                <div class="partner-rating">
                    {partner.rating_label()}
                    <div class="partner-members">{partner.members_label()}</div>
                </div>
            </div>
            <div class="partner-contact">
                <span>{&partner.email}</span>
                <span>{&partner.phone}</span>
            </div>
            {partner_actions(partner)}
        </div>
    }
}
