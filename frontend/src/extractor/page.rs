use crate::browser::alert;
use crate::extractor::api::{fetch_basic_info, fetch_formats, fetch_transcript};
use crate::extractor::components::{
    CookieBanner, DescriptionPanel, DetailsPanels, ErrorBanner, FormatsPanel, HistoryStrip,
    JsonPanel, Loader, SearchBar, StatsPanel, TabBar, TagList, TranscriptPanel, VideoHeader,
};
use crate::extractor::state::{ExtractorAction, ExtractorState};
use crate::extractor::url_parser::{extract_video_id, short_url};
use crate::extractor::variant::{ErrorSurface, Tab, ViewVariant};
use crate::extractor::view::VideoSummary;
use crate::router::Route;
use crate::storage::history::HistoryStore;
use crate::storage::{consent, BrowserStorage};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExtractorPageProps {
    pub variant: ViewVariant,
}

#[function_component(ExtractorPage)]
pub fn extractor_page(props: &ExtractorPageProps) -> Html {
    let variant = props.variant;
    let state = use_reducer(|| {
        ExtractorState::new(
            HistoryStore::new(BrowserStorage).load(),
            consent::has_consented(&BrowserStorage),
        )
    });
    let search_counter = use_mut_ref(|| 0u64);

    let run_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |input: String| {
            let search_id = {
                let mut counter = search_counter.borrow_mut();
                *counter += 1;
                *counter
            };

            let video_id = match extract_video_id(&input) {
                Ok(id) => id,
                Err(error) => {
                    log::info!("Rejected input {input:?}: {error}");
                    dispatcher.dispatch(ExtractorAction::InputRejected { search_id, error });
                    return;
                }
            };

            dispatcher.dispatch(ExtractorAction::SearchStarted { search_id });
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_basic_info(&video_id).await {
                    Ok(record) => {
                        match HistoryStore::new(BrowserStorage).record(record.history_entry()) {
                            Ok(history) => {
                                dispatcher.dispatch(ExtractorAction::HistoryChanged(history))
                            }
                            Err(e) => log::warn!("Failed to save history: {e}"),
                        }
                        dispatcher.dispatch(ExtractorAction::BasicInfoLoaded { search_id, record });
                    }
                    Err(error) => {
                        log::error!("Basic info for {video_id} failed: {error}");
                        dispatcher.dispatch(ExtractorAction::BasicInfoFailed { search_id, error });
                    }
                }
            });
        })
    };

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| {
            dispatcher.dispatch(ExtractorAction::InputChanged(value));
        })
    };

    let on_search = {
        let run_search = run_search.clone();
        let input = state.input.clone();
        Callback::from(move |_: ()| run_search.emit(input.clone()))
    };

    let on_history_select = {
        let dispatcher = state.dispatcher();
        let run_search = run_search.clone();
        Callback::from(move |video_id: String| {
            let url = short_url(&video_id);
            dispatcher.dispatch(ExtractorAction::InputChanged(url.clone()));
            run_search.emit(url);
        })
    };

    let on_clear_history = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = HistoryStore::new(BrowserStorage).clear() {
                log::warn!("{e}");
            }
            dispatcher.dispatch(ExtractorAction::HistoryChanged(Vec::new()));
        })
    };

    let on_accept_cookies = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = consent::accept(&BrowserStorage) {
                log::warn!("{e}");
            }
            dispatcher.dispatch(ExtractorAction::ConsentAccepted);
        })
    };

    let on_load_transcript = {
        let dispatcher = state.dispatcher();
        let video_id = state.current_video_id().map(str::to_string);
        Callback::from(move |_: MouseEvent| {
            let Some(video_id) = video_id.clone() else {
                return;
            };
            dispatcher.dispatch(ExtractorAction::TranscriptRequested);
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_transcript(&video_id).await {
                    Ok(transcript) => dispatcher.dispatch(ExtractorAction::TranscriptLoaded {
                        video_id,
                        transcript,
                    }),
                    Err(error) => {
                        log::error!("Transcript for {video_id} failed: {error}");
                        if variant.transcript_errors() == ErrorSurface::Alert {
                            alert(&format!("Transcript Error: {error}"));
                        }
                        dispatcher.dispatch(ExtractorAction::TranscriptFailed { video_id, error });
                    }
                }
            });
        })
    };

    let on_analyze_formats = {
        let dispatcher = state.dispatcher();
        let video_id = state.current_video_id().map(str::to_string);
        Callback::from(move |_: MouseEvent| {
            let Some(video_id) = video_id.clone() else {
                return;
            };
            dispatcher.dispatch(ExtractorAction::FormatsRequested);
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_formats(&video_id).await {
                    Ok(formats) => {
                        log::debug!("{} formats for {video_id}", formats.len());
                        dispatcher.dispatch(ExtractorAction::FormatsLoaded { video_id, formats })
                    }
                    Err(error) => {
                        if error.is_cooldown() {
                            log::warn!("Backend is cooling down: {error:?}");
                        } else {
                            log::error!("Formats for {video_id} failed: {error}");
                        }
                        dispatcher.dispatch(ExtractorAction::FormatsFailed { video_id, error });
                    }
                }
            });
        })
    };

    let on_toggle_description = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ExtractorAction::ToggleDescription))
    };

    let on_toggle_json = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ExtractorAction::ToggleJsonModal))
    };

    let on_select_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab: Tab| dispatcher.dispatch(ExtractorAction::SelectTab(tab)))
    };

    let results = match (state.results_visible(), state.video.clone()) {
        (true, Some(video)) => {
            let summary = Rc::new(VideoSummary::from_record(&video));

            let header = html! {
                <>
                    <VideoHeader summary={summary.clone()} />
                    <StatsPanel summary={summary.clone()} />
                </>
            };
            let description = html! {
                <DescriptionPanel
                    summary={summary.clone()}
                    expanded={state.description_expanded}
                    on_toggle={on_toggle_description}
                />
            };
            let tags = html! { <TagList record={video.clone()} /> };
            let transcript = html! {
                <TranscriptPanel
                    state={state.transcript.clone()}
                    surface={variant.transcript_errors()}
                    on_load={on_load_transcript}
                />
            };
            let formats = html! {
                <FormatsPanel state={state.formats.clone()} on_analyze={on_analyze_formats} />
            };
            let json = html! {
                <JsonPanel
                    record={video.clone()}
                    modal_open={state.json_modal_open}
                    on_toggle={on_toggle_json}
                />
            };

            let body = if variant.uses_tabs() {
                let active = match state.active_tab {
                    Tab::Overview => html! { <>{ description }{ tags }</> },
                    Tab::Transcript => transcript,
                    Tab::Downloads => formats,
                    Tab::RawJson => json,
                };
                html! {
                    <>
                        <TabBar active={state.active_tab} on_select={on_select_tab} />
                        { active }
                    </>
                }
            } else if variant.shows_details_panels() {
                html! {
                    <>
                        <DetailsPanels record={video.clone()} />
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>{ description }{ tags }</div>
                            <div>{ transcript }{ formats }</div>
                        </div>
                        { json }
                    </>
                }
            } else {
                html! { <>{ description }{ tags }{ transcript }{ formats }{ json }</> }
            };

            html! {
                <div id="results">
                    { header }
                    { body }
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <div class="flex justify-between items-center mb-6">
                        <h1 class="text-3xl font-bold text-gray-800">{ variant.title() }</h1>
                        <LayoutLinks current={variant} />
                    </div>

                    <SearchBar
                        value={state.input.clone()}
                        loading={state.loader_visible()}
                        on_input={on_input}
                        on_search={on_search}
                    />

                    <ErrorBanner message={state.error_message().map(str::to_string)} />

                    <HistoryStrip
                        history={state.history.clone()}
                        on_select={on_history_select}
                        on_clear={on_clear_history}
                    />

                    {
                        if state.loader_visible() {
                            html! { <Loader /> }
                        } else {
                            html! {}
                        }
                    }

                    { results }
                </div>
            </div>
            <CookieBanner visible={!state.consent_given} on_accept={on_accept_cookies} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LayoutLinksProps {
    current: ViewVariant,
}

#[function_component(LayoutLinks)]
fn layout_links(props: &LayoutLinksProps) -> Html {
    let links = [
        (ViewVariant::Basic, Route::Basic, "Basic"),
        (ViewVariant::Tabbed, Route::Tabbed, "Tabs"),
        (ViewVariant::Dashboard, Route::Dashboard, "Dashboard"),
    ];

    html! {
        <nav class="flex gap-3 text-sm">
            { for links.into_iter().map(|(variant, route, label)| {
                if variant == props.current {
                    html! { <span class="font-semibold text-gray-800">{ label }</span> }
                } else {
                    html! {
                        <Link<Route> to={route} classes="text-blue-600 hover:underline">
                            { label }
                        </Link<Route>>
                    }
                }
            })}
        </nav>
    }
}
