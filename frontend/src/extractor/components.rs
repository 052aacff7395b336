use crate::browser::copy_with_confirmation;
use crate::extractor::state::{FormatsState, TranscriptState};
use crate::extractor::url_parser::watch_url;
use crate::extractor::variant::{ErrorSurface, Tab};
use crate::extractor::view::{
    formats_button_label, json_download_href, json_download_name, location_text, pretty_json,
    status_rows, tags_clipboard_text, tags_display, technical_rows, transcript_button_label,
    DetailRow, FormatRow, TagsDisplay, VideoSummary, NO_FORMATS, NO_TRANSCRIPT,
};
use crate::models::{HistoryEntry, VideoRecord};
use crate::utils::format_timestamp;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: String,
    pub loading: bool,
    pub on_input: Callback<String>,
    pub on_search: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    // Enter in the input submits the form as well
    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                id="videoUrl"
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                placeholder="Paste a YouTube URL (watch, youtu.be, shorts, embed)..."
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-red-600 text-white px-6 p-3 rounded-r-lg hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Extracting..." } else { "Extract" } }
            </button>
        </form>
    }
}

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div id="loader" class="flex justify-center py-10">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-red-600"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if let Some(msg) = &props.message {
        html! {
            <div id="error-box" class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                <span id="error-msg">{ msg }</span>
            </div>
        }
    } else {
        html! {}
    }
}

#[function_component(CooldownBanner)]
pub fn cooldown_banner() -> Html {
    html! {
        <div class="bg-yellow-50 border-l-4 border-yellow-400 p-4">
            <p class="text-sm text-yellow-700">
                {"Server is currently cooling down from high traffic."}
                <br />
                <span class="font-bold">{"Please try again in a few hours."}</span>
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub visible: bool,
    pub on_accept: Callback<MouseEvent>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let position = if props.visible {
        "translate-y-0"
    } else {
        "translate-y-full"
    };

    html! {
        <div
            id="cookie-banner"
            class={classes!("fixed", "bottom-0", "inset-x-0", "bg-gray-900", "text-white", "p-4",
                "transition-transform", "duration-500", "delay-1000", position)}
        >
            <div class="max-w-4xl mx-auto flex justify-between items-center gap-4">
                <p class="text-sm">
                    {"We use local storage to remember your recently viewed videos."}
                </p>
                <button
                    onclick={props.on_accept.clone()}
                    class="bg-red-600 px-4 py-2 rounded text-sm font-semibold hover:bg-red-700"
                >
                    {"Accept"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryStripProps {
    pub history: Vec<HistoryEntry>,
    pub on_select: Callback<String>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(HistoryStrip)]
pub fn history_strip(props: &HistoryStripProps) -> Html {
    if props.history.is_empty() {
        return html! {};
    }

    html! {
        <div id="history-section" class="mb-6">
            <div class="flex justify-between items-center mb-2">
                <h2 class="text-sm font-semibold text-gray-600 uppercase">{"Recently viewed"}</h2>
                <button onclick={props.on_clear.clone()} class="text-xs text-gray-500 hover:underline">
                    {"Clear"}
                </button>
            </div>
            <div id="history-list" class="flex gap-3 overflow-x-auto pb-2">
                { for props.history.iter().map(|h| {
                    let on_select = props.on_select.clone();
                    let id = h.id.clone();
                    html! {
                        <div
                            key={h.id.clone()}
                            onclick={move |_| on_select.emit(id.clone())}
                            class="flex-shrink-0 w-48 bg-white p-2 rounded-lg border border-gray-200 cursor-pointer hover:shadow-md transition"
                        >
                            <img src={h.thumb.clone()} class="w-full h-24 object-cover rounded mb-2" />
                            <p class="text-xs font-semibold truncate text-gray-700">{ &h.title }</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub summary: Rc<VideoSummary>,
}

#[function_component(VideoHeader)]
pub fn video_header(props: &SummaryProps) -> Html {
    let s = &props.summary;
    html! {
        <div class="flex flex-col md:flex-row gap-4 mb-6">
            {
                if let Some(thumb) = &s.thumbnail {
                    html! { <img id="thumb" src={thumb.clone()} class="w-full md:w-80 rounded-lg shadow" /> }
                } else {
                    html! {}
                }
            }
            <div>
                <h2 id="title" class="text-2xl font-bold text-gray-800 mb-2">
                    <a href={watch_url(&s.id)} target="_blank" class="hover:underline">
                        { &s.title }
                    </a>
                </h2>
                <p class="text-gray-600">
                    {"📺 "}
                    {
                        if let Some(url) = &s.channel_url {
                            html! { <a id="channel" href={url.clone()} target="_blank" class="text-blue-600 hover:underline">{ &s.channel }</a> }
                        } else {
                            html! { <span id="channel">{ &s.channel }</span> }
                        }
                    }
                </p>
                <p class="text-gray-500 text-sm">{"📅 "}<span id="video-date">{ &s.published }</span></p>
            </div>
        </div>
    }
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &SummaryProps) -> Html {
    let s = &props.summary;
    html! {
        <div class="grid grid-cols-3 gap-4 mb-6">
            <div class="bg-blue-100 p-4 rounded-lg text-center">
                <h3 class="text-sm font-semibold text-blue-800">{"Views"}</h3>
                <p id="views" class="text-2xl font-bold text-blue-600">{ &s.views }</p>
            </div>
            <div class="bg-green-100 p-4 rounded-lg text-center">
                <h3 class="text-sm font-semibold text-green-800">{"Likes"}</h3>
                <p id="likes" class="text-2xl font-bold text-green-600">{ &s.likes }</p>
            </div>
            <div class="bg-purple-100 p-4 rounded-lg text-center">
                <h3 class="text-sm font-semibold text-purple-800">{"Comments"}</h3>
                <p id="comments" class="text-2xl font-bold text-purple-600">{ &s.comments }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DescriptionPanelProps {
    pub summary: Rc<VideoSummary>,
    pub expanded: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(DescriptionPanel)]
pub fn description_panel(props: &DescriptionPanelProps) -> Html {
    let s = &props.summary;
    let collapsed = s.description_toggle && !props.expanded;
    let text_classes = if collapsed {
        classes!("h-32", "overflow-hidden")
    } else {
        classes!("h-auto")
    };

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Description"}</h3>
            <div class="relative">
                <p id="desc-text" class={classes!("whitespace-pre-line", "text-sm", "text-gray-700", text_classes)}>
                    { &s.description }
                </p>
                {
                    if collapsed {
                        html! { <div id="desc-fade" class="absolute bottom-0 inset-x-0 h-12 bg-gradient-to-t from-white"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if s.description_toggle {
                    html! {
                        <button id="toggle-desc-btn" onclick={props.on_toggle.clone()} class="text-sm text-blue-600 hover:underline mt-2">
                            { if props.expanded { "Show Less" } else { "Read More" } }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordProps {
    pub record: Rc<VideoRecord>,
}

#[function_component(TagList)]
pub fn tag_list(props: &RecordProps) -> Html {
    let on_copy = {
        let text = tags_clipboard_text(&props.record);
        Callback::from(move |_: MouseEvent| {
            if let Some(text) = text.clone() {
                copy_with_confirmation(text, "Tags copied to clipboard!");
            }
        })
    };

    let chips = match tags_display(&props.record) {
        TagsDisplay::Chips(tags) => html! {
            <>
                { for tags.into_iter().map(|tag| html! {
                    <span class="bg-gray-100 text-gray-700 text-xs px-2 py-1 rounded hover:bg-gray-200 transition cursor-default">
                        { tag }
                    </span>
                })}
            </>
        },
        TagsDisplay::Placeholder(text) => html! {
            <span class="text-gray-400 text-sm italic">{ text }</span>
        },
    };

    html! {
        <div class="mb-6">
            <div class="flex justify-between items-center mb-2">
                <h3 class="text-lg font-semibold text-gray-800">{"Tags"}</h3>
                <button onclick={on_copy} class="text-xs text-blue-600 hover:underline">{"Copy tags"}</button>
            </div>
            <div id="tags" class="flex flex-wrap gap-2">{ chips }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub state: TranscriptState,
    pub surface: ErrorSurface,
    pub on_load: Callback<MouseEvent>,
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let loading = props.state == TranscriptState::Loading;
    let button_classes = match props.state {
        TranscriptState::Loaded(_) => classes!("bg-green-600"),
        _ => classes!("bg-gray-900", "hover:bg-gray-700"),
    };

    let body = match &props.state {
        TranscriptState::Loaded(transcript) if transcript.full_text.trim().is_empty() => html! {
            <p class="text-gray-400 text-sm italic">{ NO_TRANSCRIPT }</p>
        },
        TranscriptState::Loaded(transcript) => {
            let text = transcript.full_text.clone();
            let on_copy = Callback::from(move |_: MouseEvent| {
                copy_with_confirmation(text.clone(), "Transcript copied!");
            });
            html! {
                <div id="trans-container" class="mt-3">
                    <div class="flex justify-end mb-1">
                        <button onclick={on_copy} class="text-xs text-blue-600 hover:underline">{"Copy transcript"}</button>
                    </div>
                    <p id="trans-text" class="text-sm text-gray-700 max-h-64 overflow-y-auto bg-gray-50 p-3 rounded">
                        { &transcript.full_text }
                    </p>
                    {
                        if transcript.timeline.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <details class="mt-2">
                                    <summary class="text-sm text-gray-600 cursor-pointer">{"Timeline"}</summary>
                                    <div class="max-h-64 overflow-y-auto divide-y divide-gray-200">
                                        { for transcript.timeline.iter().map(|segment| html! {
                                            <p class="text-sm py-1">
                                                <span class="font-mono text-gray-500 mr-2">{ format_timestamp(segment.start) }</span>
                                                { &segment.text }
                                            </p>
                                        })}
                                    </div>
                                </details>
                            }
                        }
                    }
                </div>
            }
        }
        TranscriptState::Failed(msg) if props.surface == ErrorSurface::Inline => html! {
            <p class="text-red-500 text-sm mt-2">{ format!("Transcript Error: {msg}") }</p>
        },
        _ => html! {},
    };

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Transcript"}</h3>
            <button
                id="trans-btn"
                onclick={props.on_load.clone()}
                disabled={loading || matches!(props.state, TranscriptState::Loaded(_))}
                class={classes!("text-white", "px-4", "py-2", "rounded", "text-sm", "disabled:opacity-75", button_classes)}
            >
                { transcript_button_label(&props.state) }
            </button>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormatsPanelProps {
    pub state: FormatsState,
    pub on_analyze: Callback<MouseEvent>,
}

#[function_component(FormatsPanel)]
pub fn formats_panel(props: &FormatsPanelProps) -> Html {
    let button = match formats_button_label(&props.state) {
        Some(label) => html! {
            <button
                id="dl-btn"
                onclick={props.on_analyze.clone()}
                disabled={props.state == FormatsState::Loading}
                class="bg-gray-900 text-white px-4 py-2 rounded text-sm hover:bg-gray-700 disabled:opacity-75"
            >
                { label }
            </button>
        },
        None => html! {},
    };

    let list = match &props.state {
        FormatsState::Loaded(formats) if formats.is_empty() => html! {
            <p class="text-gray-400 text-sm italic text-center mt-2">{ NO_FORMATS }</p>
        },
        FormatsState::Loaded(formats) => html! {
            <>
            { for formats.iter().map(FormatRow::from).map(|row| html! {
                <a
                    href={row.url}
                    target="_blank"
                    class="flex justify-between items-center p-3 bg-gray-50 border border-gray-200 rounded hover:bg-gray-100 transition"
                >
                    <div>
                        <p class="text-sm font-bold text-gray-700">{ row.resolution }</p>
                        <p class="text-xs text-gray-400">{ row.ext }</p>
                    </div>
                    <span class="text-xs font-mono bg-gray-200 px-2 py-1 rounded text-gray-600">{ row.size }</span>
                </a>
            })}
            </>
        },
        FormatsState::Cooldown => html! { <CooldownBanner /> },
        FormatsState::Failed(msg) => html! {
            <p class="text-red-500 text-sm text-center mt-2">{ msg }</p>
        },
        FormatsState::NotRequested | FormatsState::Loading => html! {},
    };

    html! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Downloads"}</h3>
            { button }
            <div id="dl-links" class="space-y-2 mt-3">{ list }</div>
        </div>
    }
}

fn detail_table(title: &'static str, rows: Vec<DetailRow>) -> Html {
    html! {
        <div class="bg-gray-50 p-4 rounded-lg">
            <h3 class="text-sm font-semibold text-gray-600 uppercase mb-2">{ title }</h3>
            <dl class="text-sm">
                { for rows.into_iter().map(|row| html! {
                    <div class="flex justify-between py-1">
                        <dt class="text-gray-500">{ row.label }</dt>
                        <dd class="font-semibold text-gray-800">{ row.value }</dd>
                    </div>
                })}
            </dl>
        </div>
    }
}

#[function_component(DetailsPanels)]
pub fn details_panels(props: &RecordProps) -> Html {
    let location = match location_text(&props.record) {
        Some(coords) => html! {
            <div class="bg-gray-50 p-4 rounded-lg">
                <h3 class="text-sm font-semibold text-gray-600 uppercase mb-2">{"Location"}</h3>
                <p class="text-sm font-mono text-gray-800">{ coords }</p>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            { detail_table("Technical", technical_rows(&props.record)) }
            { detail_table("Status", status_rows(&props.record)) }
            { location }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct JsonPanelProps {
    pub record: Rc<VideoRecord>,
    pub modal_open: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(JsonPanel)]
pub fn json_panel(props: &JsonPanelProps) -> Html {
    let json = pretty_json(&props.record.raw);

    let modal = if props.modal_open {
        html! {
            <div id="json-modal" class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
                <div class="bg-white rounded-lg shadow-lg w-full max-w-3xl max-h-full flex flex-col">
                    <div class="flex justify-between items-center p-4 border-b">
                        <h3 class="text-lg font-semibold">{"Full JSON"}</h3>
                        <div class="flex gap-3">
                            <a
                                href={json_download_href(&props.record)}
                                download={json_download_name(&props.record)}
                                class="text-sm text-blue-600 hover:underline"
                            >
                                {"Download JSON"}
                            </a>
                            <button onclick={props.on_toggle.clone()} class="text-sm text-gray-500 hover:underline">{"Close"}</button>
                        </div>
                    </div>
                    <pre id="json-full" class="text-xs p-4 overflow-auto">{ json.clone() }</pre>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="mb-6">
            <div class="flex justify-between items-center mb-2">
                <h3 class="text-lg font-semibold text-gray-800">{"Raw JSON"}</h3>
                <button onclick={props.on_toggle.clone()} class="text-xs text-blue-600 hover:underline">{"View full"}</button>
            </div>
            <pre id="json-preview" class="text-xs bg-gray-900 text-green-300 p-3 rounded max-h-48 overflow-hidden">{ json }</pre>
            { modal }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="flex border-b border-gray-200 mb-4">
            { for Tab::all_variants().into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                let state_classes = if tab == props.active {
                    classes!("border-red-600", "text-red-600", "font-semibold")
                } else {
                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700")
                };
                html! {
                    <button
                        onclick={move |_| on_select.emit(tab)}
                        class={classes!("px-4", "py-2", "border-b-2", "text-sm", state_classes)}
                    >
                        { tab.display_name() }
                    </button>
                }
            })}
        </div>
    }
}
