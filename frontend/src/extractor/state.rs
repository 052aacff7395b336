use crate::extractor::api::ApiError;
use crate::extractor::url_parser::InputError;
use crate::extractor::variant::Tab;
use crate::models::{Format, HistoryEntry, Transcript, VideoRecord};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TranscriptState {
    #[default]
    NotRequested,
    Loading,
    Loaded(Transcript),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatsState {
    #[default]
    NotRequested,
    Loading,
    Loaded(Vec<Format>),
    Cooldown,
    Failed(String),
}

/// Everything the extractor page renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractorState {
    pub input: String,
    pub phase: Phase,
    pub video: Option<Rc<VideoRecord>>,
    pub transcript: TranscriptState,
    pub formats: FormatsState,
    pub description_expanded: bool,
    pub active_tab: Tab,
    pub json_modal_open: bool,
    pub history: Vec<HistoryEntry>,
    pub consent_given: bool,
    search_id: u64,
}

pub enum ExtractorAction {
    InputChanged(String),
    SearchStarted { search_id: u64 },
    InputRejected { search_id: u64, error: InputError },
    BasicInfoLoaded { search_id: u64, record: VideoRecord },
    BasicInfoFailed { search_id: u64, error: ApiError },
    TranscriptRequested,
    TranscriptLoaded { video_id: String, transcript: Transcript },
    TranscriptFailed { video_id: String, error: ApiError },
    FormatsRequested,
    FormatsLoaded { video_id: String, formats: Vec<Format> },
    FormatsFailed { video_id: String, error: ApiError },
    ToggleDescription,
    SelectTab(Tab),
    ToggleJsonModal,
    HistoryChanged(Vec<HistoryEntry>),
    ConsentAccepted,
}

impl ExtractorState {
    pub fn new(history: Vec<HistoryEntry>, consent_given: bool) -> Self {
        Self {
            history,
            consent_given,
            ..Default::default()
        }
    }

    pub fn loader_visible(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn results_visible(&self) -> bool {
        self.phase == Phase::Ready && self.video.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn current_video_id(&self) -> Option<&str> {
        self.video.as_ref().map(|v| v.id.as_str())
    }

    fn is_current(&self, video_id: &str) -> bool {
        self.current_video_id() == Some(video_id)
    }

    // New search: hide everything tied to the previous video.
    fn reset_for_search(&mut self, search_id: u64) {
        self.search_id = search_id;
        self.phase = Phase::Loading;
        self.video = None;
        self.transcript = TranscriptState::NotRequested;
        self.formats = FormatsState::NotRequested;
        self.description_expanded = false;
        self.active_tab = Tab::Overview;
        self.json_modal_open = false;
    }
}

impl Reducible for ExtractorState {
    type Action = ExtractorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ExtractorAction::InputChanged(input) => next.input = input,
            ExtractorAction::SearchStarted { search_id } => next.reset_for_search(search_id),
            ExtractorAction::InputRejected { search_id, error } => {
                next.reset_for_search(search_id);
                next.phase = Phase::Failed(error.to_string());
            }
            ExtractorAction::BasicInfoLoaded { search_id, record } => {
                if search_id != self.search_id {
                    log::debug!("Dropping basic info for superseded search {search_id}");
                    return self;
                }
                next.video = Some(Rc::new(record));
                next.phase = Phase::Ready;
            }
            ExtractorAction::BasicInfoFailed { search_id, error } => {
                if search_id != self.search_id {
                    return self;
                }
                next.phase = Phase::Failed(error.to_string());
            }
            ExtractorAction::TranscriptRequested => {
                if self.video.is_none() || self.transcript == TranscriptState::Loading {
                    return self;
                }
                next.transcript = TranscriptState::Loading;
            }
            ExtractorAction::TranscriptLoaded {
                video_id,
                transcript,
            } => {
                if !self.is_current(&video_id) {
                    return self;
                }
                next.transcript = TranscriptState::Loaded(transcript);
            }
            ExtractorAction::TranscriptFailed { video_id, error } => {
                if !self.is_current(&video_id) {
                    return self;
                }
                next.transcript = TranscriptState::Failed(error.to_string());
            }
            ExtractorAction::FormatsRequested => {
                if self.video.is_none() || self.formats == FormatsState::Loading {
                    return self;
                }
                next.formats = FormatsState::Loading;
            }
            ExtractorAction::FormatsLoaded { video_id, formats } => {
                if !self.is_current(&video_id) {
                    return self;
                }
                next.formats = FormatsState::Loaded(formats);
            }
            ExtractorAction::FormatsFailed { video_id, error } => {
                if !self.is_current(&video_id) {
                    return self;
                }
                next.formats = if error.is_cooldown() {
                    FormatsState::Cooldown
                } else {
                    FormatsState::Failed(error.to_string())
                };
            }
            ExtractorAction::ToggleDescription => {
                next.description_expanded = !self.description_expanded
            }
            ExtractorAction::SelectTab(tab) => next.active_tab = tab,
            ExtractorAction::ToggleJsonModal => next.json_modal_open = !self.json_modal_open,
            ExtractorAction::HistoryChanged(history) => next.history = history,
            ExtractorAction::ConsentAccepted => next.consent_given = true,
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::api::decode_basic_info;
    use crate::extractor::api::fixtures::WATCH_ITEM;
    use crate::extractor::url_parser::extract_video_id;
    use crate::extractor::view::VideoSummary;

    fn apply(state: Rc<ExtractorState>, actions: Vec<ExtractorAction>) -> Rc<ExtractorState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn loaded() -> Rc<ExtractorState> {
        let record = decode_basic_info(200, WATCH_ITEM).unwrap();
        apply(
            Rc::new(ExtractorState::default()),
            vec![
                ExtractorAction::SearchStarted { search_id: 1 },
                ExtractorAction::BasicInfoLoaded {
                    search_id: 1,
                    record,
                },
            ],
        )
    }

    #[test]
    fn short_link_search_shows_results_and_hides_loader() {
        let input = "https://youtu.be/dQw4w9WgXcQ";
        let state = Rc::new(ExtractorState::default())
            .reduce(ExtractorAction::InputChanged(input.to_string()));

        let video_id = extract_video_id(&state.input).unwrap();
        assert_eq!(video_id, "dQw4w9WgXcQ");

        let state = state.reduce(ExtractorAction::SearchStarted { search_id: 1 });
        assert!(state.loader_visible());
        assert!(!state.results_visible());

        let record = decode_basic_info(200, WATCH_ITEM).unwrap();
        let state = state.reduce(ExtractorAction::BasicInfoLoaded {
            search_id: 1,
            record,
        });
        assert!(state.results_visible());
        assert!(!state.loader_visible());
        assert_eq!(state.error_message(), None);

        let summary = VideoSummary::from_record(state.video.as_ref().unwrap());
        assert_eq!(summary.title, "Never Gonna Give You Up");
        assert_eq!(summary.channel, "Rick Astley");
        assert_eq!(summary.views, "1.5B");
        assert_eq!(summary.likes, "17M");
        assert_eq!(summary.comments, "2.3M");
    }

    #[test]
    fn invalid_input_reports_error_without_results() {
        let state = loaded().reduce(ExtractorAction::InputRejected {
            search_id: 2,
            error: InputError::InvalidUrl,
        });
        assert_eq!(state.error_message(), Some("Invalid YouTube URL format"));
        assert!(!state.results_visible());
        assert!(!state.loader_visible());
    }

    #[test]
    fn backend_failure_hides_loader_and_shows_message() {
        let state = apply(
            Rc::new(ExtractorState::default()),
            vec![
                ExtractorAction::SearchStarted { search_id: 1 },
                ExtractorAction::BasicInfoFailed {
                    search_id: 1,
                    error: ApiError::NotFound,
                },
            ],
        );
        assert!(!state.loader_visible());
        assert_eq!(state.error_message(), Some("Video not found or private"));
    }

    #[test]
    fn superseded_search_response_is_ignored() {
        let record = decode_basic_info(200, WATCH_ITEM).unwrap();
        let state = apply(
            Rc::new(ExtractorState::default()),
            vec![
                ExtractorAction::SearchStarted { search_id: 1 },
                ExtractorAction::SearchStarted { search_id: 2 },
                ExtractorAction::BasicInfoLoaded {
                    search_id: 1,
                    record,
                },
            ],
        );
        assert!(state.loader_visible());
        assert!(state.video.is_none());
    }

    #[test]
    fn new_search_resets_lazy_sections() {
        let state = apply(
            loaded(),
            vec![
                ExtractorAction::TranscriptRequested,
                ExtractorAction::FormatsRequested,
                ExtractorAction::ToggleDescription,
                ExtractorAction::SelectTab(Tab::Downloads),
                ExtractorAction::SearchStarted { search_id: 2 },
            ],
        );
        assert_eq!(state.transcript, TranscriptState::NotRequested);
        assert_eq!(state.formats, FormatsState::NotRequested);
        assert!(!state.description_expanded);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn transcript_for_another_video_is_dropped() {
        let state = apply(
            loaded(),
            vec![
                ExtractorAction::TranscriptRequested,
                ExtractorAction::TranscriptLoaded {
                    video_id: "zzzzzzzzzzz".to_string(),
                    transcript: Transcript {
                        full_text: "stale".to_string(),
                        timeline: vec![],
                    },
                },
            ],
        );
        assert_eq!(state.transcript, TranscriptState::Loading);
    }

    #[test]
    fn transcript_failure_allows_retry() {
        let state = apply(
            loaded(),
            vec![
                ExtractorAction::TranscriptRequested,
                ExtractorAction::TranscriptFailed {
                    video_id: "dQw4w9WgXcQ".to_string(),
                    error: ApiError::Backend("Transcript disabled or not available".into()),
                },
            ],
        );
        assert_eq!(
            state.transcript,
            TranscriptState::Failed("Transcript disabled or not available".to_string())
        );
        let state = state.reduce(ExtractorAction::TranscriptRequested);
        assert_eq!(state.transcript, TranscriptState::Loading);
    }

    #[test]
    fn cooldown_error_becomes_cooldown_banner() {
        let state = apply(
            loaded(),
            vec![
                ExtractorAction::FormatsRequested,
                ExtractorAction::FormatsFailed {
                    video_id: "dQw4w9WgXcQ".to_string(),
                    error: ApiError::from_backend_message("YouTube IP Ban".to_string()),
                },
            ],
        );
        assert_eq!(state.formats, FormatsState::Cooldown);
        assert!(state.results_visible());
    }

    #[test]
    fn lazy_requests_need_a_video() {
        let state = Rc::new(ExtractorState::default())
            .reduce(ExtractorAction::TranscriptRequested)
            .reduce(ExtractorAction::FormatsRequested);
        assert_eq!(state.transcript, TranscriptState::NotRequested);
        assert_eq!(state.formats, FormatsState::NotRequested);
    }

    #[test]
    fn toggles() {
        let state = loaded()
            .reduce(ExtractorAction::ToggleDescription)
            .reduce(ExtractorAction::ToggleJsonModal)
            .reduce(ExtractorAction::ConsentAccepted);
        assert!(state.description_expanded);
        assert!(state.json_modal_open);
        assert!(state.consent_given);

        let state = state
            .reduce(ExtractorAction::ToggleDescription)
            .reduce(ExtractorAction::ToggleJsonModal);
        assert!(!state.description_expanded);
        assert!(!state.json_modal_open);
    }
}
