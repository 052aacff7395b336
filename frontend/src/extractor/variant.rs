/// Page layouts served from one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewVariant {
    /// Single column, every section stacked.
    Basic,
    /// Sections behind a tab bar.
    Tabbed,
    /// Grid with technical, status and location panels.
    Dashboard,
}

/// How a failed on-demand action (transcript, formats) is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    Alert,
    Inline,
}

impl ViewVariant {
    pub fn title(&self) -> &'static str {
        match self {
            ViewVariant::Basic => "YouTube Metadata Extractor",
            ViewVariant::Tabbed => "YouTube Metadata Extractor · Tabs",
            ViewVariant::Dashboard => "YouTube Metadata Dashboard",
        }
    }

    pub fn transcript_errors(&self) -> ErrorSurface {
        match self {
            ViewVariant::Basic => ErrorSurface::Alert,
            ViewVariant::Tabbed | ViewVariant::Dashboard => ErrorSurface::Inline,
        }
    }

    pub fn shows_details_panels(&self) -> bool {
        matches!(self, ViewVariant::Dashboard)
    }

    pub fn uses_tabs(&self) -> bool {
        matches!(self, ViewVariant::Tabbed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Transcript,
    Downloads,
    RawJson,
}

impl Tab {
    pub fn all_variants() -> [Tab; 4] {
        [Tab::Overview, Tab::Transcript, Tab::Downloads, Tab::RawJson]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Transcript => "Transcript",
            Tab::Downloads => "Downloads",
            Tab::RawJson => "Raw JSON",
        }
    }
}
