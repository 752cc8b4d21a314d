#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LangCategory {
    Code,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LangMenuState {
    Closed,
    Open { expanded: Option<LangCategory> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CarouselSide {
    Left,
    Right,
}

// Wrapped lines for the active prose page, keyed by everything that can
// invalidate them.
pub(super) struct ReflowCache {
    pub(super) page: PageKind,
    pub(super) language: Language,
    pub(super) usable_width: f32,
    pub(super) lines: Vec<String>,
}

pub(super) enum ImageSlot {
    Loading,
    Ready(Arc<RenderImage>),
    Failed,
}
