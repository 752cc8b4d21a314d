pub(super) const TOP_BAR_HEIGHT: f32 = 40.0;
pub(super) const TAB_BAR_HEIGHT: f32 = 36.0;
pub(super) const STATUS_BAR_HEIGHT: f32 = 24.0;

pub(super) const SIDEBAR_DEFAULT_WIDTH: f32 = 240.0;
// Narrower than this hides the folder names.
pub(super) const SIDEBAR_MIN_WIDTH: f32 = 150.0;
pub(super) const SIDEBAR_MAX_FRACTION: f32 = 0.35;

// Mouse travel before an armed tab press becomes a drag.
pub(super) const TAB_DRAG_START_DISTANCE: f32 = 4.0;

pub(super) const EDITOR_FONT_FAMILY: &str = "Menlo";
pub(super) const EDITOR_FONT_SIZE: f32 = 16.0;
pub(super) const EDITOR_LINE_HEIGHT: f32 = 26.0;

// Estimated pane slack used before the exact pane width is known.
pub(super) const ESTIMATE_PADDING: f32 = 100.0;

pub(super) const CONTACT_EMAIL_URL: &str = "mailto:yvehu02@gmail.com";
pub(super) const IDOL_WIKI_URL: &str = "https://en.wikipedia.org/wiki/Hsin-Chien_Huang";

// Syntax palette for the editor pane. Chrome colors come from the theme;
// the token colors are fixed like any editor color scheme.
pub(super) const COLOR_SECTION_TITLE: u32 = 0xe6b450;
pub(super) const COLOR_PROPER_NOUN: u32 = 0x4ec9b0;
pub(super) const COLOR_TECHNICAL_TERM: u32 = 0x569cd6;
pub(super) const COLOR_CONNECTOR_WORD: u32 = 0xc586c0;
pub(super) const COLOR_COMMENT: u32 = 0x6a737d;
pub(super) const COLOR_EMPHASIS: u32 = 0xdcdcaa;
pub(super) const COLOR_GAME_NAME: u32 = 0xce9178;
pub(super) const COLOR_NUMBER: u32 = 0xb5cea8;
pub(super) const COLOR_LINK: u32 = 0x3794ff;
pub(super) const COLOR_AWARD: u32 = 0xe6b450;
