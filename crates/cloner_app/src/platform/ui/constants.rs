use std::time::Duration;

use ratatui::style::Color;

pub const APP_TITLE: &str = "Same.Dev";
pub const APP_BADGE: &str = "ALPHA";
pub const URL_PLACEHOLDER: &str = "Paste website URL to clone... (e.g., https://example.com)";
pub const EXPORT_LABEL: &str = "Export Project";

pub const HEADLINE: &str = "Instantly turn any website into";
pub const HEADLINE_ACCENT: &str = "clean React code.";
pub const SUBHEADLINE: &str = "Reconstruct the UI of any webpage with Gemini. Get semantic HTML, \
Tailwind classes, and modular project structures in seconds.";

/// Landing page cards: title and one-line description.
pub const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Smart Parsing",
        "Detects layout patterns and flex/grid systems automatically.",
    ),
    (
        "Pure Tailwind",
        "No bulky CSS. Everything is converted to clean utility classes.",
    ),
    (
        "Next.js Ready",
        "Output follows the latest App Router standards and practices.",
    ),
];

pub const PREVIEW_TITLE: &str = "Live Reconstruction";
pub const PREVIEW_LOADING: &str = "Capturing site layout...";
pub const PREVIEW_BLURB: &str = "The DOM structure and computed CSS of this page are \
reconstructed as the React components in the editor.";
pub const PREVIEW_TAGS: [&str; 4] = [
    "Semantic HTML",
    "Tailwind Utility",
    "Responsive Flexbox",
    "Color Palette",
];

pub const EDITOR_BADGE: &str = "Editable";
pub const COPY_LABEL: &str = "Copy Code";
pub const EDITOR_WAITING: &str = "Waiting for AI to generate components...";
pub const SIDEBAR_TITLE: &str = "Project Explorer";

pub const FAILURE_TITLE: &str = "Cloning Failed";
pub const FAILURE_HINT: &str = "Esc: Try Again";

pub const KEY_HINTS: &str = "Tab focus  Enter clone  ^X cancel  ^Y copy  ^S export  ^Q quit";

pub const SIDEBAR_WIDTH: u16 = 30;
pub const PREVIEW_PERCENT: u16 = 35;
pub const GUTTER_WIDTH: u16 = 5;

pub const POLL_INTERVAL: Duration = Duration::from_millis(80);
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub const ACCENT: Color = Color::Cyan;
pub const BORDER_DIM: Color = Color::DarkGray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const STATUS_OK: Color = Color::Green;
pub const STATUS_BUSY: Color = Color::Yellow;
pub const STATUS_ERROR: Color = Color::Red;
