//! Color palette for the NextStep TUI

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card/panel backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Selected card border

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent (titles, tags)

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success/ready
pub const STATUS_RED: Color = Color::Red; // Error panels
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading notices
