//! Visual theme: palette constants and shared style helpers

pub mod palette;
pub mod styles;
