//! Terminal-agnostic key representation
//!
//! Keeps crossterm types out of the update path so key handling stays
//! testable without a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Up,
    Down,
}
