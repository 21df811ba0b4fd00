//! Overlay State
//!
//! Open/closed state shared by the add, edit, and help overlays.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

impl Overlay {
    pub fn is_open(self) -> bool {
        self == Overlay::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Overlay::Closed => Overlay::Open,
            Overlay::Open => Overlay::Closed,
        }
    }
}
