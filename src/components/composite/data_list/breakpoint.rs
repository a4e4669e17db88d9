//! Breakpoints and Responsive Values
//!
//! Responsive values are mobile-first: the value in effect at a breakpoint is
//! the one declared at the greatest breakpoint not above it.

use serde::{Deserialize, Serialize};

/// Named responsive layout thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, smallest first
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Minimum viewport width (px) at which this breakpoint applies
    pub fn min_width(&self) -> f32 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Sm => 480.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    /// Breakpoint in effect for a viewport width
    pub fn from_width(width: f32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Base)
    }

    /// Short name as used in style declarations
    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// A value declared per breakpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Responsive<T> {
    slots: [Option<T>; 6],
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None, None, None],
        }
    }
}

impl<T> Responsive<T> {
    /// An empty declaration (nothing in effect anywhere)
    pub fn new() -> Self {
        Self::default()
    }

    /// The same value at every breakpoint
    pub fn all(value: T) -> Self {
        Self::new().at(Breakpoint::Base, value)
    }

    /// Declare the value from `bp` upwards
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        self.slots[bp.index()] = Some(value);
        self
    }

    /// Value in effect at `bp`, if any declaration applies
    pub fn resolve(&self, bp: Breakpoint) -> Option<&T> {
        self.slots[..=bp.index()].iter().rev().find_map(Option::as_ref)
    }

    /// Whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Responsive<bool> {
    /// Hidden below `bp`, visible from it upwards
    pub fn from_breakpoint(bp: Breakpoint) -> Self {
        if bp == Breakpoint::Base {
            Self::all(true)
        } else {
            Self::all(false).at(bp, true)
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::all(value)
    }
}
