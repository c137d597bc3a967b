use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SittingPosture {
    Correct,
    Incorrect,
}

/// Result of classifying a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PostureState {
    NoPersonDetected,
    LowVisibility,
    Standing,
    Sitting(SittingPosture),
    Transitioning,
    CalculationError { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

const OVERLAY_ALPHA: u8 = 180;

pub const COLOR_NEUTRAL: Rgba = Rgba::new(0, 0, 0, OVERLAY_ALPHA);
pub const COLOR_STANDING: Rgba = Rgba::new(0, 0, 255, OVERLAY_ALPHA);
pub const COLOR_CORRECT: Rgba = Rgba::new(0, 160, 0, OVERLAY_ALPHA);
pub const COLOR_INCORRECT: Rgba = Rgba::new(255, 0, 0, OVERLAY_ALPHA);
pub const COLOR_TRANSITION: Rgba = Rgba::new(128, 128, 128, OVERLAY_ALPHA);

/// Label and background color shown for a posture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostureStatus {
    pub label: &'static str,
    pub color: Rgba,
}

impl PostureState {
    pub fn status(&self) -> PostureStatus {
        let (label, color) = match self {
            PostureState::NoPersonDetected => ("No person detected", COLOR_NEUTRAL),
            PostureState::LowVisibility => (
                "Low visibility: position yourself sideways",
                COLOR_NEUTRAL,
            ),
            PostureState::Standing => ("Standing", COLOR_STANDING),
            PostureState::Sitting(SittingPosture::Correct) => {
                ("Sitting: correct posture", COLOR_CORRECT)
            }
            PostureState::Sitting(SittingPosture::Incorrect) => {
                ("Sitting: slouched", COLOR_INCORRECT)
            }
            PostureState::Transitioning => ("Transitioning", COLOR_TRANSITION),
            PostureState::CalculationError { .. } => ("Calculation error", COLOR_NEUTRAL),
        };
        PostureStatus { label, color }
    }

    pub fn is_calculation_error(&self) -> bool {
        matches!(self, PostureState::CalculationError { .. })
    }
}
