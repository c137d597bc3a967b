use crate::posture::landmark::Frame;
use crate::posture::state::Rgba;
use serde::{Deserialize, Serialize};

/// BlazePose connector pairs, by landmark index.
pub const POSE_CONNECTIONS: [(usize, usize); 35] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    (11, 12),
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    (11, 23),
    (12, 24),
    (23, 24),
    (23, 25),
    (24, 26),
    (25, 27),
    (26, 28),
    (27, 29),
    (28, 30),
    (29, 31),
    (30, 32),
    (27, 31),
    (28, 32),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonStyle {
    pub connector_color: Rgba,
    pub connector_width: f32,
    pub landmark_color: Rgba,
    pub landmark_radius: f32,
    /// Landmarks below this visibility are not drawn.
    pub min_visibility: f32,
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            connector_color: Rgba::new(0, 255, 0, 255),
            connector_width: 4.0,
            landmark_color: Rgba::new(255, 0, 0, 255),
            landmark_radius: 2.0,
            min_visibility: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// What to draw for one frame, in normalized image coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub segments: Vec<Segment>,
    pub points: Vec<Point>,
}

impl Overlay {
    pub fn build(frame: Option<&Frame>, style: &SkeletonStyle) -> Self {
        let Some(frame) = frame else {
            return Self::default();
        };

        let visible = |index: usize| {
            frame
                .landmarks()
                .get(index)
                .filter(|l| l.is_finite() && l.visibility >= style.min_visibility)
                .map(|l| Point { x: l.x, y: l.y })
        };

        let segments = POSE_CONNECTIONS
            .iter()
            .filter_map(|&(from, to)| {
                Some(Segment {
                    from: visible(from)?,
                    to: visible(to)?,
                })
            })
            .collect();

        let points = (0..frame.len()).filter_map(visible).collect();

        Self { segments, points }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.points.is_empty()
    }
}
