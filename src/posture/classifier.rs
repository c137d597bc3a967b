use crate::posture::angle::checked_angle;
use crate::posture::error::ClassifyError;
use crate::posture::landmark::{Frame, Landmark, PoseLandmark};
use crate::posture::state::{PostureState, SittingPosture};
use serde::{Deserialize, Serialize};

/// Which classification rules to apply to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Hip, knee and back angles; distinguishes standing, sitting and
    /// transitioning.
    #[default]
    ThreeAngle,
    /// Back angle only; assumes the person is sitting.
    SingleAngle,
}

impl Policy {
    pub fn strategy(self) -> &'static dyn PosturePolicy {
        match self {
            Policy::ThreeAngle => &ThreeAnglePolicy,
            Policy::SingleAngle => &SingleAnglePolicy,
        }
    }
}

/// Angle cutoffs in degrees, and the landmark visibility a policy requires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_visibility: f32,
    pub standing_min_angle: f32,
    pub sitting_max_angle: f32,
    pub upright_back_min_angle: f32,
}

impl Thresholds {
    pub fn for_policy(policy: Policy) -> Self {
        let min_visibility = match policy {
            Policy::ThreeAngle => 0.3,
            Policy::SingleAngle => 0.5,
        };
        Self {
            min_visibility,
            standing_min_angle: 160.0,
            sitting_max_angle: 130.0,
            upright_back_min_angle: 165.0,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::for_policy(Policy::default())
    }
}

pub trait PosturePolicy: Send + Sync {
    fn classify(&self, frame: &Frame, thresholds: &Thresholds)
        -> Result<PostureState, ClassifyError>;
}

/// Classifies one frame. Never fails: problems reading the landmarks or
/// computing an angle come back as [`PostureState::CalculationError`].
pub fn classify(frame: Option<&Frame>, policy: Policy, thresholds: &Thresholds) -> PostureState {
    let Some(frame) = frame else {
        return PostureState::NoPersonDetected;
    };

    match policy.strategy().classify(frame, thresholds) {
        Ok(state) => state,
        Err(e) => PostureState::CalculationError {
            reason: e.to_string(),
        },
    }
}

pub struct ThreeAnglePolicy;

impl PosturePolicy for ThreeAnglePolicy {
    fn classify(
        &self,
        frame: &Frame,
        thresholds: &Thresholds,
    ) -> Result<PostureState, ClassifyError> {
        let shoulder = landmark(frame, PoseLandmark::LeftShoulder)?;
        let hip = landmark(frame, PoseLandmark::LeftHip)?;
        let knee = landmark(frame, PoseLandmark::LeftKnee)?;
        let ankle = landmark(frame, PoseLandmark::LeftAnkle)?;

        if [shoulder, hip, knee]
            .iter()
            .any(|l| l.visibility < thresholds.min_visibility)
        {
            return Ok(PostureState::LowVisibility);
        }

        let hip_angle = joint_angle(shoulder, hip, knee, PoseLandmark::LeftHip)?;
        let knee_angle = joint_angle(hip, knee, ankle, PoseLandmark::LeftKnee)?;

        if hip_angle > thresholds.standing_min_angle && knee_angle > thresholds.standing_min_angle
        {
            return Ok(PostureState::Standing);
        }

        if hip_angle < thresholds.sitting_max_angle && knee_angle < thresholds.sitting_max_angle {
            // the ear only matters once the legs say sitting
            let ear = landmark(frame, PoseLandmark::LeftEar)?;
            let back_angle = joint_angle(ear, shoulder, hip, PoseLandmark::LeftShoulder)?;
            let posture = if back_angle < thresholds.upright_back_min_angle {
                SittingPosture::Incorrect
            } else {
                SittingPosture::Correct
            };
            return Ok(PostureState::Sitting(posture));
        }

        Ok(PostureState::Transitioning)
    }
}

pub struct SingleAnglePolicy;

impl PosturePolicy for SingleAnglePolicy {
    fn classify(
        &self,
        frame: &Frame,
        thresholds: &Thresholds,
    ) -> Result<PostureState, ClassifyError> {
        let ear = landmark(frame, PoseLandmark::LeftEar)?;
        let shoulder = landmark(frame, PoseLandmark::LeftShoulder)?;
        let hip = landmark(frame, PoseLandmark::LeftHip)?;

        // strictly above the minimum, unlike the three-angle policy
        if ![ear, shoulder, hip]
            .iter()
            .all(|l| l.visibility > thresholds.min_visibility)
        {
            return Ok(PostureState::LowVisibility);
        }

        let back_angle = joint_angle(ear, shoulder, hip, PoseLandmark::LeftShoulder)?;
        let posture = if back_angle > thresholds.upright_back_min_angle {
            SittingPosture::Correct
        } else {
            SittingPosture::Incorrect
        };
        Ok(PostureState::Sitting(posture))
    }
}

fn landmark(frame: &Frame, which: PoseLandmark) -> Result<&Landmark, ClassifyError> {
    let landmark = frame.get(which).ok_or(ClassifyError::MissingLandmark {
        landmark: which,
        frame_len: frame.len(),
    })?;

    if !landmark.is_finite() || !landmark.visibility.is_finite() {
        return Err(ClassifyError::NonFiniteCoordinate { landmark: which });
    }

    Ok(landmark)
}

fn joint_angle(
    a: &Landmark,
    vertex: &Landmark,
    c: &Landmark,
    vertex_kind: PoseLandmark,
) -> Result<f32, ClassifyError> {
    checked_angle(a, vertex, c).ok_or(ClassifyError::DegenerateAngle {
        vertex: vertex_kind,
    })
}
