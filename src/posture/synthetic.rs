use crate::posture::landmark::{Frame, Landmark, PoseLandmark, POSE_LANDMARK_COUNT};

const HIP_ORIGIN: (f32, f32) = (0.45, 0.55);
const TORSO_LENGTH: f32 = 0.25;
const THIGH_LENGTH: f32 = 0.2;
const SHIN_LENGTH: f32 = 0.2;
const NECK_LENGTH: f32 = 0.08;
/// Offset of the far (right) side of the body in a side view.
const FAR_SIDE_OFFSET: f32 = 0.01;
const FAR_SIDE_VISIBILITY: f32 = 0.6;

/// A left-side view of a person posed with the given joint angles, in
/// degrees. Used to generate landmark frames without a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct SideViewPose {
    pub hip_angle: f32,
    pub knee_angle: f32,
    pub back_angle: f32,
    pub visibility: f32,
    overrides: Vec<(PoseLandmark, f32)>,
}

impl SideViewPose {
    pub fn new(hip_angle: f32, knee_angle: f32, back_angle: f32) -> Self {
        Self {
            hip_angle,
            knee_angle,
            back_angle,
            visibility: 0.95,
            overrides: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, landmark: PoseLandmark, visibility: f32) -> Self {
        self.overrides.push((landmark, visibility));
        self
    }

    pub fn frame(&self) -> Frame {
        let hip = HIP_ORIGIN;
        let shoulder = step(hip, 270.0, TORSO_LENGTH);
        let knee = step(hip, 270.0 + self.hip_angle, THIGH_LENGTH);
        let ankle = step(knee, 90.0 + self.hip_angle - self.knee_angle, SHIN_LENGTH);
        let ear = step(shoulder, 90.0 - self.back_angle, NECK_LENGTH);
        let elbow = (shoulder.0 + 0.02, shoulder.1 + 0.14);
        let wrist = (elbow.0 + 0.06, elbow.1 + 0.08);

        let near = |p: (f32, f32)| Landmark::new(p.0, p.1, self.visibility);
        let far = |p: (f32, f32)| {
            Landmark::new(
                p.0 + FAR_SIDE_OFFSET,
                p.1,
                self.visibility * FAR_SIDE_VISIBILITY,
            )
        };
        let offset = |p: (f32, f32), dx: f32, dy: f32| (p.0 + dx, p.1 + dy);

        let nose = offset(ear, 0.04, 0.01);
        let eye = offset(ear, 0.03, -0.01);
        let mouth = offset(ear, 0.035, 0.03);

        let mut landmarks = vec![Landmark::new(0.0, 0.0, 0.0); POSE_LANDMARK_COUNT];
        let mut set = |which: PoseLandmark, landmark: Landmark| {
            landmarks[which.index()] = landmark;
        };

        set(PoseLandmark::Nose, near(nose));
        set(PoseLandmark::LeftEyeInner, near(offset(eye, 0.005, 0.0)));
        set(PoseLandmark::LeftEye, near(eye));
        set(PoseLandmark::LeftEyeOuter, near(offset(eye, -0.005, 0.0)));
        set(PoseLandmark::RightEyeInner, far(offset(eye, 0.005, 0.0)));
        set(PoseLandmark::RightEye, far(eye));
        set(PoseLandmark::RightEyeOuter, far(offset(eye, -0.005, 0.0)));
        set(PoseLandmark::LeftEar, near(ear));
        set(PoseLandmark::RightEar, far(ear));
        set(PoseLandmark::MouthLeft, near(mouth));
        set(PoseLandmark::MouthRight, far(mouth));
        set(PoseLandmark::LeftShoulder, near(shoulder));
        set(PoseLandmark::RightShoulder, far(shoulder));
        set(PoseLandmark::LeftElbow, near(elbow));
        set(PoseLandmark::RightElbow, far(elbow));
        set(PoseLandmark::LeftWrist, near(wrist));
        set(PoseLandmark::RightWrist, far(wrist));
        set(PoseLandmark::LeftPinky, near(offset(wrist, 0.015, 0.02)));
        set(PoseLandmark::RightPinky, far(offset(wrist, 0.015, 0.02)));
        set(PoseLandmark::LeftIndex, near(offset(wrist, 0.025, 0.015)));
        set(PoseLandmark::RightIndex, far(offset(wrist, 0.025, 0.015)));
        set(PoseLandmark::LeftThumb, near(offset(wrist, 0.02, 0.0)));
        set(PoseLandmark::RightThumb, far(offset(wrist, 0.02, 0.0)));
        set(PoseLandmark::LeftHip, near(hip));
        set(PoseLandmark::RightHip, far(hip));
        set(PoseLandmark::LeftKnee, near(knee));
        set(PoseLandmark::RightKnee, far(knee));
        set(PoseLandmark::LeftAnkle, near(ankle));
        set(PoseLandmark::RightAnkle, far(ankle));
        set(PoseLandmark::LeftHeel, near(offset(ankle, -0.02, 0.01)));
        set(PoseLandmark::RightHeel, far(offset(ankle, -0.02, 0.01)));
        set(PoseLandmark::LeftFootIndex, near(offset(ankle, 0.05, 0.01)));
        set(PoseLandmark::RightFootIndex, far(offset(ankle, 0.05, 0.01)));

        for (which, visibility) in &self.overrides {
            landmarks[which.index()].visibility = *visibility;
        }

        Frame::new(landmarks)
    }
}

/// Moves `length` from `from` along `heading` degrees (image coordinates,
/// y grows downwards, 0 points right).
fn step(from: (f32, f32), heading: f32, length: f32) -> (f32, f32) {
    let radians = heading.to_radians();
    (
        from.0 + length * radians.cos(),
        from.1 + length * radians.sin(),
    )
}
