use crate::posture::landmark::PoseLandmark;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("landmark {landmark} missing from frame of {frame_len} landmarks")]
    MissingLandmark {
        landmark: PoseLandmark,
        frame_len: usize,
    },

    #[error("landmark {landmark} has a non-finite coordinate or visibility")]
    NonFiniteCoordinate { landmark: PoseLandmark },

    #[error("zero-length arm at vertex {vertex}")]
    DegenerateAngle { vertex: PoseLandmark },
}
