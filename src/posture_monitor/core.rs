use crate::config::Config;
use crate::device_camera::interface::ImageFrame;
use crate::posture::classifier::classify;
use crate::posture::landmark::Frame;
use crate::posture::state::{PostureState, PostureStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Starting,
    Running {
        /// What the display currently shows.
        status: Option<PostureStatus>,
        frames_processed: u64,
    },
    Stopped,
    /// The camera never started; nothing was classified.
    Failed {
        reason: String,
    },
}

#[derive(Debug)]
pub enum Event {
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(Result<ImageFrame, Box<dyn std::error::Error + Send + Sync>>),
    LandmarksDetected(Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>>),
    StopRequested,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameCaptureDone(Ok(image)) => {
                format!("FrameCaptureDone(Ok({}x{}))", image.width, image.height)
            }
            Event::LandmarksDetected(Ok(Some(frame))) => {
                format!("LandmarksDetected(Ok(Some({} landmarks)))", frame.len())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartCamera,
    CaptureFrame,
    DetectLandmarks { image: ImageFrame },
    RenderSkeleton { frame: Option<Frame> },
    SetStatus(PostureStatus),
    LogError(String),
    StopCamera,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::DetectLandmarks { image } => {
                format!("DetectLandmarks({}x{})", image.width, image.height)
            }
            Effect::RenderSkeleton { frame } => match frame {
                Some(frame) => format!("RenderSkeleton({} landmarks)", frame.len()),
                None => "RenderSkeleton(none)".to_string(),
            },
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::Starting, vec![Effect::StartCamera])
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model, event) {
        (Model::Stopped, _) => (Model::Stopped, vec![]),
        (model @ Model::Failed { .. }, _) => (model, vec![]),

        (_, Event::StopRequested) => (Model::Stopped, vec![Effect::StopCamera]),

        (Model::Starting, Event::CameraStartDone(Ok(()))) => (
            Model::Running {
                status: None,
                frames_processed: 0,
            },
            vec![Effect::CaptureFrame],
        ),
        (Model::Starting, Event::CameraStartDone(Err(e))) => {
            let reason = format!("Camera failed to start: {}", e);
            (
                Model::Failed {
                    reason: reason.clone(),
                },
                vec![Effect::LogError(reason)],
            )
        }

        (model @ Model::Running { .. }, Event::FrameCaptureDone(Ok(image))) => {
            (model, vec![Effect::DetectLandmarks { image }])
        }
        (model @ Model::Running { .. }, Event::FrameCaptureDone(Err(e))) => (
            model,
            vec![
                Effect::LogError(format!("Frame capture failed: {}", e)),
                Effect::CaptureFrame,
            ],
        ),

        (
            Model::Running {
                status,
                frames_processed,
                ..
            },
            Event::LandmarksDetected(Ok(frame)),
        ) => {
            let state = classify(frame.as_ref(), config.policy, &config.thresholds);
            let mut effects = vec![Effect::RenderSkeleton { frame }];

            let status = match (&state, status) {
                // keep whatever is on screen, the frame told us nothing
                (PostureState::CalculationError { reason }, Some(shown)) => {
                    effects.push(Effect::LogError(format!(
                        "Posture calculation failed: {}",
                        reason
                    )));
                    shown
                }
                (PostureState::CalculationError { reason }, None) => {
                    effects.push(Effect::LogError(format!(
                        "Posture calculation failed: {}",
                        reason
                    )));
                    let new_status = state.status();
                    effects.push(Effect::SetStatus(new_status));
                    new_status
                }
                (_, _) => {
                    let new_status = state.status();
                    effects.push(Effect::SetStatus(new_status));
                    new_status
                }
            };

            let frames_processed = frames_processed + 1;

            if config
                .frame_limit
                .is_some_and(|limit| frames_processed >= limit)
            {
                effects.push(Effect::StopCamera);
                return (Model::Stopped, effects);
            }

            effects.push(Effect::CaptureFrame);
            (
                Model::Running {
                    status: Some(status),
                    frames_processed,
                },
                effects,
            )
        }
        (model @ Model::Running { .. }, Event::LandmarksDetected(Err(e))) => (
            model,
            vec![
                Effect::LogError(format!("Pose detection failed: {}", e)),
                Effect::CaptureFrame,
            ],
        ),

        (model, _) => (model, vec![]),
    }
}
