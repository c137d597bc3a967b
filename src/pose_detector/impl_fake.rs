use crate::device_camera::interface::ImageFrame;
use crate::library::logger::interface::Logger;
use crate::pose_detector::interface::PoseDetector;
use crate::pose_detector::options::PoseDetectorOptions;
use crate::posture::landmark::{Frame, Landmark};
use crate::posture::synthetic::SideViewPose;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const PERSON_SCORE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Standing,
    SittingUpright,
    Slouching,
    Transitioning,
    /// Facing the camera, so the side landmarks are barely visible.
    TurnedAway,
    Empty,
    /// The model returns fewer landmarks than the pose topology has.
    Truncated,
}

impl Scene {
    pub fn demo_script() -> Vec<Scene> {
        vec![
            Scene::Empty,
            Scene::Standing,
            Scene::Transitioning,
            Scene::SittingUpright,
            Scene::Slouching,
            Scene::SittingUpright,
            Scene::TurnedAway,
            Scene::Truncated,
            Scene::Transitioning,
        ]
    }

    fn person_score(&self) -> f32 {
        match self {
            Scene::Empty => 0.0,
            _ => PERSON_SCORE,
        }
    }

    fn frame(&self) -> Option<Frame> {
        let pose = match self {
            Scene::Standing => SideViewPose::new(175.0, 175.0, 172.0),
            Scene::SittingUpright => SideViewPose::new(95.0, 95.0, 174.0),
            Scene::Slouching => SideViewPose::new(95.0, 95.0, 145.0),
            Scene::Transitioning => SideViewPose::new(145.0, 140.0, 170.0),
            Scene::TurnedAway => {
                let mut pose = SideViewPose::new(95.0, 95.0, 174.0);
                pose.visibility = 0.15;
                pose
            }
            Scene::Empty => return None,
            Scene::Truncated => {
                let frame = SideViewPose::new(95.0, 95.0, 174.0).frame();
                return Some(Frame::new(frame.landmarks()[..20].to_vec()));
            }
        };
        Some(pose.frame())
    }
}

/// Plays a looping script of scenes, holding each one for a number of
/// frames. Landmark positions get a little uniform jitter.
pub struct PoseDetectorFake {
    options: PoseDetectorOptions,
    script: Vec<Scene>,
    frames_per_scene: u64,
    jitter: f32,
    frames_seen: AtomicU64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PoseDetectorFake {
    pub fn new(
        options: PoseDetectorOptions,
        script: Vec<Scene>,
        frames_per_scene: u64,
        jitter: f32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("pose_detector").with_namespace("fake");
        let _ = logger.info(&format!("Pose detector options: {:?}", options));
        Self {
            options,
            script,
            frames_per_scene: frames_per_scene.max(1),
            jitter,
            frames_seen: AtomicU64::new(0),
            logger,
        }
    }

    fn current_scene(&self) -> Option<Scene> {
        if self.script.is_empty() {
            return None;
        }
        let frame = self.frames_seen.fetch_add(1, Ordering::SeqCst);
        let index = (frame / self.frames_per_scene) as usize % self.script.len();
        Some(self.script[index])
    }

    fn jittered(
        &self,
        frame: Frame,
    ) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        if self.jitter <= 0.0 {
            return Ok(frame);
        }

        let mut rng = rand::rng();
        let offset_dist = Uniform::new(-self.jitter, self.jitter)?;

        let landmarks = frame
            .landmarks()
            .iter()
            .map(|l| {
                Landmark::new(
                    l.x + offset_dist.sample(&mut rng),
                    l.y + offset_dist.sample(&mut rng),
                    l.visibility,
                )
            })
            .collect();

        Ok(Frame::new(landmarks))
    }
}

impl PoseDetector for PoseDetectorFake {
    fn detect(
        &self,
        image: &ImageFrame,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        if image.data.is_empty() {
            return Err("Empty image".into());
        }

        let Some(scene) = self.current_scene() else {
            return Ok(None);
        };

        if scene.person_score() < self.options.min_detection_confidence {
            return Ok(None);
        }

        match scene.frame() {
            Some(frame) => {
                if scene == Scene::Truncated {
                    self.logger
                        .warn(&format!("Returning {} landmarks only", frame.len()))?;
                }
                Ok(Some(self.jittered(frame)?))
            }
            None => Ok(None),
        }
    }
}
