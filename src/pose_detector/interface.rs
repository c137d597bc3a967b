use crate::device_camera::interface::ImageFrame;
use crate::posture::landmark::Frame;

pub trait PoseDetector: Send + Sync {
    /// Landmarks of the person in `image`, or `None` when nobody is detected.
    fn detect(
        &self,
        image: &ImageFrame,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>>;
}
