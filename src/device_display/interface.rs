use crate::posture::landmark::Frame;
use crate::posture::skeleton::SkeletonStyle;
use crate::posture::state::Rgba;
use std::error::Error;

/// Where the skeleton overlay and the posture status end up.
pub trait DeviceDisplay: Send + Sync {
    /// Prepare the display before the first frame
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Draw the skeleton of `frame`, or clear it when nobody was detected
    fn render(
        &mut self,
        frame: Option<&Frame>,
        style: &SkeletonStyle,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace the status text and its background color
    fn set_status(&mut self, label: &str, color: Rgba) -> Result<(), Box<dyn Error + Send + Sync>>;
}
