use crate::posture_monitor::core::{Effect, Event};
use crate::device_display::interface::DeviceDisplay;
use crate::posture_monitor::main::PostureMonitor;
use std::error::Error;

impl PostureMonitor {
    /// Runs one effect to completion. Effects that talk to the camera or the
    /// pose detector report back with an event.
    pub fn run_effect(&self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::StartCamera => Some(Event::CameraStartDone(self.device_camera.start())),
            Effect::CaptureFrame => {
                if !self.config.frame_interval.is_zero() {
                    std::thread::sleep(self.config.frame_interval);
                }
                Some(Event::FrameCaptureDone(self.device_camera.capture_frame()))
            }
            Effect::DetectLandmarks { image } => {
                Some(Event::LandmarksDetected(self.pose_detector.detect(&image)))
            }
            Effect::RenderSkeleton { frame } => {
                let style = self.config.skeleton_style;
                let rendered = self.with_display(|display| display.render(frame.as_ref(), &style));
                if let Err(e) = rendered {
                    let _ = self.logger.error(&format!("Render failed: {}", e));
                }
                None
            }
            Effect::SetStatus(status) => {
                let updated =
                    self.with_display(|display| display.set_status(status.label, status.color));
                if let Err(e) = updated {
                    let _ = self.logger.error(&format!("Status update failed: {}", e));
                }
                None
            }
            Effect::LogError(message) => {
                let _ = self.logger.error(&message);
                None
            }
            Effect::StopCamera => {
                if let Err(e) = self.device_camera.stop() {
                    let _ = self.logger.error(&format!("Camera failed to stop: {}", e));
                }
                None
            }
        }
    }

    fn with_display<F>(&self, f: F) -> Result<(), Box<dyn Error + Send + Sync>>
    where
        F: FnOnce(&mut (dyn DeviceDisplay + Send + Sync)) -> Result<(), Box<dyn Error + Send + Sync>>,
    {
        let mut display = self.device_display.lock().map_err(|e| e.to_string())?;
        f(&mut *display)
    }
}
