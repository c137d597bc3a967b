use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::pose_detector::interface::PoseDetector;
use crate::posture_monitor::core::{init, transition, Effect, Event, Model};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct PostureMonitor {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub pose_detector: Arc<dyn PoseDetector + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl PostureMonitor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        pose_detector: Arc<dyn PoseDetector + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("posture_monitor"),
            device_camera,
            pose_detector,
            device_display,
        }
    }

    /// Processes frames one at a time until the frame limit is reached or
    /// `stop` is set. `stop` is only checked between frames. Returns the
    /// final model, or an error when the camera fails to start.
    pub fn run(
        &self,
        stop: Arc<AtomicBool>,
    ) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .init()?;

        let (mut model, effects) = init();
        let mut pending: VecDeque<Effect> = effects.into();

        while let Some(effect) = pending.pop_front() {
            let event = if matches!(effect, Effect::CaptureFrame) && stop.load(Ordering::SeqCst) {
                Some(Event::StopRequested)
            } else {
                self.run_effect(effect)
            };

            let Some(event) = event else {
                continue;
            };

            let _ = self
                .logger
                .info(&format!("event: {}", event.to_display_string()));

            let (new_model, effects) = transition(&self.config, model, event);

            let _ = self.logger.info(&format!(
                "effects: [{}]",
                effects
                    .iter()
                    .map(Effect::to_display_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));

            model = new_model;
            pending.extend(effects);
        }

        if let Model::Failed { reason } = model {
            return Err(reason.into());
        }

        let _ = self.logger.info(&format!("Stopped: {:?}", model));
        Ok(model)
    }
}
