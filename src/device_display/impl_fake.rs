use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::posture::landmark::Frame;
use crate::posture::skeleton::{Overlay, SkeletonStyle};
use crate::posture::state::Rgba;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Init,
    Render(Overlay),
    SetStatus { label: String, color: Rgba },
}

/// Logs and records every call. Clones share the recording.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<DisplayCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn statuses(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::SetStatus { label, .. } => Some(label),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: DisplayCall) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.lock().map_err(|e| e.to_string())?.push(call);
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        self.record(DisplayCall::Init)
    }

    fn render(
        &mut self,
        frame: Option<&Frame>,
        style: &SkeletonStyle,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let overlay = Overlay::build(frame, style);
        self.logger.info(&format!(
            "DeviceDisplayFake::render({} segments, {} points)",
            overlay.segments.len(),
            overlay.points.len()
        ))?;
        self.record(DisplayCall::Render(overlay))
    }

    fn set_status(&mut self, label: &str, color: Rgba) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::set_status({}, {:?})",
            label, color
        ))?;
        self.record(DisplayCall::SetStatus {
            label: label.to_string(),
            color,
        })
    }
}
