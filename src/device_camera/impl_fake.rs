use crate::device_camera::interface::{DeviceCamera, ImageFrame};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    width: u32,
    height: u32,
    started: AtomicBool,
    frames_captured: AtomicU64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(width: u32, height: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            width,
            height,
            started: AtomicBool::new(false),
            frames_captured: AtomicU64::new(0),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    pub fn frames_captured(&self) -> u64 {
        self.frames_captured.load(Ordering::SeqCst)
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn frame_len(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(|| format!("Frame size overflows at {}x{}", self.width, self.height).into())
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.frame_len()?;
        self.logger
            .info(&format!("Starting camera at {}x{}", self.width, self.height))?;
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<ImageFrame, Box<dyn std::error::Error + Send + Sync>> {
        if !self.is_started() {
            return Err("Camera not started".into());
        }
        let len = self.frame_len()?;
        self.frames_captured.fetch_add(1, Ordering::SeqCst);
        Ok(ImageFrame {
            width: self.width,
            height: self.height,
            data: vec![0; len],
        })
    }
}
