use config::{Config, DisplayKind};
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use pose_detector::impl_fake::{PoseDetectorFake, Scene};
use posture_monitor::main::PostureMonitor;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::thread;

mod config;
mod device_camera;
mod device_display;
mod library;
mod pose_detector;
mod posture;
mod posture_monitor;

const FRAMES_PER_SCENE: u64 = 45;
const LANDMARK_JITTER: f32 = 0.002;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));
    logger.info(&format!(
        "Starting posture monitor: policy={:?} thresholds={:?}",
        config.policy, config.thresholds
    ))?;

    let stop = Arc::new(AtomicBool::new(false));

    let device_camera = Arc::new(DeviceCameraFake::new(
        config.camera_width,
        config.camera_height,
        logger.clone(),
    ));

    let pose_detector = Arc::new(PoseDetectorFake::new(
        config.pose_detector,
        Scene::demo_script(),
        FRAMES_PER_SCENE,
        LANDMARK_JITTER,
        logger.clone(),
    ));

    let display = config.display;
    match display {
        DisplayKind::Console => {
            let posture_monitor = PostureMonitor::new(
                config,
                logger,
                device_camera,
                pose_detector,
                Arc::new(Mutex::new(DeviceDisplayConsole::new())),
            );
            posture_monitor.run(stop)?;
        }
        DisplayKind::Gui => {
            let device_display = DeviceDisplayGui::new(config.camera_width, config.camera_height);
            let window = device_display.window(stop.clone());
            let posture_monitor = PostureMonitor::new(
                config,
                logger,
                device_camera,
                pose_detector,
                Arc::new(Mutex::new(device_display)),
            );

            // the window's event loop has to own the main thread
            let worker = thread::spawn(move || posture_monitor.run(stop));
            let shown = window.run();
            let finished = worker
                .join()
                .map_err(|_| "posture monitor thread panicked")?;

            shown?;
            finished?;
        }
    }

    Ok(())
}
