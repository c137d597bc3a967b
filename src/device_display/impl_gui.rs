use crate::device_display::interface::DeviceDisplay;
use crate::posture::landmark::Frame;
use crate::posture::skeleton::{Overlay, Point, SkeletonStyle};
use crate::posture::state::Rgba;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const STATUS_BAR_HEIGHT: f32 = 48.0;
const WINDOW_TITLE: &str = "Posture monitor";

#[derive(Clone, Default)]
struct Screen {
    overlay: Overlay,
    style: SkeletonStyle,
    status: String,
    status_color: Option<Rgba>,
}

#[derive(Clone)]
struct PostureWindow {
    screen: Arc<Mutex<Screen>>,
}

fn color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl eframe::App for PostureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = match self.screen.lock() {
            Ok(screen) => screen.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 20));

            let to_screen = |p: &Point| {
                egui::pos2(
                    rect.left() + p.x * rect.width(),
                    rect.top() + p.y * rect.height(),
                )
            };

            let connector = egui::Stroke::new(
                screen.style.connector_width,
                color32(screen.style.connector_color),
            );
            for segment in &screen.overlay.segments {
                painter.line_segment([to_screen(&segment.from), to_screen(&segment.to)], connector);
            }
            for point in &screen.overlay.points {
                painter.circle_filled(
                    to_screen(point),
                    screen.style.landmark_radius * 2.0,
                    color32(screen.style.landmark_color),
                );
            }

            if let Some(status_color) = screen.status_color {
                let bar = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width(), STATUS_BAR_HEIGHT),
                );
                painter.rect_filled(bar, 0.0, color32(status_color));
                painter.text(
                    bar.left_center() + egui::vec2(12.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    &screen.status,
                    egui::FontId::proportional(22.0),
                    egui::Color32::WHITE,
                );
            }
        });

        ctx.request_repaint_after(Duration::from_millis(30));
    }
}

/// Display sink backed by a native window. Frames and status land in a
/// shared screen; the window itself is driven by [`GuiWindow::run`], which
/// has to be called from the main thread.
pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
    width: u32,
    height: u32,
}

impl DeviceDisplayGui {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
            width,
            height,
        }
    }

    /// The window that paints this display. `closed` is set once the window
    /// goes away, whether it was closed or failed to open.
    pub fn window(&self, closed: Arc<AtomicBool>) -> GuiWindow {
        GuiWindow {
            screen: self.screen.clone(),
            width: self.width,
            height: self.height,
            closed,
        }
    }
}

pub struct GuiWindow {
    screen: Arc<Mutex<Screen>>,
    width: u32,
    height: u32,
    closed: Arc<AtomicBool>,
}

impl GuiWindow {
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.run_with(|options, window| {
            eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Box::new(window)))
                .map_err(|e| e.to_string())
        })
    }

    fn run_with<F>(self, launch: F) -> Result<(), Box<dyn Error + Send + Sync>>
    where
        F: FnOnce(eframe::NativeOptions, PostureWindow) -> Result<(), String>,
    {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width as f32, self.height as f32])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        let result = launch(
            options,
            PostureWindow {
                screen: self.screen,
            },
        );
        self.closed.store(true, Ordering::SeqCst);

        result.map_err(|e| format!("Window failed: {}", e).into())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        *screen = Screen::default();
        Ok(())
    }

    fn render(
        &mut self,
        frame: Option<&Frame>,
        style: &SkeletonStyle,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let overlay = Overlay::build(frame, style);
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        screen.overlay = overlay;
        screen.style = *style;
        Ok(())
    }

    fn set_status(&mut self, label: &str, color: Rgba) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        screen.status = label.to_string();
        screen.status_color = Some(color);
        Ok(())
    }
}
