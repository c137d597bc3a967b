use crate::device_display::interface::DeviceDisplay;
use crate::posture::landmark::Frame;
use crate::posture::skeleton::{Overlay, SkeletonStyle};
use crate::posture::state::Rgba;
use std::error::Error;

const STATUS_WIDTH: usize = 44;

pub struct DeviceDisplayConsole {
    status: String,
    color: Rgba,
    segments: usize,
    points: usize,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            status: String::new(),
            color: Rgba::new(0, 0, 0, 0),
            segments: 0,
            points: 0,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(STATUS_WIDTH));
        println!("│{}│", pad(&self.status));
        println!(
            "│{}│",
            pad(&format!(
                "rgba({}, {}, {}, {})",
                self.color.r, self.color.g, self.color.b, self.color.a
            ))
        );
        println!(
            "│{}│",
            pad(&format!(
                "skeleton: {} lines, {} points",
                self.segments, self.points
            ))
        );
        println!("└{}┘", "─".repeat(STATUS_WIDTH));
    }
}

fn pad(text: &str) -> String {
    let truncated: String = text.chars().take(STATUS_WIDTH).collect();
    format!("{:<width$}", truncated, width = STATUS_WIDTH)
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn render(
        &mut self,
        frame: Option<&Frame>,
        style: &SkeletonStyle,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let overlay = Overlay::build(frame, style);
        self.segments = overlay.segments.len();
        self.points = overlay.points.len();
        Ok(())
    }

    fn set_status(&mut self, label: &str, color: Rgba) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.status == label && self.color == color {
            return Ok(());
        }
        self.status = label.to_string();
        self.color = color;
        self.render_display();
        Ok(())
    }
}
