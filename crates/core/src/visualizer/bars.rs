use crate::render::{Canvas, Glow, Paint, Path, Rgba};

use super::SpectrumStyle;

const GAP_RATIO: f32 = 0.2;

/// Plain vertical bar chart with a vertical gradient and glow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarStyle;

impl BarStyle {
    fn paint(height: f32) -> Paint {
        Paint::vertical(
            height,
            &[
                (0.0, Rgba::new(248, 113, 113, 0.9)),
                (0.5, Rgba::new(220, 38, 38, 0.7)),
                (1.0, Rgba::new(69, 10, 10, 0.3)),
            ],
        )
    }
}

impl SpectrumStyle for BarStyle {
    fn name(&self) -> &'static str {
        "bars"
    }

    fn draw(&self, bins: &[u8], _time_seconds: f32, canvas: &mut dyn Canvas) {
        if bins.is_empty() {
            return;
        }
        let (width, height) = (canvas.width(), canvas.height());
        let slot = width / bins.len() as f32;
        let bar_width = slot * (1.0 - GAP_RATIO);

        for (i, bin) in bins.iter().enumerate() {
            let bar_height = f32::from(*bin) / 255.0 * height;
            if bar_height <= 0.0 {
                continue;
            }
            let left = i as f32 * slot + slot * GAP_RATIO * 0.5;
            let top = height - bar_height;

            let mut path = Path::new();
            path.move_to(left, height)
                .line_to(left, top)
                .line_to(left + bar_width, top)
                .line_to(left + bar_width, height)
                .close();
            canvas.fill(
                path,
                Self::paint(height),
                Some(Glow {
                    blur: 6.0,
                    color: Rgba::new(220, 38, 38, 0.5),
                }),
            );
        }
    }
}
