use crate::render::{Canvas, Glow, LineCap, Paint, Path, Rgba, Stroke};

use super::SpectrumStyle;

const LAYERS: usize = 3;
const WAVE_AMPLITUDE: f32 = 5.0;
const WAVE_STEP: f32 = 0.2;
const SPINE_STRIDE: usize = 3;
const SPINE_THRESHOLD: f32 = 0.3;

const OUTLINE: Rgba = Rgba::new(220, 38, 38, 0.4);
const OUTLINE_GLOW: Rgba = Rgba::new(220, 38, 38, 0.6);
const SPINE: Rgba = Rgba::new(139, 0, 0, 1.0);
const SPINE_GLOW: Rgba = Rgba::new(220, 38, 38, 0.8);

/// Layered organic curve with thin spines sprouting from loud bins.
#[derive(Debug, Clone, Copy, Default)]
pub struct VineStyle;

impl VineStyle {
    fn layer_path(bins: &[u8], layer: usize, time: f32, width: f32, height: f32) -> Path {
        let spacing = width / (bins.len() - 1) as f32;
        let base = height * 0.5;
        let reach = 0.8 - layer as f32 * 0.2;
        let crest = |i: usize| {
            let value = f32::from(bins[i]) / 255.0;
            let y = height - base - value * base * reach;
            let wave = (i as f32 * WAVE_STEP + time).sin() * WAVE_AMPLITUDE;
            (i as f32 * spacing, y + wave)
        };

        let mut path = Path::new();
        let (x0, y0) = crest(0);
        path.move_to(x0, y0);
        for i in 1..bins.len() {
            let (prev_x, prev_y) = crest(i - 1);
            let (x, y) = crest(i);
            path.quad_to((prev_x + x) * 0.5, (prev_y + y) * 0.5, x, y);
        }
        path.line_to(width, height).line_to(0.0, height).close();
        path
    }

    fn layer_paint(layer: usize, height: f32) -> Paint {
        let opacity = 0.3 - layer as f32 * 0.08;
        Paint::vertical(
            height,
            &[
                (0.0, Rgba::new(127, 29, 29, opacity * 1.5)),
                (0.3, Rgba::new(69, 10, 10, opacity)),
                (1.0, Rgba::new(26, 0, 0, opacity * 0.5)),
            ],
        )
    }
}

impl SpectrumStyle for VineStyle {
    fn name(&self) -> &'static str {
        "vine"
    }

    fn draw(&self, bins: &[u8], time_seconds: f32, canvas: &mut dyn Canvas) {
        if bins.len() < 2 {
            return;
        }
        let (width, height) = (canvas.width(), canvas.height());

        for layer in 0..LAYERS {
            let path = Self::layer_path(bins, layer, time_seconds, width, height);
            if layer == 0 {
                canvas.fill(path.clone(), Self::layer_paint(layer, height), None);
                canvas.stroke(
                    path,
                    Stroke {
                        paint: Paint::Solid(OUTLINE),
                        width: 2.0,
                        cap: LineCap::Butt,
                        glow: Some(Glow {
                            blur: 8.0,
                            color: OUTLINE_GLOW,
                        }),
                    },
                );
            } else {
                canvas.fill(path, Self::layer_paint(layer, height), None);
            }
        }

        let spacing = width / (bins.len() - 1) as f32;
        for i in (0..bins.len()).step_by(SPINE_STRIDE) {
            let value = f32::from(bins[i]) / 255.0;
            if value <= SPINE_THRESHOLD {
                continue;
            }
            let spine_height = value * 20.0 * (1.0 + (i as f32 + time_seconds * 2.0).sin());
            let x = i as f32 * spacing;
            let y = height - height * 0.5 - value * height * 0.4;

            let mut path = Path::new();
            path.move_to(x, y).line_to(x, y - spine_height);
            canvas.stroke(
                path,
                Stroke {
                    paint: Paint::Solid(SPINE.with_alpha(value * 0.8)),
                    width: 1.0 + value * 2.0,
                    cap: LineCap::Round,
                    glow: Some(Glow {
                        blur: 10.0,
                        color: SPINE_GLOW,
                    }),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingCanvas};

    #[test]
    fn silence_draws_layers_without_spines() {
        let mut canvas = RecordingCanvas::new(640.0, 96.0);
        VineStyle.draw(&[0; 64], 0.0, &mut canvas);

        let fills = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count();
        let strokes = canvas.commands().len() - fills;
        assert_eq!(fills, 3);
        assert_eq!(strokes, 1);
    }

    #[test]
    fn loud_bins_sprout_spines_every_third_bin() {
        let mut canvas = RecordingCanvas::new(640.0, 96.0);
        VineStyle.draw(&[200; 64], 0.0, &mut canvas);
        // outline + one spine per bin index divisible by three
        let strokes = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count();
        assert_eq!(strokes, 1 + 22);
    }

    #[test]
    fn curve_height_tracks_magnitude() {
        let height = 96.0;
        let quiet = VineStyle::layer_path(&[0; 8], 0, 0.0, 100.0, height);
        let loud = VineStyle::layer_path(&[255; 8], 0, 0.0, 100.0, height);

        let first = |path: &Path| path.points().next().unwrap().y;
        // y = height - base - value * base * 0.8, plus a wave of sin(0) = 0
        assert!((first(&quiet) - 48.0).abs() < 1e-3);
        assert!((first(&loud) - 9.6).abs() < 1e-3);
    }

    #[test]
    fn curve_spans_full_width_and_closes_at_the_bottom() {
        let path = VineStyle::layer_path(&[128; 16], 1, 1.5, 300.0, 96.0);
        let points: Vec<_> = path.points().collect();
        assert_eq!(points.len(), 16 + 2);
        assert!((points[15].x - 300.0).abs() < 1e-3);
        assert_eq!(points[16].y, 96.0);
        assert_eq!(points[17].x, 0.0);
    }

    #[test]
    fn wave_moves_with_time() {
        let a = VineStyle::layer_path(&[0; 8], 0, 0.0, 100.0, 96.0);
        let b = VineStyle::layer_path(&[0; 8], 0, 1.0, 100.0, 96.0);
        assert_ne!(a, b);
    }

    #[test]
    fn too_few_bins_draws_nothing() {
        let mut canvas = RecordingCanvas::new(100.0, 96.0);
        VineStyle.draw(&[255], 0.0, &mut canvas);
        assert!(canvas.commands().is_empty());
    }
}
