use std::{
    f32::consts::PI,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use realfft::{num_complex::Complex32, RealFftPlanner, RealToComplex};

use crate::{AudioConfig, Result, SiteError};

const BLACKMAN_ALPHA: f32 = 0.16;

/// Frequency analysis node.
///
/// Keeps the most recent `fft_size` samples and turns them into one
/// magnitude per frequency bin on request. Consecutive frames are blended
/// with an exponential moving average so the visual output does not jitter:
/// `smoothed[k] = τ·previous[k] + (1 − τ)·|X[k]|`.
pub struct SpectrumAnalyser {
    fft_size: usize,
    smoothing: f32,
    min_decibels: f32,
    max_decibels: f32,
    history: Vec<f32>,
    write_pos: usize,
    processed_samples: usize,
    window: Vec<f32>,
    smoothed: Vec<f32>,
    fft: FftResources,
}

impl SpectrumAnalyser {
    /// Builds an analyser for the given configuration.
    ///
    /// Fails when the configuration is invalid; callers treat that as "no
    /// analysis available" rather than a fatal error.
    pub fn new(config: &AudioConfig) -> Result<Self> {
        config.validate()?;

        let size = config.fft_size;
        let mut planner = RealFftPlanner::<f32>::new();
        let plan = planner.plan_fft_forward(size);
        let fft = FftResources {
            scratch: plan.make_scratch_vec(),
            spectrum: plan.make_output_vec(),
            input: plan.make_input_vec(),
            plan,
        };

        Ok(Self {
            fft_size: size,
            smoothing: config.smoothing,
            min_decibels: config.min_decibels,
            max_decibels: config.max_decibels,
            history: vec![0.0; size],
            write_pos: 0,
            processed_samples: 0,
            window: (0..size).map(|n| blackman_value(n, size)).collect(),
            smoothed: vec![0.0; size / 2],
            fft,
        })
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn frequency_bin_count(&self) -> usize {
        self.fft_size / 2
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Total number of samples pushed since construction or the last reset.
    pub fn processed_samples(&self) -> usize {
        self.processed_samples
    }

    /// Appends mono samples to the time-domain history.
    pub fn push_samples(&mut self, samples: &[f32]) {
        for sample in samples {
            self.history[self.write_pos] = *sample;
            self.write_pos = (self.write_pos + 1) % self.fft_size;
        }
        self.processed_samples += samples.len();
    }

    /// Clears history and smoothing state while preserving configuration.
    pub fn reset(&mut self) {
        self.history.iter_mut().for_each(|v| *v = 0.0);
        self.smoothed.iter_mut().for_each(|v| *v = 0.0);
        self.write_pos = 0;
        self.processed_samples = 0;
    }

    /// Writes the current spectrum in decibels, one value per bin.
    pub fn float_frequency_data(&mut self, out: &mut [f32]) -> Result<()> {
        self.analyse()?;
        for (slot, magnitude) in out.iter_mut().zip(&self.smoothed) {
            *slot = to_decibels(*magnitude);
        }
        Ok(())
    }

    /// Writes the current spectrum mapped from `[min_decibels, max_decibels]`
    /// onto `0..=255`, one value per bin. Extra output slots are untouched.
    pub fn byte_frequency_data(&mut self, out: &mut [u8]) -> Result<()> {
        self.analyse()?;
        let range = self.max_decibels - self.min_decibels;
        for (slot, magnitude) in out.iter_mut().zip(&self.smoothed) {
            let scaled = 255.0 / range * (to_decibels(*magnitude) - self.min_decibels);
            *slot = scaled.floor().clamp(0.0, 255.0) as u8;
        }
        Ok(())
    }

    fn analyse(&mut self) -> Result<()> {
        let size = self.fft_size;
        // Oldest sample sits at the write cursor.
        for n in 0..size {
            let sample = self.history[(self.write_pos + n) % size];
            self.fft.input[n] = sample * self.window[n];
        }

        self.fft.plan.process_with_scratch(
            &mut self.fft.input,
            &mut self.fft.spectrum,
            &mut self.fft.scratch,
        )?;

        let scale = 1.0 / size as f32;
        let tau = self.smoothing;
        for (smoothed, bin) in self.smoothed.iter_mut().zip(&self.fft.spectrum) {
            let magnitude = bin.norm() * scale;
            *smoothed = tau * *smoothed + (1.0 - tau) * magnitude;
        }
        Ok(())
    }
}

struct FftResources {
    plan: Arc<dyn RealToComplex<f32>>,
    scratch: Vec<Complex32>,
    spectrum: Vec<Complex32>,
    input: Vec<f32>,
}

impl fmt::Debug for SpectrumAnalyser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectrumAnalyser")
            .field("fft_size", &self.fft_size)
            .field("smoothing", &self.smoothing)
            .field("min_decibels", &self.min_decibels)
            .field("max_decibels", &self.max_decibels)
            .field("processed_samples", &self.processed_samples)
            .finish()
    }
}

/// Shared view over one [`SpectrumAnalyser`].
///
/// The media element pushes samples through one clone while the visualizer
/// reads frequency data through another.
#[derive(Clone)]
pub struct AnalysisHandle {
    shared: Arc<Mutex<SpectrumAnalyser>>,
}

impl AnalysisHandle {
    pub fn new(analyser: SpectrumAnalyser) -> Self {
        Self {
            shared: Arc::new(Mutex::new(analyser)),
        }
    }

    pub fn push_samples(&self, samples: &[f32]) -> Result<()> {
        if samples.is_empty() {
            return Ok(());
        }
        self.lock()?.push_samples(samples);
        Ok(())
    }

    pub fn byte_frequency_data(&self, out: &mut [u8]) -> Result<()> {
        self.lock()?.byte_frequency_data(out)
    }

    pub fn frequency_bin_count(&self) -> Result<usize> {
        Ok(self.lock()?.frequency_bin_count())
    }

    pub fn processed_samples(&self) -> Result<usize> {
        Ok(self.lock()?.processed_samples())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SpectrumAnalyser>> {
        self.shared
            .lock()
            .map_err(|_| SiteError::msg("spectrum analyser has been poisoned"))
    }
}

impl fmt::Debug for AnalysisHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisHandle").finish()
    }
}

fn to_decibels(magnitude: f32) -> f32 {
    if magnitude <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * magnitude.log10()
    }
}

fn blackman_value(index: usize, len: usize) -> f32 {
    let a0 = (1.0 - BLACKMAN_ALPHA) * 0.5;
    let a1 = 0.5;
    let a2 = BLACKMAN_ALPHA * 0.5;
    let phase = 2.0 * PI * index as f32 / len as f32;
    a0 - a1 * phase.cos() + a2 * (2.0 * phase).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyser(smoothing: f32) -> SpectrumAnalyser {
        SpectrumAnalyser::new(&AudioConfig {
            smoothing,
            ..Default::default()
        })
        .unwrap()
    }

    /// Sine sitting exactly on the centre of `bin` for a 128-point transform.
    fn tone(bin: usize, len: usize) -> Vec<f32> {
        (0..len)
            .map(|n| (2.0 * PI * bin as f32 * n as f32 / 128.0).sin())
            .collect()
    }

    #[test]
    fn bin_count_is_half_the_transform() {
        let analyser = analyser(0.8);
        assert_eq!(analyser.fft_size(), 128);
        assert_eq!(analyser.frequency_bin_count(), 64);
    }

    #[test]
    fn rejects_invalid_transform_size() {
        let err = SpectrumAnalyser::new(&AudioConfig {
            fft_size: 100,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn silence_maps_to_zero() {
        let mut analyser = analyser(0.8);
        analyser.push_samples(&[0.0; 256]);
        let mut bytes = vec![7_u8; 64];
        analyser.byte_frequency_data(&mut bytes).unwrap();
        assert!(bytes.iter().all(|b| *b == 0));
    }

    #[test]
    fn tone_peaks_at_its_bin() {
        let mut analyser = analyser(0.0);
        analyser.push_samples(&tone(10, 128));
        let mut bytes = vec![0_u8; 64];
        analyser.byte_frequency_data(&mut bytes).unwrap();

        assert_eq!(bytes[10], 255);
        assert!(bytes[40] < bytes[10]);
        let peak = bytes
            .iter()
            .enumerate()
            .max_by_key(|(_, v)| **v)
            .map(|(i, _)| i)
            .unwrap();
        assert!((9..=11).contains(&peak));
    }

    #[test]
    fn smoothing_carries_energy_into_the_next_frame() {
        let mut smoothed = analyser(0.8);
        let mut raw = analyser(0.0);
        for analyser in [&mut smoothed, &mut raw] {
            analyser.push_samples(&tone(10, 128));
            let mut scratch = vec![0_u8; 64];
            analyser.byte_frequency_data(&mut scratch).unwrap();
            analyser.push_samples(&[0.0; 128]);
        }

        let mut bytes = vec![0_u8; 64];
        smoothed.byte_frequency_data(&mut bytes).unwrap();
        assert!(bytes[10] > 0);

        raw.byte_frequency_data(&mut bytes).unwrap();
        assert_eq!(bytes[10], 0);
    }

    #[test]
    fn float_data_reports_decibels() {
        let mut analyser = analyser(0.0);
        analyser.push_samples(&tone(10, 128));
        let mut db = vec![0.0_f32; 64];
        analyser.float_frequency_data(&mut db).unwrap();
        assert!(db[10] > -30.0 && db[10] < 0.0);
    }

    #[test]
    fn handle_shares_state() {
        let handle = AnalysisHandle::new(analyser(0.8));
        let other = handle.clone();
        handle.push_samples(&[0.5; 32]).unwrap();
        assert_eq!(other.processed_samples().unwrap(), 32);
    }

    #[test]
    fn reset_clears_history() {
        let mut analyser = analyser(0.0);
        analyser.push_samples(&tone(10, 128));
        analyser.reset();
        assert_eq!(analyser.processed_samples(), 0);
        let mut bytes = vec![0_u8; 64];
        analyser.byte_frequency_data(&mut bytes).unwrap();
        assert!(bytes.iter().all(|b| *b == 0));
    }
}
