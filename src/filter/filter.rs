/// Smoothing coefficient, the weight given to the newest sample.
pub const ALPHA: f32 = 0.07;

/// A first-order RC low-pass filter realised as an exponential moving average:
/// `vout[n] = vout[n-1] + alpha * (vin[n] - vout[n-1])`, with `vout[-1] = 0`.
#[derive(Debug, Clone)]
pub struct RcFilter {
    alpha: f32,
    vout: f32,
}

impl Default for RcFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RcFilter {
    pub fn new() -> Self {
        RcFilter { alpha: ALPHA, vout: 0.0 }
    }

    /// Feeds one sample through the filter and returns the updated output.
    pub fn process(&mut self, vin: f32) -> f32 {
        self.vout += (vin - self.vout) * self.alpha;
        self.vout
    }

    /// Processes a block of samples.
    /// Returns a new vector containing the filtered signal.
    pub fn filter(&mut self, input: &[f32]) -> Vec<f32> {
        input.iter().map(|&x| self.process(x)).collect()
    }

    pub fn output(&self) -> f32 {
        self.vout
    }

    pub fn reset(&mut self) {
        self.vout = 0.0;
    }
}
