//! Conversion of attenuations in dB to linear ripple amplitudes.

/// Peak passband deviation `dp` for a permissible passband attenuation `ap` (dB).
///
/// `dp = (g - 1) / (g + 1)` with `g = 10^(ap / 20)`.
pub fn passband_ripple(ap: f64) -> f64 {
    let g = 10f64.powf(0.05 * ap);
    (g - 1.0) / (g + 1.0)
}

/// Peak stopband deviation `da` for a stopband attenuation `aa` (dB).
pub fn stopband_ripple(aa: f64) -> f64 {
    10f64.powf(-0.05 * aa)
}
