//! Synthesized clip decoding.

use crate::error::{Result, RevoiceError};
use std::io::Cursor;

/// Decode an encoded WAV clip into mono samples at the target rate.
///
/// Supports arbitrary sample rates and channels, downmixing stereo and
/// resampling as needed so clips can be appended directly to the track.
pub fn decode_wav_clip(bytes: &[u8], target_rate: u32) -> Result<Vec<i16>> {
    let mut reader =
        hound::WavReader::new(Cursor::new(bytes)).map_err(|e| RevoiceError::AudioDecode {
            message: format!("failed to parse WAV clip: {e}"),
        })?;

    let spec = reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels;

    let raw_samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| RevoiceError::AudioDecode {
            message: format!("failed to read WAV samples: {e}"),
        })?;

    // Convert to mono if stereo
    let mono_samples = if source_channels == 2 {
        raw_samples
            .chunks_exact(2)
            .map(|chunk| {
                let left = chunk[0] as i32;
                let right = chunk[1] as i32;
                ((left + right) / 2) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    if source_rate == target_rate {
        Ok(mono_samples)
    } else {
        Ok(resample(&mono_samples, source_rate, target_rate))
    }
}

/// Simple linear interpolation resampling.
pub fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
