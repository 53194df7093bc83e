use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Mean and spread of recorded trigram durations, in milliseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimingSummary {
    pub mean: u16,
    pub sd: u16,
    pub n: usize,
}

impl TimingSummary {
    /// Sample standard deviation (n - 1). Results are truncated to whole milliseconds.
    pub fn new(samples: &[u16]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self::default();
        }

        let mean = samples.iter().map(|v| f64::from(*v)).sum::<f64>() / n as f64;
        let sd = if n > 1 {
            let squares = samples
                .iter()
                .map(|v| (f64::from(*v) - mean).powi(2))
                .sum::<f64>();
            (squares / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        Self {
            mean: mean as u16,
            sd: sd as u16,
            n,
        }
    }

    /// Words per minute for a trigram at the mean duration, taking five
    /// characters per word.
    pub fn wpm(&self) -> Option<u32> {
        if self.mean == 0 {
            return None;
        }
        Some(60000 / u32::from(self.mean) * 2 / 5)
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean: {}  sd: {}  n: {}  wpm: ", self.mean, self.sd, self.n)?;
        match self.wpm() {
            Some(wpm) => write!(f, "{}", wpm),
            None => f.write_str("-"),
        }
    }
}

/// Durations recorded for one trigram.
///
/// A value that is not an array yields nothing, and elements that do not fit a
/// `u16` are skipped.
pub fn durations(key: &str, value: &Value) -> Vec<u16> {
    let Some(recorded) = value.as_array() else {
        debug!(key, "skipping non-array timing entry");
        return Vec::new();
    };
    recorded
        .iter()
        .filter_map(|d| {
            let ms = d.as_u64().and_then(|x| u16::try_from(x).ok());
            if ms.is_none() {
                debug!(key, value = %d, "skipping invalid duration");
            }
            ms
        })
        .collect()
}

/// Flatten the duration arrays of a document into a single sample.
pub fn collect_durations(document: &Map<String, Value>) -> Vec<u16> {
    document
        .iter()
        .flat_map(|(key, value)| durations(key, value))
        .collect()
}
