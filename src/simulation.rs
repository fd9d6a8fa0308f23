//! Modeled ICP / CBF recovery after the injury event.
//!
//! Both curves hold their baseline until `event_time_hours`, then decay
//! exponentially back toward it. Brain stress is the mean of the two
//! deviations, each normalized by its initial jump, so it starts at 1.0
//! at the event and falls toward 0. The model is illustrative, not clinical.

use serde::Serialize;

/// Number of samples on the time grid.
pub const GRID_POINTS: usize = 2400;

/// Grid span in hours (ten days).
pub const HORIZON_HOURS: f64 = 240.0;

/// Model constants. `Default` is the canonical parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoveryModel {
    /// mmHg
    pub icp_baseline: f64,
    /// mL/100g/min
    pub cbf_baseline: f64,
    pub delta_icp: f64,
    pub delta_cbf: f64,
    pub tau_icp_hours: f64,
    pub tau_cbf_hours: f64,
    pub event_time_hours: f64,
}

impl Default for RecoveryModel {
    fn default() -> Self {
        let cbf_baseline = 50.0;
        Self {
            icp_baseline: 10.0,
            cbf_baseline,
            delta_icp: 20.0,
            delta_cbf: 0.3 * cbf_baseline,
            tau_icp_hours: 80.0,
            tau_cbf_hours: 100.0,
            event_time_hours: 24.0,
        }
    }
}

impl RecoveryModel {
    pub fn icp_at(&self, hour: f64) -> f64 {
        if hour < self.event_time_hours {
            return self.icp_baseline;
        }
        let elapsed = hour - self.event_time_hours;
        self.icp_baseline + self.delta_icp * (-elapsed / self.tau_icp_hours).exp()
    }

    pub fn cbf_at(&self, hour: f64) -> f64 {
        if hour < self.event_time_hours {
            return self.cbf_baseline;
        }
        let elapsed = hour - self.event_time_hours;
        self.cbf_baseline - self.delta_cbf * (-elapsed / self.tau_cbf_hours).exp()
    }

    /// Mean of the normalized ICP rise and CBF drop.
    pub fn brain_stress(&self, icp: f64, cbf: f64) -> f64 {
        let icp_stress = (icp - self.icp_baseline) / self.delta_icp;
        let cbf_stress = (self.cbf_baseline - cbf) / self.delta_cbf;
        (icp_stress + cbf_stress) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceSample {
    pub hour: f64,
    pub icp: f64,
    pub cbf: f64,
    pub brain_stress: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationTrace {
    pub model: RecoveryModel,
    /// First grid index whose time is at or after the event.
    pub event_index: usize,
    pub samples: Vec<TraceSample>,
}

impl SimulationTrace {
    pub fn brain_stress(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.brain_stress)
    }

    pub fn last(&self) -> Option<&TraceSample> {
        self.samples.last()
    }
}

/// Evenly spaced points over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// Evaluates the model on the fixed ten-day grid.
pub fn simulate(model: &RecoveryModel) -> SimulationTrace {
    let hours = linspace(0.0, HORIZON_HOURS, GRID_POINTS);
    let event_index = hours.partition_point(|&h| h < model.event_time_hours);

    let samples = hours
        .iter()
        .enumerate()
        .map(|(i, &hour)| {
            if i < event_index {
                TraceSample {
                    hour,
                    icp: model.icp_baseline,
                    cbf: model.cbf_baseline,
                    brain_stress: 0.0,
                }
            } else {
                let icp = model.icp_at(hour);
                let cbf = model.cbf_at(hour);
                TraceSample {
                    hour,
                    icp,
                    cbf,
                    brain_stress: model.brain_stress(icp, cbf),
                }
            }
        })
        .collect();

    tracing::debug!(event_index, points = GRID_POINTS, "recovery trace computed");

    SimulationTrace {
        model: *model,
        event_index,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn default_constants() {
        let m = RecoveryModel::default();
        assert_eq!(m.icp_baseline, 10.0);
        assert_eq!(m.cbf_baseline, 50.0);
        assert_eq!(m.delta_icp, 20.0);
        assert!((m.delta_cbf - 15.0).abs() < EPS);
        assert_eq!(m.tau_icp_hours, 80.0);
        assert_eq!(m.tau_cbf_hours, 100.0);
        assert_eq!(m.event_time_hours, 24.0);
    }

    #[test]
    fn grid_spans_zero_to_240_inclusive() {
        let grid = linspace(0.0, HORIZON_HOURS, GRID_POINTS);
        assert_eq!(grid.len(), 2400);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[2399], 240.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn event_index_is_first_sample_at_or_after_event() {
        let trace = simulate(&RecoveryModel::default());
        let idx = trace.event_index;
        assert!(trace.samples[idx].hour >= 24.0);
        assert!(trace.samples[idx - 1].hour < 24.0);
        // 24 / (240 / 2399) = 239.9, so the first post-event sample is 240.
        assert_eq!(idx, 240);
    }

    #[test]
    fn pre_event_samples_sit_at_baseline() {
        let trace = simulate(&RecoveryModel::default());
        for sample in trace.samples.iter().filter(|s| s.hour < 24.0) {
            assert_eq!(sample.icp, 10.0);
            assert_eq!(sample.cbf, 50.0);
            assert_eq!(sample.brain_stress, 0.0);
        }
    }

    #[test]
    fn decay_applies_from_event_index() {
        let model = RecoveryModel::default();
        let trace = simulate(&model);
        let first = trace.samples[trace.event_index];
        let elapsed = first.hour - 24.0;
        assert!((first.icp - (10.0 + 20.0 * (-elapsed / 80.0).exp())).abs() < EPS);
        assert!((first.cbf - (50.0 - 15.0 * (-elapsed / 100.0).exp())).abs() < EPS);
        // Stress is close to 1 right after the event.
        assert!(first.brain_stress > 0.99 && first.brain_stress <= 1.0);
    }

    #[test]
    fn end_of_horizon_values() {
        let trace = simulate(&RecoveryModel::default());
        let last = trace.last().unwrap();
        assert_eq!(last.hour, 240.0);
        let icp = 10.0 + 20.0 * (-216.0f64 / 80.0).exp();
        let cbf = 50.0 - 15.0 * (-216.0f64 / 100.0).exp();
        assert!((last.icp - icp).abs() < EPS);
        assert!((last.cbf - cbf).abs() < EPS);
        assert!((last.icp - 11.344).abs() < 1e-3);
        assert!((last.cbf - 48.270).abs() < 1e-3);
        // Converging, not yet back at baseline.
        assert!(last.icp > 10.0 && last.cbf < 50.0);
    }

    #[test]
    fn stress_decreases_monotonically_after_event() {
        let trace = simulate(&RecoveryModel::default());
        let post: Vec<f64> = trace.brain_stress().skip(trace.event_index).collect();
        assert!(post.windows(2).all(|w| w[1] < w[0]));
        assert!(post.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn simulation_is_deterministic() {
        let a = simulate(&RecoveryModel::default());
        let b = simulate(&RecoveryModel::default());
        assert_eq!(a.samples, b.samples);
    }
}
