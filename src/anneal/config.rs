//! Annealing schedule configuration.

/// Temperature schedule for an annealing run.
///
/// Temperature decays geometrically from `max_temp` to `min_temp` over
/// `steps` iterations: at step `i`,
/// `T_i = max_temp * exp(-i/steps * ln(max_temp / min_temp))`.
///
/// # Examples
///
/// ```
/// use graph_anneal::anneal::Schedule;
///
/// let schedule = Schedule::default()
///     .with_max_temp(50.0)
///     .with_min_temp(0.5)
///     .with_steps(20_000)
///     .with_seed(42);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Starting temperature. Higher values allow more exploration.
    pub max_temp: f64,

    /// Final temperature. Must stay above zero: the acceptance rule
    /// divides by the temperature.
    pub min_temp: f64,

    /// Total number of moves attempted.
    pub steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            max_temp: 100.0,
            min_temp: 0.1,
            steps: 100_000,
            seed: None,
        }
    }
}

impl Schedule {
    pub fn with_max_temp(mut self, t: f64) -> Self {
        self.max_temp = t;
        self
    }

    pub fn with_min_temp(mut self, t: f64) -> Self {
        self.min_temp = t;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature at step `i` of the run.
    pub fn temperature(&self, step: usize) -> f64 {
        let factor = -(self.max_temp / self.min_temp).ln();
        self.max_temp * (factor * step as f64 / self.steps as f64).exp()
    }

    /// Validates the schedule.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_temp.is_finite() || self.min_temp <= 0.0 {
            return Err(format!("min_temp must be positive, got {}", self.min_temp));
        }
        if !self.max_temp.is_finite() || self.max_temp <= self.min_temp {
            return Err(format!(
                "max_temp must be greater than min_temp, got {} <= {}",
                self.max_temp, self.min_temp
            ));
        }
        if self.steps == 0 {
            return Err("steps must be positive".into());
        }
        Ok(())
    }
}
