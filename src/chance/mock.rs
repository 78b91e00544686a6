use std::collections::VecDeque;

use super::Chance;

/// A scripted [`Chance`] for tests. Returns pre-defined draws in order and
/// repeats the last one of each kind once its script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedChance {
    uniform: VecDeque<f64>,
    normal: VecDeque<f64>,
    last_uniform: f64,
    last_normal: f64,
}

impl ScriptedChance {
    pub fn new(uniform: Vec<f64>, normal: Vec<f64>) -> Self {
        Self {
            uniform: uniform.into(),
            normal: normal.into(),
            last_uniform: 0.5,
            last_normal: 0.0,
        }
    }

    /// Every uniform draw is `u`, every pause is exactly the mean.
    pub fn constant(u: f64) -> Self {
        Self::new(vec![u], vec![0.0])
    }
}

impl Chance for ScriptedChance {
    fn uniform(&mut self) -> f64 {
        if let Some(u) = self.uniform.pop_front() {
            self.last_uniform = u;
        }
        self.last_uniform
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.normal.pop_front() {
            self.last_normal = z;
        }
        self.last_normal
    }
}
