use tracing::info;

use crate::events::Event;
use crate::types::quoting_parameters::QuotingParameters;

/// Smallest width or size delta worth republishing.
const PARAMETER_EPSILON: f64 = 1e-4;

#[derive(Debug, Default)]
pub struct QuotingParametersRepository {
    latest: QuotingParameters,
    new_parameters: Event<QuotingParameters>,
}

impl QuotingParametersRepository {
    pub fn latest(&self) -> &QuotingParameters {
        &self.latest
    }

    pub fn new_parameters(&mut self) -> &mut Event<QuotingParameters> {
        &mut self.new_parameters
    }

    /// Replaces the parameters wholesale when width or size moved by more than
    /// the epsilon. No sign or bounds checks are applied.
    pub fn update_parameters(&mut self, parameters: QuotingParameters) -> bool {
        let width_changed = (self.latest.width - parameters.width).abs() > PARAMETER_EPSILON;
        let size_changed = (self.latest.size - parameters.size).abs() > PARAMETER_EPSILON;

        if !width_changed && !size_changed {
            return false;
        }

        self.latest = parameters;
        info!(
            width = self.latest.width,
            size = self.latest.size,
            "changed quoting parameters"
        );
        self.new_parameters.notify(&self.latest);

        true
    }
}
