// This file is part of Bifrost.
//
// Bifrost is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Bifrost is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Bifrost.
// If not, see https://www.gnu.org/licenses/.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GAS_LIMIT_PERCENT_INCREASE, DEFAULT_SUBMISSION_FEE_PERCENT_INCREASE};

/// Safety margins applied to retryable estimates
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryableSettings {
    /// Percent added on top of the computed submission fee
    pub submission_fee_percent_increase: u32,
    /// Percent added on top of the simulated gas limit
    pub gas_limit_percent_increase: u32,
}

impl Default for RetryableSettings {
    fn default() -> Self {
        Self {
            submission_fee_percent_increase: DEFAULT_SUBMISSION_FEE_PERCENT_INCREASE,
            gas_limit_percent_increase: DEFAULT_GAS_LIMIT_PERCENT_INCREASE,
        }
    }
}
