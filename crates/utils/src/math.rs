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

//! Math utilities

use alloy_primitives::U256;

/// Increases a value by a percentage, truncating the increase.
///
/// Computes `n + floor(n * percent / 100)`, the same padding the Arbitrum SDK applies
/// to retryable estimates. Returns `None` if the computation overflows.
pub fn increase_by_percent(n: U256, percent: u32) -> Option<U256> {
    let increase = percent_of(n, percent)?;
    n.checked_add(increase)
}

/// Take a percentage of a number, truncating.
///
/// Returns `None` if `n * percent` overflows.
pub fn percent_of(n: U256, percent: u32) -> Option<U256> {
    n.checked_mul(U256::from(percent))
        .map(|v| v / U256::from(100))
}
