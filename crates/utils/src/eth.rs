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

//! Utilities for working with addresses across layers.

use alloy_primitives::{address, Address, B256, U256};

/// Offset added to an L1 contract address to produce the address it acts as on L2.
///
/// From https://github.com/OffchainLabs/nitro/blob/057bf836fcf719e803b0486914bc957134f691fd/arbos/util/util.go#L204
pub const L1_TO_L2_ALIAS_OFFSET: Address = address!("1111000000000000000000000000000000001111");

const ADDRESS_LENGTH: usize = 20;

/// Applies the L1 to L2 address alias.
///
/// Returns `(address + L1_TO_L2_ALIAS_OFFSET) mod 2^160`.
pub fn apply_l1_to_l2_alias(l1_address: Address) -> Address {
    // two 160 bit values cannot overflow 256 bits
    let sum = U256::from_be_slice(l1_address.as_slice())
        + U256::from_be_slice(L1_TO_L2_ALIAS_OFFSET.as_slice());
    // keeps the low 20 bytes of the word
    Address::from_word(B256::from(sum))
}

/// Builds an address from raw bytes, rejecting anything that is not exactly 20 bytes.
pub fn address_from_slice(bytes: &[u8]) -> anyhow::Result<Address> {
    if bytes.len() != ADDRESS_LENGTH {
        anyhow::bail!(
            "invalid address length: expected {ADDRESS_LENGTH} bytes, got {}",
            bytes.len()
        );
    }
    Ok(Address::from_slice(bytes))
}

/// Left pads a 20 byte address to a 32 byte word.
pub fn pad_address_to_bytes32(address: Address) -> B256 {
    address.into_word()
}
