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

/// CCTP destination domain
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, strum::Display)]
#[repr(u32)]
pub enum ChainDomain {
    /// Ethereum
    Ethereum = 0,
    /// Arbitrum
    Arbitrum = 3,
}

impl TryFrom<u32> for ChainDomain {
    type Error = anyhow::Error;

    fn try_from(domain: u32) -> Result<Self, Self::Error> {
        match domain {
            0 => Ok(ChainDomain::Ethereum),
            3 => Ok(ChainDomain::Arbitrum),
            _ => anyhow::bail!("unknown CCTP domain: {domain}"),
        }
    }
}

impl From<ChainDomain> for u32 {
    fn from(domain: ChainDomain) -> Self {
        domain as u32
    }
}
