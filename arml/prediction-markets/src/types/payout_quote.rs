// Copyright 2022-2025 Forecasting Technologies LTD.
// Copyright 2021-2022 Zeitgeist PM LLC.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, RuntimeDebug};

/// Breakdown of a participant's entitlement.
///
/// `net == gross - fee` always holds.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct PayoutQuote<BA> {
    /// Proportional share of the pool, or the refunded stake in a draw.
    pub gross: BA,
    /// Combined platform and arbitrator fee deducted from `gross`.
    pub fee: BA,
    /// The amount that is actually transferred.
    pub net: BA,
}

impl<BA: Zero> PayoutQuote<BA> {
    pub fn zero() -> Self {
        PayoutQuote { gross: BA::zero(), fee: BA::zero(), net: BA::zero() }
    }

    pub fn is_zero(&self) -> bool {
        self.net.is_zero()
    }
}
