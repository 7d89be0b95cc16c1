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
use sp_runtime::{traits::Saturating, RuntimeDebug};

/// Value which has already left a market's pot.
#[derive(Clone, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Disbursement<BA> {
    /// Sum of all winnings and draw refunds paid out.
    pub winnings: BA,
    /// Sum of all arbitrator fee shares paid out.
    pub arbitrator_fees: BA,
    /// Sum of all platform fees moved to the fee account.
    pub platform_fees: BA,
}

impl<BA: Saturating + Copy> Disbursement<BA> {
    pub fn total(&self) -> BA {
        self.winnings.saturating_add(self.arbitrator_fees).saturating_add(self.platform_fees)
    }
}
