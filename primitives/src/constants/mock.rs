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

#![cfg(feature = "mock")]

pub use super::*;
use frame_support::{parameter_types, PalletId};

// Balances parameters
parameter_types! {
    pub const ExistentialDeposit: Balance = 1;
}

// Prediction Market parameters
parameter_types! {
    pub const MinCreationFee: Balance = MILLI;
    pub const MinResolutionDelay: Moment = MILLISECS_PER_HOUR;
    pub const PmPalletId: PalletId = PM_PALLET_ID;
}

// Timestamp parameters
parameter_types! {
    pub const MinimumPeriod: Moment = 0;
}
