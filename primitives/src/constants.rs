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

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, BasisPoints, Moment};
use frame_support::PalletId;

// Definitions for time
pub const MILLISECS_PER_MINUTE: Moment = 60_000;
pub const MILLISECS_PER_HOUR: Moment = MILLISECS_PER_MINUTE * 60;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000
pub const MILLI: Balance = CENT / 10; //  10_000_000

// Fees and shares are expressed in basis points.
pub const BASIS_POINTS: BasisPoints = 10_000;

// Prediction Markets
/// Share of every payout which is pooled for the arbitrators who voted with the result.
pub const ARBITRATOR_FEE_BPS: BasisPoints = 100;
/// Platform fee applied to markets created before the admin changes it.
pub const DEFAULT_PLATFORM_FEE_BPS: BasisPoints = 150;
/// Upper bound for the adjustable platform fee (10%).
pub const MAX_PLATFORM_FEE_BPS: BasisPoints = 1_000;
pub const MIN_OUTCOMES: u32 = 2;
pub const MAX_OUTCOMES: u32 = 10;
pub const MAX_OUTCOME_LABEL_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 512;
pub const MIN_ARBITRATORS: u32 = 3;
pub const MAX_ARBITRATORS: u32 = 21;
/// Pallet identifier, used to derive the fee account and the per-market pot accounts.
pub const PM_PALLET_ID: PalletId = PalletId(*b"arb/pred");
