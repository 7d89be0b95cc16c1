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

#![cfg(test)]

use crate::{self as arml_market_commons};
use arbiter_primitives::{
    constants::mock::MinimumPeriod,
    types::{AccountIdTest, Balance, BlockTest, MarketId, Moment},
};
use frame_support::{construct_runtime, derive_impl};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

construct_runtime!(
    pub enum Runtime {
        MarketCommons: arml_market_commons,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
);

impl crate::Config for Runtime {
    type Balance = Balance;
    type MarketId = MarketId;
    type Timestamp = Timestamp;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
    type AccountId = AccountIdTest;
    type Block = BlockTest<Runtime>;
    type Lookup = IdentityLookup<Self::AccountId>;
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

pub struct ExtBuilder {}

#[allow(clippy::derivable_impls)]
impl Default for ExtBuilder {
    fn default() -> Self {
        Self {}
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let _ = env_logger::builder().is_test(true).try_init();
        let t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();
        t.into()
    }
}
