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

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoArbiter {
    fn create_market(a: u32, o: u32) -> Weight;
    fn place_bet() -> Weight;
    fn vote() -> Weight;
    fn withdraw_winnings() -> Weight;
    fn claim_arbitrator_fee() -> Weight;
    fn set_platform_fee() -> Weight;
}

/// Conservative estimates until the calls are benchmarked.
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoArbiter for WeightInfo<T> {
    fn create_market(a: u32, o: u32) -> Weight {
        Weight::from_parts(60_000_000, 6_000)
            .saturating_add(Weight::from_parts(400_000, 0).saturating_mul(a.into()))
            .saturating_add(Weight::from_parts(100_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads_writes(4, 4))
    }
    fn place_bet() -> Weight {
        Weight::from_parts(70_000_000, 8_000)
            .saturating_add(T::DbWeight::get().reads_writes(7, 7))
    }
    fn vote() -> Weight {
        Weight::from_parts(50_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads_writes(5, 4))
    }
    fn withdraw_winnings() -> Weight {
        Weight::from_parts(95_000_000, 10_600)
            .saturating_add(T::DbWeight::get().reads_writes(9, 6))
    }
    fn claim_arbitrator_fee() -> Weight {
        Weight::from_parts(75_000_000, 8_000)
            .saturating_add(T::DbWeight::get().reads_writes(8, 5))
    }
    fn set_platform_fee() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
}
