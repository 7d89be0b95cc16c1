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

use super::*;
use crate::PlatformFee;
use arbiter_primitives::constants::{DEFAULT_PLATFORM_FEE_BPS, MAX_PLATFORM_FEE_BPS};
use test_case::test_case;

#[test]
fn platform_fee_defaults_to_one_and_a_half_percent() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(PlatformFee::<Runtime>::get(), DEFAULT_PLATFORM_FEE_BPS);
        assert_eq!(DEFAULT_PLATFORM_FEE_BPS, 150);
    });
}

#[test_case(0)]
#[test_case(275)]
#[test_case(MAX_PLATFORM_FEE_BPS)]
fn set_platform_fee_works(fee: u16) {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(PredictionMarkets::set_platform_fee(RuntimeOrigin::root(), fee));
        assert_eq!(PlatformFee::<Runtime>::get(), fee);
        System::assert_last_event(Event::PlatformFeeSet { fee }.into());
    });
}

#[test]
fn set_platform_fee_keeps_fee_of_existing_markets() {
    ExtBuilder::default().build().execute_with(|| {
        let old = create_yes_no_market();
        assert_ok!(PredictionMarkets::set_platform_fee(RuntimeOrigin::root(), 500));
        let new = create_yes_no_market();
        assert_eq!(MarketCommons::market(&old).unwrap().platform_fee, DEFAULT_PLATFORM_FEE_BPS);
        assert_eq!(MarketCommons::market(&new).unwrap().platform_fee, 500);
    });
}

#[test]
fn set_platform_fee_fails_on_non_admin_origin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            PredictionMarkets::set_platform_fee(RuntimeOrigin::signed(ALICE), 0),
            DispatchError::BadOrigin
        );
    });
}

#[test]
fn set_platform_fee_fails_if_fee_is_too_high() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            PredictionMarkets::set_platform_fee(RuntimeOrigin::root(), MAX_PLATFORM_FEE_BPS + 1),
            Error::<Runtime>::PlatformFeeTooHigh
        );
    });
}
