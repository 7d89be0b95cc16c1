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
use crate::{ArbitratorFeesClaimed, Disbursements};
use arbiter_primitives::types::PayoutKind;
use test_case::test_case;

/// Total stake of one unit, A and B vote Yes, C doesn't vote.
fn resolved_market() -> MarketId {
    let market_id = create_yes_no_market();
    bet(BOB, market_id, 0, 6 * BASE / 10);
    bet(CHARLIE, market_id, 1, 4 * BASE / 10);
    expire();
    vote(ARB_A, market_id, 0);
    vote(ARB_B, market_id, 0);
    market_id
}

#[test]
fn claim_arbitrator_fee_works() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = resolved_market();
        assert_ok!(PredictionMarkets::claim_arbitrator_fee(
            RuntimeOrigin::signed(ARB_A),
            market_id
        ));

        // 1% of one unit, split between two arbitrators.
        let share = BASE / 200;
        assert_eq!(Balances::free_balance(ARB_A), INITIAL_BALANCE + share);
        assert!(ArbitratorFeesClaimed::<Runtime>::get(market_id, ARB_A));
        assert_eq!(Disbursements::<Runtime>::get(market_id).arbitrator_fees, share);
        assert_eq!(payouts(), vec![(market_id, ARB_A, share, PayoutKind::ArbitratorFee)]);
        System::assert_has_event(
            Event::ArbitratorFeeClaimed { market_id, arbitrator: ARB_A, amount: share }.into(),
        );

        assert_ok!(PredictionMarkets::claim_arbitrator_fee(
            RuntimeOrigin::signed(ARB_B),
            market_id
        ));
        assert_eq!(Disbursements::<Runtime>::get(market_id).arbitrator_fees, 2 * share);
    });
}

#[test]
fn claim_arbitrator_fee_splits_pool_in_draw() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with(2, committee(4));
        bet(BOB, market_id, 0, BASE);
        bet(CHARLIE, market_id, 1, 3 * BASE);
        expire();
        for (arbitrator, outcome) in [(ARB_A, 0), (ARB_B, 0), (ARB_C, 1), (ARB_D, 1)] {
            vote(arbitrator, market_id, outcome);
        }

        for arbitrator in committee(4) {
            assert_ok!(PredictionMarkets::claim_arbitrator_fee(
                RuntimeOrigin::signed(arbitrator),
                market_id
            ));
            assert_eq!(Balances::free_balance(arbitrator), INITIAL_BALANCE + BASE / 100);
        }
        assert_eq!(Disbursements::<Runtime>::get(market_id).arbitrator_fees, 4 * BASE / 100);
    });
}

#[test]
fn claim_arbitrator_fee_leaves_remainder_in_pot() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with(2, committee(5));
        bet(BOB, market_id, 0, 1_000);
        expire();
        for arbitrator in committee(3) {
            vote(arbitrator, market_id, 0);
        }
        // floor(floor(1_000 * 1%) / 3) = 3
        for arbitrator in committee(3) {
            assert_ok!(PredictionMarkets::claim_arbitrator_fee(
                RuntimeOrigin::signed(arbitrator),
                market_id
            ));
        }
        assert_eq!(Disbursements::<Runtime>::get(market_id).arbitrator_fees, 9);
        assert_eq!(pot_balance(market_id), 991);
    });
}

#[test_case(ARB_C; "arbitrator who didn't vote")]
#[test_case(BOB; "participant")]
#[test_case(ALICE; "creator")]
fn claim_arbitrator_fee_fails_if_not_eligible(who: AccountIdTest) {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = resolved_market();
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(who), market_id),
            Error::<Runtime>::NotEligible
        );
    });
}

#[test]
fn claim_arbitrator_fee_fails_for_dissenting_arbitrator() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_yes_no_market();
        bet(BOB, market_id, 0, BASE);
        expire();
        vote(ARB_A, market_id, 1);
        vote(ARB_B, market_id, 0);
        vote(ARB_C, market_id, 0);
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_A), market_id),
            Error::<Runtime>::NotEligible
        );
    });
}

#[test]
fn claim_arbitrator_fee_fails_on_second_attempt() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = resolved_market();
        assert_ok!(PredictionMarkets::claim_arbitrator_fee(
            RuntimeOrigin::signed(ARB_B),
            market_id
        ));
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_B), market_id),
            Error::<Runtime>::AlreadyClaimed
        );
    });
}

#[test]
fn claim_arbitrator_fee_fails_on_open_market() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_yes_no_market();
        bet(BOB, market_id, 0, BASE);
        expire();
        vote(ARB_A, market_id, 0);
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_A), market_id),
            Error::<Runtime>::NotResolved
        );
    });
}

#[test]
fn claim_arbitrator_fee_fails_if_share_rounds_to_zero() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_yes_no_market();
        bet(BOB, market_id, 0, 199);
        expire();
        vote(ARB_A, market_id, 0);
        vote(ARB_B, market_id, 0);
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_A), market_id),
            Error::<Runtime>::NothingToWithdraw
        );
    });
}

#[test]
fn claim_arbitrator_fee_fails_without_stakes() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_yes_no_market();
        expire();
        vote(ARB_A, market_id, 1);
        vote(ARB_B, market_id, 1);
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_A), market_id),
            Error::<Runtime>::NothingToWithdraw
        );
    });
}
