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
use crate::{Disbursements, Pools};
use arbiter_primitives::types::MarketResolution;
use more_asserts::assert_le;
use test_case::test_case;

const PARTICIPANTS: [AccountIdTest; 4] = [BOB, CHARLIE, DAVE, EVE];

/// Stakes which don't divide evenly so that rounding matters.
fn stake_unevenly(market_id: MarketId) {
    bet(BOB, market_id, 0, 1_234_567_891);
    bet(CHARLIE, market_id, 1, 987_654_321);
    bet(DAVE, market_id, 0, 333_333_333);
    bet(EVE, market_id, 2, 777_777_777);
    bet(BOB, market_id, 2, 101);
    bet(DAVE, market_id, 1, 999_999_999);
}

/// Withdraws and claims everything that can be withdrawn and claimed.
fn settle(market_id: MarketId, arbitrators: &[AccountIdTest]) {
    for who in PARTICIPANTS {
        let _ = PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(who), market_id);
    }
    for &arbitrator in arbitrators {
        let _ =
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(arbitrator), market_id);
    }
}

#[test_case(&[0, 0, 1, 2, 0], MarketResolution::Resolved(0); "first outcome wins")]
#[test_case(&[2, 2, 2], MarketResolution::Resolved(2); "outcome with least stake wins")]
#[test_case(&[0, 1, 2, 1, 0], MarketResolution::Draw; "draw")]
fn payouts_never_exceed_total_stake(votes: &[OutcomeIndex], expected: MarketResolution) {
    ExtBuilder::default().build().execute_with(|| {
        let arbitrators = committee(5);
        let market_id = create_market_with(3, arbitrators.clone());
        stake_unevenly(market_id);
        let total = Pools::<Runtime>::get(market_id).unwrap().total;
        assert_eq!(pot_balance(market_id), total);

        expire();
        for (&arbitrator, &outcome) in arbitrators.iter().zip(votes) {
            vote(arbitrator, market_id, outcome);
        }
        assert_eq!(MarketCommons::market(&market_id).unwrap().resolution, expected);

        settle(market_id, &arbitrators);

        let disbursement = Disbursements::<Runtime>::get(market_id);
        let disbursed = disbursement.total();
        assert_le!(disbursed, total);
        assert_eq!(pot_balance(market_id), total - disbursed);
        let paid: Balance = payouts().iter().map(|(_, _, amount, _)| amount).sum();
        assert_eq!(paid + disbursement.platform_fees, disbursed);

        // The fee account received 1.5% of the stake, up to rounding.
        let platform_fee = total * 150 / 10_000;
        let tolerance = 2 * PARTICIPANTS.len() as Balance;
        assert_eq!(fee_account_balance(), MinCreationFee::get() + disbursement.platform_fees);
        assert_le!(platform_fee, disbursement.platform_fees + tolerance);
        assert_le!(disbursement.platform_fees, platform_fee + tolerance);
    });
}

#[test]
fn pool_stays_consistent_with_stakes() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_market_with(3, committee(3));
        stake_unevenly(market_id);

        let pool = Pools::<Runtime>::get(market_id).unwrap();
        assert!(pool.is_consistent());
        let per_participant: Balance = PARTICIPANTS
            .iter()
            .flat_map(|who| {
                (0..3).map(move |o| PredictionMarkets::user_bet_amount(market_id, who, o))
            })
            .sum();
        assert_eq!(per_participant, pool.total);
    });
}

#[test]
fn markets_are_settled_independently() {
    ExtBuilder::default().build().execute_with(|| {
        let first = create_yes_no_market();
        let second = create_yes_no_market();
        bet(BOB, first, 0, BASE);
        bet(CHARLIE, first, 1, BASE);
        bet(BOB, second, 1, 5 * BASE);
        bet(DAVE, second, 0, 5 * BASE);
        expire();
        vote(ARB_A, first, 0);
        vote(ARB_B, first, 0);

        assert_ok!(PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(BOB), first));
        assert_eq!(pot_balance(second), 10 * BASE);
        assert_noop!(
            PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(BOB), second),
            Error::<Runtime>::NotResolved
        );

        vote(ARB_C, second, 1);
        vote(ARB_A, second, 1);
        assert_ok!(PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(BOB), second));
        assert_eq!(
            Balances::free_balance(BOB),
            INITIAL_BALANCE - 6 * BASE + net_of_fees(2 * BASE) + net_of_fees(10 * BASE)
        );
    });
}

#[test]
fn full_lifecycle_of_a_market() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = create_yes_no_market();
        assert_eq!(PredictionMarkets::active_market_ids(), vec![market_id]);

        bet(BOB, market_id, 0, 6 * BASE / 10);
        bet(CHARLIE, market_id, 1, 4 * BASE / 10);
        assert_eq!(PredictionMarkets::outcome_probabilities(market_id), Ok(vec![6_000, 4_000]));

        expire();
        vote(ARB_A, market_id, 0);
        vote(ARB_B, market_id, 0);
        assert_eq!(PredictionMarkets::resolved_market_ids(), vec![market_id]);
        assert!(PredictionMarkets::active_market_ids().is_empty());

        assert_ok!(PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(BOB), market_id));
        assert_noop!(
            PredictionMarkets::withdraw_winnings(RuntimeOrigin::signed(CHARLIE), market_id),
            Error::<Runtime>::NothingToWithdraw
        );
        for arbitrator in [ARB_A, ARB_B] {
            assert_ok!(PredictionMarkets::claim_arbitrator_fee(
                RuntimeOrigin::signed(arbitrator),
                market_id
            ));
        }
        assert_noop!(
            PredictionMarkets::claim_arbitrator_fee(RuntimeOrigin::signed(ARB_C), market_id),
            Error::<Runtime>::NotEligible
        );

        // 97.5% to the winner, 1% to the arbitrators and 1.5% to the platform.
        assert_eq!(pot_balance(market_id), 0);
        assert_eq!(fee_account_balance(), MinCreationFee::get() + 15 * BASE / 1_000);
    });
}
