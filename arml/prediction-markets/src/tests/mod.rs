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

#![cfg(all(feature = "mock", test))]

mod claim_arbitrator_fee;
mod integration;
mod set_platform_fee;

use crate::{mock::*, Config, Error, Event};
use alloc::{vec, vec::Vec};
use arbiter_primitives::{
    constants::{
        mock::{MinCreationFee, MinResolutionDelay},
        BASE,
    },
    traits::MarketCommonsPalletApi,
    types::{AccountIdTest, Balance, MarketCategory, MarketId, Moment, OutcomeIndex},
};
use frame_support::{assert_noop, assert_ok, traits::Get};
use sp_runtime::{DispatchError, DispatchResult};

/// Platform fee plus arbitrator fee for markets created with the default platform fee.
const DEFAULT_FEE_BPS: Balance = 250;

fn outcomes(count: u16) -> Vec<Vec<u8>> {
    (0..count).map(|o| alloc::format!("Outcome {o}").into_bytes()).collect()
}

fn resolves_at() -> Moment {
    START + MinResolutionDelay::get()
}

fn committee(size: u32) -> Vec<AccountIdTest> {
    match size {
        0..=5 => [ARB_A, ARB_B, ARB_C, ARB_D, ARB_E].into_iter().take(size as usize).collect(),
        _ => (100..100 + AccountIdTest::from(size)).collect(),
    }
}

fn create_market_call(
    creator: AccountIdTest,
    outcome_labels: Vec<Vec<u8>>,
    arbitrators: Vec<AccountIdTest>,
) -> DispatchResult {
    PredictionMarkets::create_market(
        RuntimeOrigin::signed(creator),
        b"Will it rain in Berlin on Sunday?".to_vec(),
        outcome_labels,
        resolves_at(),
        arbitrators,
        MarketCategory::Weather,
        MinCreationFee::get(),
    )
}

/// Creates a market of ALICE with `outcome_count` outcomes and returns its ID.
fn create_market_with(outcome_count: u16, arbitrators: Vec<AccountIdTest>) -> MarketId {
    assert_ok!(create_market_call(ALICE, outcomes(outcome_count), arbitrators));
    MarketCommons::latest_market_id().unwrap()
}

/// Yes/No market with the committee A, B and C.
fn create_yes_no_market() -> MarketId {
    create_market_with(2, committee(3))
}

fn bet(who: AccountIdTest, market_id: MarketId, outcome: OutcomeIndex, amount: Balance) {
    assert_ok!(PredictionMarkets::place_bet(
        RuntimeOrigin::signed(who),
        market_id,
        outcome,
        amount
    ));
}

fn vote(arbitrator: AccountIdTest, market_id: MarketId, outcome: OutcomeIndex) {
    assert_ok!(PredictionMarkets::vote(RuntimeOrigin::signed(arbitrator), market_id, outcome));
}

fn expire() {
    set_now(resolves_at());
}

/// `amount` minus the combined fee of a market with the default platform fee.
fn net_of_fees(amount: Balance) -> Balance {
    amount - amount * DEFAULT_FEE_BPS / 10_000
}

fn pot_balance(market_id: MarketId) -> Balance {
    Balances::free_balance(PredictionMarkets::pot_account(market_id))
}

fn fee_account_balance() -> Balance {
    Balances::free_balance(PredictionMarkets::fee_account())
}
