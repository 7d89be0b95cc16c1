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

//! Read-only views for runtime APIs and off-chain tooling. None of these functions write to
//! storage.

use crate::{
    ledger::StakeLedger,
    payout::{Payout, PayoutOps},
    resolution::VotingEngine,
    types::{ArbitratorFeeInfo, MarketInfo},
    withdrawal::WithdrawalGuard,
    AccountIdOf, BalanceOf, BetRecordOf, Config, MarketIdOf, MomentOf, Pallet, PayoutQuoteOf,
};
use alloc::vec::Vec;
use arbiter_primitives::{
    traits::MarketCommonsPalletApi,
    types::{BasisPoints, OutcomeIndex},
};
use sp_runtime::DispatchError;

pub type MarketInfoOf<T> = MarketInfo<MarketIdOf<T>, AccountIdOf<T>, BalanceOf<T>, MomentOf<T>>;
pub type ArbitratorFeeInfoOf<T> = ArbitratorFeeInfo<BalanceOf<T>>;

impl<T: Config> Pallet<T> {
    /// The market together with its stake totals and voting progress.
    pub fn market_info(market_id: MarketIdOf<T>) -> Result<MarketInfoOf<T>, DispatchError> {
        let market = Self::market_of(&market_id)?;
        let pool = StakeLedger::<T>::pool(market_id, &market);
        let tally = VotingEngine::<T>::tally(market_id, &market);
        Ok(MarketInfo {
            market_id,
            total_staked: pool.total,
            outcome_stakes: pool.per_outcome.into_inner(),
            votes_cast: tally.cast,
            required_votes: market.required_votes(),
            market,
        })
    }

    /// IDs of all markets which are not resolved yet, ascending. This includes expired markets
    /// which are waiting for votes.
    pub fn active_market_ids() -> Vec<MarketIdOf<T>> {
        Self::market_ids_where(|resolved| !resolved)
    }

    /// IDs of all resolved markets (including draws), ascending.
    pub fn resolved_market_ids() -> Vec<MarketIdOf<T>> {
        Self::market_ids_where(|resolved| resolved)
    }

    /// IDs of all markets created by `who`, ascending.
    pub fn markets_created_by(who: &AccountIdOf<T>) -> Vec<MarketIdOf<T>> {
        let mut ids = T::MarketCommons::market_iter()
            .filter(|(_, market)| market.creator == *who)
            .map(|(market_id, _)| market_id)
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    /// Stake on each outcome relative to the total stake, in basis points. All zero if nobody has
    /// staked.
    pub fn outcome_probabilities(
        market_id: MarketIdOf<T>,
    ) -> Result<Vec<BasisPoints>, DispatchError> {
        let market = Self::market_of(&market_id)?;
        Payout::<T>::probabilities(market_id, &market)
    }

    /// Every stake `who` has placed, in the order they were placed.
    pub fn user_bets(who: &AccountIdOf<T>) -> Vec<BetRecordOf<T>> {
        StakeLedger::<T>::bets_of(who)
    }

    pub fn user_bet_amount(
        market_id: MarketIdOf<T>,
        who: &AccountIdOf<T>,
        outcome: OutcomeIndex,
    ) -> BalanceOf<T> {
        StakeLedger::<T>::stake_of(market_id, who, outcome)
    }

    pub fn has_withdrawn(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> bool {
        WithdrawalGuard::<T>::has_withdrawn(market_id, who)
    }

    pub fn has_voted(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> bool {
        VotingEngine::<T>::has_voted(market_id, who)
    }

    /// The fee pool of `market_id` and what `who` may claim from it.
    pub fn arbitrator_fee_info(
        market_id: MarketIdOf<T>,
        who: &AccountIdOf<T>,
    ) -> Result<ArbitratorFeeInfoOf<T>, DispatchError> {
        let market = Self::market_of(&market_id)?;
        Ok(ArbitratorFeeInfo {
            fee_pool: Payout::<T>::arbitrator_fee_pool(market_id, &market)?,
            eligible_arbitrators: VotingEngine::<T>::eligible_count(market_id, &market),
            share: Payout::<T>::arbitrator_share(market_id, &market)?,
            is_eligible: VotingEngine::<T>::is_eligible(market_id, &market, who),
            has_claimed: WithdrawalGuard::<T>::has_claimed(market_id, who),
        })
    }

    /// What `who` would receive from `withdraw_winnings` right now, before the payout cap.
    ///
    /// Zero if `who` has already withdrawn. Fails with `NotResolved` if the market is open.
    pub fn quote_winnings(
        market_id: MarketIdOf<T>,
        who: &AccountIdOf<T>,
    ) -> Result<PayoutQuoteOf<T>, DispatchError> {
        let market = Self::market_of(&market_id)?;
        let quote = Payout::<T>::winnings(market_id, &market, who)?;
        if WithdrawalGuard::<T>::has_withdrawn(market_id, who) {
            return Ok(PayoutQuoteOf::<T>::zero());
        }
        Ok(quote)
    }

    fn market_ids_where<F>(predicate: F) -> Vec<MarketIdOf<T>>
    where
        F: Fn(bool) -> bool,
    {
        let mut ids = T::MarketCommons::market_iter()
            .filter(|(_, market)| predicate(market.is_resolved()))
            .map(|(market_id, _)| market_id)
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }
}
