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

//! Stake bookkeeping. This is the only writer of `Pools`, `Stakes`, `ParticipantStakes`,
//! `BetLog` and `BetCount`. Custody of the staked value is up to the caller.

use crate::{
    types::{BetRecord, OutcomePool},
    AccountIdOf, BalanceOf, BetCount, BetLog, BetRecordOf, Config, Error, MarketIdOf, MarketOf,
    MomentOf, OutcomePoolOf, ParticipantStakes, Pools, Stakes,
};
use alloc::vec::Vec;
use arbiter_primitives::{math::checked_ops_res::CheckedAddRes, types::OutcomeIndex};
use core::marker::PhantomData;
use sp_runtime::DispatchError;

pub(crate) struct StakeLedger<T>(PhantomData<T>);

impl<T: Config> StakeLedger<T> {
    /// Adds `amount` to the totals of `outcome` and appends a record to the bet log of `who`.
    ///
    /// Returns the updated pool. Fails without writing anything on overflow or if `outcome` is
    /// out of range.
    pub(crate) fn record_stake(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
        outcome: OutcomeIndex,
        amount: BalanceOf<T>,
        now: MomentOf<T>,
    ) -> Result<OutcomePoolOf<T>, DispatchError> {
        let mut pool = Self::pool(market_id, market);
        let slot =
            pool.per_outcome.get_mut(usize::from(outcome)).ok_or(Error::<T>::InvalidOutcome)?;
        *slot = slot.checked_add_res(&amount)?;
        pool.total = pool.total.checked_add_res(&amount)?;

        let stake = Stakes::<T>::get((market_id, who, outcome)).checked_add_res(&amount)?;
        let participant_total =
            ParticipantStakes::<T>::get(market_id, who).checked_add_res(&amount)?;
        let index = BetCount::<T>::get(who);
        let next_index = index.checked_add_res(&1)?;

        Pools::<T>::insert(market_id, &pool);
        Stakes::<T>::insert((market_id, who, outcome), stake);
        ParticipantStakes::<T>::insert(market_id, who, participant_total);
        BetLog::<T>::insert(
            who,
            index,
            BetRecord { market_id, outcome, amount, placed_at: now },
        );
        BetCount::<T>::insert(who, next_index);

        Ok(pool)
    }

    /// Stores an empty pool for a newly created market.
    pub(crate) fn open_pool(market_id: MarketIdOf<T>, market: &MarketOf<T>) {
        Pools::<T>::insert(market_id, OutcomePool::new(market.outcome_count()));
    }

    /// The stake totals of `market_id`. Empty if nobody has staked yet.
    pub(crate) fn pool(market_id: MarketIdOf<T>, market: &MarketOf<T>) -> OutcomePoolOf<T> {
        Pools::<T>::get(market_id).unwrap_or_else(|| OutcomePool::new(market.outcome_count()))
    }

    pub(crate) fn stake_of(
        market_id: MarketIdOf<T>,
        who: &AccountIdOf<T>,
        outcome: OutcomeIndex,
    ) -> BalanceOf<T> {
        Stakes::<T>::get((market_id, who, outcome))
    }

    /// The stake of `who` in `market_id` across all outcomes.
    pub(crate) fn total_stake_of(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> BalanceOf<T> {
        ParticipantStakes::<T>::get(market_id, who)
    }

    /// The bet log of `who`, oldest first.
    pub(crate) fn bets_of(who: &AccountIdOf<T>) -> Vec<BetRecordOf<T>> {
        (0..BetCount::<T>::get(who)).filter_map(|index| BetLog::<T>::get(who, index)).collect()
    }
}
