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

//! Committee voting. This is the only writer of `Votes`, `Tallies` and the `resolution` field of
//! markets.

use crate::{
    ledger::StakeLedger, types::VoteTally, AccountIdOf, Config, Error, Event, MarketIdOf,
    MarketOf, Pallet, Tallies, Votes, LOG_TARGET,
};
use arbiter_primitives::{
    traits::MarketCommonsPalletApi,
    types::{MarketResolution, OutcomeIndex},
};
use core::marker::PhantomData;
use frame_support::ensure;
use sp_runtime::{DispatchError, DispatchResult};

pub(crate) struct VotingEngine<T>(PhantomData<T>);

impl<T: Config> VotingEngine<T> {
    pub(crate) fn has_voted(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> bool {
        Votes::<T>::contains_key(market_id, who)
    }

    pub(crate) fn vote_of(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> Option<OutcomeIndex> {
        Votes::<T>::get(market_id, who)
    }

    pub(crate) fn tally(market_id: MarketIdOf<T>, market: &MarketOf<T>) -> VoteTally {
        Tallies::<T>::get(market_id).unwrap_or_else(|| VoteTally::new(market.outcome_count()))
    }

    /// Stores the vote of `who` and returns the resolution it leads to, if any.
    ///
    /// Permission and timing checks are the caller's responsibility.
    pub(crate) fn record_vote(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
        outcome: OutcomeIndex,
    ) -> Result<Option<MarketResolution>, DispatchError> {
        ensure!(!Self::has_voted(market_id, who), Error::<T>::AlreadyVoted);
        let mut tally = Self::tally(market_id, market);
        ensure!(tally.record(outcome), Error::<T>::InvalidOutcome);

        Votes::<T>::insert(market_id, who, outcome);
        let verdict = tally.verdict(market.arbitrator_count());
        Tallies::<T>::insert(market_id, tally);

        Ok(verdict)
    }

    /// Moves an open market into its final state. A resolved market is never reopened.
    pub(crate) fn resolve(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        resolution: MarketResolution,
    ) -> DispatchResult {
        ensure!(resolution.is_final(), Error::<T>::NotResolved);
        T::MarketCommons::mutate_market(&market_id, |market| {
            ensure!(!market.is_resolved(), Error::<T>::AlreadyResolved);
            market.resolution = resolution;
            Ok(())
        })?;

        let pool = StakeLedger::<T>::pool(market_id, market);
        let winning_pool =
            resolution.winning_outcome().map_or(pool.total, |outcome| pool.stake_on(outcome));
        log::debug!(
            target: LOG_TARGET,
            "market {:?} resolved as {:?} with winning pool {:?}",
            market_id,
            resolution,
            winning_pool,
        );
        Pallet::<T>::deposit_event(Event::MarketResolved { market_id, resolution, winning_pool });

        Ok(())
    }

    /// Whether `who` may claim a share of the arbitrator fee pool.
    ///
    /// Voting for the winning outcome is required. In a draw, having voted at all is enough.
    pub(crate) fn is_eligible(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
    ) -> bool {
        match (market.resolution, Self::vote_of(market_id, who)) {
            (MarketResolution::Resolved(winner), Some(vote)) => vote == winner,
            (MarketResolution::Draw, Some(_)) => true,
            _ => false,
        }
    }

    /// Number of arbitrators that share the fee pool. Zero while the market is open.
    pub(crate) fn eligible_count(market_id: MarketIdOf<T>, market: &MarketOf<T>) -> u32 {
        let tally = Self::tally(market_id, market);
        match market.resolution {
            MarketResolution::Open => 0,
            MarketResolution::Resolved(winner) => tally.votes_for(winner),
            MarketResolution::Draw => tally.cast,
        }
    }
}
