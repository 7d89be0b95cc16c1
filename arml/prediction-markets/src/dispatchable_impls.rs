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

use crate::{
    ledger::StakeLedger,
    resolution::VotingEngine,
    withdrawal::WithdrawalGuard,
    AccountIdOf, BalanceOf, Config, Error, Event, MarketIdOf, MomentOf, Pallet,
    PlatformFee, LOG_TARGET,
};
use alloc::{collections::BTreeSet, vec::Vec};
use arbiter_primitives::{
    constants::{MAX_ARBITRATORS, MAX_OUTCOMES, MIN_ARBITRATORS, MIN_OUTCOMES},
    traits::MarketCommonsPalletApi,
    types::{
        Arbitrators, Description, Market, MarketCategory, MarketResolution, OutcomeIndex,
        OutcomeLabel, OutcomeLabels,
    },
};
use frame_support::{
    ensure, require_transactional,
    traits::{fungible::Mutate, tokens::Preservation, Get},
};
use sp_runtime::{
    traits::{Saturating, Zero},
    DispatchResult, SaturatedConversion,
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_create_market(
        who: AccountIdOf<T>,
        description: Vec<u8>,
        outcomes: Vec<Vec<u8>>,
        resolves_at: MomentOf<T>,
        arbitrators: Vec<AccountIdOf<T>>,
        category: MarketCategory,
        creation_fee: BalanceOf<T>,
    ) -> DispatchResult {
        ensure!(creation_fee >= T::MinCreationFee::get(), Error::<T>::CreationFeeTooLow);

        let description =
            Description::try_from(description).map_err(|_| Error::<T>::DescriptionTooLong)?;

        let outcome_count: u32 = outcomes.len().saturated_into();
        ensure!(
            (MIN_OUTCOMES..=MAX_OUTCOMES).contains(&outcome_count),
            Error::<T>::InvalidOutcomeCount
        );
        let outcomes = outcomes
            .into_iter()
            .map(|label| OutcomeLabel::try_from(label).map_err(|_| Error::<T>::OutcomeLabelTooLong))
            .collect::<Result<Vec<_>, _>>()?;
        let outcomes =
            OutcomeLabels::try_from(outcomes).map_err(|_| Error::<T>::InvalidOutcomeCount)?;

        let now = T::MarketCommons::now();
        ensure!(
            resolves_at >= now.saturating_add(T::MinResolutionDelay::get()),
            Error::<T>::ResolutionTimeTooSoon
        );

        let arbitrator_count: u32 = arbitrators.len().saturated_into();
        ensure!(
            (MIN_ARBITRATORS..=MAX_ARBITRATORS).contains(&arbitrator_count),
            Error::<T>::InvalidArbitratorCount
        );
        let mut seen = BTreeSet::new();
        for arbitrator in arbitrators.iter() {
            ensure!(*arbitrator != who, Error::<T>::CreatorIsArbitrator);
            ensure!(seen.insert(arbitrator), Error::<T>::DuplicateArbitrator);
        }
        let arbitrators =
            Arbitrators::try_from(arbitrators).map_err(|_| Error::<T>::InvalidArbitratorCount)?;

        T::Currency::transfer(&who, &Self::fee_account(), creation_fee, Preservation::Preserve)?;

        let market = Market {
            creator: who.clone(),
            description,
            outcomes,
            arbitrators,
            category,
            created_at: now,
            resolves_at,
            creation_fee,
            platform_fee: PlatformFee::<T>::get(),
            resolution: MarketResolution::Open,
        };
        let market_id = T::MarketCommons::push_market(market.clone())?;
        StakeLedger::<T>::open_pool(market_id, &market);

        log::debug!(
            target: LOG_TARGET,
            "market {:?} created by {:?}, resolves at {:?}",
            market_id,
            who,
            resolves_at,
        );
        Self::deposit_event(Event::MarketCreated {
            market_id,
            creator: who,
            resolves_at,
            category,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_place_bet(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        outcome: OutcomeIndex,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        let market = Self::market_of(&market_id)?;
        let now = T::MarketCommons::now();
        ensure!(market.accepts_stakes(now), Error::<T>::MarketClosed);
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        ensure!(market.is_valid_outcome(outcome), Error::<T>::InvalidOutcome);
        ensure!(!market.has_conflict_of_interest(&who), Error::<T>::ConflictOfInterest);

        T::Currency::transfer(
            &who,
            &Self::pot_account(market_id),
            amount,
            Preservation::Preserve,
        )?;
        StakeLedger::<T>::record_stake(market_id, &market, &who, outcome, amount, now)?;

        Self::deposit_event(Event::BetPlaced { market_id, who, outcome, amount });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_vote(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        outcome: OutcomeIndex,
    ) -> DispatchResult {
        let market = Self::market_of(&market_id)?;
        ensure!(market.is_arbitrator(&who), Error::<T>::NotArbitrator);
        ensure!(market.is_expired(T::MarketCommons::now()), Error::<T>::TooEarly);
        ensure!(!market.is_resolved(), Error::<T>::AlreadyResolved);
        ensure!(!VotingEngine::<T>::has_voted(market_id, &who), Error::<T>::AlreadyVoted);
        ensure!(market.is_valid_outcome(outcome), Error::<T>::InvalidOutcome);

        let verdict = VotingEngine::<T>::record_vote(market_id, &market, &who, outcome)?;
        Self::deposit_event(Event::VoteCast { market_id, arbitrator: who, outcome });

        if let Some(resolution) = verdict {
            VotingEngine::<T>::resolve(market_id, &market, resolution)?;
        }

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_withdraw_winnings(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
    ) -> DispatchResult {
        let market = Self::market_of(&market_id)?;
        ensure!(market.is_resolved(), Error::<T>::NotResolved);
        WithdrawalGuard::<T>::withdraw_winnings(market_id, &market, &who)
    }

    #[require_transactional]
    pub(crate) fn do_claim_arbitrator_fee(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
    ) -> DispatchResult {
        let market = Self::market_of(&market_id)?;
        ensure!(market.is_resolved(), Error::<T>::NotResolved);
        WithdrawalGuard::<T>::claim_arbitrator_fee(market_id, &market, &who)
    }
}
