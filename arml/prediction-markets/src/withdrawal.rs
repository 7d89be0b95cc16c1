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

//! At-most-once payouts. This is the only writer of `WinningsWithdrawn`, `ArbitratorFeesClaimed`
//! and `Disbursements`.
//!
//! The platform share of each withdrawal's fee is moved to the fee account together with the
//! withdrawal. The arbitrators' part stays in the pot until claimed.
//!
//! Every payout records its effects before the pot is touched and before `OnPayout` is notified,
//! so a nested call for the same market and recipient fails with `AlreadyWithdrawn` or
//! `AlreadyClaimed`.

use crate::{
    ledger::StakeLedger,
    payout::{Payout, PayoutOps},
    resolution::VotingEngine,
    AccountIdOf, ArbitratorFeesClaimed, BalanceOf, Config, Disbursements, Error, Event,
    MarketIdOf, MarketOf, Pallet, WinningsWithdrawn, LOG_TARGET,
};
use arbiter_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
    traits::OnPayout,
    types::PayoutKind,
};
use core::marker::PhantomData;
use frame_support::{
    ensure,
    traits::{fungible::Mutate, tokens::Preservation},
};
use sp_runtime::{
    traits::{Saturating, Zero},
    DispatchError, DispatchResult,
};

pub(crate) struct WithdrawalGuard<T>(PhantomData<T>);

impl<T: Config> WithdrawalGuard<T> {
    pub(crate) fn has_withdrawn(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> bool {
        WinningsWithdrawn::<T>::get(market_id, who)
    }

    pub(crate) fn has_claimed(market_id: MarketIdOf<T>, who: &AccountIdOf<T>) -> bool {
        ArbitratorFeesClaimed::<T>::get(market_id, who)
    }

    /// Pays out the winnings (or the draw refund) of `who`. The market must be resolved.
    pub(crate) fn withdraw_winnings(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
    ) -> DispatchResult {
        ensure!(!Self::has_withdrawn(market_id, who), Error::<T>::AlreadyWithdrawn);
        let quote = Payout::<T>::winnings(market_id, market, who)?;
        ensure!(!quote.is_zero(), Error::<T>::NothingToWithdraw);
        let amount = Self::capped(market_id, market, quote.net)?;
        let platform_fee = Payout::<T>::platform_share(&quote)?
            .min(Self::remaining(market_id, market)?.saturating_sub(amount));

        WinningsWithdrawn::<T>::insert(market_id, who, true);
        Disbursements::<T>::try_mutate(market_id, |disbursement| -> DispatchResult {
            disbursement.winnings = disbursement.winnings.checked_add_res(&amount)?;
            disbursement.platform_fees =
                disbursement.platform_fees.checked_add_res(&platform_fee)?;
            Ok(())
        })?;
        Pallet::<T>::deposit_event(Event::WinningsWithdrawn {
            market_id,
            who: who.clone(),
            gross: quote.gross,
            fee: quote.fee,
            amount,
        });

        if !platform_fee.is_zero() {
            T::Currency::transfer(
                &Pallet::<T>::pot_account(market_id),
                &Pallet::<T>::fee_account(),
                platform_fee,
                Preservation::Expendable,
            )?;
            Pallet::<T>::deposit_event(Event::PlatformFeeCollected {
                market_id,
                amount: platform_fee,
            });
        }

        Self::pay(market_id, who, amount, PayoutKind::Winnings)
    }

    /// Pays out the fee share of arbitrator `who`. The market must be resolved.
    pub(crate) fn claim_arbitrator_fee(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
    ) -> DispatchResult {
        ensure!(VotingEngine::<T>::is_eligible(market_id, market, who), Error::<T>::NotEligible);
        ensure!(!Self::has_claimed(market_id, who), Error::<T>::AlreadyClaimed);
        let share = Payout::<T>::arbitrator_share(market_id, market)?;
        ensure!(!share.is_zero(), Error::<T>::NothingToWithdraw);
        let amount = Self::capped(market_id, market, share)?;

        ArbitratorFeesClaimed::<T>::insert(market_id, who, true);
        Disbursements::<T>::try_mutate(market_id, |disbursement| -> DispatchResult {
            disbursement.arbitrator_fees = disbursement.arbitrator_fees.checked_add_res(&amount)?;
            Ok(())
        })?;
        Pallet::<T>::deposit_event(Event::ArbitratorFeeClaimed {
            market_id,
            arbitrator: who.clone(),
            amount,
        });

        Self::pay(market_id, who, amount, PayoutKind::ArbitratorFee)
    }

    /// What is left of the market's total stake.
    fn remaining(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let total = StakeLedger::<T>::pool(market_id, market).total;
        total.checked_sub_res(&Disbursements::<T>::get(market_id).total())
    }

    /// Limits `amount` to what is left of the market's total stake.
    fn capped(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let remaining = Self::remaining(market_id, market)?;
        if amount > remaining {
            log::warn!(
                target: LOG_TARGET,
                "payout of {:?} from market {:?} capped to remaining {:?}",
                amount,
                market_id,
                remaining,
            );
            ensure!(!remaining.is_zero(), Error::<T>::NothingToWithdraw);
            return Ok(remaining);
        }
        Ok(amount)
    }

    fn pay(
        market_id: MarketIdOf<T>,
        who: &AccountIdOf<T>,
        amount: BalanceOf<T>,
        kind: PayoutKind,
    ) -> DispatchResult {
        T::Currency::transfer(
            &Pallet::<T>::pot_account(market_id),
            who,
            amount,
            Preservation::Expendable,
        )?;
        T::OnPayout::on_payout(market_id, who, amount, kind)
    }
}
