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

//! Entitlements of participants and arbitrators. Nothing in here writes to storage.
//!
//! All amounts are computed on `u128` with a 256-bit intermediate product and truncating division.
//! The platform fee and the arbitrator fee are added up and deducted from the gross amount in one
//! step, so there is exactly one rounding per payout.

use crate::{
    ledger::StakeLedger, resolution::VotingEngine, types::PayoutQuote, AccountIdOf, BalanceOf,
    Config, Error, MarketIdOf, MarketOf, PayoutQuoteOf,
};
use alloc::vec::Vec;
use arbiter_primitives::{
    constants::ARBITRATOR_FEE_BPS,
    types::{BasisPoints, MarketResolution},
};
use core::marker::PhantomData;
use sp_runtime::{DispatchError, SaturatedConversion};

pub(crate) trait PayoutOps<T: Config> {
    /// What `who` receives from `market_id` when withdrawing now.
    ///
    /// Zero, not an error, if `who` has no stake on the winning outcome (or no stake at all in a
    /// draw). Fails with `NotResolved` if the market is open.
    fn winnings(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
    ) -> Result<PayoutQuoteOf<T>, DispatchError>;

    /// The part of `quote.fee` which goes to the platform. The rest is the arbitrators' 1%.
    fn platform_share(quote: &PayoutQuoteOf<T>) -> Result<BalanceOf<T>, DispatchError>;

    /// 1% of the market's total stake.
    fn arbitrator_fee_pool(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// The share of the arbitrator fee pool which each eligible arbitrator receives.
    fn arbitrator_share(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError>;

    /// The stake on each outcome relative to the total stake, in basis points.
    fn probabilities(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<Vec<BasisPoints>, DispatchError>;
}

pub(crate) struct Payout<T>(PhantomData<T>);

impl<T: Config> Payout<T> {
    fn combined_fee(market: &MarketOf<T>) -> BasisPoints {
        market.platform_fee.saturating_add(ARBITRATOR_FEE_BPS)
    }
}

impl<T: Config> PayoutOps<T> for Payout<T> {
    fn winnings(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        who: &AccountIdOf<T>,
    ) -> Result<PayoutQuoteOf<T>, DispatchError> {
        let fee = Self::combined_fee(market);
        let quote = match market.resolution {
            MarketResolution::Open => return Err(Error::<T>::NotResolved.into()),
            MarketResolution::Resolved(winner) => {
                let pool = StakeLedger::<T>::pool(market_id, market);
                let stake = StakeLedger::<T>::stake_of(market_id, who, winner);
                detail::winnings(
                    stake.saturated_into(),
                    pool.total.saturated_into(),
                    pool.stake_on(winner).saturated_into(),
                    fee,
                )?
            }
            MarketResolution::Draw => {
                let stake = StakeLedger::<T>::total_stake_of(market_id, who);
                detail::refund(stake.saturated_into(), fee)?
            }
        };
        Ok(PayoutQuote {
            gross: quote.gross.saturated_into(),
            fee: quote.fee.saturated_into(),
            net: quote.net.saturated_into(),
        })
    }

    fn platform_share(quote: &PayoutQuoteOf<T>) -> Result<BalanceOf<T>, DispatchError> {
        detail::platform_share(quote.gross.saturated_into(), quote.fee.saturated_into())
            .map(|x| x.saturated_into())
    }

    fn arbitrator_fee_pool(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let total = StakeLedger::<T>::pool(market_id, market).total;
        detail::fee_of(total.saturated_into(), ARBITRATOR_FEE_BPS).map(|x| x.saturated_into())
    }

    fn arbitrator_share(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let total = StakeLedger::<T>::pool(market_id, market).total;
        let eligible = VotingEngine::<T>::eligible_count(market_id, market);
        detail::arbitrator_share(total.saturated_into(), eligible).map(|x| x.saturated_into())
    }

    fn probabilities(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<Vec<BasisPoints>, DispatchError> {
        let pool = StakeLedger::<T>::pool(market_id, market);
        let stakes = pool.per_outcome.iter().map(|&x| x.saturated_into()).collect::<Vec<_>>();
        detail::probabilities(&stakes, pool.total.saturated_into())
    }
}

mod detail {
    use super::*;
    use arbiter_primitives::{
        constants::BASIS_POINTS,
        math::checked_ops_res::{mul_div_floor, CheckedDivRes, CheckedSubRes},
    };

    /// `floor(amount * bps / 10_000)`
    pub(super) fn fee_of(amount: u128, bps: BasisPoints) -> Result<u128, DispatchError> {
        mul_div_floor(amount, bps.into(), BASIS_POINTS.into())
    }

    fn quote(gross: u128, fee_bps: BasisPoints) -> Result<PayoutQuote<u128>, DispatchError> {
        let fee = fee_of(gross, fee_bps)?;
        let net = gross.checked_sub_res(&fee)?;
        Ok(PayoutQuote { gross, fee, net })
    }

    /// The proportional share of `total` for `stake` on the winning outcome, net of fees.
    pub(super) fn winnings(
        stake: u128,
        total: u128,
        winning_pool: u128,
        fee_bps: BasisPoints,
    ) -> Result<PayoutQuote<u128>, DispatchError> {
        if stake == 0 || winning_pool == 0 {
            return Ok(PayoutQuote::zero());
        }
        let gross = mul_div_floor(stake, total, winning_pool)?;
        quote(gross, fee_bps)
    }

    /// The refund of `stake` in a draw, net of fees.
    pub(super) fn refund(
        stake: u128,
        fee_bps: BasisPoints,
    ) -> Result<PayoutQuote<u128>, DispatchError> {
        quote(stake, fee_bps)
    }

    /// `fee - floor(gross * 1%)`
    pub(super) fn platform_share(gross: u128, fee: u128) -> Result<u128, DispatchError> {
        fee.checked_sub_res(&fee_of(gross, ARBITRATOR_FEE_BPS)?)
    }

    /// `floor(floor(total * 1%) / eligible)`. The remainder stays in the pot.
    pub(super) fn arbitrator_share(total: u128, eligible: u32) -> Result<u128, DispatchError> {
        if eligible == 0 {
            return Ok(0);
        }
        fee_of(total, ARBITRATOR_FEE_BPS)?.checked_div_res(&u128::from(eligible))
    }

    /// `floor(stake * 10_000 / total)` for each outcome, or all zero if `total` is zero.
    pub(super) fn probabilities(
        stakes: &[u128],
        total: u128,
    ) -> Result<Vec<BasisPoints>, DispatchError> {
        if total == 0 {
            return Ok(alloc::vec![0; stakes.len()]);
        }
        stakes
            .iter()
            .map(|&stake| {
                mul_div_floor(stake, BASIS_POINTS.into(), total).map(|p| p.saturated_into())
            })
            .collect()
    }

}
