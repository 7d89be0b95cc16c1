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

use crate::types::PayoutKind;
use sp_runtime::DispatchResult;

/// Called after value has left a market pot.
///
/// The recipient is an external party and the implementation may call back into the pallet which
/// made the payout. All bookkeeping for the payout is committed before this hook runs. An error
/// reverts the whole payout, including the transfer.
pub trait OnPayout<AccountId, MarketId, Balance> {
    /// # Arguments
    ///
    /// - `market_id`: The market the payout was made from.
    /// - `who`: The recipient.
    /// - `amount`: The amount transferred.
    /// - `kind`: Whether winnings or an arbitrator fee were paid.
    fn on_payout(
        market_id: MarketId,
        who: &AccountId,
        amount: Balance,
        kind: PayoutKind,
    ) -> DispatchResult;
}

impl<AccountId, MarketId, Balance> OnPayout<AccountId, MarketId, Balance> for () {
    fn on_payout(_: MarketId, _: &AccountId, _: Balance, _: PayoutKind) -> DispatchResult {
        Ok(())
    }
}
