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

#![allow(clippy::type_complexity)]

use crate::types::Market;
use alloc::fmt::Debug;
use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::{MaybeSerializeDeserialize, Member},
    storage::PrefixIterator,
    Parameter,
};
use parity_scale_codec::{FullCodec, HasCompact, MaxEncodedLen};
use sp_runtime::{
    traits::{AtLeast32Bit, AtLeast32BitUnsigned},
    DispatchError,
};

// Abstraction of the market type, which is not a part of `MarketCommonsPalletApi` because Rust
// doesn't support type aliases in traits.
pub type MarketOf<T> = Market<
    <T as MarketCommonsPalletApi>::AccountId,
    <T as MarketCommonsPalletApi>::Balance,
    <T as MarketCommonsPalletApi>::Moment,
>;

/// Abstraction over storage operations for markets
pub trait MarketCommonsPalletApi {
    type AccountId;
    type Balance: AtLeast32BitUnsigned
        + FullCodec
        + Copy
        + MaybeSerializeDeserialize
        + Debug
        + Default
        + scale_info::TypeInfo
        + MaxEncodedLen;
    type MarketId: AtLeast32Bit
        + Copy
        + Default
        + HasCompact
        + MaybeSerializeDeserialize
        + MaxEncodedLen
        + Member
        + Parameter;
    type Moment: AtLeast32Bit + Copy + Default + Parameter + MaxEncodedLen;

    // Market

    /// Latest attributed auto-generated ID
    ///
    /// Returns `Err` if no market has been created
    fn latest_market_id() -> Result<Self::MarketId, DispatchError>;

    /// Return an iterator over the key-value pairs of markets. Altering market storage during
    /// iteration results in undefined behavior.
    fn market_iter() -> PrefixIterator<(Self::MarketId, MarketOf<Self>)>;

    /// Gets a market from the storage.
    fn market(market_id: &Self::MarketId) -> Result<MarketOf<Self>, DispatchError>;

    /// Mutates a given market storage. Nothing is written if `cb` fails.
    fn mutate_market<F>(market_id: &Self::MarketId, cb: F) -> DispatchResult
    where
        F: FnOnce(&mut MarketOf<Self>) -> DispatchResult;

    /// Issues the next sequential ID, stores `market` under it and returns the ID.
    ///
    /// This function is the only means by which new IDs are issued.
    fn push_market(market: MarketOf<Self>) -> Result<Self::MarketId, DispatchError>;

    // Etc

    /// Returns the current UTC time (milliseconds)
    fn now() -> Self::Moment;
}
