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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

mod mock;

pub use arbiter_primitives::traits::{MarketCommonsPalletApi, MarketOf};
pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{MarketCommonsPalletApi, MarketOf};
    use arbiter_primitives::types::Market;
    use core::marker::PhantomData;
    use frame_support::{
        dispatch::DispatchResult,
        pallet_prelude::{MaybeSerializeDeserialize, StorageMap, StorageValue, ValueQuery},
        storage::PrefixIterator,
        traits::{tokens::Balance, StorageVersion, Time},
        Blake2_128Concat, Parameter,
    };
    use parity_scale_codec::{HasCompact, MaxEncodedLen};
    use sp_runtime::{
        traits::{AtLeast32Bit, CheckedAdd, Member, Saturating, Zero},
        ArithmeticError, DispatchError,
    };

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub(crate) type MarketOfPallet<T> = Market<AccountIdOf<T>, <T as Config>::Balance, MomentOf<T>>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {}

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The balance type used for fees stored alongside markets.
        type Balance: Balance + MaybeSerializeDeserialize;

        /// The identifier of individual markets.
        type MarketId: AtLeast32Bit
            + Copy
            + Default
            + HasCompact
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        /// Time tracker. Must return milliseconds.
        type Timestamp: Time;
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A market with the provided ID does not exist.
        MarketDoesNotExist,
        /// It is not possible to fetch the latest market ID when
        /// no market has been created.
        NoMarketHasBeenCreated,
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    impl<T> Pallet<T>
    where
        T: Config,
    {
        // Returns the ID for the next market and records the ID that follows it.
        //
        // Returns `Err` if `MarketId` addition overflows.
        fn next_market_id() -> Result<T::MarketId, DispatchError> {
            let id = MarketCounter::<T>::get();
            let next = id.checked_add(&T::MarketId::from(1u8)).ok_or(ArithmeticError::Overflow)?;
            <MarketCounter<T>>::put(next);
            Ok(id)
        }
    }

    impl<T> MarketCommonsPalletApi for Pallet<T>
    where
        T: Config,
    {
        type AccountId = T::AccountId;
        type Balance = T::Balance;
        type MarketId = T::MarketId;
        type Moment = MomentOf<T>;

        // Market

        fn latest_market_id() -> Result<Self::MarketId, DispatchError> {
            let next = <MarketCounter<T>>::get();
            if next.is_zero() {
                return Err(Error::<T>::NoMarketHasBeenCreated.into());
            }
            Ok(next.saturating_sub(T::MarketId::from(1u8)))
        }

        fn market_iter() -> PrefixIterator<(Self::MarketId, MarketOf<Self>)> {
            <Markets<T>>::iter()
        }

        fn market(market_id: &Self::MarketId) -> Result<MarketOf<Self>, DispatchError> {
            <Markets<T>>::try_get(market_id).map_err(|_err| Error::<T>::MarketDoesNotExist.into())
        }

        fn mutate_market<F>(market_id: &Self::MarketId, cb: F) -> DispatchResult
        where
            F: FnOnce(&mut MarketOf<Self>) -> DispatchResult,
        {
            <Markets<T>>::try_mutate(market_id, |opt| {
                if let Some(market) = opt {
                    cb(market)?;
                    return Ok(());
                }
                Err(Error::<T>::MarketDoesNotExist.into())
            })
        }

        fn push_market(market: MarketOf<Self>) -> Result<Self::MarketId, DispatchError> {
            let market_id = Self::next_market_id()?;
            <Markets<T>>::insert(market_id, market);
            log::debug!(target: "runtime::market-commons", "stored market {:?}", market_id);
            Ok(market_id)
        }

        // Etc

        fn now() -> Self::Moment {
            T::Timestamp::now()
        }
    }

    /// Holds all markets
    #[pallet::storage]
    pub type Markets<T: Config> =
        StorageMap<_, Blake2_128Concat, T::MarketId, MarketOfPallet<T>>;

    /// The number of markets that have been created (including removed markets) and the next
    /// identifier for a created market.
    #[pallet::storage]
    pub type MarketCounter<T: Config> = StorageValue<_, T::MarketId, ValueQuery>;
}
