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

extern crate alloc;

mod dispatchable_impls;
mod ledger;
pub mod mock;
mod payout;
mod queries;
mod resolution;
mod tests;
pub mod types;
pub mod weights;
mod withdrawal;

pub use pallet::*;
pub use queries::{ArbitratorFeeInfoOf, MarketInfoOf};

#[frame_support::pallet]
mod pallet {
    use crate::{
        types::{BetRecord, Disbursement, OutcomePool, PayoutQuote, VoteTally},
        weights::WeightInfoArbiter,
    };
    use alloc::vec::Vec;
    use arbiter_primitives::{
        constants::{DEFAULT_PLATFORM_FEE_BPS, MAX_PLATFORM_FEE_BPS},
        traits::{MarketCommonsPalletApi, OnPayout},
        types::{BasisPoints, Market, MarketCategory, MarketResolution, OutcomeIndex},
    };
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{
            Blake2_128Concat, EnsureOrigin, NMapKey, OptionQuery, StorageDoubleMap, StorageMap,
            StorageNMap, StorageValue, Twox64Concat, ValueQuery,
        },
        traits::{
            fungible::{Inspect, Mutate},
            Get, IsType, StorageVersion,
        },
        transactional, PalletId,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use sp_runtime::{traits::AccountIdConversion, DispatchResult, SaturatedConversion};

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::arml-prediction-markets";

    const POT_TAG: [u8; 3] = *b"pot";

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> = <<T as Config>::Currency as Inspect<AccountIdOf<T>>>::Balance;
    pub type MarketIdOf<T> = <<T as Config>::MarketCommons as MarketCommonsPalletApi>::MarketId;
    pub type MomentOf<T> = <<T as Config>::MarketCommons as MarketCommonsPalletApi>::Moment;
    pub type MarketOf<T> = Market<AccountIdOf<T>, BalanceOf<T>, MomentOf<T>>;
    pub type OutcomePoolOf<T> = OutcomePool<BalanceOf<T>>;
    pub type BetRecordOf<T> = BetRecord<MarketIdOf<T>, BalanceOf<T>, MomentOf<T>>;
    pub type DisbursementOf<T> = Disbursement<BalanceOf<T>>;
    pub type PayoutQuoteOf<T> = PayoutQuote<BalanceOf<T>>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new market.
        ///
        /// The creation fee is transferred from the caller to the pallet account and is not
        /// refunded.
        ///
        /// # Parameters
        ///
        /// - `origin`: The creator of the market.
        /// - `description`: The question the market asks.
        /// - `outcomes`: The labels of the possible outcomes, in order.
        /// - `resolves_at`: The moment (milliseconds) at which staking closes and voting opens.
        ///   Must be at least `MinResolutionDelay` in the future.
        /// - `arbitrators`: The voting committee. Must be distinct and not contain the caller.
        /// - `category`: Topic tag of the market.
        /// - `creation_fee`: Amount paid for the creation. Must be at least `MinCreationFee`.
        ///
        /// Complexity: `O(a^2 + o)`, where `a` is the number of arbitrators and `o` the number of
        /// outcomes.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_market(
            arbitrators.len().saturated_into(),
            outcomes.len().saturated_into(),
        ))]
        #[transactional]
        pub fn create_market(
            origin: OriginFor<T>,
            description: Vec<u8>,
            outcomes: Vec<Vec<u8>>,
            resolves_at: MomentOf<T>,
            arbitrators: Vec<AccountIdOf<T>>,
            category: MarketCategory,
            #[pallet::compact] creation_fee: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create_market(
                who,
                description,
                outcomes,
                resolves_at,
                arbitrators,
                category,
                creation_fee,
            )
        }

        /// Stake `amount` on `outcome` of an open market.
        ///
        /// The amount is moved into the market's pot account. Stakes of the same caller on the same
        /// outcome accumulate.
        ///
        /// # Parameters
        ///
        /// - `origin`: The participant. Must be neither the creator nor an arbitrator.
        /// - `market_id`: The market to stake on.
        /// - `outcome`: The index of the outcome.
        /// - `amount`: The amount to stake. Must be non-zero.
        ///
        /// Complexity: `O(a)`, where `a` is the number of arbitrators.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::place_bet())]
        #[transactional]
        pub fn place_bet(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: MarketIdOf<T>,
            outcome: OutcomeIndex,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_place_bet(who, market_id, outcome, amount)
        }

        /// Vote for the outcome that occurred.
        ///
        /// The market is resolved within this call if the vote decides it.
        ///
        /// # Parameters
        ///
        /// - `origin`: An arbitrator of the market who has not voted yet.
        /// - `market_id`: The market to vote on. Its resolution time must have passed.
        /// - `outcome`: The index of the outcome.
        ///
        /// Complexity: `O(a + o)`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::vote())]
        #[transactional]
        pub fn vote(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: MarketIdOf<T>,
            outcome: OutcomeIndex,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_vote(who, market_id, outcome)
        }

        /// Withdraw winnings from a resolved market, or the refund if the market is a draw.
        ///
        /// May be called at most once per market and participant.
        ///
        /// # Parameters
        ///
        /// - `origin`: The participant.
        /// - `market_id`: The resolved market.
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::withdraw_winnings())]
        #[transactional]
        pub fn withdraw_winnings(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: MarketIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_withdraw_winnings(who, market_id)
        }

        /// Claim the caller's share of the arbitrator fee pool of a resolved market.
        ///
        /// # Parameters
        ///
        /// - `origin`: An arbitrator who voted for the winning outcome, or who voted at all if
        ///   the market is a draw.
        /// - `market_id`: The resolved market.
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::claim_arbitrator_fee())]
        #[transactional]
        pub fn claim_arbitrator_fee(
            origin: OriginFor<T>,
            #[pallet::compact] market_id: MarketIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_claim_arbitrator_fee(who, market_id)
        }

        /// Set the platform fee for markets created from now on.
        ///
        /// Existing markets keep the fee they were created with.
        ///
        /// # Parameters
        ///
        /// - `origin`: Must satisfy `AdminOrigin`.
        /// - `fee`: The new fee in basis points. Must not exceed 1000 (10%).
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_platform_fee())]
        #[transactional]
        pub fn set_platform_fee(origin: OriginFor<T>, fee: BasisPoints) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(fee <= MAX_PLATFORM_FEE_BPS, Error::<T>::PlatformFeeTooHigh);
            PlatformFee::<T>::put(fee);
            Self::deposit_event(Event::PlatformFeeSet { fee });
            Ok(())
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The origin which may change the platform fee.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The currency in which stakes, fees and payouts are denominated.
        type Currency: Mutate<Self::AccountId>;

        type MarketCommons: MarketCommonsPalletApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
            >;

        /// The minimum fee for creating a market.
        #[pallet::constant]
        type MinCreationFee: Get<BalanceOf<Self>>;

        /// The minimum time (milliseconds) between the creation of a market and its resolution
        /// time.
        #[pallet::constant]
        type MinResolutionDelay: Get<MomentOf<Self>>;

        /// Notified after every payout.
        type OnPayout: OnPayout<Self::AccountId, MarketIdOf<Self>, BalanceOf<Self>>;

        /// Identifier of this pallet. Used to derive the fee account and the market pots.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoArbiter;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::type_value]
    pub fn DefaultPlatformFee() -> BasisPoints {
        DEFAULT_PLATFORM_FEE_BPS
    }

    /// Platform fee (basis points) applied to markets created from now on.
    #[pallet::storage]
    pub type PlatformFee<T: Config> =
        StorageValue<_, BasisPoints, ValueQuery, DefaultPlatformFee>;

    /// Stake totals per market. Created together with the market.
    #[pallet::storage]
    pub type Pools<T: Config> =
        StorageMap<_, Blake2_128Concat, MarketIdOf<T>, OutcomePoolOf<T>, OptionQuery>;

    /// Running stake total per market, participant and outcome.
    #[pallet::storage]
    pub type Stakes<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, MarketIdOf<T>>,
            NMapKey<Blake2_128Concat, AccountIdOf<T>>,
            NMapKey<Twox64Concat, OutcomeIndex>,
        ),
        BalanceOf<T>,
        ValueQuery,
    >;

    /// Running stake total per market and participant, across all outcomes.
    #[pallet::storage]
    pub type ParticipantStakes<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        BalanceOf<T>,
        ValueQuery,
    >;

    /// Append-only log of every stake, keyed by participant and position.
    #[pallet::storage]
    pub type BetLog<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        AccountIdOf<T>,
        Twox64Concat,
        u32,
        BetRecordOf<T>,
        OptionQuery,
    >;

    /// Number of entries in a participant's bet log.
    #[pallet::storage]
    pub type BetCount<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, u32, ValueQuery>;

    /// The outcome each arbitrator voted for.
    #[pallet::storage]
    pub type Votes<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        OutcomeIndex,
        OptionQuery,
    >;

    /// Vote counts per market. Absent until the first vote.
    #[pallet::storage]
    pub type Tallies<T: Config> =
        StorageMap<_, Blake2_128Concat, MarketIdOf<T>, VoteTally, OptionQuery>;

    /// Set once a participant has withdrawn from a market. Never cleared.
    #[pallet::storage]
    pub type WinningsWithdrawn<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        bool,
        ValueQuery,
    >;

    /// Set once an arbitrator has claimed their fee share of a market. Never cleared.
    #[pallet::storage]
    pub type ArbitratorFeesClaimed<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        bool,
        ValueQuery,
    >;

    /// Value paid out of each market pot so far.
    #[pallet::storage]
    pub type Disbursements<T: Config> =
        StorageMap<_, Blake2_128Concat, MarketIdOf<T>, DisbursementOf<T>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A market was created.
        MarketCreated {
            market_id: MarketIdOf<T>,
            creator: AccountIdOf<T>,
            resolves_at: MomentOf<T>,
            category: MarketCategory,
        },
        /// A participant staked on an outcome.
        BetPlaced {
            market_id: MarketIdOf<T>,
            who: AccountIdOf<T>,
            outcome: OutcomeIndex,
            amount: BalanceOf<T>,
        },
        /// An arbitrator voted.
        VoteCast { market_id: MarketIdOf<T>, arbitrator: AccountIdOf<T>, outcome: OutcomeIndex },
        /// A market was resolved. `winning_pool` is the stake on the winning outcome, or the
        /// total stake if the market is a draw.
        MarketResolved {
            market_id: MarketIdOf<T>,
            resolution: MarketResolution,
            winning_pool: BalanceOf<T>,
        },
        /// A participant withdrew winnings or a refund. `amount` was transferred.
        WinningsWithdrawn {
            market_id: MarketIdOf<T>,
            who: AccountIdOf<T>,
            gross: BalanceOf<T>,
            fee: BalanceOf<T>,
            amount: BalanceOf<T>,
        },
        /// An arbitrator claimed their fee share.
        ArbitratorFeeClaimed {
            market_id: MarketIdOf<T>,
            arbitrator: AccountIdOf<T>,
            amount: BalanceOf<T>,
        },
        /// The platform share of a withdrawal's fee was moved to the fee account.
        PlatformFeeCollected { market_id: MarketIdOf<T>, amount: BalanceOf<T> },
        /// The platform fee for new markets was changed.
        PlatformFeeSet { fee: BasisPoints },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The market does not exist.
        InvalidMarket,
        /// The market no longer accepts stakes because its resolution time has passed or it is
        /// resolved.
        MarketClosed,
        /// The outcome index is out of range for the market.
        InvalidOutcome,
        /// Stakes must be non-zero.
        ZeroAmount,
        /// The creator and the arbitrators of a market may not stake on it.
        ConflictOfInterest,
        /// The caller is not an arbitrator of the market.
        NotArbitrator,
        /// Voting opens at the market's resolution time.
        TooEarly,
        /// The market is already resolved.
        AlreadyResolved,
        /// The arbitrator has already voted on this market.
        AlreadyVoted,
        /// The market is not resolved yet.
        NotResolved,
        /// The participant has already withdrawn from this market.
        AlreadyWithdrawn,
        /// The computed entitlement is zero.
        NothingToWithdraw,
        /// The arbitrator didn't vote for the result and may not claim a fee share.
        NotEligible,
        /// The arbitrator has already claimed their fee share.
        AlreadyClaimed,
        /// A market must have between 2 and 10 outcomes.
        InvalidOutcomeCount,
        /// An outcome label exceeds 64 bytes.
        OutcomeLabelTooLong,
        /// The description exceeds 512 bytes.
        DescriptionTooLong,
        /// A market must have between 3 and 21 arbitrators.
        InvalidArbitratorCount,
        /// The same account was specified twice as an arbitrator.
        DuplicateArbitrator,
        /// The creator can't be an arbitrator of their own market.
        CreatorIsArbitrator,
        /// The creation fee is below `MinCreationFee`.
        CreationFeeTooLow,
        /// The resolution time is less than `MinResolutionDelay` in the future.
        ResolutionTimeTooSoon,
        /// The platform fee may not exceed 10%.
        PlatformFeeTooHigh,
    }

    impl<T: Config> Pallet<T> {
        /// The account which receives creation fees.
        pub fn fee_account() -> AccountIdOf<T> {
            T::PalletId::get().into_account_truncating()
        }

        /// The account which holds all stakes of `market_id`.
        ///
        /// Tagged so that it can't coincide with the fee account.
        pub fn pot_account(market_id: MarketIdOf<T>) -> AccountIdOf<T> {
            T::PalletId::get().into_sub_account_truncating((POT_TAG, market_id))
        }

        /// Fetches a market, mapping a missing market to `InvalidMarket`.
        pub(crate) fn market_of(market_id: &MarketIdOf<T>) -> Result<MarketOf<T>, Error<T>> {
            T::MarketCommons::market(market_id).map_err(|_| Error::<T>::InvalidMarket)
        }
    }
}
