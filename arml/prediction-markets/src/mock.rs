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

#![cfg(feature = "mock")]

use crate as arml_prediction_markets;
use alloc::{vec, vec::Vec};
use arbiter_primitives::{
    constants::mock::{
        ExistentialDeposit, MinCreationFee, MinResolutionDelay, MinimumPeriod, PmPalletId, BASE,
    },
    traits::OnPayout,
    types::{AccountIdTest, Balance, BlockTest, MarketId, Moment, PayoutKind},
};
use core::cell::RefCell;
use frame_support::{construct_runtime, derive_impl};
use frame_system::EnsureRoot;
use sp_runtime::{traits::IdentityLookup, BuildStorage, DispatchError, DispatchResult};

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;

pub const ARB_A: AccountIdTest = 10;
pub const ARB_B: AccountIdTest = 11;
pub const ARB_C: AccountIdTest = 12;
pub const ARB_D: AccountIdTest = 13;
pub const ARB_E: AccountIdTest = 14;

pub const INITIAL_BALANCE: Balance = 1_000 * BASE;

/// The moment at which every test starts.
pub const START: Moment = 1_700_000_000_000;

construct_runtime!(
    pub enum Runtime {
        Balances: pallet_balances,
        MarketCommons: arml_market_commons,
        PredictionMarkets: arml_prediction_markets,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
);

impl crate::Config for Runtime {
    type AdminOrigin = EnsureRoot<AccountIdTest>;
    type Currency = Balances;
    type MarketCommons = MarketCommons;
    type MinCreationFee = MinCreationFee;
    type MinResolutionDelay = MinResolutionDelay;
    type OnPayout = MockPayoutHook;
    type PalletId = PmPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = crate::weights::WeightInfo<Runtime>;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type Block = BlockTest<Runtime>;
    type Lookup = IdentityLookup<Self::AccountId>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type ExistentialDeposit = ExistentialDeposit;
}

impl arml_market_commons::Config for Runtime {
    type Balance = Balance;
    type MarketId = MarketId;
    type Timestamp = Timestamp;
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

/// What `MockPayoutHook` does when it is notified.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HookMode {
    Noop,
    /// Repeat the payout for the same recipient from within the hook.
    Reenter,
    Fail,
}

std::thread_local! {
    static HOOK_MODE: RefCell<HookMode> = const { RefCell::new(HookMode::Noop) };
    static PAYOUTS: RefCell<Vec<(MarketId, AccountIdTest, Balance, PayoutKind)>> =
        const { RefCell::new(Vec::new()) };
    static REENTRY_RESULTS: RefCell<Vec<DispatchResult>> = const { RefCell::new(Vec::new()) };
}

pub fn set_hook_mode(mode: HookMode) {
    HOOK_MODE.with(|m| *m.borrow_mut() = mode);
}

/// Every payout the hook was notified of, oldest first.
pub fn payouts() -> Vec<(MarketId, AccountIdTest, Balance, PayoutKind)> {
    PAYOUTS.with(|p| p.borrow().clone())
}

/// The results of all nested calls made in `HookMode::Reenter`.
pub fn reentry_results() -> Vec<DispatchResult> {
    REENTRY_RESULTS.with(|r| r.borrow().clone())
}

/// Stands in for the recipient's side of a transfer, which may call back into the pallet.
pub struct MockPayoutHook;

impl OnPayout<AccountIdTest, MarketId, Balance> for MockPayoutHook {
    fn on_payout(
        market_id: MarketId,
        who: &AccountIdTest,
        amount: Balance,
        kind: PayoutKind,
    ) -> DispatchResult {
        PAYOUTS.with(|p| p.borrow_mut().push((market_id, *who, amount, kind)));
        match HOOK_MODE.with(|m| *m.borrow()) {
            HookMode::Noop => Ok(()),
            HookMode::Reenter => {
                // Only one level of nesting.
                set_hook_mode(HookMode::Noop);
                let origin = RuntimeOrigin::signed(*who);
                let result = match kind {
                    PayoutKind::Winnings => PredictionMarkets::withdraw_winnings(origin, market_id),
                    PayoutKind::ArbitratorFee => {
                        PredictionMarkets::claim_arbitrator_fee(origin, market_id)
                    }
                };
                REENTRY_RESULTS.with(|r| r.borrow_mut().push(result));
                set_hook_mode(HookMode::Reenter);
                Ok(())
            }
            HookMode::Fail => Err(DispatchError::Other("payout rejected by recipient")),
        }
    }
}

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            balances: vec![ALICE, BOB, CHARLIE, DAVE, EVE, ARB_A, ARB_B, ARB_C, ARB_D, ARB_E]
                .into_iter()
                .map(|who| (who, INITIAL_BALANCE))
                .collect(),
        }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let _ = env_logger::builder().is_test(true).try_init();
        set_hook_mode(HookMode::Noop);
        PAYOUTS.with(|p| p.borrow_mut().clear());
        REENTRY_RESULTS.with(|r| r.borrow_mut().clear());

        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();
        pallet_balances::GenesisConfig::<Runtime> { balances: self.balances, ..Default::default() }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut ext: sp_io::TestExternalities = t.into();
        ext.execute_with(|| {
            // Events are not deposited in block zero.
            System::set_block_number(1);
            Timestamp::set_timestamp(START);
        });
        ext
    }
}

/// Moves the clock to `now`. Time never goes backwards in these tests.
pub fn set_now(now: Moment) {
    Timestamp::set_timestamp(now);
}
