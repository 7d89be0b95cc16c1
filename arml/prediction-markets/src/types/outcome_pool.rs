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

use alloc::vec;
use arbiter_primitives::types::{MaxOutcomes, OutcomeIndex};
use frame_support::BoundedVec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{Saturating, Zero},
    RuntimeDebug,
};

/// Stake totals of a market.
///
/// The sum of `per_outcome` always equals `total`.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct OutcomePool<BA> {
    pub total: BA,
    /// Aligned with the market's outcomes.
    pub per_outcome: BoundedVec<BA, MaxOutcomes>,
}

impl<BA: Copy + Saturating + Zero> OutcomePool<BA> {
    pub fn new(outcome_count: OutcomeIndex) -> Self {
        OutcomePool {
            total: BA::zero(),
            per_outcome: BoundedVec::truncate_from(vec![BA::zero(); outcome_count.into()]),
        }
    }

    pub fn stake_on(&self, outcome: OutcomeIndex) -> BA {
        self.per_outcome.get(usize::from(outcome)).copied().unwrap_or_else(BA::zero)
    }

    pub fn is_consistent(&self) -> bool
    where
        BA: PartialEq,
    {
        let sum = self.per_outcome.iter().fold(BA::zero(), |acc, &x| acc.saturating_add(x));
        sum == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_is_empty_and_aligned() {
        let pool = OutcomePool::<u128>::new(4);
        assert_eq!(pool.total, 0);
        assert_eq!(pool.per_outcome.to_vec(), vec![0, 0, 0, 0]);
        assert!(pool.is_consistent());
    }

    #[test]
    fn stake_on_returns_zero_for_unknown_outcome() {
        let pool = OutcomePool::<u128>::new(2);
        assert_eq!(pool.stake_on(5), 0);
    }

    #[test]
    fn is_consistent_detects_mismatch() {
        let mut pool = OutcomePool::<u128>::new(2);
        pool.per_outcome[1] = 3;
        assert!(!pool.is_consistent());
        pool.total = 3;
        assert!(pool.is_consistent());
    }
}
