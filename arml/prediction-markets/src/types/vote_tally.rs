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
use arbiter_primitives::types::{MarketResolution, MaxOutcomes, OutcomeIndex};
use frame_support::BoundedVec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Vote counts of a market.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct VoteTally {
    /// Number of votes cast so far.
    pub cast: u32,
    /// Aligned with the market's outcomes.
    pub per_outcome: BoundedVec<u32, MaxOutcomes>,
}

impl VoteTally {
    pub fn new(outcome_count: OutcomeIndex) -> Self {
        VoteTally { cast: 0, per_outcome: BoundedVec::truncate_from(vec![0; outcome_count.into()]) }
    }

    /// Counts a vote for `outcome`. Returns `false` and leaves the tally untouched if `outcome`
    /// is out of range.
    pub fn record(&mut self, outcome: OutcomeIndex) -> bool {
        match self.per_outcome.get_mut(usize::from(outcome)) {
            Some(count) => {
                *count = count.saturating_add(1);
                self.cast = self.cast.saturating_add(1);
                true
            }
            None => false,
        }
    }

    pub fn votes_for(&self, outcome: OutcomeIndex) -> u32 {
        self.per_outcome.get(usize::from(outcome)).copied().unwrap_or(0)
    }

    /// Decides the market for a committee of `arbitrators` members, or returns `None` if the
    /// result is still open.
    ///
    /// Nothing is decided before `floor(arbitrators / 2) + 1` votes are in. An outcome with at
    /// least that many votes wins. The market is a draw once the leading outcome can't reach that
    /// many votes even if all remaining arbitrators join it. This includes a tie between the top
    /// two outcomes after the last vote.
    pub fn verdict(&self, arbitrators: u32) -> Option<MarketResolution> {
        let threshold = arbitrators.saturating_div(2).saturating_add(1);
        if self.cast < threshold {
            return None;
        }
        let (leader, top) = self
            .per_outcome
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)
            .map(|(index, count)| (index, *count))?;
        if top >= threshold {
            // At most one outcome can hold a strict majority.
            let leader = OutcomeIndex::try_from(leader).ok()?;
            return Some(MarketResolution::Resolved(leader));
        }
        let remaining = arbitrators.saturating_sub(self.cast);
        if top.saturating_add(remaining) < threshold {
            return Some(MarketResolution::Draw);
        }
        None
    }
}
