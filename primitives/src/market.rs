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
    constants::{MAX_ARBITRATORS, MAX_DESCRIPTION_LEN, MAX_OUTCOMES, MAX_OUTCOME_LABEL_LEN},
    types::{BasisPoints, OutcomeIndex},
};
use frame_support::{traits::ConstU32, BoundedVec};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{RuntimeDebug, SaturatedConversion};

pub type MaxDescriptionLen = ConstU32<MAX_DESCRIPTION_LEN>;
pub type MaxOutcomeLabelLen = ConstU32<MAX_OUTCOME_LABEL_LEN>;
pub type MaxOutcomes = ConstU32<MAX_OUTCOMES>;
pub type MaxArbitrators = ConstU32<MAX_ARBITRATORS>;

pub type Description = BoundedVec<u8, MaxDescriptionLen>;
pub type OutcomeLabel = BoundedVec<u8, MaxOutcomeLabelLen>;
pub type OutcomeLabels = BoundedVec<OutcomeLabel, MaxOutcomes>;
pub type Arbitrators<AI> = BoundedVec<AI, MaxArbitrators>;

/// Types
///
/// * `AI`: Account id
/// * `BA`: Balance type for the creation fee
/// * `M`: Moment (time moment)
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Market<AI, BA, M> {
    /// Creator of this market.
    pub creator: AI,
    /// Free-form question text.
    pub description: Description,
    /// Ordered outcome labels. The position of a label is its `OutcomeIndex`.
    pub outcomes: OutcomeLabels,
    /// The committee which votes on the result. Distinct, never contains `creator`.
    pub arbitrators: Arbitrators<AI>,
    pub category: MarketCategory,
    pub created_at: M,
    /// Staking closes and voting opens at this moment.
    pub resolves_at: M,
    /// The fee paid by the creator when the market was created.
    pub creation_fee: BA,
    /// Platform fee in basis points, fixed when the market was created.
    pub platform_fee: BasisPoints,
    /// The current resolution of the market. Written once by the voting engine.
    pub resolution: MarketResolution,
}

impl<AI, BA, M> Market<AI, BA, M> {
    // Returns the number of outcomes for a market.
    pub fn outcome_count(&self) -> OutcomeIndex {
        self.outcomes.len().saturated_into()
    }

    pub fn is_valid_outcome(&self, outcome: OutcomeIndex) -> bool {
        outcome < self.outcome_count()
    }

    pub fn arbitrator_count(&self) -> u32 {
        self.arbitrators.len().saturated_into()
    }

    /// Votes needed for a strict majority of the committee: `floor(n / 2) + 1`.
    pub fn required_votes(&self) -> u32 {
        self.arbitrator_count().saturating_div(2).saturating_add(1)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_final()
    }
}

impl<AI: PartialEq, BA, M> Market<AI, BA, M> {
    pub fn is_arbitrator(&self, who: &AI) -> bool {
        self.arbitrators.contains(who)
    }

    /// Creators and arbitrators must not stake on their own market.
    pub fn has_conflict_of_interest(&self, who: &AI) -> bool {
        self.creator == *who || self.is_arbitrator(who)
    }
}

impl<AI, BA, M: PartialOrd> Market<AI, BA, M> {
    /// Expiry is derived from time only, there is no stored flag.
    pub fn is_expired(&self, now: M) -> bool {
        now >= self.resolves_at
    }

    pub fn accepts_stakes(&self, now: M) -> bool {
        !self.is_expired(now) && !self.is_resolved()
    }
}

/// Topic tag of a market.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum MarketCategory {
    Sports,
    Politics,
    Crypto,
    Weather,
    Entertainment,
    Science,
    Business,
    Other,
}

/// Defines the resolution state of the market.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub enum MarketResolution {
    /// No decision yet. Whether staking or voting is possible depends on the current time.
    #[default]
    Open,
    /// A strict majority of the arbitrators voted for this outcome.
    Resolved(OutcomeIndex),
    /// No outcome can reach a strict majority. Stakes are refunded.
    Draw,
}

impl MarketResolution {
    pub fn is_final(&self) -> bool {
        !matches!(self, MarketResolution::Open)
    }

    pub fn winning_outcome(&self) -> Option<OutcomeIndex> {
        match self {
            MarketResolution::Resolved(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountIdTest, Balance, Moment};
    use test_case::test_case;

    type MarketTest = Market<AccountIdTest, Balance, Moment>;

    fn market_with(outcomes: u32, arbitrators: u32) -> MarketTest {
        let outcomes = (0..outcomes)
            .map(|o| OutcomeLabel::truncate_from(alloc::format!("O{o}").into_bytes()))
            .collect::<alloc::vec::Vec<_>>();
        Market {
            creator: 1,
            description: Description::truncate_from(b"Will it rain?".to_vec()),
            outcomes: OutcomeLabels::truncate_from(outcomes),
            arbitrators: Arbitrators::truncate_from((10..10 + arbitrators as u128).collect()),
            category: MarketCategory::Weather,
            created_at: 0,
            resolves_at: 100,
            creation_fee: 1,
            platform_fee: 150,
            resolution: MarketResolution::Open,
        }
    }

    #[test_case(3, 2)]
    #[test_case(4, 3)]
    #[test_case(5, 3)]
    #[test_case(20, 11)]
    #[test_case(21, 11)]
    fn required_votes_is_strict_majority(arbitrators: u32, expected: u32) {
        assert_eq!(market_with(2, arbitrators).required_votes(), expected);
    }

    #[test_case(0, true)]
    #[test_case(2, true)]
    #[test_case(3, false)]
    #[test_case(u16::MAX, false)]
    fn is_valid_outcome_checks_bounds(outcome: OutcomeIndex, expected: bool) {
        assert_eq!(market_with(3, 3).is_valid_outcome(outcome), expected);
    }

    #[test_case(99, false; "before deadline")]
    #[test_case(100, true; "at deadline")]
    #[test_case(101, true; "after deadline")]
    fn is_expired_works(now: Moment, expected: bool) {
        assert_eq!(market_with(2, 3).is_expired(now), expected);
    }

    #[test]
    fn accepts_stakes_is_false_once_resolved() {
        let mut market = market_with(2, 3);
        assert!(market.accepts_stakes(0));
        market.resolution = MarketResolution::Draw;
        assert!(!market.accepts_stakes(0));
    }

    #[test_case(1, true; "creator")]
    #[test_case(10, true; "arbitrator")]
    #[test_case(12, true; "last arbitrator")]
    #[test_case(13, false; "outsider")]
    fn has_conflict_of_interest_works(who: AccountIdTest, expected: bool) {
        assert_eq!(market_with(2, 3).has_conflict_of_interest(&who), expected);
    }

    #[test_case(MarketResolution::Open, false, None)]
    #[test_case(MarketResolution::Resolved(1), true, Some(1))]
    #[test_case(MarketResolution::Draw, true, None)]
    fn resolution_accessors_work(
        resolution: MarketResolution,
        is_final: bool,
        winner: Option<OutcomeIndex>,
    ) {
        assert_eq!(resolution.is_final(), is_final);
        assert_eq!(resolution.winning_outcome(), winner);
    }

    #[test]
    fn resolution_serializes_to_camel_case() {
        assert_eq!(serde_json::to_string(&MarketResolution::Draw).unwrap(), "\"draw\"");
        assert_eq!(
            serde_json::to_string(&MarketResolution::Resolved(2)).unwrap(),
            "{\"resolved\":2}"
        );
        assert_eq!(serde_json::to_string(&MarketCategory::Crypto).unwrap(), "\"crypto\"");
    }
}
