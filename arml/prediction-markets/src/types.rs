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

mod arbitrator_fee_info;
mod bet_record;
mod disbursement;
mod market_info;
mod outcome_pool;
mod payout_quote;
mod vote_tally;

pub use arbitrator_fee_info::*;
pub use bet_record::*;
pub use disbursement::*;
pub use market_info::*;
pub use outcome_pool::*;
pub use payout_quote::*;
pub use vote_tally::*;
