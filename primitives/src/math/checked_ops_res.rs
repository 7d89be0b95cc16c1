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

//! Checked arithmetic which reports failure as a `DispatchError` so that callers can use `?`.

use sp_arithmetic::{
    helpers_128bit::multiply_by_rational_with_rounding,
    traits::{CheckedAdd, CheckedDiv, CheckedSub},
    ArithmeticError, Rounding,
};
use sp_runtime::DispatchError;

macro_rules! checked_op_res {
    ($name:ident, $method:ident, $base:ident, $inner:ident, $error:ident) => {
        pub trait $name
        where
            Self: Sized,
        {
            fn $method(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T> $name for T
        where
            T: $base,
        {
            #[inline]
            fn $method(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$inner(other).ok_or(DispatchError::Arithmetic(ArithmeticError::$error))
            }
        }
    };
}

checked_op_res!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, Overflow);
checked_op_res!(CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, Underflow);
checked_op_res!(CheckedDivRes, checked_div_res, CheckedDiv, checked_div, DivisionByZero);

/// Computes `floor(a * b / c)` with a 256-bit intermediate product.
///
/// Fails with `DivisionByZero` if `c` is zero and with `Overflow` if the quotient does not fit
/// into `u128`.
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> Result<u128, DispatchError> {
    if c == 0 {
        return Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero));
    }
    multiply_by_rational_with_rounding(a, b, c, Rounding::Down)
        .ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::{assert_gt, assert_le};
    use test_case::test_case;

    #[test_case(1, 2, Ok(3))]
    #[test_case(u128::MAX, 1, Err(ArithmeticError::Overflow))]
    fn checked_add_res_works(a: u128, b: u128, expected: Result<u128, ArithmeticError>) {
        assert_eq!(a.checked_add_res(&b), expected.map_err(DispatchError::Arithmetic));
    }

    #[test_case(3, 2, Ok(1))]
    #[test_case(2, 3, Err(ArithmeticError::Underflow))]
    fn checked_sub_res_works(a: u128, b: u128, expected: Result<u128, ArithmeticError>) {
        assert_eq!(a.checked_sub_res(&b), expected.map_err(DispatchError::Arithmetic));
    }

    #[test]
    fn checked_div_res_fails_on_zero_divisor() {
        assert_eq!(
            7u128.checked_div_res(&0),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }

    #[test_case(6_000, 10_000, 6_000, 10_000; "exact")]
    #[test_case(1, 250, 10_000, 0; "truncates toward zero")]
    #[test_case(999, 250, 10_000, 24; "truncates fractional part")]
    #[test_case(u128::MAX, u128::MAX, u128::MAX, u128::MAX; "wide intermediate")]
    fn mul_div_floor_works(a: u128, b: u128, c: u128, expected: u128) {
        assert_eq!(mul_div_floor(a, b, c), Ok(expected));
    }

    #[test_case(1_234_567_891, 9_975, 10_000)]
    #[test_case(987_654_321, 1, 3)]
    #[test_case(u64::MAX as u128, 7, 7)]
    fn mul_div_floor_rounds_down_by_less_than_one(a: u128, b: u128, c: u128) {
        let result = mul_div_floor(a, b, c).unwrap();
        assert_le!(result, a);
        assert_le!(result * c, a * b);
        assert_gt!(result * c + c, a * b);
    }

    #[test]
    fn mul_div_floor_fails_on_zero_divisor() {
        assert_eq!(
            mul_div_floor(1, 1, 0),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }

    #[test]
    fn mul_div_floor_fails_on_overflowing_quotient() {
        assert_eq!(
            mul_div_floor(u128::MAX, 2, 1),
            Err(DispatchError::Arithmetic(ArithmeticError::Overflow))
        );
    }
}
