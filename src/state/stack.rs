// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The program stack.
//!
//! Every primitive here checks its operand count first and does nothing when
//! the stack is too shallow. Primitives that can fail (division by zero,
//! overflow) also check before popping, so a failed instruction leaves the
//! stack exactly as it found it.

use std::fmt;

/// Why an arithmetic primitive refused to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    DivisionByZero,
    Overflow,
}

/// Stack of signed integers, bottom first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

/// Floor division: rounds towards negative infinity.
fn floor_div(b: i64, a: i64) -> Option<i64> {
    let q = b.checked_div(a)?;
    if b % a != 0 && ((b < 0) != (a < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Modulo matching [`floor_div`]: the result has the sign of the divisor.
fn floor_mod(b: i64, a: i64) -> Option<i64> {
    let r = b.checked_rem(a)?;
    if r != 0 && ((r < 0) != (a < 0)) {
        Some(r + a)
    } else {
        Some(r)
    }
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    /// Top two values as `(a, b)` where `a` is the top.
    fn top_two(&self) -> Option<(i64, i64)> {
        match self.values.as_slice() {
            [.., b, a] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Replace the top two values `a` (top) and `b` with `f(a, b)`.
    ///
    /// Returns `Ok(false)` when there are fewer than two values.
    fn binary(
        &mut self,
        f: impl FnOnce(i64, i64) -> Result<i64, ArithmeticFault>,
    ) -> Result<bool, ArithmeticFault> {
        let Some((a, b)) = self.top_two() else {
            return Ok(false);
        };
        let result = f(a, b)?;
        self.values.truncate(self.values.len() - 2);
        self.values.push(result);
        Ok(true)
    }

    pub fn add(&mut self) -> Result<bool, ArithmeticFault> {
        self.binary(|a, b| b.checked_add(a).ok_or(ArithmeticFault::Overflow))
    }

    pub fn subtract(&mut self) -> Result<bool, ArithmeticFault> {
        self.binary(|a, b| b.checked_sub(a).ok_or(ArithmeticFault::Overflow))
    }

    pub fn multiply(&mut self) -> Result<bool, ArithmeticFault> {
        self.binary(|a, b| b.checked_mul(a).ok_or(ArithmeticFault::Overflow))
    }

    pub fn divide(&mut self) -> Result<bool, ArithmeticFault> {
        self.binary(|a, b| {
            if a == 0 {
                return Err(ArithmeticFault::DivisionByZero);
            }
            floor_div(b, a).ok_or(ArithmeticFault::Overflow)
        })
    }

    pub fn modulo(&mut self) -> Result<bool, ArithmeticFault> {
        self.binary(|a, b| {
            if a == 0 {
                return Err(ArithmeticFault::DivisionByZero);
            }
            floor_mod(b, a).ok_or(ArithmeticFault::Overflow)
        })
    }

    pub fn greater(&mut self) -> bool {
        self.binary(|a, b| Ok(i64::from(b > a))).unwrap_or(false)
    }

    pub fn not(&mut self) -> bool {
        match self.values.last_mut() {
            Some(top) => {
                *top = i64::from(*top == 0);
                true
            }
            None => false,
        }
    }

    pub fn duplicate(&mut self) -> bool {
        match self.peek() {
            Some(top) => {
                self.values.push(top);
                true
            }
            None => false,
        }
    }

    /// Pop `rolls` (top) and `depth`, then rotate the top `depth` values by
    /// `rolls`. A positive roll buries the top value `rolls` places down;
    /// a negative roll brings buried values up.
    ///
    /// With fewer than two values nothing happens. A non-positive depth
    /// consumes both operands and rotates nothing. A depth greater than the
    /// remaining stack is clamped to it.
    ///
    /// ```
    /// use piet_interp::state::Stack;
    ///
    /// let mut stack = Stack::from(vec![1, 2, 3, 4, 3, 1]);
    /// assert!(stack.roll());
    /// assert_eq!(stack.as_slice(), &[1, 4, 2, 3]);
    /// ```
    pub fn roll(&mut self) -> bool {
        let Some((rolls, depth)) = self.top_two() else {
            return false;
        };
        self.values.truncate(self.values.len() - 2);
        if depth <= 0 {
            return true;
        }
        let depth = usize::try_from(depth)
            .unwrap_or(usize::MAX)
            .min(self.values.len());
        if depth == 0 {
            return true;
        }
        let start = self.values.len() - depth;
        let window = &mut self.values[start..];
        let shift = (rolls.unsigned_abs() % depth as u64) as usize;
        if rolls >= 0 {
            window.rotate_right(shift);
        } else {
            window.rotate_left(shift);
        }
        true
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[i64]) -> Stack {
        Stack::from(values.to_vec())
    }

    #[test]
    fn test_add_underflow_is_noop() {
        let mut s = stack(&[3]);
        assert_eq!(s.add(), Ok(false));
        assert_eq!(s.as_slice(), &[3]);
    }

    #[test]
    fn test_add() {
        let mut s = stack(&[3, 4]);
        assert_eq!(s.add(), Ok(true));
        assert_eq!(s.as_slice(), &[7]);
    }

    #[test]
    fn test_operand_order() {
        let mut s = stack(&[10, 3]);
        s.subtract().unwrap();
        assert_eq!(s.as_slice(), &[7]);

        let mut s = stack(&[2, 5]);
        assert!(s.greater());
        assert_eq!(s.as_slice(), &[0]);

        let mut s = stack(&[5, 2]);
        s.greater();
        assert_eq!(s.as_slice(), &[1]);
    }

    #[test]
    fn test_floor_division() {
        let cases = [(7, 2, 3, 1), (-7, 2, -4, 1), (7, -2, -4, -1), (-7, -2, 3, -1), (6, 3, 2, 0)];
        for (b, a, q, r) in cases {
            let mut s = stack(&[b, a]);
            s.divide().unwrap();
            assert_eq!(s.as_slice(), &[q], "{} / {}", b, a);
            let mut s = stack(&[b, a]);
            s.modulo().unwrap();
            assert_eq!(s.as_slice(), &[r], "{} mod {}", b, a);
        }
    }

    #[test]
    fn test_division_by_zero_leaves_stack() {
        let mut s = stack(&[5, 0]);
        assert_eq!(s.divide(), Err(ArithmeticFault::DivisionByZero));
        assert_eq!(s.as_slice(), &[5, 0]);
        assert_eq!(s.modulo(), Err(ArithmeticFault::DivisionByZero));
        assert_eq!(s.as_slice(), &[5, 0]);
    }

    #[test]
    fn test_overflow_leaves_stack() {
        let mut s = stack(&[i64::MAX, 1]);
        assert_eq!(s.add(), Err(ArithmeticFault::Overflow));
        assert_eq!(s.as_slice(), &[i64::MAX, 1]);

        let mut s = stack(&[i64::MIN, -1]);
        assert_eq!(s.divide(), Err(ArithmeticFault::Overflow));
        assert_eq!(s.modulo(), Err(ArithmeticFault::Overflow));
        assert_eq!(s.as_slice(), &[i64::MIN, -1]);
    }

    #[test]
    fn test_not_and_duplicate() {
        let mut s = stack(&[0, 9]);
        assert!(s.not());
        assert_eq!(s.as_slice(), &[0, 0]);
        s.not();
        assert_eq!(s.as_slice(), &[0, 1]);
        assert!(s.duplicate());
        assert_eq!(s.as_slice(), &[0, 1, 1]);

        let mut empty = Stack::new();
        assert!(!empty.not());
        assert!(!empty.duplicate());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_roll_positive() {
        let mut s = stack(&[1, 2, 3, 4, 3, 1]);
        assert!(s.roll());
        assert_eq!(s.as_slice(), &[1, 4, 2, 3]);
    }

    #[test]
    fn test_roll_negative() {
        let mut s = stack(&[1, 2, 3, 4, 3, -1]);
        assert!(s.roll());
        assert_eq!(s.as_slice(), &[1, 3, 4, 2]);
    }

    #[test]
    fn test_roll_wraps_count() {
        let mut s = stack(&[1, 2, 3, 4, 3, 4]);
        s.roll();
        assert_eq!(s.as_slice(), &[1, 4, 2, 3]);
        let mut s = stack(&[1, 2, 3, 4, 3, -7]);
        s.roll();
        assert_eq!(s.as_slice(), &[1, 3, 4, 2]);
    }

    #[test]
    fn test_roll_clamps_depth() {
        let mut s = stack(&[1, 2, 3, 10, 1]);
        s.roll();
        assert_eq!(s.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_roll_non_positive_depth_consumes_operands() {
        let mut s = stack(&[1, 2, 0, 1]);
        assert!(s.roll());
        assert_eq!(s.as_slice(), &[1, 2]);
        let mut s = stack(&[1, 2, -3, 1]);
        s.roll();
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_roll_underflow_is_noop() {
        let mut s = stack(&[5]);
        assert!(!s.roll());
        assert_eq!(s.as_slice(), &[5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(stack(&[1, -2, 3]).to_string(), "[1 -2 3]");
        assert_eq!(Stack::new().to_string(), "[]");
    }
}
