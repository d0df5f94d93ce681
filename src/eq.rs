//
// fcmp - tolerance-based comparison predicates for f32 written in Rust
// Copyright (c) 2017 by The fcmp developers
// All rights reserved.
//
// This file is a part of fcmp
//
// fcmp is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// fcmp is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

/// Tolerance shared by every predicate in the crate.  Below magnitude 1 it
/// is applied as an absolute difference bound; at or above magnitude 1 it
/// is multiplied by the larger operand's magnitude.  Consumers that need
/// to replicate the crate's notion of equality elsewhere should use this
/// constant rather than a literal.
pub const EPSILON: f32 = 0.000001;

/// Test two floats for approximate equality.  Two values are equal when
/// their difference is within `EPSILON`, scaled by the larger operand's
/// magnitude once that magnitude exceeds 1.  Operands on strictly opposite
/// sides of zero are never equal, even when both sit within `EPSILON` of
/// zero (note that 0.0 itself lands on the non-positive side of the
/// dispatch).
///
/// The branches spell out the sign/magnitude cases directly so that no
/// call to a generic `abs`/`max` is made on the way to the one comparison
/// that decides the answer.
///
/// #Argument
/// * `a` - left operand
/// * `b` - right operand
///
/// #Example
/// ```
/// assert_eq!(true, fcmp::eq::approx_eq(1.0, 1.0000005));
/// assert_eq!(false, fcmp::eq::approx_eq(1.0, 1.00001));
/// ```
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a > 0.0 {
        if b > 0.0 {
            if a > b {
                // a>0 b>0 a>b
                if a > 1.0 {
                    a - b <= EPSILON * a
                } else {
                    a - b <= EPSILON
                }
            } else if b > 1.0 {
                // a>0 b>0 a<=b b>1
                b - a <= EPSILON * b
            } else {
                b - a <= EPSILON
            }
        } else {
            // a>0 b<=0
            false
        }
    } else if b > 0.0 {
        // a<=0 b>0
        false
    } else if a > b {
        // a<=0 b<=0 a>b, so b carries the larger magnitude
        if b < -1.0 {
            a - b <= EPSILON * -b
        } else {
            a - b <= EPSILON
        }
    } else if a < -1.0 {
        // a<=0 b<=0 a<=b a<-1
        b - a <= EPSILON * -a
    } else {
        b - a <= EPSILON
    }
}

/// Test two floats for approximate inequality.  This is the complement of
/// `approx_eq` for finite inputs, kept as its own decision tree with the
/// leaf comparisons flipped to `>` rather than wrapping `approx_eq` in a
/// negation.
///
/// #Argument
/// * `a` - left operand
/// * `b` - right operand
pub fn approx_ne(a: f32, b: f32) -> bool {
    if a > 0.0 {
        if b > 0.0 {
            if a > b {
                // a>0 b>0 a>b
                if a > 1.0 {
                    a - b > EPSILON * a
                } else {
                    a - b > EPSILON
                }
            } else if b > 1.0 {
                // a>0 b>0 a<=b b>1
                b - a > EPSILON * b
            } else {
                b - a > EPSILON
            }
        } else {
            // a>0 b<=0
            true
        }
    } else if b > 0.0 {
        // a<=0 b>0
        true
    } else if a > b {
        // a<=0 b<=0 a>b, so b carries the larger magnitude
        if b < -1.0 {
            a - b > EPSILON * -b
        } else {
            a - b > EPSILON
        }
    } else if a < -1.0 {
        // a<=0 b<=0 a<=b a<-1
        b - a > EPSILON * -a
    } else {
        b - a > EPSILON
    }
}
