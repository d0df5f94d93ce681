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
use eq::EPSILON;

/// Closed-form equality predicate the unwrapped `eq::approx_eq` is checked
/// against: |a - b| <= EPSILON * max(1, |a|, |b|).
pub fn ref_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Closed-form zero predicate matching `zero::approx_zero`.
pub fn ref_zero(a: f32) -> bool {
    a.abs() <= EPSILON * a.abs().max(1.0)
}
