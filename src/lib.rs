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
pub mod eq;
pub mod ord;
pub mod zero;
pub mod util;
