// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The minimum number of digits a string needs before it is handed to the
/// parser at all.
pub const MIN_VIABLE_DIGITS: usize = 3;

pub const PLUS_CHARS: &'static str = r"+\x{FF0B}";
pub const PLUS_SIGN: &'static str = "+";

// Punctuation accepted between digits: dashes, white space, full stops,
// slashes, square brackets, parentheses and tildes, including full-width
// variants. Escaped so it can be dropped into a character class as is.
pub const VALID_PUNCTUATION: &'static str = r"\-x\x{2010}-\x{2015}\x{2212}\x{30FC}\x{FF0D}-\x{FF0F} \x{00A0}\x{00AD}\x{200B}\x{2060}\x{3000}()\x{FF08}\x{FF09}\x{FF3B}\x{FF3D}.\[\]/~\x{2053}\x{223C}";

pub const DIGITS: &'static str = r"\p{Nd}";

// Letters are tolerated after the first digits so that vanity numbers
// (1-800-FLOWERS) and extension labels reach the parser.
pub const VALID_ALPHA: &'static str = r"\p{L}";

// Characters the parser understands as extension or RFC3966 separators.
pub const EXTENSION_CHARS: &'static str = r"#;,=:";

// Separators the formatter may place between digit groups. International
// output uses single spaces in their place.
pub const GROUP_SEPARATORS: &'static str = r"[\-\x{2010}-\x{2015}./()\s]+";
