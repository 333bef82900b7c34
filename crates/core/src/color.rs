// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic label coloring
//!
//! Colors are derived from a checksum of the label pair, so the same pair
//! resolves to the same token on every node and every render.

use serde::{Deserialize, Serialize};

/// Display color for a label badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Orange,
    Amber,
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Pink,
    Slate,
}

impl ColorToken {
    pub const PALETTE: [ColorToken; 10] = [
        ColorToken::Red,
        ColorToken::Orange,
        ColorToken::Amber,
        ColorToken::Green,
        ColorToken::Teal,
        ColorToken::Blue,
        ColorToken::Indigo,
        ColorToken::Purple,
        ColorToken::Pink,
        ColorToken::Slate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Orange => "orange",
            ColorToken::Amber => "amber",
            ColorToken::Green => "green",
            ColorToken::Teal => "teal",
            ColorToken::Blue => "blue",
            ColorToken::Indigo => "indigo",
            ColorToken::Purple => "purple",
            ColorToken::Pink => "pink",
            ColorToken::Slate => "slate",
        }
    }

    /// Badge classes for web rendering hosts
    pub fn class(&self) -> &'static str {
        match self {
            ColorToken::Red => "bg-red-100 text-red-800",
            ColorToken::Orange => "bg-orange-100 text-orange-800",
            ColorToken::Amber => "bg-amber-100 text-amber-800",
            ColorToken::Green => "bg-green-100 text-green-800",
            ColorToken::Teal => "bg-teal-100 text-teal-800",
            ColorToken::Blue => "bg-blue-100 text-blue-800",
            ColorToken::Indigo => "bg-indigo-100 text-indigo-800",
            ColorToken::Purple => "bg-purple-100 text-purple-800",
            ColorToken::Pink => "bg-pink-100 text-pink-800",
            ColorToken::Slate => "bg-slate-100 text-slate-800",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the display color for a label pair.
///
/// Total and pure: every pair, including empty strings, maps to a palette
/// entry, and the mapping does not depend on call order.
pub fn resolve_label_color(key: &str, value: &str) -> ColorToken {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(key.as_bytes());
    // Separator keeps ("ab", "c") and ("a", "bc") apart
    hasher.update(&[0]);
    hasher.update(value.as_bytes());
    let index = hasher.finalize() as usize % ColorToken::PALETTE.len();
    ColorToken::PALETTE[index]
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
