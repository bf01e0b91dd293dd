// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Histogram-based estimators over discrete attributes.

pub mod attribute_information;
pub mod discrete_utils;
pub mod mutual_information;
pub mod traits;

pub use attribute_information::{AttributeEntropy, AttributeInformation};
pub use mutual_information::{Column, DiscreteMutualInformation};
pub use traits::{GlobalValue, LocalValues};
