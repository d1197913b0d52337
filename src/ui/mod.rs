// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod design_tokens;
pub mod editor_view;
pub mod styles;
pub mod theming;
