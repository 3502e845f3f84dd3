// SPDX-License-Identifier: MPL-2.0
//! Iced shell widgets: the carousel canvas plus the chrome around it.

pub mod canvas;
pub mod help_bar;
pub mod message_box;
