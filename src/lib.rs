// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

mod error;
pub mod single_list;

pub use error::*;
pub use single_list::LinkedList;
