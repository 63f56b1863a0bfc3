// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod instance;
mod typed;

pub use instance::RecordInstance;
pub use typed::Record;
