// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;
mod validation;


pub use loader::{
    load_and_validate_config, load_config, parse_config, Config, ConfigFormat, ProfileConfig,
};
pub use registry::{build_registry, MappingProfile, MappingRegistry};
pub use validation::validate_config;
