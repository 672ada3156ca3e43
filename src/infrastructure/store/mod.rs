// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters.

mod file;
mod memory;

pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;
