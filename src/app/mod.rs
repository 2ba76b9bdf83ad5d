// Application layer: wires config, adapters and core for the binaries.

#[cfg(feature = "cli")]
pub mod commands;
