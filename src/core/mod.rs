//! Core infrastructure shared by the drivers and the firmware binary

pub mod logging;
