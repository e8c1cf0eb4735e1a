#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod property_tests;
mod reference_tests;

use crate::{Mode, SpaInput};

/// Example 1 of NREL/TP-560-34302: Golden, Colorado, 2003-10-17 12:30:30 MST.
pub(crate) fn nrel_reference_input() -> SpaInput {
    SpaInput::new(2003, 10, 17, 12, 30, 30.0, -7.0, 39.742476, -105.1786)
        .with_delta_ut1(0.0)
        .with_delta_t(67.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_temperature(11.0)
        .with_slope(30.0)
        .with_azm_rotation(-10.0)
        .with_atmos_refract(0.5667)
        .with_mode(Mode::All)
}
