/*
[INPUT]:  -
[OUTPUT]: PIN domain module exports
[POS]:    Module organization for PIN entry, setup and verification
[UPDATE]: When PIN flows are added or removed
*/

pub mod input;
pub mod setup;
pub mod verify;

pub use input::{PinEntry, PIN_LEN};
pub use setup::{PinPreferences, SetupCommand, SetupFlow, SetupStep, STEP_ADVANCE_DELAY};
pub use verify::{VerifyCommand, VerifyFlow, SHAKE_DURATION};
