//! Fixed start and end sequences for the target printer.
//!
//! These are literal payloads tuned for a PLA profile on a bed-levelling
//! printer; nothing in them depends on emitter state.

use extrudekit_core::Position;

/// Start sequence, emitted as a single log entry by [`crate::Emitter::initialize`]
pub const INIT_COMMANDS: &[&str] = &[
    "G90",                 // absolute coordinates
    "M83",                 // relative extruder
    "G21",                 // millimetres
    "M104 S215",           // hotend target
    "M140 S60",            // bed target
    "M109 S215",           // wait for hotend
    "M190 S60",            // wait for bed
    "G28 W",               // home without mesh levelling
    "G80",                 // mesh bed levelling
    "G1 Y-3 F1000",        // step off the print area
    "G1 X60 E9 F1000",     // purge line
    "G1 X100 E12.5 F1000", // purge line
    "G92 E0",              // reset extruder
];

/// Where the start sequence leaves the nozzle: the end of the purge line, on
/// the bed surface.
pub const INIT_END_POSITION: Position = Position::new(100.0, -3.0, 0.0);

/// End sequence, emitted as a single log entry by [`crate::Emitter::finalize`]
pub const FINALIZE_COMMANDS: &[&str] = &[
    "M104 S0", // hotend off
    "M140 S0", // bed off
    "M107",    // fan off
    "G1 Z200", // raise clear of the part
    "M84",     // motors off
];

/// The start sequence as one newline-joined block
pub fn init_block() -> String {
    INIT_COMMANDS.join("\n")
}

/// The end sequence as one newline-joined block
pub fn finalize_block() -> String {
    FINALIZE_COMMANDS.join("\n")
}
