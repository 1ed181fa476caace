use extrudekit_emitter::{Emitter, Error};
use std::fs;
use tempfile::tempdir;

fn sample_program() -> Emitter {
    let mut emitter = Emitter::at(0.0, 0.0, 0.0);
    emitter.initialize();
    emitter.set_feedrate(1200.0);
    emitter.set_density(0.05);
    emitter.lift(0.2);
    emitter.rectangle(10.0, 10.0);
    emitter.finalize();
    emitter
}

#[test]
fn test_serialize_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("square.gcode");
    let emitter = sample_program();

    emitter.serialize(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, emitter.to_gcode());

    // reading back line by line gives the entries, block entries included
    let expected: Vec<String> = emitter
        .log()
        .iter()
        .flat_map(|entry| entry.lines().map(str::to_string))
        .collect();
    let actual: Vec<String> = text.lines().map(str::to_string).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 13 + 1 + 1 + 4 + 5);
}

#[test]
fn test_serialize_leaves_log_intact() {
    let dir = tempdir().unwrap();
    let emitter = sample_program();
    let before = emitter.log().to_vec();

    emitter.serialize(dir.path().join("a.gcode")).unwrap();
    emitter.serialize(dir.path().join("b.gcode")).unwrap();

    assert_eq!(emitter.log(), before.as_slice());
    assert_eq!(
        fs::read_to_string(dir.path().join("a.gcode")).unwrap(),
        fs::read_to_string(dir.path().join("b.gcode")).unwrap()
    );
}

#[test]
fn test_serialize_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.gcode");
    fs::write(&path, "old content that is much longer than the new program\n".repeat(10)).unwrap();

    let mut emitter = Emitter::default();
    emitter.travel_to(1.0, 2.0);
    emitter.serialize(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "G1 X1 Y2\n");
}

#[test]
fn test_serialize_to_missing_directory_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.gcode");
    let emitter = sample_program();

    let err = emitter.serialize(&path).unwrap_err();
    let Error::Write { path: failed, source } = &err;
    assert_eq!(failed, &path);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);

    // the log can still be written somewhere valid
    let retry = dir.path().join("out.gcode");
    emitter.serialize(&retry).unwrap();
    assert_eq!(fs::read_to_string(&retry).unwrap(), emitter.to_gcode());
}

#[test]
fn test_write_to_any_writer() {
    let mut emitter = Emitter::default();
    emitter.dwell(500.0);
    emitter.extrude(2.0);

    let mut buffer = Vec::new();
    emitter.write_to(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "G04 P500\nG1 E2\n");
}

#[test]
fn test_empty_program_serializes_to_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.gcode");
    Emitter::default().serialize(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
