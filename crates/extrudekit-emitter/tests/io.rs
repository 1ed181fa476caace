#[path = "io/serialize.rs"]
mod serialize;
