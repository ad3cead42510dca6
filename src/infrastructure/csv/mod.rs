// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Roster file reading and row-to-record parsing

mod record_parser;
mod roster_reader;

pub use record_parser::RecordParser;
pub use roster_reader::read_roster;
