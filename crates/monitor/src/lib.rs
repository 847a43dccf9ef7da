//! Serial monitoring bridge: the reading loop, its transport seam, the
//! dual-sink recorder, the CSV logs, and the shared monitoring state.

pub mod logfile;
pub mod reader;
pub mod recorder;
pub mod source;
pub mod state;

pub use recorder::Recorder;
pub use state::Monitor;
