//! # Operation Dispatch
//!
//! The dispatcher turns one parsed [`Operation`] into backend calls:
//! validate the referenced paths, convert timecodes, invoke the backend,
//! report the result. There is no state across invocations and no retry;
//! one operation runs to completion (blocking on the external tool) before
//! control returns.

pub mod engine;
pub mod types;

pub use engine::Editor;
pub use types::{part_output_path, scan_media_folder, split_plan, Operation, MEDIA_EXTENSIONS};
