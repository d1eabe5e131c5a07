//! Commands for script content.

use std::path::PathBuf;

use cutscene_core::command::Command;
use uuid::Uuid;

/// Command to load and compile a YAML script from disk.
#[derive(Debug, Clone)]
pub struct LoadScript {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Path of the script file.
    pub path: PathBuf,
}

impl Command for LoadScript {
    fn command_type(&self) -> &'static str {
        "content.load_script"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
