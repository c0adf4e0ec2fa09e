use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `pippin schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = pippin_core::export::snapshot_schema()?;
    output(&schema, flags.format)
}
