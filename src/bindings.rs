//! TypeScript bindings for the renderer-facing types and recorded replay events.

use crate::controller::Effect;
use crate::frame::{Frame, Pose, SyncModeLabel};
use crate::landmarks::{Landmark, Side};
use crate::path::Facing;
use crate::replay::{ReplayEvent, ReplayEventKind};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<()> {
    T::export_all_to(out_dir).map_err(|err| anyhow!("failed to export {}: {err}", T::name()))
}

/// Replace every `.ts` file in `out_dir` with freshly generated bindings.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("Failed to list {}", out_dir.display()))?
    {
        let path = entry.context("Failed to read entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    export_single_type::<Frame>(out_dir)?;
    export_single_type::<Pose>(out_dir)?;
    export_single_type::<SyncModeLabel>(out_dir)?;
    export_single_type::<Facing>(out_dir)?;
    export_single_type::<Side>(out_dir)?;
    export_single_type::<Landmark>(out_dir)?;
    export_single_type::<Effect>(out_dir)?;
    export_single_type::<ReplayEvent>(out_dir)?;
    export_single_type::<ReplayEventKind>(out_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn exports_renderer_types() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        let out_dir = std::env::temp_dir().join(format!("skier_scroll_bindings_{nanos}"));
        fs::create_dir_all(&out_dir).expect("temp dir");
        fs::write(out_dir.join("Stale.ts"), "export type Stale = never;").expect("stale file");

        export_ts_bindings(&out_dir).expect("bindings export");

        assert!(!out_dir.join("Stale.ts").exists());
        for name in [
            "Frame.ts",
            "Effect.ts",
            "Landmark.ts",
            "Facing.ts",
            "ReplayEvent.ts",
        ] {
            assert!(out_dir.join(name).exists(), "{name} should be exported");
        }
        let _ = fs::remove_dir_all(&out_dir);
    }
}
