use crate::content::RICKROLL_IMAGE;
use crate::output::OutputBlock;
use serde::Serialize;

/// The two timer-driven sequences. Stage content is a pure function of the
/// stage index; scheduling the delays is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StagedKind {
    /// `test`: fake hack protocol ending in the canned rick-roll.
    Hack,
    /// `rm -rf /`: fake kernel panic followed by a crash-and-recover signal.
    Crash,
}

/// Milliseconds to wait before each stage after the initial one.
pub fn delays(kind: StagedKind) -> &'static [u32] {
    match kind {
        StagedKind::Hack => &[800, 1000, 1200],
        StagedKind::Crash => &[1000],
    }
}

/// Delay before the crashed UI recovers on its own.
pub const CRASH_RECOVERY_MS: u32 = 5000;

/// Full output of the sequence's transcript entry at the given stage.
/// Stage 0 is what `submit` writes; each later stage replaces the entry.
/// Out-of-range stages yield None so a stale timer cannot corrupt anything.
pub fn stage_output(kind: StagedKind, stage: usize) -> Option<Vec<OutputBlock>> {
    match (kind, stage) {
        (StagedKind::Hack, 0) => Some(vec![OutputBlock::text("Initializing hack protocol...")]),
        (StagedKind::Hack, 1) => Some(vec![
            OutputBlock::text("Initializing hack protocol... [OK]"),
            OutputBlock::text("Bypassing firewalls..."),
        ]),
        (StagedKind::Hack, 2) => Some(vec![
            OutputBlock::text("Initializing hack protocol... [OK]"),
            OutputBlock::text("Bypassing firewalls... [OK]"),
            OutputBlock::text("Downloading payload..."),
        ]),
        (StagedKind::Hack, 3) => Some(vec![
            OutputBlock::text("Rickrolling in 3... 2... 1..."),
            OutputBlock::image(RICKROLL_IMAGE),
        ]),
        (StagedKind::Crash, 0) => Some(vec![OutputBlock::text("Deleting system files...")]),
        (StagedKind::Crash, 1) => Some(vec![
            OutputBlock::text("Deleting system files..."),
            OutputBlock::error("CRITICAL ERROR: KERNEL PANIC"),
        ]),
        _ => None,
    }
}

/// Index of the last stage for a sequence.
pub fn final_stage(kind: StagedKind) -> usize {
    delays(kind).len()
}
