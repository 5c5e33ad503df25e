//! Pure analysis stage: grouping plus missing time detection.

use crate::clip::Clip;
use crate::gaps::{Gap, find_gaps};
use crate::grouping::{GroupingStrategy, SceneGroup, assign_groups, scene_groups};

/// Clips sorted by start time with groups assigned, plus per-person gaps.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub clips: Vec<Clip>,
    pub gaps: Vec<Gap>,
    pub group_count: u32,
}

impl Analysis {
    /// Concurrent scene views over `clips`, in group id order.
    pub fn groups(&self) -> Vec<SceneGroup<'_>> {
        scene_groups(&self.clips)
    }
}

/// Groups the clips and detects gaps.
///
/// Takes ownership of the working set and returns it sorted and grouped.
pub fn analyze(mut clips: Vec<Clip>, strategy: GroupingStrategy) -> Analysis {
    let group_count = assign_groups(&mut clips, strategy);
    let gaps = find_gaps(&clips);
    Analysis {
        clips,
        gaps,
        group_count,
    }
}
