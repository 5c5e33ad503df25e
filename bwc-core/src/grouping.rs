//! Concurrent scene grouping.
//!
//! Clips are sorted by start time and swept once. A clip joins the current
//! group when it starts no later than the group's reach; otherwise it opens
//! the next group. Group ids count up from 1 in start-time order.

use crate::clip::Clip;

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// How far a group reaches when deciding whether the next clip joins it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// Reach is the latest end time of any clip already in the group.
    #[default]
    RunningMax,
    /// Reach is the end time of the immediately preceding clip only.
    ///
    /// A short clip nested inside a longer one can end the group early, so
    /// later clips overlapping the long one start a new group.
    Adjacent,
}

/// A concurrent scene: group id plus its clips in start-time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneGroup<'a> {
    pub id: u32,
    pub clips: Vec<&'a Clip>,
}

impl SceneGroup<'_> {
    /// Case number of the first clip in the group.
    pub fn case_number(&self) -> &str {
        self.clips
            .first()
            .map(|c| c.case_number.as_str())
            .unwrap_or("unknown_case")
    }

    /// Base name shared by the group's playlist and organize folder.
    pub fn playlist_stem(&self) -> String {
        format!("{}_concurrentScene-{}", self.case_number(), self.id)
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.clips.first().map(|c| c.start_time)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.clips.iter().map(|c| c.end_time).max()
    }
}

/// Sorts `clips` by start time and assigns a group id to each.
///
/// The sort is stable, so clips with equal start times keep their incoming
/// order and repeated runs assign identical ids.
///
/// # Returns
///
/// The number of groups formed (0 for an empty slice).
pub fn assign_groups(clips: &mut [Clip], strategy: GroupingStrategy) -> u32 {
    clips.sort_by_key(|c| c.start_time);

    let mut current_group = 0;
    let mut reach: Option<NaiveDateTime> = None;

    for clip in clips.iter_mut() {
        match reach {
            Some(r) if clip.start_time <= r => {
                reach = Some(match strategy {
                    GroupingStrategy::RunningMax => r.max(clip.end_time),
                    GroupingStrategy::Adjacent => clip.end_time,
                });
            }
            _ => {
                current_group += 1;
                reach = Some(clip.end_time);
            }
        }
        clip.group = Some(current_group);
    }

    log::debug!("Formed {} concurrent scene group(s) from {} clip(s)", current_group, clips.len());
    current_group
}

/// Collects grouped clips into one [`SceneGroup`] per group id, in id order.
///
/// Expects `clips` as left by [`assign_groups`]; clips without a group are ignored.
pub fn scene_groups(clips: &[Clip]) -> Vec<SceneGroup<'_>> {
    let mut by_id: BTreeMap<u32, Vec<&Clip>> = BTreeMap::new();
    for clip in clips {
        if let Some(id) = clip.group {
            by_id.entry(id).or_default().push(clip);
        }
    }
    by_id
        .into_iter()
        .map(|(id, mut members)| {
            members.sort_by_key(|c| c.start_time);
            SceneGroup { id, clips: members }
        })
        .collect()
}
