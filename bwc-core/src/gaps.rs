//! Missing time detection.
//!
//! For each person, clips are put in chronological order and every idle
//! interval between one clip's end and the next clip's start is reported.
//! Group assignment plays no part here.

use crate::clip::Clip;
use crate::naming::Identity;

use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Idle interval between two consecutive clips of one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub first_name: String,
    pub last_name: String,
    /// End of the earlier clip.
    pub gap_start: NaiveDateTime,
    /// Start of the later clip.
    pub gap_end: NaiveDateTime,
    /// Always greater than zero.
    pub gap_duration_secs: u64,
}

impl Gap {
    pub fn identity(&self) -> Identity {
        Identity::new(&self.first_name, &self.last_name)
    }
}

/// Finds every gap between consecutive clips of each identity.
///
/// Identities are visited in order of first appearance in `clips`; gaps
/// within an identity are chronological. Only adjacent pairs are compared,
/// so overlapping or touching neighbours produce no gap.
pub fn find_gaps(clips: &[Clip]) -> Vec<Gap> {
    let mut order: Vec<Identity> = Vec::new();
    let mut partitions: HashMap<Identity, Vec<&Clip>> = HashMap::new();

    for clip in clips {
        let identity = clip.identity();
        partitions
            .entry(identity.clone())
            .or_insert_with(|| {
                order.push(identity);
                Vec::new()
            })
            .push(clip);
    }

    let mut gaps = Vec::new();
    for identity in &order {
        let Some(person_clips) = partitions.get_mut(identity) else {
            continue;
        };
        person_clips.sort_by_key(|c| c.start_time);

        for pair in person_clips.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            let idle = (later.start_time - earlier.end_time).num_seconds();
            if idle > 0 {
                gaps.push(Gap {
                    first_name: identity.first_name.clone(),
                    last_name: identity.last_name.clone(),
                    gap_start: earlier.end_time,
                    gap_end: later.start_time,
                    gap_duration_secs: idle.unsigned_abs(),
                });
            }
        }
    }

    log::debug!("Found {} gap(s) across {} identities", gaps.len(), order.len());
    gaps
}
