use crate::model::{HoleEvents, HoleRecord, ShotCategory, ShotCounts};
use crate::storage::StreamKeyResolver;
use tracing::warn;

fn slug(value: &str) -> String {
    value.replace(' ', "-").to_lowercase()
}

/// Human-readable substream identifier carried alongside the opaque write
/// key, e.g. `golf-hole-by-hole-the-masters-augusta-national-12.json`.
#[must_use]
pub fn stream_name(tournament: &str, course: &str, hole: u32) -> String {
    format!(
        "golf-hole-by-hole-{}-{}-{}.json",
        slug(tournament),
        slug(course),
        hole
    )
}

/// Expands one hole's count movement into ordered weight values. Only shots
/// moving out of a category (previous > current) emit events; increases are
/// dropped, carried over from the source feed's behavior.
#[must_use]
pub fn hole_event_values(previous: &ShotCounts, current: &ShotCounts) -> Vec<i32> {
    let mut values = Vec::new();
    for category in ShotCategory::ALL {
        let delta = i64::from(previous.get(category)) - i64::from(current.get(category));
        for _ in 0..delta.max(0) {
            values.push(category.weight());
        }
    }
    values
}

/// Diffs the current record set against the prior snapshot, producing one
/// event batch per hole that both moved and has a configured destination.
/// Per-hole misses are reported and skipped, never fatal.
pub fn diff_snapshots(
    current: &[HoleRecord],
    previous: &[HoleRecord],
    keys: &dyn StreamKeyResolver,
) -> Vec<HoleEvents> {
    let mut batches = Vec::new();

    for record in current {
        let Some(prior) = previous.iter().find(|p| p.same_identity(record)) else {
            warn!(
                tournament = %record.tournament,
                course = %record.course,
                hole = record.hole,
                "no prior record for hole, skipping"
            );
            continue;
        };

        let values = hole_event_values(&prior.shots, &record.shots);
        if values.is_empty() {
            continue;
        }

        let Some(write_key) = keys.lookup(&record.tournament, &record.course, record.hole) else {
            warn!(
                tournament = %record.tournament,
                course = %record.course,
                hole = record.hole,
                "no write key configured for hole, skipping dispatch"
            );
            continue;
        };

        batches.push(HoleEvents {
            tournament: record.tournament.clone(),
            course: record.course.clone(),
            hole: record.hole,
            stream_name: stream_name(&record.tournament, &record.course, record.hole),
            write_key,
            values,
        });
    }

    batches
}
