use crate::controller::parse::StatsPage;
use crate::error::CoreError;
use crate::model::{HoleRecord, ShotCategory, ShotCounts};
use std::collections::{HashMap, HashSet};

fn parse_count(raw: &str, label: &str, hole: u32) -> Result<u32, CoreError> {
    raw.parse::<u32>().map_err(|_| {
        CoreError::Schema(format!("unparseable {label} count {raw:?} for hole {hole}"))
    })
}

/// Interprets the parsed grid. The header row's cells are hole numbers; each
/// later row is matched by label against the fixed category set, anything
/// else (PAR, YARDS, other metadata rows) is skipped. Every hole column gets
/// one record, and every record carries all six categories or extraction
/// fails.
pub fn extract_records(page: &StatsPage) -> Result<Vec<HoleRecord>, CoreError> {
    let (header, data_rows) = page
        .rows
        .split_first()
        .ok_or_else(|| CoreError::Parse("stats table is empty".to_string()))?;

    let mut holes = Vec::with_capacity(header.cells.len());
    let mut seen = HashSet::new();
    for cell in &header.cells {
        let hole = cell
            .parse::<u32>()
            .map_err(|_| CoreError::Schema(format!("unparseable hole number {cell:?}")))?;
        // One record per (tournament, course, hole) triple; a repeated
        // column would produce duplicates downstream.
        if !seen.insert(hole) {
            return Err(CoreError::Schema(format!(
                "duplicate hole number {hole} in header row"
            )));
        }
        holes.push(hole);
    }

    // Duplicate category rows are last-wins, matching the source table
    // parser's behavior.
    let mut counts_by_category: HashMap<ShotCategory, Vec<u32>> = HashMap::new();
    for row in data_rows {
        let Some(category) = ShotCategory::from_label(&row.label) else {
            continue;
        };

        let mut counts = Vec::with_capacity(holes.len());
        for (idx, &hole) in holes.iter().enumerate() {
            let cell = row.cells.get(idx).ok_or_else(|| {
                CoreError::Schema(format!(
                    "row {} has {} cells, no value for hole {hole}",
                    row.label,
                    row.cells.len()
                ))
            })?;
            counts.push(parse_count(cell, &row.label, hole)?);
        }
        counts_by_category.insert(category, counts);
    }

    let missing: Vec<&str> = ShotCategory::ALL
        .iter()
        .filter(|c| !counts_by_category.contains_key(c))
        .map(|c| c.label())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::IncompleteData(format!(
            "category rows missing from stats table: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::with_capacity(holes.len());
    for (idx, &hole) in holes.iter().enumerate() {
        let mut shots = ShotCounts::default();
        for category in ShotCategory::ALL {
            shots.set(category, counts_by_category[&category][idx]);
        }
        records.push(HoleRecord {
            tournament: page.tournament.clone(),
            course: page.course.clone(),
            hole,
            shots,
        });
    }

    Ok(records)
}
