#![allow(dead_code)]

use async_trait::async_trait;
use golf_hole_stream::error::CoreError;
use golf_hole_stream::model::HoleRecord;
use golf_hole_stream::storage::{
    EventPublisher, PageSource, PublishError, SnapshotStore, StoreError, StreamKeyResolver,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Renders a stats page in the shape the live site serves: tournament and
/// course dropdowns plus the marker table. Each row is (label, cells).
pub fn stats_page_html(tournament: &str, course: &str, rows: &[(&str, &[&str])]) -> String {
    let mut table = String::new();
    for (label, cells) in rows {
        table.push_str("<tr><td>");
        table.push_str(label);
        table.push_str("</td>");
        for cell in *cells {
            table.push_str("<td>");
            table.push_str(cell);
            table.push_str("</td>");
        }
        table.push_str("</tr>\n");
    }

    format!(
        r#"<html><body>
<select name="tournaments">
  <option value="100">Some Other Open</option>
  <option value="200" selected>{tournament}</option>
</select>
<select name="course">
  <option selected>{course}</option>
</select>
<table class="colhead"><tr><td>decoy</td></tr></table>
<table class="tablehead">
{table}
</table>
</body></html>"#
    )
}

/// Full six-category table over three holes, the baseline fixture.
pub fn full_fixture(tournament: &str, course: &str) -> String {
    stats_page_html(
        tournament,
        course,
        &[
            ("HOLE", &["1", "2", "3"]),
            ("YARDS", &["402", "575", "190"]),
            ("EAGLES", &["0", "1", "0"]),
            ("BIRDIES", &["4", "9", "2"]),
            ("PARS", &["38", "30", "41"]),
            ("BOGEYS", &["12", "8", "10"]),
            ("DOUBLES", &["1", "0", "2"]),
            ("OTHERS", &["0", "0", "1"]),
        ],
    )
}

pub struct FakePageSource {
    pub html: String,
}

#[async_trait]
impl PageSource for FakePageSource {
    async fn fetch(&self) -> Result<String, CoreError> {
        Ok(self.html.clone())
    }
}

#[derive(Default)]
pub struct MemorySnapshotStore {
    pub records: Mutex<Option<Vec<HoleRecord>>>,
    pub fail_get: bool,
    pub fail_put: bool,
    /// Suspend once inside `get` before reading, like any store that goes
    /// over the wire.
    pub slow_get: bool,
}

impl MemorySnapshotStore {
    pub fn with_previous(records: Vec<HoleRecord>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<Vec<HoleRecord>> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn get(&self) -> Result<Option<Vec<HoleRecord>>, StoreError> {
        if self.fail_get {
            return Err(StoreError::new("simulated load failure"));
        }
        if self.slow_get {
            tokio::task::yield_now().await;
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn put(&self, holes: &[HoleRecord]) -> Result<(), StoreError> {
        if self.fail_put {
            return Err(StoreError::new("simulated persist failure"));
        }
        *self.records.lock().unwrap() = Some(holes.to_vec());
        Ok(())
    }
}

/// Resolver over an explicit (tournament, course, hole) map.
#[derive(Default)]
pub struct StaticKeyResolver {
    pub keys: HashMap<(String, String, u32), String>,
}

impl StaticKeyResolver {
    pub fn single(tournament: &str, course: &str, hole: u32, key: &str) -> Self {
        let mut keys = HashMap::new();
        keys.insert(
            (tournament.to_string(), course.to_string(), hole),
            key.to_string(),
        );
        Self { keys }
    }

    pub fn all_holes(tournament: &str, course: &str, holes: u32, prefix: &str) -> Self {
        let mut keys = HashMap::new();
        for hole in 1..=holes {
            keys.insert(
                (tournament.to_string(), course.to_string(), hole),
                format!("{prefix}-{hole}"),
            );
        }
        Self { keys }
    }
}

impl StreamKeyResolver for StaticKeyResolver {
    fn lookup(&self, tournament: &str, course: &str, hole: u32) -> Option<String> {
        self.keys
            .get(&(tournament.to_string(), course.to_string(), hole))
            .cloned()
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    pub calls: Mutex<Vec<(String, String, i32)>>,
    pub fail: bool,
}

impl RecordingPublisher {
    pub fn published(&self) -> Vec<(String, String, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(
        &self,
        write_key: &str,
        stream_name: &str,
        value: i32,
    ) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push((
            write_key.to_string(),
            stream_name.to_string(),
            value,
        ));
        if self.fail {
            return Err(PublishError::new("simulated publish failure"));
        }
        Ok(())
    }
}
