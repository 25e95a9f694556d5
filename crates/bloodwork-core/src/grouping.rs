//! Chronological ordering, grouping and windowing of readings.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use bloodwork_model::{MetricGroup, MetricReading};
use bloodwork_standards::Terminology;
use bloodwork_transform::parse_collection_date;

/// Sort key for a collection date. Unparseable dates sort after every
/// parseable one and keep their relative order.
pub fn chronological_key(date: &str) -> (bool, Option<NaiveDate>) {
    let parsed = parse_collection_date(date);
    (parsed.is_none(), parsed)
}

/// Stable chronological sort, oldest first.
pub fn sort_chronologically(readings: &mut [MetricReading]) {
    readings.sort_by_cached_key(|reading| chronological_key(&reading.date));
}

/// Group readings by metric id.
///
/// Readings inside a group are in chronological order; groups are ordered by
/// metric name, ignoring case. The group unit is the first unit reported.
pub fn group_readings_by_metric(
    readings: &[MetricReading],
    terminology: &Terminology,
) -> Vec<MetricGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<MetricGroup> = Vec::new();

    for reading in readings {
        let slot = *index.entry(reading.metric_id.as_str()).or_insert_with(|| {
            groups.push(MetricGroup {
                metric_id: reading.metric_id.clone(),
                metric_name: reading.metric_name.clone(),
                category: reading.category.clone(),
                unit: None,
                readings: Vec::new(),
                description: terminology
                    .describe(&reading.metric_name)
                    .map(str::to_string),
            });
            groups.len() - 1
        });
        groups[slot].readings.push(reading.clone());
    }

    for group in &mut groups {
        sort_chronologically(&mut group.readings);
        group.unit = group
            .readings
            .iter()
            .find_map(|reading| reading.unit.clone());
    }
    groups.sort_by_cached_key(|group| (group.metric_name.to_lowercase(), group.metric_id.clone()));
    groups
}

/// Partition groups by category; categories come out in alphabetical order
/// and groups keep their order within a category.
pub fn group_by_category(groups: Vec<MetricGroup>) -> BTreeMap<String, Vec<MetricGroup>> {
    let mut categories: BTreeMap<String, Vec<MetricGroup>> = BTreeMap::new();
    for group in groups {
        categories
            .entry(group.category.clone())
            .or_default()
            .push(group);
    }
    categories
}

/// Every collection date present, oldest first, without duplicates.
pub fn distinct_dates(readings: &[MetricReading]) -> Vec<String> {
    let mut dates: Vec<&str> = Vec::new();
    for reading in readings {
        if !dates.contains(&reading.date.as_str()) {
            dates.push(&reading.date);
        }
    }
    dates.sort_by_cached_key(|date| chronological_key(date));
    dates.into_iter().map(str::to_string).collect()
}

/// Change between the last two readings of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendChange {
    /// `latest - previous`.
    pub delta: f64,
    /// Delta relative to the previous value, in percent.
    pub percent: f64,
}

/// Change from the second-to-last to the last reading.
///
/// `None` with fewer than two readings, when either value is missing, or when
/// the previous value is zero.
pub fn calculate_change(readings: &[MetricReading]) -> Option<TrendChange> {
    let [.., previous, latest] = readings else {
        return None;
    };
    let (previous, latest) = (previous.value?, latest.value?);
    if previous == 0.0 {
        return None;
    }
    let delta = latest - previous;
    Some(TrendChange {
        delta,
        percent: delta / previous * 100.0,
    })
}

/// Inclusive collection-date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Keep only the most recent collection date left after the bounds.
    pub latest_only: bool,
}

impl DateWindow {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none() && !self.latest_only
    }

    /// Readings inside the window, in their original order.
    ///
    /// When a bound is set, readings whose date cannot be parsed are dropped.
    /// `latest_only` keeps the readings on the latest parseable date; it leaves
    /// the set unchanged when no date parses.
    pub fn apply(&self, readings: &[MetricReading]) -> Vec<MetricReading> {
        let bounded = self.start.is_some() || self.end.is_some();
        let mut kept: Vec<(Option<NaiveDate>, &MetricReading)> = readings
            .iter()
            .map(|reading| (parse_collection_date(&reading.date), reading))
            .filter(|(date, _)| match date {
                Some(date) => self.contains(*date),
                None => !bounded,
            })
            .collect();

        if self.latest_only
            && let Some(latest) = kept.iter().filter_map(|(date, _)| *date).max()
        {
            kept.retain(|(date, _)| *date == Some(latest));
        }

        kept.into_iter().map(|(_, reading)| reading.clone()).collect()
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}
