use serde::{Deserialize, Serialize};

pub const TAB_COUNT: usize = 5;
pub const MAX_COUNT: u8 = 99;

/// Five independent counters and the tab currently shown.
///
/// Every mutation reports whether anything changed so callers can decide
/// whether a repaint is needed. Values never leave `0..=MAX_COUNT` and the
/// active tab never leaves `0..TAB_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCounterModel")]
pub struct CounterModel {
    active_tab: usize,
    counters: [u8; TAB_COUNT],
}

#[derive(Deserialize)]
struct RawCounterModel {
    active_tab: usize,
    counters: [u8; TAB_COUNT],
}

impl TryFrom<RawCounterModel> for CounterModel {
    type Error = String;

    fn try_from(raw: RawCounterModel) -> Result<Self, Self::Error> {
        if raw.active_tab >= TAB_COUNT {
            return Err(format!("active_tab {} out of range", raw.active_tab));
        }
        if let Some(v) = raw.counters.iter().find(|v| **v > MAX_COUNT) {
            return Err(format!("counter value {v} exceeds {MAX_COUNT}"));
        }
        Ok(Self {
            active_tab: raw.active_tab,
            counters: raw.counters,
        })
    }
}

impl CounterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn counters(&self) -> &[u8; TAB_COUNT] {
        &self.counters
    }

    pub fn value(&self, tab: usize) -> Option<u8> {
        self.counters.get(tab).copied()
    }

    pub fn active_value(&self) -> u8 {
        self.counters[self.active_tab]
    }

    /// Two-digit, zero-padded rendering of the active counter.
    pub fn display_text(&self) -> String {
        format!("{:02}", self.active_value())
    }

    pub fn select_tab(&mut self, tab: usize) -> bool {
        if tab >= TAB_COUNT {
            tracing::warn!(tab, "ignoring out-of-range tab selection");
            return false;
        }
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn increment(&mut self) -> bool {
        let value = &mut self.counters[self.active_tab];
        if *value >= MAX_COUNT {
            return false;
        }
        *value += 1;
        true
    }

    pub fn decrement(&mut self) -> bool {
        let value = &mut self.counters[self.active_tab];
        if *value == 0 {
            return false;
        }
        *value -= 1;
        true
    }

    pub fn reset(&mut self) -> bool {
        let value = &mut self.counters[self.active_tab];
        let changed = *value != 0;
        *value = 0;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_tab_with_zeroes() {
        let model = CounterModel::new();
        assert_eq!(model.active_tab(), 0);
        assert_eq!(model.counters(), &[0; TAB_COUNT]);
        assert_eq!(model.display_text(), "00");
    }

    #[test]
    fn increment_stops_at_ceiling() {
        let mut model = CounterModel::new();
        for _ in 0..MAX_COUNT {
            assert!(model.increment());
        }
        assert!(!model.increment());
        assert_eq!(model.active_value(), MAX_COUNT);
    }

    #[test]
    fn decrement_stops_at_floor() {
        let mut model = CounterModel::new();
        assert!(!model.decrement());
        assert_eq!(model.active_value(), 0);
    }

    #[test]
    fn reset_reports_change_only_when_non_zero() {
        let mut model = CounterModel::new();
        assert!(!model.reset());
        model.increment();
        assert!(model.reset());
        assert_eq!(model.active_value(), 0);
    }

    #[test]
    fn select_same_tab_is_not_a_change() {
        let mut model = CounterModel::new();
        assert!(!model.select_tab(0));
        assert!(model.select_tab(3));
        assert!(!model.select_tab(3));
    }

    #[test]
    fn out_of_range_tab_is_ignored() {
        let mut model = CounterModel::new();
        assert!(!model.select_tab(TAB_COUNT));
        assert_eq!(model.active_tab(), 0);
    }

    #[test]
    fn deserialize_rejects_out_of_range_values() {
        let bad_tab = serde_json::json!({"active_tab": 5, "counters": [0, 0, 0, 0, 0]});
        assert!(serde_json::from_value::<CounterModel>(bad_tab).is_err());

        let bad_value = serde_json::json!({"active_tab": 1, "counters": [0, 100, 0, 0, 0]});
        assert!(serde_json::from_value::<CounterModel>(bad_value).is_err());

        let ok = serde_json::json!({"active_tab": 1, "counters": [0, 42, 0, 0, 0]});
        let model: CounterModel = serde_json::from_value(ok).unwrap();
        assert_eq!(model.display_text(), "42");
    }

    #[test]
    fn mutations_only_touch_active_tab() {
        let mut model = CounterModel::new();
        model.select_tab(2);
        model.increment();
        model.increment();
        assert_eq!(model.counters(), &[0, 0, 2, 0, 0]);
    }
}
