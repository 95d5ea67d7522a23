use serde::{Deserialize, Serialize};

use crate::widget::counters::CounterModel;
use crate::widget::drag::DragState;

/// All mutable widget state, separate from drawing and input side effects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetState {
    pub counters: CounterModel,
    pub drag: DragState,
}
