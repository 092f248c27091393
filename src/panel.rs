use crate::models::{Control, PanelSnapshot, Readout};
use chrono::{DateTime, Local};
use std::collections::{BTreeMap, BTreeSet};

/// The UI state render and toggle logic write to.
///
/// A marker is the "active" flag of a control; readouts hold display text.
pub trait PanelView {
    fn is_active(&self, control: Control) -> bool;
    fn set_active(&mut self, control: Control, active: bool);
    fn set_text(&mut self, readout: Readout, text: String);
}

/// In-process model of the page.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    active: BTreeSet<Control>,
    text: BTreeMap<Readout, String>,
    last_render: Option<DateTime<Local>>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, readout: Readout) -> &str {
        self.text.get(&readout).map(String::as_str).unwrap_or("")
    }

    pub fn mark_rendered(&mut self, at: DateTime<Local>) {
        self.last_render = Some(at);
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            markers: Control::ALL
                .into_iter()
                .map(|control| (control.element_id().to_string(), self.is_active(control)))
                .collect(),
            text: Readout::ALL
                .into_iter()
                .map(|readout| (readout.element_id().to_string(), self.text(readout).to_string()))
                .collect(),
            last_render: self
                .last_render
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

impl PanelView for Panel {
    fn is_active(&self, control: Control) -> bool {
        self.active.contains(&control)
    }

    fn set_active(&mut self, control: Control, active: bool) {
        if active {
            self.active.insert(control);
        } else {
            self.active.remove(&control);
        }
    }

    fn set_text(&mut self, readout: Readout, text: String) {
        self.text.insert(readout, text);
    }
}
