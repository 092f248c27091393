use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot returned by the controller's status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub status_heater1: f64,
    pub status_heater2: f64,
    pub status_bubbles: f64,
    pub status_transfo: f64,
    pub value_temp1: f64,
    pub value_temp2: f64,
    pub value_flow: f64,
}

impl DeviceStatus {
    pub fn heater_on(&self) -> bool {
        !(self.status_heater1 == 0.0 && self.status_heater2 == 0.0)
    }

    pub fn bubbles_on(&self) -> bool {
        self.status_bubbles != 0.0
    }

    pub fn transfo_on(&self) -> bool {
        self.status_transfo != 0.0
    }

    pub fn mean_temperature(&self) -> f64 {
        (self.value_temp1 + self.value_temp2) / 2.0
    }
}

/// A toggleable piece of equipment, named by its element id on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Control {
    #[serde(rename = "tempButton")]
    Heater,
    #[serde(rename = "bubblesButton")]
    Bubbles,
    #[serde(rename = "flowButton")]
    Flow,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Heater, Control::Bubbles, Control::Flow];

    pub fn element_id(self) -> &'static str {
        match self {
            Control::Heater => "tempButton",
            Control::Bubbles => "bubblesButton",
            Control::Flow => "flowButton",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.element_id() == id)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// A text display on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Readout {
    Temperature,
    Temp1,
    Temp2,
    Flow,
}

impl Readout {
    pub const ALL: [Readout; 4] = [
        Readout::Temperature,
        Readout::Temp1,
        Readout::Temp2,
        Readout::Flow,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Readout::Temperature => "valeurTemperature",
            Readout::Temp1 => "T1",
            Readout::Temp2 => "T2",
            Readout::Flow => "Flow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    On,
    Off,
}

impl Directive {
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::On => "on",
            Directive::Off => "off",
        }
    }

    pub fn is_on(self) -> bool {
        self == Directive::On
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub control: String,
}

/// Serialisable copy of the panel, keyed by element id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub markers: BTreeMap<String, bool>,
    pub text: BTreeMap<String, String>,
    pub last_render: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub control: Control,
    pub directive: Directive,
    pub panel: PanelSnapshot,
}
