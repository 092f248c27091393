use crate::fmt::fmt_number;
use crate::models::{Control, DeviceStatus, Readout};
use crate::panel::PanelView;
use tracing::debug;

/// Pushes one status snapshot into the panel, replacing whatever was shown.
pub fn render<V: PanelView + ?Sized>(status: &DeviceStatus, view: &mut V) {
    debug!(?status, "rendering status");

    view.set_active(Control::Heater, status.heater_on());
    view.set_active(Control::Bubbles, status.bubbles_on());
    view.set_active(Control::Flow, status.transfo_on());

    view.set_text(Readout::Temperature, fmt_number(status.mean_temperature()));
    view.set_text(Readout::Temp1, fmt_number(status.value_temp1));
    view.set_text(Readout::Temp2, fmt_number(status.value_temp2));
    view.set_text(Readout::Flow, fmt_number(status.value_flow));
}
