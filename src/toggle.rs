use crate::models::{Control, Directive, ToggleResponse};
use crate::panel::PanelView;
use crate::state::AppState;
use tracing::{debug, info};

/// Flips the control's marker and returns the directive to send.
pub fn flip<V: PanelView + ?Sized>(view: &mut V, control: Control) -> Directive {
    let directive = if view.is_active(control) {
        info!(%control, "switching off");
        Directive::Off
    } else {
        info!(%control, "switching on");
        Directive::On
    };
    view.set_active(control, directive.is_on());
    directive
}

/// Handles a click: updates the panel optimistically and fires the activation
/// request without waiting for it. The next successful poll reconciles the panel.
pub async fn on_toggle(state: &AppState, control: Control) -> ToggleResponse {
    let (directive, panel) = {
        let mut panel = state.panel.lock().await;
        let directive = flip(&mut *panel, control);
        (directive, panel.snapshot())
    };

    let controller = state.controller.clone();
    tokio::spawn(async move {
        if let Err(err) = controller.activate(control, directive).await {
            debug!(%control, %directive, "activation request failed: {err}");
        }
    });

    ToggleResponse {
        control,
        directive,
        panel,
    }
}
