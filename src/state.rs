use crate::controller::ControllerClient;
use crate::panel::Panel;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<Mutex<Panel>>,
    pub controller: ControllerClient,
}

impl AppState {
    pub fn new(controller: ControllerClient) -> Self {
        Self {
            panel: Arc::new(Mutex::new(Panel::new())),
            controller,
        }
    }
}
