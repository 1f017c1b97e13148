use crate::app::config::Config;

/// Values rendered into `index.html` for a single request.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub app_version: String,
    pub backend_version: String,
    pub backend_host: String,
    pub backend_port: u16,
    pub field: &'static str,
    pub title: &'static str,
    pub amount: i64,
    pub result: String,
}

impl HomeView {
    pub fn new(config: &Config, backend_version: String, amount: i64, result: String) -> Self {
        Self {
            app_version: config.app_version.clone(),
            backend_version,
            backend_host: config.backend_host.clone(),
            backend_port: config.backend_port,
            field: config.variant.form_field(),
            title: config.variant.title(),
            amount,
            result,
        }
    }

    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![
            ("app_version", self.app_version.clone()),
            ("backend_version", self.backend_version.clone()),
            ("backend_host", self.backend_host.clone()),
            ("backend_port", self.backend_port.to_string()),
            ("field", self.field.to_string()),
            ("title", self.title.to_string()),
            ("amount", self.amount.to_string()),
            ("result", self.result.clone()),
        ]
    }
}

/// Values rendered into `diagram.svg`.
#[derive(Debug, Clone)]
pub struct DiagramView {
    pub frontend_version: String,
    pub backend_version: String,
}

impl DiagramView {
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![
            ("app_version", self.frontend_version.clone()),
            ("backend_version", self.backend_version.clone()),
        ]
    }
}
