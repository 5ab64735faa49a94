use log::Level;

const DEFAULT_RECORDS_URL: &str = "/db.json";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where the partner directory is fetched from. Override at build time with
/// `DOTTFIT_RECORDS_URL`.
pub fn records_url() -> &'static str {
    option_env!("DOTTFIT_RECORDS_URL").unwrap_or(DEFAULT_RECORDS_URL)
}

/// EmailJS identifiers for the intake form. All three are public values that
/// ship in the page anyway.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailJsConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send",
            service_id: option_env!("DOTTFIT_EMAILJS_SERVICE").unwrap_or("service_jj0yb24"),
            template_id: option_env!("DOTTFIT_EMAILJS_TEMPLATE").unwrap_or("template_zjyj4ug"),
            public_key: option_env!("DOTTFIT_EMAILJS_PUBLIC_KEY").unwrap_or("TOg3FSHAZlLd7OE21"),
        }
    }
}
