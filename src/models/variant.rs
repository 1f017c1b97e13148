use std::fmt;

use clap::ValueEnum;

/// Which of the two frontends is being served.
///
/// Both variants share every route and rule; they differ only in the form
/// field they read and the page they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Membership,
    Orders,
}

impl Variant {
    /// Name of the form field carrying the amount.
    pub fn form_field(&self) -> &'static str {
        match self {
            Variant::Membership => "Membership",
            Variant::Orders => "order",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Variant::Membership => "Membership",
            Variant::Orders => "Orders",
        }
    }

    pub fn default_static_dir(&self) -> String {
        format!("static/{}", self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Membership => write!(f, "membership"),
            Variant::Orders => write!(f, "orders"),
        }
    }
}
