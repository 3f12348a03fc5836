use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum ResType {
    /// Bundle stylesheets for the text view
    Styles,
    /// Per-locale UI templates
    Templates,
}

// Re-export resource-specific modules
pub mod styles;
pub mod templates;
