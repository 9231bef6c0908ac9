//! Theme resolution command.

use clap::Parser;

/// Resolve a theme name to its palette.
#[derive(Debug, Parser)]
pub struct ThemeCommand {
    /// Theme name. Unknown names resolve to "light".
    pub name: String,

    /// Month index for month-varying themes (0 = January).
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=11))]
    pub month: u32,
}
