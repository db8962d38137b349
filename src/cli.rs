// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::params::Parameters;

#[derive(Parser, Debug, Clone)]
#[command(name = "hexagon-ring")]
#[command(about = "Ring of rotating flat polygons with a live control panel", long_about = None)]
pub struct Cli {
    /// Initial number of polygons (3..=10)
    #[arg(long, default_value_t = Parameters::DEFAULT_COUNT)]
    pub count: u32,

    /// Initial spread angle in degrees (0..=180)
    #[arg(long, default_value_t = Parameters::DEFAULT_ANGLE)]
    pub angle: f32,

    /// Number of outer segments of each polygon (6 = hexagon, clamped to 3..=65534)
    #[arg(long, default_value_t = 6)]
    pub segments: u32,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Seed for polygon colors; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the control panel and overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Parameter Set described by the command line, clamped into range
    pub fn parameters(&self) -> Parameters {
        Parameters::new(self.count, self.angle)
    }
}
