use clap::{Parser, Subcommand, ValueEnum};
use tristrip::SeedOrder;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedOrderArg {
    /// Re-sort the remaining triangles after every strip.
    Resort,
    /// Keep remaining triangles in a priority queue.
    PriorityQueue,
}

impl From<SeedOrderArg> for SeedOrder {
    fn from(arg: SeedOrderArg) -> Self {
        match arg {
            SeedOrderArg::Resort => SeedOrder::Resort,
            SeedOrderArg::PriorityQueue => SeedOrder::PriorityQueue,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct StripArgs {
    pub tri_path: String,

    #[arg(short, long, value_enum, default_value_t = SeedOrderArg::Resort)]
    pub seed_order: SeedOrderArg,

    /// Write the strips to this path in binary form.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print every strip.
    #[arg(short, long)]
    pub list: bool,
}

#[derive(clap::Args, Debug)]
pub struct SvgArgs {
    pub tri_path: String,

    /// Output path for the svg file.
    #[arg(short, long)]
    pub output: String,

    #[arg(short, long, value_enum, default_value_t = SeedOrderArg::Resort)]
    pub seed_order: SeedOrderArg,

    /// Draw links to the previous triangle instead of the next one.
    #[arg(short, long)]
    pub backward: bool,
}

#[derive(clap::Args, Debug)]
pub struct PickArgs {
    pub tri_path: String,

    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    #[arg(allow_negative_numbers = true)]
    pub y: f64,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build triangle strips and report them.
    Strip(StripArgs),
    /// Render triangles and strip links to an svg file.
    Svg(SvgArgs),
    /// Show the triangle under a point and its neighbours.
    Pick(PickArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strip_command() {
        let args = Args::try_parse_from([
            "tristrip",
            "strip",
            "mesh.tri",
            "--seed-order",
            "priority-queue",
            "-o",
            "out.bin",
        ])
        .unwrap();
        let Commands::Strip(strip) = args.command else {
            panic!("expected strip command");
        };
        assert_eq!("mesh.tri", strip.tri_path);
        assert_eq!(SeedOrderArg::PriorityQueue, strip.seed_order);
        assert_eq!(Some("out.bin".to_string()), strip.output);
        assert!(!strip.list);
    }

    #[test]
    fn parse_pick_with_negative_coordinates() {
        let args = Args::try_parse_from(["tristrip", "pick", "mesh.tri", "-1.5", "2"]).unwrap();
        let Commands::Pick(pick) = args.command else {
            panic!("expected pick command");
        };
        assert_eq!(-1.5, pick.x);
        assert_eq!(2.0, pick.y);
    }

    #[test]
    fn svg_requires_output() {
        assert!(Args::try_parse_from(["tristrip", "svg", "mesh.tri"]).is_err());
    }
}
