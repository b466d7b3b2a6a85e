//! Command-line argument parsing for practice-sheet

use std::path::PathBuf;

use clap::Parser;
use sheet_layout::{
    DEFAULT_RATIO, DEFAULT_SLANT_ANGLE, LineColor, LineStyle, Orientation, SheetParams, Unit,
};

const AFTER_HELP: &str = "\
defaults:
  UNIT                 mm
  WIDTH HEIGHT         210 297 (mm), 8.27 11.69 (in)
  ORIENTATION          portrait
  X-HEIGHT             6 mm
  DESC X ASC           3 2 3
  LINEWIDTH            1.0
  LINECOLOR            k
  LINESTYLE            --
  TOPMARGIN            10 mm
  VERTICALMARGIN       5 mm
  GAP                  4 mm
  SLANTANGLE           55.0
  SLANTLINESPACING     13 mm

examples:
  - use defaults:
    practice-sheet my_practice_sheet.pdf
  - use ANSI Letter for paper size:
    practice-sheet -u in -p 8.5 11 my_practice_sheet.pdf
  - use different ratios between line heights and red lines:
    practice-sheet -r 2 1.5 2 -c r my_practice_sheet.pdf
  - write an SVG without slant lines:
    practice-sheet -n my_practice_sheet.svg";

/// Create a practice sheet with guidelines for Copperplate calligraphy and
/// write it to file.
#[derive(Parser, Debug)]
#[command(name = "practice-sheet")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Name of output file, .pdf or .svg (use -f to force overwrite)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Add sheet information at the bottom of the page
    #[arg(short, long)]
    pub annotate: bool,

    /// Overwrite output if file already exists
    #[arg(short, long)]
    pub force: bool,

    /// Omit slant lines
    #[arg(short = 'n', long = "noslantlines")]
    pub no_slant_lines: bool,

    /// Unit of length, from {mm, in}
    #[arg(short = 'u', value_name = "UNIT", default_value = "mm")]
    pub unit: Unit,

    /// Paper size in unit UNIT
    #[arg(short = 'p', num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub paper_size: Option<Vec<f64>>,

    /// Paper orientation, from {portrait, landscape}
    #[arg(short = 'o', value_name = "ORIENTATION", default_value = "portrait")]
    pub orientation: Orientation,

    /// Height of the letter 'x'
    #[arg(short = 'x', value_name = "X-HEIGHT")]
    pub x_height: Option<f64>,

    /// Ratios descender : x-height : ascender
    #[arg(
        short = 'r',
        num_args = 3,
        value_names = ["DESC", "X", "ASC"],
        default_values_t = DEFAULT_RATIO
    )]
    pub ratio: Vec<f64>,

    /// Line width
    #[arg(short = 'w', value_name = "LINEWIDTH")]
    pub line_width: Option<f64>,

    /// Line color: a letter code, a name, #rrggbb or a gray level in [0, 1]
    #[arg(short = 'c', value_name = "LINECOLOR", default_value = "k")]
    pub line_color: LineColor,

    /// Style of ascender and descender lines, from {-, --, -., :}
    #[arg(
        short = 'l',
        value_name = "LINESTYLE",
        default_value = "--",
        allow_hyphen_values = true
    )]
    pub line_style: LineStyle,

    /// Margin on the top of the page
    #[arg(short = 't', value_name = "TOPMARGIN")]
    pub top_margin: Option<f64>,

    /// Left and right margin
    #[arg(short = 'v', value_name = "VERTICALMARGIN")]
    pub vertical_margin: Option<f64>,

    /// Vertical gap between each set of lines
    #[arg(short = 'g', value_name = "GAP")]
    pub gap: Option<f64>,

    /// Slant angle (deg, positive from horizontal)
    #[arg(
        short = 's',
        value_name = "SLANTANGLE",
        default_value_t = DEFAULT_SLANT_ANGLE,
        allow_negative_numbers = true
    )]
    pub slant_angle: f64,

    /// Horizontal space between slant lines
    #[arg(short = 'k', value_name = "SLANTLINESPACING")]
    pub slant_line_spacing: Option<f64>,

    /// Print the resolved configuration as JSON to stdout
    #[arg(long)]
    pub print_config: bool,

    /// Log more: once for info, twice for debug (RUST_LOG takes precedence)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging on stderr based on `RUST_LOG` or the verbosity.
    pub fn init_logging(&self) {
        use tracing_subscriber::{EnvFilter, fmt};

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Sheet parameters for these arguments.
    #[must_use]
    pub fn to_params(&self) -> SheetParams {
        let paper_size = match self.paper_size.as_deref() {
            Some(&[width, height]) => Some((width, height)),
            _ => None,
        };
        let ratio = match self.ratio[..] {
            [desc, x, asc] => [desc, x, asc],
            _ => DEFAULT_RATIO,
        };

        SheetParams {
            output: self.output.clone(),
            force: self.force,
            unit: self.unit,
            paper_size,
            orientation: self.orientation,
            x_height: self.x_height,
            ratio,
            line_width: self.line_width,
            line_color: self.line_color,
            line_style: self.line_style,
            top_margin: self.top_margin,
            vertical_margin: self.vertical_margin,
            gap: self.gap,
            slant_angle: self.slant_angle,
            slant_line_spacing: self.slant_line_spacing,
            no_slant_lines: self.no_slant_lines,
            annotate: self.annotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("practice-sheet").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_sheet_params() {
        let cli = parse(&["sheet.pdf"]);
        assert_eq!(cli.to_params(), SheetParams::new("sheet.pdf"));
        assert!(!cli.print_config);
    }

    #[test]
    fn letter_in_inches() {
        let params = parse(&["-u", "in", "-p", "8.5", "11", "out.pdf"]).to_params();
        assert_eq!(params.unit, Unit::Inch);
        assert_eq!(params.paper_size, Some((8.5, 11.0)));
        assert_eq!(params.output, PathBuf::from("out.pdf"));
    }

    #[test]
    fn ratio_and_color() {
        let params = parse(&["-r", "2", "1.5", "2", "-c", "r", "out.pdf"]).to_params();
        assert_eq!(params.ratio, [2.0, 1.5, 2.0]);
        assert_eq!(params.line_color, LineColor::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn line_styles_starting_with_hyphen() {
        let params = parse(&["-l", "-.", "out.pdf"]).to_params();
        assert_eq!(params.line_style, LineStyle::DashDot);
        let params = parse(&["-l", "-", "out.pdf"]).to_params();
        assert_eq!(params.line_style, LineStyle::Solid);
        let params = parse(&["-l", ":", "out.pdf"]).to_params();
        assert_eq!(params.line_style, LineStyle::Dotted);
    }

    #[test]
    fn flags_and_lengths() {
        let params = parse(&[
            "-a", "-f", "-n", "-o", "landscape", "-x", "5", "-w", "2", "-t", "12", "-v", "6",
            "-g", "3", "-s", "52", "-k", "10", "out.svg",
        ])
        .to_params();
        assert!(params.annotate && params.force && params.no_slant_lines);
        assert_eq!(params.orientation, Orientation::Landscape);
        assert_eq!(params.x_height, Some(5.0));
        assert_eq!(params.line_width, Some(2.0));
        assert_eq!(params.top_margin, Some(12.0));
        assert_eq!(params.vertical_margin, Some(6.0));
        assert_eq!(params.gap, Some(3.0));
        assert_eq!(params.slant_angle, 52.0);
        assert_eq!(params.slant_line_spacing, Some(10.0));
    }

    #[test]
    fn annotation_prints_ratio_in_flag_order() {
        let config = parse(&["-r", "2", "1.5", "3", "out.pdf"])
            .to_params()
            .resolve()
            .unwrap();
        // Stored top-down, printed as given on the command line.
        assert_eq!(config.ratio, [3.0, 1.5, 2.0]);
        let text = sheet_layout::annotation_text(&config).join(" ");
        assert!(text.contains("(descender : x : ascender) = 2:1.5:3,"), "{text}");
        assert!(!text.contains("3:1.5:2"), "{text}");
    }

    #[test]
    fn negative_slant_angle() {
        let params = parse(&["-s", "-30", "out.pdf"]).to_params();
        assert_eq!(params.slant_angle, -30.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for args in [
            vec!["-u", "cm", "out.pdf"],
            vec!["-o", "sideways", "out.pdf"],
            vec!["-c", "chartreuse", "out.pdf"],
            vec!["-p", "8.5", "out.pdf"],
            vec![],
        ] {
            let argv = std::iter::once("practice-sheet").chain(args.iter().copied());
            assert!(Cli::try_parse_from(argv).is_err(), "{args:?}");
        }
    }
}
