//! Tincture CLI
//!
//! Convert, blend and explore colors from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use tincture_color::{
    Color, ColorArg, DEFAULT_MIX_RATIO, DEFAULT_ROTATION_DEGREES, DEFAULT_SHIFT_PERCENT,
    DEFAULT_STEPS, RenderMode,
};
use tincture_common::warning::set_enabled;

/// Tincture: a color converter and palette tool
#[derive(Parser, Debug)]
#[command(name = "tincture")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Show a color in every notation
    tincture show '#336699'

    # Serialize a color as JSON
    tincture show 'hsla(210, 50%, 40%, 0.5)' --json

    # Convert between notations
    tincture convert rosybrown --to rgb
    tincture convert 'rgba(255, 0, 0, 0.5)' --to flat

    # Blend and composite
    tincture mix black white --ratio 0.25
    tincture layer white 'rgba(255, 0, 0, 0.5)'
    tincture step red blue --count 5

    # Adjust and build schemes
    tincture adjust '#336699' lighten 15
    tincture adjust red rotate -- -30
    tincture scheme red --count 4 --offset 45
"#)]
struct Cli {
    /// Do not print warnings about lossy output or ignored input
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color in every notation, with a swatch
    Show {
        /// Any CSS color: keyword, hex, rgb(), hsl()
        color: Color,

        /// Print the color as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Render a color in another notation
    Convert {
        /// Color to convert
        color: Color,

        /// Output notation (hex, rgb, rgba, hsl, hsla, keyword, flat)
        #[arg(long, value_name = "MODE")]
        to: RenderMode,
    },

    /// Blend two colors
    Mix {
        /// Starting color
        first: Color,

        /// Color to blend in
        second: Color,

        /// How much of the second color to use, 0 to 1
        #[arg(long, default_value_t = DEFAULT_MIX_RATIO)]
        ratio: f64,
    },

    /// Composite one color over another
    Layer {
        /// Bottom layer
        bottom: Color,

        /// Top layer, usually translucent
        top: Color,
    },

    /// Print a gradient between two colors
    Step {
        /// First color of the gradient
        start: Color,

        /// Last color of the gradient
        end: Color,

        /// Number of colors, endpoints included
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        count: usize,
    },

    /// Shift lightness, saturation or hue
    Adjust {
        /// Color to adjust
        color: Color,

        /// Adjustment to apply
        op: Adjustment,

        /// Percent for lighten/darken/saturate/desaturate, degrees for
        /// rotate/warmer/cooler. Accepts `20`, `20%`, `0.2` or `20deg`.
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Spread colors evenly around the hue circle
    Scheme {
        /// Base color
        color: Color,

        /// Number of colors
        #[arg(long, default_value_t = 3)]
        count: usize,

        /// Hue offset of the first color, in degrees
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Adjustment {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
    Rotate,
    Warmer,
    Cooler,
}

/// What a command prints.
#[derive(Debug)]
enum Output {
    Json(String),
    Rows(Vec<Row>),
}

/// One line of output: a swatch followed by text.
#[derive(Debug)]
struct Row {
    color: Color,
    text: String,
}

impl Row {
    fn rendered(color: Color) -> Self {
        let text = color.to_string();
        Self { color, text }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.quiet {
        set_enabled(false);
    }

    match execute(cli.command)? {
        Output::Json(json) => println!("{json}"),
        Output::Rows(rows) => {
            for row in rows {
                println!("{} {}", swatch(&row.color), row.text);
            }
        }
    }
    Ok(())
}

fn execute(command: Command) -> Result<Output> {
    let rows = match command {
        Command::Show { color, json: true } => {
            return Ok(Output::Json(serde_json::to_string_pretty(&color)?));
        }
        Command::Show { color, json: false } => show(&color),
        Command::Convert { color, to } => {
            let text = color.render(Some(to));
            vec![Row { color, text }]
        }
        Command::Mix {
            first,
            second,
            ratio,
        } => {
            let mixed = first
                .mix(&second, ratio)
                .with_context(|| format!("cannot mix {first} into {second}"))?;
            vec![Row::rendered(mixed)]
        }
        Command::Layer { bottom, top } => vec![Row::rendered(bottom.layer(&top))],
        Command::Step { start, end, count } => {
            start.step(&end, count).into_iter().map(Row::rendered).collect()
        }
        Command::Adjust { color, op, amount } => {
            let adjusted = adjust(&color, op, amount.as_deref())
                .with_context(|| format!("cannot apply {op:?} to {color}"))?;
            vec![Row::rendered(adjusted)]
        }
        Command::Scheme {
            color,
            count,
            offset,
        } => color
            .dial(count, offset)
            .context("invalid scheme offset")?
            .into_iter()
            .map(Row::rendered)
            .collect(),
    };
    Ok(Output::Rows(rows))
}

/// The color in every render mode.
fn show(color: &Color) -> Vec<Row> {
    RenderMode::iter()
        .map(|mode| Row {
            color: color.clone(),
            text: format!("{:<8} {}", mode.to_string().dimmed(), color.render(Some(mode))),
        })
        .collect()
}

fn adjust(color: &Color, op: Adjustment, amount: Option<&str>) -> tincture_color::Result<Color> {
    let shift = || amount.map_or(ColorArg::Int(DEFAULT_SHIFT_PERCENT), parse_amount);
    let turn = || amount.map_or(ColorArg::Int(DEFAULT_ROTATION_DEGREES), parse_amount);
    match op {
        Adjustment::Lighten => color.lighten(shift()),
        Adjustment::Darken => color.darken(shift()),
        Adjustment::Saturate => color.saturate(shift()),
        Adjustment::Desaturate => color.desaturate(shift()),
        Adjustment::Rotate => color.rotate(turn()),
        Adjustment::Warmer => color.warmer(turn()),
        Adjustment::Cooler => color.cooler(turn()),
    }
}

/// Integers and floats keep their numeric meaning; anything else is text.
fn parse_amount(text: &str) -> ColorArg {
    if let Ok(n) = text.parse::<i64>() {
        ColorArg::Int(n)
    } else if let Ok(n) = text.parse::<f64>() {
        ColorArg::Float(n)
    } else {
        ColorArg::from(text)
    }
}

/// A block of the color, flattened onto its background.
fn swatch(color: &Color) -> String {
    let [r, g, b] = color.flatten().bytes();
    "    ".on_truecolor(r, g, b).to_string()
}
