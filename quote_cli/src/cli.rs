use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use quote_core::{ColorGrade, DoorKind, RoofPitch, WallSide};

/// Shop Quote - metal shop building price estimates
#[derive(Parser, Debug)]
#[command(name = "shopquote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML rate table overriding the default prices
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a building in one shot
    Quote(QuoteArgs),

    /// Build a quote step by step at a prompt (default)
    Session,

    /// Print the rate table in effect, as TOML
    Rates,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Sidewall height in feet (minimum 8)
    #[arg(long, default_value = "10")]
    pub sidewall_height: String,

    /// Building length in feet (minimum 20)
    #[arg(long, default_value = "30")]
    pub length: String,

    /// Building width in feet (minimum 12)
    #[arg(long, default_value = "40")]
    pub width: String,

    /// Color grade: normal or premium
    #[arg(long, default_value = "normal", value_parser = parse_color)]
    pub color: ColorGrade,

    /// Roof pitch: 1/12 through 4/12
    #[arg(long, default_value = "3/12", value_parser = parse_pitch)]
    pub pitch: RoofPitch,

    /// Include 1" closed cell spray foam on the whole building
    #[arg(long)]
    pub spray_foam: bool,

    /// Door as side:kind:size, e.g. front:garage:10x10 (repeatable)
    #[arg(long = "door", value_parser = parse_door)]
    pub doors: Vec<DoorArg>,

    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Customer phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Customer address
    #[arg(long)]
    pub address: Option<String>,

    /// Customer email
    #[arg(long)]
    pub email: Option<String>,

    /// Print the full quote summary as JSON
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Print the full quote summary as plain text
    #[arg(long)]
    pub text: bool,
}

/// A door requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct DoorArg {
    pub side: WallSide,
    pub kind: DoorKind,
    pub size: String,
}

fn parse_color(s: &str) -> Result<ColorGrade, String> {
    ColorGrade::from_str_flexible(s).ok_or_else(|| format!("unknown color '{}' (normal, premium)", s))
}

fn parse_pitch(s: &str) -> Result<RoofPitch, String> {
    RoofPitch::from_str_flexible(s).ok_or_else(|| format!("unsupported roof pitch '{}' (1/12 to 4/12)", s))
}

pub fn parse_door(s: &str) -> Result<DoorArg, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [side, kind, size] = parts.as_slice() else {
        return Err(format!("expected side:kind:size, got '{}'", s));
    };
    let side = WallSide::from_str_flexible(side).ok_or_else(|| format!("unknown wall '{}'", side))?;
    let kind = DoorKind::from_str_flexible(kind).ok_or_else(|| format!("unknown door type '{}'", kind))?;
    let size = size.trim();
    if size.is_empty() {
        return Err("door size is empty".to_string());
    }
    Ok(DoorArg {
        side,
        kind,
        size: size.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_door() {
        let door = parse_door("front:garage:10x10").unwrap();
        assert_eq!(door.side, WallSide::Front);
        assert_eq!(door.kind, DoorKind::Garage);
        assert_eq!(door.size, "10x10");

        assert!(parse_door("front:garage").is_err());
        assert!(parse_door("roof:walk:3x7").is_err());
        assert!(parse_door("left:window:3x7").is_err());
        assert!(parse_door("left:walk:").is_err());
    }

    #[test]
    fn test_quote_args() {
        let cli = Cli::try_parse_from([
            "shopquote",
            "quote",
            "--sidewall-height",
            "14",
            "--color",
            "premium",
            "--door",
            "front:walk:3x7",
            "--door",
            "left:garage:10x10",
            "--spray-foam",
        ])
        .unwrap();
        let Some(Commands::Quote(args)) = cli.command else {
            panic!("expected quote subcommand");
        };
        assert_eq!(args.sidewall_height, "14");
        assert_eq!(args.length, "30");
        assert_eq!(args.color, ColorGrade::Premium);
        assert_eq!(args.pitch, RoofPitch::ThreeTwelve);
        assert_eq!(args.doors.len(), 2);
        assert!(args.spray_foam);
    }

    #[test]
    fn test_json_and_text_conflict() {
        assert!(Cli::try_parse_from(["shopquote", "quote", "--json", "--text"]).is_err());
    }

    #[test]
    fn test_bad_pitch_rejected() {
        assert!(Cli::try_parse_from(["shopquote", "quote", "--pitch", "8/12"]).is_err());
    }
}
