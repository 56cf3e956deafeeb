//! Interactive session commands.
//!
//! One command per line, e.g. `set width 40`, `door add front garage 10x10`,
//! `door move front 1 left 4`, `quote`. Parsing is separate from execution
//! so both can be tested without a terminal.

use quote_core::{
    ColorGrade, Dimension, DoorId, DoorKind, MoveDirection, QuoteSession, RoofPitch, WallSide,
};

pub const HELP: &str = "\
Commands:
  set <sidewall|length|width> <feet>      set a dimension (clamped to minimum)
  color <normal|premium>                  panel color grade
  pitch <1/12|2/12|3/12|4/12>             roof pitch
  foam <on|off>                           spray foam insulation
  customer <name|phone|address|email> <value>
  door add <side> <walk|garage> <WxH>     add a door centered on a wall
  door move <side> <id> <left|right> [n]  nudge a door n steps (0.5 ft each)
  door rm <side> <id>                     remove a door
  show                                    building, doors and pending error
  quote                                   price the building
  summary                                 full plain-text quote
  json                                    full quote as JSON
  help                                    this text
  quit                                    leave the session
Sides: front, back, left, right";

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerField {
    Name,
    Phone,
    Address,
    Email,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetDimension(Dimension, String),
    Color(ColorGrade),
    Pitch(RoofPitch),
    SprayFoam(bool),
    Customer(CustomerField, String),
    AddDoor(WallSide, DoorKind, String),
    MoveDoor(WallSide, DoorId, MoveDirection, u32),
    RemoveDoor(WallSide, DoorId),
    Show,
    Quote,
    Summary,
    Json,
    Help,
    Quit,
}

/// What the prompt loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Err("empty command".to_string());
    };

    match head.to_lowercase().as_str() {
        "set" => {
            let [field, value] = rest else {
                return Err("usage: set <sidewall|length|width> <feet>".to_string());
            };
            let field = Dimension::from_str_flexible(field).ok_or_else(|| format!("unknown dimension '{}'", field))?;
            Ok(Command::SetDimension(field, value.to_string()))
        }
        "color" => {
            let [value] = rest else {
                return Err("usage: color <normal|premium>".to_string());
            };
            ColorGrade::from_str_flexible(value)
                .map(Command::Color)
                .ok_or_else(|| format!("unknown color '{}'", value))
        }
        "pitch" => {
            let [value] = rest else {
                return Err("usage: pitch <1/12|2/12|3/12|4/12>".to_string());
            };
            RoofPitch::from_str_flexible(value)
                .map(Command::Pitch)
                .ok_or_else(|| format!("unsupported roof pitch '{}'", value))
        }
        "foam" => match rest {
            [value] => match value.to_lowercase().as_str() {
                "on" | "yes" | "true" => Ok(Command::SprayFoam(true)),
                "off" | "no" | "false" => Ok(Command::SprayFoam(false)),
                _ => Err(format!("expected on or off, got '{}'", value)),
            },
            _ => Err("usage: foam <on|off>".to_string()),
        },
        "customer" => {
            let Some((&field, value)) = rest.split_first() else {
                return Err("usage: customer <name|phone|address|email> <value>".to_string());
            };
            let field = match field.to_lowercase().as_str() {
                "name" => CustomerField::Name,
                "phone" => CustomerField::Phone,
                "address" => CustomerField::Address,
                "email" => CustomerField::Email,
                _ => return Err(format!("unknown customer field '{}'", field)),
            };
            Ok(Command::Customer(field, value.join(" ")))
        }
        "door" | "doors" => parse_door_command(rest),
        "show" => Ok(Command::Show),
        "quote" => Ok(Command::Quote),
        "summary" => Ok(Command::Summary),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn parse_door_command(rest: &[&str]) -> Result<Command, String> {
    let side = |s: &str| WallSide::from_str_flexible(s).ok_or_else(|| format!("unknown wall '{}'", s));
    let id = |s: &str| s.trim_start_matches('#').parse::<DoorId>().map_err(|_| format!("bad door id '{}'", s));

    match rest {
        [] => Ok(Command::Show),
        ["add", s, kind, size] => {
            let kind = DoorKind::from_str_flexible(kind).ok_or_else(|| format!("unknown door type '{}'", kind))?;
            Ok(Command::AddDoor(side(*s)?, kind, size.to_string()))
        }
        ["move", s, i, dir, steps @ ..] if steps.len() <= 1 => {
            let direction =
                MoveDirection::from_str_flexible(dir).ok_or_else(|| format!("expected left or right, got '{}'", dir))?;
            let steps = match steps.first() {
                Some(n) => n.parse::<u32>().map_err(|_| format!("bad step count '{}'", n))?,
                None => 1,
            };
            Ok(Command::MoveDoor(side(*s)?, id(*i)?, direction, steps))
        }
        ["rm" | "remove" | "del", s, i] => Ok(Command::RemoveDoor(side(*s)?, id(*i)?)),
        _ => Err("usage: door add|move|rm ... (try 'help')".to_string()),
    }
}

/// Run one command against the session.
pub fn execute(session: &mut QuoteSession, command: Command) -> Outcome {
    let message = match command {
        Command::SetDimension(field, raw) => {
            let value = session.set_dimension(field, &raw);
            format!("{} = {} ft", field, value)
        }
        Command::Color(color) => {
            session.set_color(color);
            format!("Color = {}", color)
        }
        Command::Pitch(pitch) => {
            session.set_roof_pitch(pitch);
            format!("Roof pitch = {}", pitch)
        }
        Command::SprayFoam(enabled) => {
            session.set_spray_foam(enabled);
            format!("Spray foam {}", if enabled { "on" } else { "off" })
        }
        Command::Customer(field, value) => {
            let customer = session.customer_mut();
            match field {
                CustomerField::Name => customer.name = value,
                CustomerField::Phone => customer.phone = value,
                CustomerField::Address => customer.address = value,
                CustomerField::Email => customer.email = value,
            }
            "Customer updated".to_string()
        }
        Command::AddDoor(side, kind, size) => match session.add_door(side, kind, &size) {
            Ok(id) => format!("Added {} door #{} ({}) on {} wall", kind, id, size, side),
            Err(e) => format!("Error: {}", e),
        },
        Command::MoveDoor(side, id, direction, steps) => match session.move_door_by(side, id, direction, steps.max(1)) {
            Some(x) => format!("Door #{} offset {:+.1} ft", id, x),
            None => format!("No door #{} on {} wall", id, side),
        },
        Command::RemoveDoor(side, id) => match session.remove_door(side, id) {
            Some(door) => format!("Removed {} door #{} ({}) from {} wall", door.kind, id, door.size, side),
            None => format!("No door #{} on {} wall", id, side),
        },
        Command::Show => render_state(session),
        Command::Quote => {
            let quote = session.request_quote();
            format!("{}\n{}", quote, quote.note)
        }
        Command::Summary => session.summary().to_text(),
        Command::Json => match session.summary().to_json() {
            Ok(json) => json,
            Err(e) => format!("Error: {}", e),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => return Outcome::Quit,
    };
    Outcome::Print(message)
}

fn render_state(session: &QuoteSession) -> String {
    let b = session.building();
    let mut lines = vec![format!(
        "{} ft x {} ft, {} ft sidewalls, pitch {}, {} color, spray foam {}",
        b.length_ft(),
        b.width_ft(),
        b.sidewall_height_ft(),
        b.roof_pitch(),
        b.color(),
        if b.spray_foam() { "on" } else { "off" }
    )];
    for side in WallSide::ALL {
        let doors = session.doors().on_side(side);
        if doors.is_empty() {
            continue;
        }
        let listed: Vec<String> = doors
            .iter()
            .map(|d| format!("#{} {} {} @ {:+.1}", d.id, d.kind, d.size, d.offset_ft))
            .collect();
        lines.push(format!("  {:<6} {}", side.display_name(), listed.join(", ")));
    }
    if let Some(error) = session.error() {
        lines.push(format!("Error: {}", error));
    }
    lines.join("\n")
}
