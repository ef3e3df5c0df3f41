//! `distance` subcommand: resolve two locations and print the separation.

use anyhow::bail;
use clap::Args;

use jobreach_core::{distance_miles, format_distance, resolve, LocationHint};

#[derive(Debug, Args)]
pub(crate) struct DistanceArgs {
    /// Origin: a 5-digit zip, a city name, or "City, State" free text.
    from: String,
    /// Destination, same forms as the origin.
    to: String,
}

pub(crate) fn run(args: &DistanceArgs) -> anyhow::Result<()> {
    let Some(origin) = resolve(&hint(&args.from)) else {
        bail!("could not resolve '{}' to a coordinate", args.from);
    };
    let Some(destination) = resolve(&hint(&args.to)) else {
        bail!("could not resolve '{}' to a coordinate", args.to);
    };

    let miles = distance_miles(origin, destination);
    println!(
        "{} -> {}: {}",
        args.from.trim(),
        args.to.trim(),
        format_distance(Some(miles))
    );
    Ok(())
}

/// Routes digit-shaped input to the zip table and everything else through
/// the city / free-text path.
fn hint(input: &str) -> LocationHint<'_> {
    let trimmed = input.trim();
    if trimmed.len() == 5 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        LocationHint {
            zip: Some(trimmed),
            ..LocationHint::default()
        }
    } else {
        LocationHint {
            city: Some(trimmed),
            free_text: Some(trimmed),
            ..LocationHint::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digits_route_to_the_zip_table() {
        let h = hint("30301");
        assert_eq!(h.zip, Some("30301"));
        assert!(h.city.is_none());
    }

    #[test]
    fn city_text_routes_to_city_and_free_text() {
        let h = hint("Atlanta, GA");
        assert!(h.zip.is_none());
        assert_eq!(h.free_text, Some("Atlanta, GA"));
    }
}
