use anyhow::Result;
use boomerang::v1::{Bounds, Flight, Offset, plan_flight, query};
use clap::Args;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Offset r as "m/n" (e.g. "1/11") or a bare integer
    #[arg(allow_hyphen_values = true)]
    pub offset: Offset,

    /// Maximum number of moves in a flight
    #[arg(long, default_value_t = Bounds::default().max_steps)]
    pub max_steps: u32,

    /// Largest admissible denominator (lowest terms)
    #[arg(long, default_value_t = Bounds::default().den_limit)]
    pub den_limit: i64,

    /// Largest admissible absolute numerator (lowest terms)
    #[arg(long, default_value_t = Bounds::default().value_limit)]
    pub value_limit: i64,

    /// Output the flight as a JSON document (null when nothing is found)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SearchArgs, pretty: bool) -> Result<()> {
    let bounds = Bounds {
        max_steps: args.max_steps,
        den_limit: args.den_limit,
        value_limit: args.value_limit,
    };
    let flight = plan_flight(args.offset, &bounds);

    if args.json {
        let json = match &flight {
            Some(flight) if pretty => flight.to_json_pretty()?,
            Some(flight) => flight.to_json()?,
            None => "null".to_string(),
        };
        println!("{json}");
        return Ok(());
    }

    // Not finding a flight is a normal outcome, not a failure.
    match flight {
        Some(flight) => print_flight(&flight),
        None => println!("No flight found within limits."),
    }
    Ok(())
}

fn print_flight(flight: &Flight) {
    println!("Start: 1");
    for step in &flight.steps {
        println!("{:>4} -> {}", step.op.to_string(), step.value);
    }
    let (adds, inverts) = query::op_counts(&flight.steps);
    println!(
        "{} moves ({} +r, {} inv, peak denominator {})",
        flight.steps.len(),
        adds,
        inverts,
        query::peak_denominator(&flight.steps)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(offset: &str) -> SearchArgs {
        SearchArgs {
            offset: offset.parse().unwrap(),
            max_steps: Bounds::default().max_steps,
            den_limit: Bounds::default().den_limit,
            value_limit: Bounds::default().value_limit,
            json: false,
        }
    }

    #[test]
    fn test_run_found() {
        assert!(run(args("1/2"), false).is_ok());
    }

    #[test]
    fn test_run_not_found() {
        assert!(run(args("1/1"), false).is_ok());
    }

    #[test]
    fn test_run_negative_offset() {
        assert!(run(args("-1/2"), false).is_ok());
    }

    #[test]
    fn test_run_json() {
        let mut a = args("1/2");
        a.json = true;
        assert!(run(a, false).is_ok());
    }

    #[test]
    fn test_run_json_pretty() {
        let mut a = args("1/2");
        a.json = true;
        assert!(run(a, true).is_ok());
    }

    #[test]
    fn test_run_json_not_found() {
        let mut a = args("1/1");
        a.json = true;
        assert!(run(a, false).is_ok());
    }

    #[test]
    fn test_run_with_tight_bounds() {
        let mut a = args("1/11");
        a.max_steps = 1;
        assert!(run(a, false).is_ok());
    }
}
