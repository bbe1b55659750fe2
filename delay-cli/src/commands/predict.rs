//! Predict command handler
//!
//! Submits a flight query, then waits for and prints its delay prediction.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use delay_core::dto::query::FlightQuery;

use super::{Handler, finish};

/// Flight to classify
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Carrier code (e.g. AA)
    #[arg(long)]
    carrier: String,

    /// Origin airport code (e.g. ATL)
    #[arg(long)]
    origin: String,

    /// Destination airport code (e.g. SFO)
    #[arg(long)]
    dest: String,

    /// Flight number
    #[arg(long)]
    flight_num: String,

    /// Scheduled flight date (YYYY-MM-DD)
    #[arg(long)]
    flight_date: NaiveDate,

    /// Departure delay in minutes (negative if early)
    #[arg(long, allow_negative_numbers = true)]
    dep_delay: f64,

    /// Value for the form's search field
    #[arg(long)]
    search: Option<String>,

    /// Extra form field, as NAME=VALUE (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
}

impl PredictArgs {
    fn into_query(self) -> FlightQuery {
        let mut query = FlightQuery::new(
            self.carrier,
            self.origin,
            self.dest,
            self.flight_num,
            self.flight_date,
            self.dep_delay,
        );

        if let Some(term) = self.search {
            query = query.with_search(term);
        }

        for (name, value) in self.fields {
            query = query.with_field(name, value);
        }

        query
    }
}

/// Parses a `NAME=VALUE` pair
fn parse_field(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", raw))?;

    if name.is_empty() {
        return Err(format!("field name cannot be empty in `{}`", raw));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Submit a flight and wait for its prediction
pub async fn handle_predict_command(args: PredictArgs, handler: &Handler) -> Result<()> {
    let query = args.into_query();

    let outcome = handler.submit(&query).await.with_context(|| {
        format!(
            "Prediction failed for {} {} ({} -> {})",
            query.carrier, query.flight_num, query.origin, query.dest
        )
    })?;

    finish(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: PredictArgs,
    }

    fn parse(extra: &[&str]) -> PredictArgs {
        let mut argv = vec![
            "flight-delay",
            "--carrier",
            "AA",
            "--origin",
            "ATL",
            "--dest",
            "SFO",
            "--flight-num",
            "1519",
            "--flight-date",
            "2016-12-25",
        ];
        argv.extend_from_slice(extra);
        TestCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("Distance=2139"),
            Ok(("Distance".to_string(), "2139".to_string()))
        );
        assert_eq!(
            parse_field("Note=a=b"),
            Ok(("Note".to_string(), "a=b".to_string()))
        );
        assert!(parse_field("Distance").is_err());
        assert!(parse_field("=2139").is_err());
    }

    #[test]
    fn test_args_into_query() {
        let query = parse(&[
            "--dep-delay",
            "-5",
            "--search",
            "delays",
            "--field",
            "Distance=2139",
        ])
        .into_query();

        assert_eq!(query.carrier, "AA");
        assert_eq!(query.flight_date, NaiveDate::from_ymd_opt(2016, 12, 25).unwrap());
        assert_eq!(query.dep_delay, -5.0);
        assert_eq!(query.search.as_deref(), Some("delays"));
        assert_eq!(query.extra.get("Distance").map(String::as_str), Some("2139"));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = TestCli::try_parse_from([
            "flight-delay",
            "--carrier",
            "AA",
            "--origin",
            "ATL",
            "--dest",
            "SFO",
            "--flight-num",
            "1519",
            "--flight-date",
            "25/12/2016",
            "--dep-delay",
            "0",
        ]);
        assert!(result.is_err());
    }
}
