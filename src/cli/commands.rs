//! CLI command implementations
//!
//! Each command builds the filter surface from flags, loads the mock
//! backend into a fresh engine, and prints the derived output. The CLI has
//! no state of its own; it is one more consumer of the engine.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::engine::{EngineConfig, ReportQueryEngine};
use crate::report::{DateRange, ReportFilters, SortColumn, SortDirection, UnknownLabel};
use crate::source::MockRecordSource;

use super::args::{Command, QueryArgs};
use super::errors::{CliError, CliResult};
use super::render;

/// Dispatches a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::List {
            query,
            sort_by,
            desc,
            page,
            page_size,
        } => list(&query, &sort_by, desc, page, page_size).await,
        Command::Export { query } => export(&query).await,
        Command::Chips { query } => chips(&query).await,
    }
}

async fn list(
    args: &QueryArgs,
    sort_by: &str,
    desc: bool,
    page: usize,
    page_size: usize,
) -> CliResult<()> {
    let column: SortColumn = sort_by.parse()?;
    let filters = build_filters(args)?;

    let mut engine = ReportQueryEngine::with_config(EngineConfig {
        page_size,
        default_sort: Some((
            column,
            if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        )),
    });
    load_into(&mut engine, args, filters).await?;
    engine.set_current_page(page);

    print!("{}", render::table(&engine.page()));
    println!(
        "{}",
        render::footer(
            engine.current_page(),
            engine.total_pages(),
            engine.filtered_records().len()
        )
    );
    Ok(())
}

async fn export(args: &QueryArgs) -> CliResult<()> {
    let filters = build_filters(args)?;
    let mut engine = ReportQueryEngine::new();
    load_into(&mut engine, args, filters).await?;

    // Export consumers take the whole filtered set, not one page
    let json = serde_json::to_string_pretty(&engine.filtered_records())?;
    println!("{json}");
    Ok(())
}

async fn chips(args: &QueryArgs) -> CliResult<()> {
    let filters = build_filters(args)?;
    let mut engine = ReportQueryEngine::new();
    load_into(&mut engine, args, filters).await?;

    print!("{}", render::chips(&engine.active_filters()));
    Ok(())
}

/// Loads the seeded mock dataset and applies the filter surface.
///
/// A load failure is soft inside the engine but fatal for a one-shot CLI
/// invocation, so it is surfaced as an error here.
async fn load_into(
    engine: &mut ReportQueryEngine,
    args: &QueryArgs,
    filters: ReportFilters,
) -> CliResult<()> {
    engine.load(&MockRecordSource::new(args.seed)).await;
    if let Some(message) = engine.error() {
        return Err(CliError::LoadFailed(message.to_string()));
    }
    engine.set_filters(filters);
    if let Some(query) = &args.search {
        engine.set_search_query(query.clone());
    }
    Ok(())
}

/// Builds `ReportFilters` from the shared flag surface
fn build_filters(args: &QueryArgs) -> CliResult<ReportFilters> {
    let date_range = match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let start = parse_date(from)?;
            let end = parse_date(to)?;
            if end < start {
                return Err(CliError::InvertedDateRange {
                    start: from.clone(),
                    end: to.clone(),
                });
            }
            Some(DateRange::new(start, end))
        }
        (None, None) => None,
        _ => return Err(CliError::IncompleteDateRange),
    };

    Ok(ReportFilters {
        date_range,
        employee_ids: None,
        asset_types: parse_labels(&args.asset_types)?,
        asset_ids: None,
        zones: parse_labels(&args.zones)?,
        statuses: parse_labels(&args.statuses)?,
        events: parse_labels(&args.events)?,
    })
}

fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

fn parse_labels<T>(labels: &[String]) -> Result<Option<Vec<T>>, UnknownLabel>
where
    T: FromStr<Err = UnknownLabel>,
{
    if labels.is_empty() {
        return Ok(None);
    }
    labels
        .iter()
        .map(|label| label.parse())
        .collect::<Result<Vec<T>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{AssetType, Zone};

    fn query_args() -> QueryArgs {
        QueryArgs {
            seed: 42,
            from: None,
            to: None,
            asset_types: Vec::new(),
            zones: Vec::new(),
            statuses: Vec::new(),
            events: Vec::new(),
            search: None,
        }
    }

    #[test]
    fn test_no_flags_means_no_filters() {
        let filters = build_filters(&query_args()).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_typed_flags_parsed() {
        let mut args = query_args();
        args.zones = vec!["North".to_string()];
        args.asset_types = vec!["Plumber-Equipment".to_string()];
        let filters = build_filters(&args).unwrap();
        assert_eq!(filters.zones, Some(vec![Zone::North]));
        assert_eq!(filters.asset_types, Some(vec![AssetType::PlumberEquipment]));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let mut args = query_args();
        args.zones = vec!["Uptown".to_string()];
        let err = build_filters(&args).unwrap_err();
        assert_eq!(err.to_string(), "unknown zone: 'Uptown'");
    }

    #[test]
    fn test_date_range_requires_both_ends() {
        let mut args = query_args();
        args.from = Some("2025-01-01".to_string());
        assert!(matches!(
            build_filters(&args),
            Err(CliError::IncompleteDateRange)
        ));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut args = query_args();
        args.from = Some("01/02/2025".to_string());
        args.to = Some("2025-03-01".to_string());
        assert!(matches!(build_filters(&args), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut args = query_args();
        args.from = Some("2025-03-01".to_string());
        args.to = Some("2025-01-01".to_string());
        assert!(matches!(
            build_filters(&args),
            Err(CliError::InvertedDateRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_command_runs() {
        let command = Command::List {
            query: query_args(),
            sort_by: "date".to_string(),
            desc: true,
            page: 1,
            page_size: 25,
        };
        run_command(command).await.unwrap();
    }
}
