use std::fs;
use std::path::PathBuf;

use querybuilder_filters::Filters;

/// Compile the request of a golden test against its configuration, and return the predicate
/// and the `WHERE` clause built from it.
pub async fn test_translation(testname: &str) -> anyhow::Result<(String, String)> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let parsed_configuration = querybuilder_configuration::parse_configuration(&directory).await?;
    let configuration =
        querybuilder_configuration::make_runtime_configuration(parsed_configuration)?;

    let request = serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;
    let filters = Filters::with_configuration(request, &configuration);

    let predicate = filters.to_sql()?.to_string();
    let where_clause = filters.where_clause()?;
    Ok((predicate, where_clause))
}
