//! JSON payload returned by `sfdx force:data:soql:query --json`
//!
//! Every field is optional so that a package without dependencies (null
//! `Dependencies`, empty `records`) can be told apart from a payload that is
//! not a query result at all.

use serde::Deserialize;

use crate::domain::PackageId;
use crate::error::{Result, query};
use crate::runner::CommandOutcome;

const GENERIC_FAILURE: &str = "dependency query failed";

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub status: Option<i64>,
    pub message: Option<String>,
    pub result: Option<QueryResult>,
}

#[derive(Debug, Deserialize)]
pub struct QueryResult {
    pub records: Option<Vec<DependencyRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct DependencyRecord {
    #[serde(rename = "Dependencies")]
    pub dependencies: Option<DependencyIds>,
}

#[derive(Debug, Deserialize)]
pub struct DependencyIds {
    #[serde(alias = "IDs")]
    pub ids: Option<Vec<DependencyId>>,
}

#[derive(Debug, Deserialize)]
pub struct DependencyId {
    #[serde(
        rename = "subscriberPackageVersionId",
        alias = "SubscriberPackageVersionId"
    )]
    pub subscriber_package_version_id: Option<String>,
}

impl QueryResponse {
    /// Decode a payload, skipping any banner text the CLI printed before the JSON
    ///
    /// The banner may itself contain braces, so every `{` is tried as a start.
    fn decode(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let trimmed = raw.trim();
        serde_json::from_str(trimmed).or_else(|err| {
            trimmed
                .match_indices('{')
                .skip_while(|(start, _)| *start == 0)
                .find_map(|(start, _)| serde_json::from_str(&trimmed[start..]).ok())
                .ok_or(err)
        })
    }

    fn failure_message(&self) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE)
            .to_string()
    }
}

/// Turn one query invocation into the dependency list of `package`
///
/// - non-zero exit or `status != 0`: [`QueryFailed`](crate::error::DepInstallError::QueryFailed)
/// - unparseable payload or missing `result`: [`MalformedQueryResponse`](crate::error::DepInstallError::MalformedQueryResponse)
/// - no records / null `Dependencies`: empty list
pub fn parse_dependency_response(
    package: &PackageId,
    outcome: &CommandOutcome,
) -> Result<Vec<PackageId>> {
    let response = match QueryResponse::decode(&outcome.stdout)
        .or_else(|stdout_err| QueryResponse::decode(&outcome.stderr).map_err(|_| stdout_err))
    {
        Ok(response) => response,
        Err(err) if outcome.success => {
            return Err(query::malformed(package.as_str(), err.to_string()));
        }
        Err(_) => {
            let output = outcome.combined();
            let message = match output.trim() {
                "" => format!("{GENERIC_FAILURE} ({})", outcome.status_description()),
                text => text.to_string(),
            };
            return Err(query::failed(package.as_str(), message));
        }
    };

    if !outcome.success || response.status.unwrap_or(0) != 0 {
        return Err(query::failed(package.as_str(), response.failure_message()));
    }

    let Some(result) = response.result else {
        return Err(query::malformed(
            package.as_str(),
            "response has no 'result' object",
        ));
    };

    result
        .records
        .unwrap_or_default()
        .into_iter()
        .filter_map(|record| record.dependencies)
        .flat_map(|deps| deps.ids.unwrap_or_default())
        .map(|entry| {
            let raw = entry.subscriber_package_version_id.ok_or_else(|| {
                query::malformed(
                    package.as_str(),
                    "dependency entry has no 'subscriberPackageVersionId'",
                )
            })?;
            PackageId::parse(&raw)
                .map_err(|e| query::malformed(package.as_str(), e.to_string()))
        })
        .collect()
}
