use serde::Deserialize;

/// Fields accepted by `/method`. `userid` is required; a submission without
/// it is rejected by the extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct MethodParams {
    pub userid: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Lookup against the parameter source the request did not use, kept to show
/// that query and form values do not mix.
#[derive(Debug, Default, Deserialize)]
pub struct CrossSourceLookup {
    pub name: Option<String>,
}
