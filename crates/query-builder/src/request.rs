use crate::error::QueryError;
use model::{
    condition::{Condition, OperatorRepr, QueryOperator, default_skip_if_value_empty},
    error::ModelError,
    pagination::PageRequest,
    sort::{DirectionRepr, SortCondition, SortDirection},
};
use serde::{Deserialize, Serialize};

/// Filter, sort and page selection for one query, as sent by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub conditions: Vec<Condition>,
    pub sorts: Vec<SortCondition>,
    pub page: Option<PageRequest>,
}

impl QueryRequest {
    /// Parses a request body.
    ///
    /// Malformed JSON is a client error. An operator or direction outside the
    /// supported set is reported as [`QueryError::Model`].
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        let body: RequestBody = serde_json::from_str(json).map_err(QueryError::InvalidRequest)?;
        Ok(body.into_request()?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody {
    #[serde(default)]
    conditions: Vec<ConditionBody>,
    #[serde(default)]
    sorts: Vec<SortBody>,
    #[serde(default)]
    page: Option<PageRequest>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConditionBody {
    field: String,
    #[serde(default)]
    value: String,
    operator: OperatorRepr,
    #[serde(default = "default_skip_if_value_empty")]
    skip_if_value_empty: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SortBody {
    field: String,
    #[serde(default)]
    order: i32,
    #[serde(default, alias = "type")]
    direction: Option<DirectionRepr>,
}

impl RequestBody {
    fn into_request(self) -> Result<QueryRequest, ModelError> {
        let conditions = self
            .conditions
            .into_iter()
            .map(|c| {
                let operator = QueryOperator::try_from(c.operator)?;
                Ok(Condition::new(c.field, operator, c.value)
                    .with_skip_if_value_empty(c.skip_if_value_empty))
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        let sorts = self
            .sorts
            .into_iter()
            .map(|s| {
                let direction = match s.direction {
                    Some(repr) => SortDirection::try_from(repr)?,
                    None => SortDirection::default(),
                };
                Ok(SortCondition::new(s.field, s.order, direction))
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(QueryRequest {
            conditions,
            sorts,
            page: self.page,
        })
    }
}
