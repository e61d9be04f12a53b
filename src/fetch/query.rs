// src/fetch/query.rs

use serde::{Deserialize, Serialize};

/// The POST body understood by the SSB PxWeb API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub query: Vec<DimensionFilter>,
    pub response: ResponseFormat,
}

/// Restricts one dimension of the table to a set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFilter {
    pub code: String,
    pub selection: Selection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selection mode, e.g. `item`, `all`, `top`.
    pub filter: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub format: String,
}

pub const JSON_STAT2: &str = "json-stat2";

impl Query {
    /// Table 09654, restricted to petroleum product `035`.
    pub fn petroleum_production() -> Self {
        Query {
            query: vec![DimensionFilter {
                code: "PetroleumProd".into(),
                selection: Selection {
                    filter: "item".into(),
                    values: vec!["035".into()],
                },
            }],
            response: ResponseFormat {
                format: JSON_STAT2.into(),
            },
        }
    }
}
