// src/jsonstat/types.rs

use anyhow::{bail, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A JSON-stat 2 `dataset` response. Fields we never read are ignored.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub class: Option<String>,
    pub label: Option<String>,
    pub source: Option<String>,
    pub updated: Option<String>,
    /// Dimension ids, outermost first.
    pub id: Vec<String>,
    /// Category count per entry of `id`.
    pub size: Vec<usize>,
    pub dimension: HashMap<String, Dimension>,
    pub value: Values,
}

#[derive(Debug, Deserialize)]
pub struct Dimension {
    pub label: Option<String>,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub index: Option<CategoryIndex>,
    pub label: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryIndex {
    /// `["2023M01", "2023M02"]`
    List(Vec<String>),
    /// `{"2023M01": 0, "2023M02": 1}`
    Positions(HashMap<String, usize>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Dense(Vec<Value>),
    /// Flat index (as a string key) → value; absent positions are missing.
    Sparse(HashMap<String, Value>),
}

impl Category {
    /// Category codes in position order.
    pub fn codes(&self) -> Result<Vec<String>> {
        match &self.index {
            Some(CategoryIndex::List(codes)) => Ok(codes.clone()),
            Some(CategoryIndex::Positions(positions)) => {
                let mut slots: Vec<Option<&String>> = vec![None; positions.len()];
                for (code, &pos) in positions {
                    if pos >= slots.len() {
                        bail!("category `{}` has index {} out of range", code, pos);
                    }
                    if let Some(other) = slots[pos] {
                        bail!("categories `{}` and `{}` share index {}", other, code, pos);
                    }
                    slots[pos] = Some(code);
                }
                Ok(slots.into_iter().flatten().cloned().collect())
            }
            // a single category may omit `index`; its code is the only label key
            None => match &self.label {
                Some(labels) if labels.len() == 1 => Ok(labels.keys().cloned().collect()),
                _ => bail!("category has no index and not exactly one label"),
            },
        }
    }

    pub fn label_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.label
            .as_ref()
            .and_then(|labels| labels.get(code))
            .map(String::as_str)
            .unwrap_or(code)
    }
}

impl Dimension {
    /// Column name: the dimension label, else its id.
    pub fn column_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(id)
    }
}
