// src/jsonstat/parse.rs

use super::types::{Dataset, Values};
use anyhow::{bail, Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Name of the measure column appended after the dimension columns.
pub const VALUE_COLUMN: &str = "value";

/// Decode a JSON-stat 2 body into one row per category combination.
pub fn parse(raw: &str) -> Result<RecordBatch> {
    let dataset: Dataset = serde_json::from_str(raw).context("decoding JSON-stat response")?;
    to_record_batch(&dataset)
}

/// Flatten an already-decoded dataset.
///
/// Rows are emitted in row-major order over `id`, last dimension fastest,
/// which is the order of the `value` array itself.
pub fn to_record_batch(ds: &Dataset) -> Result<RecordBatch> {
    if let Some(class) = ds.class.as_deref() {
        if class != "dataset" {
            bail!("unsupported JSON-stat class `{}`", class);
        }
    }
    if ds.id.is_empty() {
        bail!("dataset has no dimensions");
    }
    if ds.id.len() != ds.size.len() {
        bail!(
            "`id` lists {} dimensions but `size` has {} entries",
            ds.id.len(),
            ds.size.len()
        );
    }

    let total = ds
        .size
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .context("dimension sizes overflow")?;

    // stride of dimension i = product of the sizes after it
    let mut strides = vec![1usize; ds.size.len()];
    for i in (0..ds.size.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1].saturating_mul(ds.size[i + 1]);
    }

    let mut fields = Vec::with_capacity(ds.id.len() + 1);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(ds.id.len() + 1);

    for (i, dim_id) in ds.id.iter().enumerate() {
        let dim = ds
            .dimension
            .get(dim_id)
            .with_context(|| format!("dimension `{}` listed in `id` but not described", dim_id))?;
        let codes = dim
            .category
            .codes()
            .with_context(|| format!("reading categories of `{}`", dim_id))?;
        if codes.len() != ds.size[i] {
            bail!(
                "dimension `{}` has {} categories but size {}",
                dim_id,
                codes.len(),
                ds.size[i]
            );
        }
        let labels: Vec<&str> = codes.iter().map(|c| dim.category.label_for(c)).collect();
        debug!(dimension = %dim_id, categories = labels.len(), "expanding dimension");

        let (stride, size) = (strides[i], ds.size[i]);
        let col =
            StringArray::from_iter_values((0..total).map(|row| labels[(row / stride) % size]));

        fields.push(Field::new(dim.column_name(dim_id), DataType::Utf8, false));
        columns.push(Arc::new(col) as ArrayRef);
    }

    let values = flatten_values(&ds.value, total)?;
    fields.push(Field::new(VALUE_COLUMN, DataType::Float64, true));
    columns.push(Arc::new(Float64Array::from(values)) as ArrayRef);

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("assembling table from dataset")?;

    info!(
        label = ds.label.as_deref().unwrap_or("<none>"),
        source = ds.source.as_deref().unwrap_or("<unknown>"),
        updated = ds.updated.as_deref().unwrap_or("<unknown>"),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "parsed JSON-stat dataset"
    );
    Ok(batch)
}

fn flatten_values(values: &Values, total: usize) -> Result<Vec<Option<f64>>> {
    match values {
        Values::Dense(items) => {
            if items.len() != total {
                bail!(
                    "`value` has {} entries, dimensions imply {}",
                    items.len(),
                    total
                );
            }
            Ok(items.iter().map(numeric).collect())
        }
        Values::Sparse(items) => {
            let mut out = vec![None; total];
            for (key, v) in items {
                let idx: usize = key
                    .parse()
                    .with_context(|| format!("sparse value key `{}` is not an index", key))?;
                match out.get_mut(idx) {
                    Some(slot) => *slot = numeric(v),
                    None => bail!("sparse value index {} out of range (total {})", idx, total),
                }
            }
            Ok(out)
        }
    }
}

/// Numbers pass through, numeric strings are parsed, anything else is missing.
fn numeric(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonstat::fixtures::{SAMPLE_09654, SAMPLE_ANNUAL};
    use crate::logging::capture::with_captured_logs;
    use arrow::array::Array;

    fn strings(batch: &RecordBatch, name: &str) -> Vec<String> {
        let col = batch.column_by_name(name).unwrap();
        let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
        arr.iter().map(|v| v.unwrap().to_string()).collect()
    }

    fn names(batch: &RecordBatch) -> Vec<String> {
        batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    #[test]
    fn test_parse_ssb_sample() {
        let batch = parse(SAMPLE_09654).unwrap();

        assert_eq!(batch.num_rows(), 4);
        assert_eq!(
            names(&batch),
            vec!["petroleumsprodukt", "statistikkvariabel", "måned", "value"]
        );
        assert_eq!(strings(&batch, "petroleumsprodukt"), vec!["Bensin"; 4]);
        assert_eq!(
            strings(&batch, "statistikkvariabel"),
            vec!["Produksjon (tonn)"; 4]
        );
        // no category labels, codes are used
        assert_eq!(
            strings(&batch, "måned"),
            vec!["2023M01", "2023M02", "2023M03", "2023M04"]
        );

        let values = batch
            .column_by_name(VALUE_COLUMN)
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(values.value(0), 101532.0);
        assert!(values.is_null(2));
        assert_eq!(values.value(3), 112004.0);
    }

    #[test]
    fn test_logs_dataset_metadata() {
        let (batch, logs) = with_captured_logs(|| parse(SAMPLE_09654));
        assert_eq!(batch.unwrap().num_rows(), 4);
        assert!(logs.contains("Statistisk sentralbyrå"));
        assert!(logs.contains("2024-03-12T07:00:00Z"));
        assert!(logs.contains("parsed JSON-stat dataset"));
    }

    #[test]
    fn test_row_count_is_product_of_sizes() {
        let batch = parse(SAMPLE_ANNUAL).unwrap();
        assert_eq!(batch.num_rows(), 2 * 2);

        // last dimension varies fastest
        assert_eq!(
            strings(&batch, "petroleumsprodukt"),
            vec!["Bensin", "Bensin", "Diesel", "Diesel"]
        );
        assert_eq!(strings(&batch, "år"), vec!["2022", "2023", "2022", "2023"]);
    }

    #[test]
    fn test_sparse_values_and_missing_labels() {
        let raw = r#"{
            "class": "dataset",
            "id": ["a", "b"],
            "size": [2, 3],
            "dimension": {
                "a": { "category": { "index": ["x", "y"] } },
                "b": { "label": "bee", "category": { "index": ["1", "2", "3"] } }
            },
            "value": { "0": 1.5, "4": "7", "5": ".." }
        }"#;
        let batch = parse(raw).unwrap();

        assert_eq!(batch.num_rows(), 6);
        assert_eq!(names(&batch), vec!["a", "bee", "value"]);
        let values = batch
            .column(2)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        let got: Vec<Option<f64>> = values.iter().collect();
        assert_eq!(got, vec![Some(1.5), None, None, None, Some(7.0), None]);
    }

    #[test]
    fn test_value_count_mismatch() {
        let raw = SAMPLE_09654.replace("[101532, 98211, null, 112004]", "[1, 2, 3]");
        let err = parse(&raw).unwrap_err();
        assert!(err.to_string().contains("`value` has 3 entries"));
    }

    #[test]
    fn test_missing_dimension() {
        let raw = SAMPLE_09654.replace(r#""Tid": {"#, r#""Time": {"#);
        let err = parse(&raw).unwrap_err();
        assert!(err.to_string().contains("`Tid`"));
    }

    #[test]
    fn test_category_count_mismatch() {
        let raw = SAMPLE_09654.replace(r#""size": [1, 1, 4]"#, r#""size": [1, 1, 5]"#);
        assert!(parse(&raw).is_err());
    }

    #[test]
    fn test_rejects_collection_and_garbage() {
        let raw = SAMPLE_09654.replace(r#""class": "dataset""#, r#""class": "collection""#);
        assert!(parse(&raw)
            .unwrap_err()
            .to_string()
            .contains("unsupported JSON-stat class"));

        assert!(parse("<html>503</html>").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_sparse_index_out_of_range() {
        let raw = r#"{
            "id": ["a"], "size": [1],
            "dimension": { "a": { "category": { "label": { "x": "X" } } } },
            "value": { "3": 1 }
        }"#;
        assert!(parse(raw).is_err());
    }
}
