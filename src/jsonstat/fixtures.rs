// src/jsonstat/fixtures.rs

/// Trimmed-down response from table 09654: one product, one measure, four months.
pub const SAMPLE_09654: &str = r#"{
  "version": "2.0",
  "class": "dataset",
  "label": "09654: Produksjon av petroleumsprodukter, etter petroleumsprodukt, statistikkvariabel og måned",
  "source": "Statistisk sentralbyrå",
  "updated": "2024-03-12T07:00:00Z",
  "id": ["PetroleumProd", "ContentsCode", "Tid"],
  "size": [1, 1, 4],
  "role": { "time": ["Tid"], "metric": ["ContentsCode"] },
  "dimension": {
    "PetroleumProd": {
      "label": "petroleumsprodukt",
      "category": {
        "index": { "035": 0 },
        "label": { "035": "Bensin" }
      }
    },
    "ContentsCode": {
      "label": "statistikkvariabel",
      "category": {
        "label": { "Produksjon": "Produksjon (tonn)" },
        "unit": { "Produksjon": { "base": "tonn", "decimals": 0 } }
      }
    },
    "Tid": {
      "label": "måned",
      "category": {
        "index": ["2023M01", "2023M02", "2023M03", "2023M04"]
      }
    }
  },
  "value": [101532, 98211, null, 112004],
  "status": { "2": ".." }
}"#;

/// Same table without a monthly time dimension.
pub const SAMPLE_ANNUAL: &str = r#"{
  "version": "2.0",
  "class": "dataset",
  "label": "annual totals",
  "id": ["PetroleumProd", "Tid"],
  "size": [2, 2],
  "dimension": {
    "PetroleumProd": {
      "label": "petroleumsprodukt",
      "category": {
        "index": ["035", "036"],
        "label": { "035": "Bensin", "036": "Diesel" }
      }
    },
    "Tid": {
      "label": "år",
      "category": { "index": { "2022": 0, "2023": 1 } }
    }
  },
  "value": [1200000, 1250000, 2300000, 2280000]
}"#;
