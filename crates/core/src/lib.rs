use serde::{Deserialize, Serialize};

/// One chart's worth of data: parallel label/value arrays in row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(String, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

/// The two chart slots a load cycle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    Monthly,
    Quarterly,
}

impl SlotKind {
    /// The row field that identifies the time bucket for this slot.
    pub fn primary_key(self) -> &'static str {
        match self {
            SlotKind::Monthly => "month",
            SlotKind::Quarterly => "quarter",
        }
    }

    pub fn base_title(self) -> &'static str {
        match self {
            SlotKind::Monthly => "Monthly Cost",
            SlotKind::Quarterly => "Quarterly Cost",
        }
    }
}
